use thiserror::Error;

/// Top-level error type for the `hotspotctl-api` crate.
///
/// This is the single failure signal of the remote resource client.
/// `hotspotctl-core` classifies it by variant (never by message text)
/// into the caller-facing error taxonomy.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Router refused the credentials (HTTP 401).
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Device ──────────────────────────────────────────────────────
    /// The router understood the request but refused it.
    ///
    /// RouterOS replies with `{"error": 400, "message": "Bad Request",
    /// "detail": "failure: already have user with this name"}`.
    #[error("Router rejected request (HTTP {status}): {message}")]
    Trap {
        status: u16,
        message: String,
        detail: Option<String>,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the router could not be reached or did not
    /// answer in time.
    pub fn is_unreachable(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            Self::Tls(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// The most specific human-readable reason the router gave, if any.
    pub fn trap_detail(&self) -> Option<&str> {
        match self {
            Self::Trap {
                detail: Some(detail),
                ..
            } => Some(detail),
            Self::Trap { message, .. } => Some(message),
            _ => None,
        }
    }
}
