// ── Core error types ──
//
// User-facing errors from hotspotctl-core. Consumers never see HTTP status
// codes or JSON parse failures directly: every collaborator call is wrapped
// at the boundary and its failure is classified by variant plus the
// operation that was in flight, never by the router's message text.

use strum::{Display, IntoStaticStr};
use thiserror::Error;

/// The four failure categories a caller can act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// The router could not be reached, authenticated against, or understood.
    ConnectionFailure,
    /// The router understood the request and refused it.
    RemoteRejected,
    /// A natural-key lookup matched no row.
    NotFound,
    /// The request was malformed before anything was sent.
    InvalidArgument,
}

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to router at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    /// The outcome of a timed-out mutation is unknown.
    #[error("Router did not answer in time")]
    Timeout,

    #[error("Unexpected reply from router: {message}")]
    UnexpectedReply { message: String },

    // ── Remote rejection ─────────────────────────────────────────────
    #[error("Router rejected {operation}: {message}")]
    Rejected { operation: String, message: String },

    // ── Lookup errors ────────────────────────────────────────────────
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: String,
        identifier: String,
    },

    // ── Caller errors ────────────────────────────────────────────────
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    // ── Batch errors ─────────────────────────────────────────────────
    /// A voucher batch stopped part-way. The first `created` vouchers exist
    /// on the router and were not rolled back.
    #[error("Voucher batch aborted after {created} of {requested} vouchers: {source}")]
    BatchAborted {
        created: usize,
        requested: usize,
        #[source]
        source: Box<CoreError>,
    },
}

impl CoreError {
    /// Classify this error into the caller-facing taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConnectionFailed { .. }
            | Self::AuthenticationFailed { .. }
            | Self::Timeout
            | Self::UnexpectedReply { .. } => ErrorKind::ConnectionFailure,
            Self::Rejected { .. } => ErrorKind::RemoteRejected,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::BatchAborted { source, .. } => source.kind(),
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub(crate) fn not_found(entity_type: &str, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            identifier: identifier.into(),
        }
    }

    /// Translate a transport failure raised while performing `operation`.
    pub fn from_remote(err: hotspotctl_api::Error, operation: &str) -> Self {
        use hotspotctl_api::Error as ApiError;

        if err.is_timeout() {
            return Self::Timeout;
        }
        match err {
            ApiError::Authentication { message } => Self::AuthenticationFailed { message },
            ApiError::Transport(e) => Self::ConnectionFailed {
                url: e.url().map(ToString::to_string).unwrap_or_default(),
                reason: e.to_string(),
            },
            ApiError::InvalidUrl(e) => Self::ConnectionFailed {
                url: String::new(),
                reason: format!("invalid URL: {e}"),
            },
            ApiError::Tls(msg) => Self::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            ApiError::Trap {
                message, detail, ..
            } => Self::Rejected {
                operation: operation.into(),
                message: detail.unwrap_or(message),
            },
            ApiError::Deserialization { message, body: _ } => Self::UnexpectedReply {
                message: format!("{operation}: {message}"),
            },
        }
    }
}

impl From<hotspotctl_api::Error> for CoreError {
    fn from(err: hotspotctl_api::Error) -> Self {
        Self::from_remote(err, "request")
    }
}

/// Attach call-site context to a collaborator result.
pub(crate) trait RemoteResultExt<T> {
    fn during(self, operation: &str) -> Result<T, CoreError>;
}

impl<T> RemoteResultExt<T> for Result<T, hotspotctl_api::Error> {
    fn during(self, operation: &str) -> Result<T, CoreError> {
        self.map_err(|e| CoreError::from_remote(e, operation))
    }
}
