//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use hotspotctl_config::ConfigError;
use hotspotctl_core::{CoreError, ErrorKind};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const REJECTED: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to router at {url}")]
    #[diagnostic(
        code(hotspotctl::connection_failed),
        help(
            "Check that the router is reachable and the REST API (www-ssl) is enabled.\n\
             Reason: {reason}\n\
             Self-signed certificate? Try: hotspotctl system info --insecure"
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Router did not answer in time")]
    #[diagnostic(
        code(hotspotctl::timeout),
        help(
            "Increase the timeout with --timeout.\n\
             A timed-out write may still have been applied; list before retrying."
        )
    )]
    Timeout,

    #[error("Unexpected reply from router: {message}")]
    #[diagnostic(
        code(hotspotctl::unexpected_reply),
        help("Check that the URL points at a RouterOS 7 REST endpoint.")
    )]
    UnexpectedReply { message: String },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(hotspotctl::auth_failed),
        help(
            "Verify the router login and password.\n\
             Run: hotspotctl config set-password"
        )
    )]
    AuthFailed { message: String },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(hotspotctl::no_credentials),
        help(
            "Configure credentials with: hotspotctl config init\n\
             Or set HOTSPOTCTL_USERNAME and HOTSPOTCTL_PASSWORD."
        )
    )]
    NoCredentials { profile: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(hotspotctl::not_found),
        help("Run: hotspotctl {list_command} to see what exists")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    #[error("Router rejected {operation}: {message}")]
    #[diagnostic(code(hotspotctl::rejected))]
    Rejected { operation: String, message: String },

    #[error("Voucher batch stopped after {created} of {requested} vouchers: {reason}")]
    #[diagnostic(
        code(hotspotctl::batch_aborted),
        help(
            "The {created} vouchers already created remain on the router.\n\
             Run: hotspotctl hotspot-users list"
        )
    )]
    BatchAborted {
        created: usize,
        requested: usize,
        reason: String,
        kind: ErrorKind,
        timed_out: bool,
    },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(hotspotctl::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(hotspotctl::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: hotspotctl config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Configuration file not found")]
    #[diagnostic(
        code(hotspotctl::no_config),
        help(
            "Create one with: hotspotctl config init\n\
             Or pass --router with HOTSPOTCTL_USERNAME and HOTSPOTCTL_PASSWORD.\n\
             Expected at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(hotspotctl::config))]
    Config(Box<figment::Error>),

    #[error("Keyring error: {0}")]
    #[diagnostic(code(hotspotctl::keyring))]
    Keyring(String),

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(hotspotctl::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Could not render output: {0}")]
    #[diagnostic(code(hotspotctl::output))]
    Output(String),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::UnexpectedReply { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Rejected { .. } => exit_code::REJECTED,
            Self::BatchAborted {
                timed_out: true, ..
            } => exit_code::TIMEOUT,
            Self::BatchAborted { kind, .. } => kind_exit_code(*kind),
            Self::Validation { .. } | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

fn kind_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::ConnectionFailure => exit_code::CONNECTION,
        ErrorKind::RemoteRejected => exit_code::REJECTED,
        ErrorKind::NotFound => exit_code::NOT_FOUND,
        ErrorKind::InvalidArgument => exit_code::USAGE,
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        let kind = err.kind();
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed { url, reason },

            CoreError::AuthenticationFailed { message } => CliError::AuthFailed { message },

            CoreError::Timeout => CliError::Timeout,

            CoreError::UnexpectedReply { message } => CliError::UnexpectedReply { message },

            CoreError::Rejected { operation, message } => CliError::Rejected { operation, message },

            CoreError::NotFound {
                entity_type,
                identifier,
            } => CliError::NotFound {
                list_command: list_command_for(&entity_type).into(),
                resource_type: entity_type,
                identifier,
            },

            CoreError::InvalidArgument { message } => CliError::Validation {
                field: "input".into(),
                reason: message,
            },

            CoreError::BatchAborted {
                created,
                requested,
                source,
            } => CliError::BatchAborted {
                created,
                requested,
                timed_out: matches!(*source, CoreError::Timeout),
                reason: source.to_string(),
                kind,
            },
        }
    }
}

fn list_command_for(entity_type: &str) -> &'static str {
    match entity_type {
        "user" => "users list",
        "hotspot user" => "hotspot-users list",
        "profile" => "profiles list",
        "active session" => "sessions list",
        _ => "--help",
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::NoCredentials { profile } => CliError::NoCredentials { profile },
            ConfigError::Keyring(message) => CliError::Keyring(message),
            ConfigError::Serialization(e) => CliError::Output(e.to_string()),
            ConfigError::Figment(e) => CliError::Config(e),
            ConfigError::Io(e) => CliError::Io(e),
        }
    }
}
