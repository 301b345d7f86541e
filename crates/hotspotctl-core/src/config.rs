// ── Runtime connection configuration ──
//
// These types describe *how* to reach a RouterOS device. They carry
// credential data and connection tuning, but never touch disk; the CLI
// builds a `RouterConfig` from its profile files and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use hotspotctl_api::{TlsMode, TransportConfig};
use secrecy::SecretString;
use url::Url;

use crate::credentials::{DEFAULT_PREFIX, DEFAULT_SUFFIX_BYTES};

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification. RouterOS ships a self-signed certificate.
    #[default]
    DangerAcceptInvalid,
}

/// Configuration for talking to a single router.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Router URL (e.g., `https://192.168.88.1`).
    pub url: Url,
    pub username: String,
    pub password: SecretString,
    pub tls: TlsVerification,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Username prefix for generated vouchers.
    pub voucher_prefix: String,
    /// Random bytes per voucher username/password (two hex digits each).
    pub voucher_suffix_bytes: usize,
}

impl RouterConfig {
    pub fn new(url: Url, username: impl Into<String>, password: SecretString) -> Self {
        Self {
            url,
            username: username.into(),
            password,
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
            voucher_prefix: DEFAULT_PREFIX.to_owned(),
            voucher_suffix_bytes: DEFAULT_SUFFIX_BYTES,
        }
    }

    pub(crate) fn transport(&self) -> TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        };
        TransportConfig {
            tls,
            timeout: self.timeout,
        }
    }
}
