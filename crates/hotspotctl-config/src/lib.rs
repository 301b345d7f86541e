//! Configuration for hotspotctl.
//!
//! TOML router profiles, credential resolution (env + keyring + plaintext),
//! and translation to `hotspotctl_core::RouterConfig`. The CLI layers its
//! `GlobalOpts` overrides on top.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use hotspotctl_core::credentials::{DEFAULT_PREFIX, DEFAULT_SUFFIX_BYTES};
use hotspotctl_core::{RouterConfig, TlsVerification};

/// Service name under which passwords live in the system keyring.
pub const KEYRING_SERVICE: &str = "hotspotctl";

/// Environment variables consulted for the router login, in order.
pub const USERNAME_ENV: &[&str] = &["HOTSPOTCTL_USERNAME", "MIKROTIK_USER"];
pub const PASSWORD_ENV: &[&str] = &["HOTSPOTCTL_PASSWORD", "MIKROTIK_PASSWORD"];

pub const MAX_SUFFIX_BYTES: usize = 32;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no credentials configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("keyring error: {0}")]
    Keyring(String),

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named router profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

impl Config {
    /// Comma-separated profile names, sorted, for error help text.
    pub fn available_profiles(&self) -> String {
        let mut names: Vec<_> = self.profiles.keys().map(String::as_str).collect();
        if names.is_empty() {
            return "(none)".into();
        }
        names.sort_unstable();
        names.join(", ")
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default)]
    pub insecure: bool,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            insecure: false,
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}

/// A named router profile.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Profile {
    /// Router base URL (e.g., "https://192.168.88.1").
    pub router: String,

    /// Login account. Falls back to `HOTSPOTCTL_USERNAME` / `MIKROTIK_USER`.
    pub username: Option<String>,

    /// Password (plaintext -- prefer keyring or env var).
    pub password: Option<String>,

    /// Environment variable name containing the password.
    pub password_env: Option<String>,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Override insecure TLS setting.
    pub insecure: Option<bool>,

    /// Override timeout (seconds).
    pub timeout: Option<u64>,

    /// Username prefix for generated vouchers.
    pub voucher_prefix: Option<String>,

    /// Random bytes per voucher credential.
    pub voucher_suffix_bytes: Option<usize>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "hotspotctl", "hotspotctl").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("hotspotctl");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load defaults, then `path` (if present), then `HOTSPOTCTL_*` variables.
///
/// Nested keys use a double underscore: `HOTSPOTCTL_DEFAULTS__TIMEOUT=10`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("HOTSPOTCTL_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Secret sources ──────────────────────────────────────────────────

/// Where credentials come from besides the profile itself.
pub trait SecretSource {
    fn env(&self, name: &str) -> Option<String>;
    fn keyring_password(&self, profile_name: &str) -> Option<String>;
}

/// Process environment and the system keyring.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSecrets;

impl SecretSource for SystemSecrets {
    fn env(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|v| !v.is_empty())
    }

    fn keyring_password(&self, profile_name: &str) -> Option<String> {
        keyring_entry(profile_name).ok()?.get_password().ok()
    }
}

fn keyring_entry(profile_name: &str) -> Result<keyring::Entry, ConfigError> {
    keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/password"))
        .map_err(|e| ConfigError::Keyring(e.to_string()))
}

/// Store a profile's router password in the system keyring.
pub fn store_password(profile_name: &str, password: &str) -> Result<(), ConfigError> {
    keyring_entry(profile_name)?
        .set_password(password)
        .map_err(|e| ConfigError::Keyring(e.to_string()))
}

// ── Credential resolution ───────────────────────────────────────────

/// Profile username, then the login environment variables.
pub fn resolve_username(
    profile: &Profile,
    profile_name: &str,
    secrets: &impl SecretSource,
) -> Result<String, ConfigError> {
    profile
        .username
        .clone()
        .filter(|u| !u.is_empty())
        .or_else(|| USERNAME_ENV.iter().find_map(|name| secrets.env(name)))
        .ok_or_else(|| ConfigError::NoCredentials {
            profile: profile_name.into(),
        })
}

/// Resolve the router password from the credential chain.
pub fn resolve_password(
    profile: &Profile,
    profile_name: &str,
    secrets: &impl SecretSource,
) -> Result<SecretString, ConfigError> {
    // 1. Profile's password_env → env var lookup
    if let Some(val) = profile
        .password_env
        .as_deref()
        .and_then(|name| secrets.env(name))
    {
        return Ok(SecretString::from(val));
    }

    // 2. Well-known env vars
    if let Some(val) = PASSWORD_ENV.iter().find_map(|name| secrets.env(name)) {
        return Ok(SecretString::from(val));
    }

    // 3. System keyring
    if let Some(val) = secrets.keyring_password(profile_name) {
        return Ok(SecretString::from(val));
    }

    // 4. Plaintext in config
    if let Some(ref pw) = profile.password {
        return Ok(SecretString::from(pw.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

// ── Profile → RouterConfig ──────────────────────────────────────────

/// Parse and check a router URL.
pub fn parse_router_url(raw: &str) -> Result<url::Url, ConfigError> {
    let url: url::Url = raw.parse().map_err(|_| ConfigError::Validation {
        field: "router".into(),
        reason: format!("invalid URL: {raw}"),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Validation {
            field: "router".into(),
            reason: format!("expected an http:// or https:// URL, got '{raw}'"),
        });
    }
    Ok(url)
}

/// Build a `RouterConfig` from a profile -- no CLI flag overrides.
pub fn profile_to_router_config(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
    secrets: &impl SecretSource,
) -> Result<RouterConfig, ConfigError> {
    let url = parse_router_url(&profile.router)?;
    let username = resolve_username(profile, profile_name, secrets)?;
    let password = resolve_password(profile, profile_name, secrets)?;

    let tls = if profile.insecure.unwrap_or(defaults.insecure) {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    };

    let voucher_suffix_bytes = profile.voucher_suffix_bytes.unwrap_or(DEFAULT_SUFFIX_BYTES);
    if !(1..=MAX_SUFFIX_BYTES).contains(&voucher_suffix_bytes) {
        return Err(ConfigError::Validation {
            field: "voucher_suffix_bytes".into(),
            reason: format!("must be between 1 and {MAX_SUFFIX_BYTES}"),
        });
    }

    let mut config = RouterConfig::new(url, username, password);
    config.tls = tls;
    config.timeout = Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout));
    config.voucher_prefix = profile
        .voucher_prefix
        .clone()
        .unwrap_or_else(|| DEFAULT_PREFIX.into());
    config.voucher_suffix_bytes = voucher_suffix_bytes;
    Ok(config)
}
