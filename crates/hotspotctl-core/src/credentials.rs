// ── Voucher credential generation ──
//
// Vouchers grant network access, so both halves of a credential pair come
// from a cryptographically secure source. Uniqueness is only guaranteed
// within the set the caller passes in (one batch); a clash with an account
// that already exists on the router shows up as a rejected creation.

use std::collections::HashSet;

use rand::RngCore;
use rand::rngs::OsRng;

use crate::error::CoreError;

/// Default username prefix for generated vouchers.
pub const DEFAULT_PREFIX: &str = "voucher_";

/// Default random width in bytes (8 hex digits, 32 bits).
pub const DEFAULT_SUFFIX_BYTES: usize = 4;

/// Upper bound on redraws before giving up on a unique username.
const MAX_DRAWS: usize = 1024;

/// A generated username/password pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

/// Produces `{prefix}{hex}` usernames and independent hex passwords.
#[derive(Debug, Clone)]
pub struct CredentialGenerator<R = OsRng> {
    prefix: String,
    suffix_bytes: usize,
    rng: R,
}

impl Default for CredentialGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX, DEFAULT_SUFFIX_BYTES)
    }
}

impl CredentialGenerator {
    /// Generator backed by the operating system's CSPRNG.
    ///
    /// `suffix_bytes` is clamped to at least one byte.
    pub fn new(prefix: impl Into<String>, suffix_bytes: usize) -> Self {
        Self::with_rng(prefix, suffix_bytes, OsRng)
    }
}

impl<R: RngCore> CredentialGenerator<R> {
    pub fn with_rng(prefix: impl Into<String>, suffix_bytes: usize, rng: R) -> Self {
        Self {
            prefix: prefix.into(),
            suffix_bytes: suffix_bytes.max(1),
            rng,
        }
    }

    /// Draw one credential pair.
    pub fn generate(&mut self) -> Credential {
        let suffix = self.random_hex();
        let username = format!("{}{suffix}", self.prefix);
        let password = self.random_hex();
        Credential { username, password }
    }

    /// Draw a pair whose username is not in `existing`.
    pub fn generate_unique(&mut self, existing: &HashSet<String>) -> Result<Credential, CoreError> {
        for _ in 0..MAX_DRAWS {
            let credential = self.generate();
            if !existing.contains(&credential.username) {
                return Ok(credential);
            }
        }
        Err(CoreError::invalid(format!(
            "no unused username found after {MAX_DRAWS} draws; widen the voucher suffix"
        )))
    }

    fn random_hex(&mut self) -> String {
        let mut buf = vec![0u8; self.suffix_bytes];
        self.rng.fill_bytes(&mut buf);
        hex::encode(buf)
    }
}
