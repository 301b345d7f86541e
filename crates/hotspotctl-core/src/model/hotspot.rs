// ── Hotspot domain types ──

use serde::{Deserialize, Serialize};

use super::record_id::RecordId;

/// A hotspot account from `/ip/hotspot/user`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HotspotUser {
    #[serde(rename = ".id")]
    pub id: RecordId,
    pub name: String,
    /// Name of a [`HotspotProfile`]; the router enforces that it exists.
    pub profile: Option<String>,
    /// RouterOS duration string such as `1h` or `1d2h`, passed through untouched.
    pub limit_uptime: Option<String>,
    /// Static IP binding.
    pub address: Option<String>,
    pub mac_address: Option<String>,
    pub uptime: Option<String>,
    pub bytes_in: Option<u64>,
    pub bytes_out: Option<u64>,
    pub disabled: bool,
    pub comment: Option<String>,
}

/// A hotspot user profile from `/ip/hotspot/user/profile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HotspotProfile {
    #[serde(rename = ".id")]
    pub id: RecordId,
    pub name: String,
    pub limit_uptime: Option<String>,
    pub limit_bytes_in: Option<String>,
    pub limit_bytes_out: Option<String>,
    pub rate_limit: Option<String>,
    pub shared_users: Option<String>,
}

/// A freshly minted single-use hotspot account.
///
/// Exists only in the result of a voucher batch; afterwards it is an
/// ordinary [`HotspotUser`] on the router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voucher {
    pub username: String,
    pub password: String,
    pub profile: String,
    pub duration: Option<String>,
}
