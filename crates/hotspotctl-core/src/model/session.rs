// ── Active hotspot sessions ──

use serde::{Deserialize, Serialize};

use super::record_id::RecordId;

/// A logged-in device from `/ip/hotspot/active`.
///
/// Created by the router when a client authenticates through the portal;
/// the only mutation available is removal, which logs the device out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ActiveSession {
    #[serde(rename = ".id")]
    pub id: RecordId,
    pub user: Option<String>,
    pub mac_address: Option<String>,
    pub address: Option<String>,
    pub server: Option<String>,
    pub login_by: Option<String>,
    pub uptime: Option<String>,
    pub session_time_left: Option<String>,
    pub bytes_in: Option<u64>,
    pub bytes_out: Option<u64>,
}
