// ── Router telemetry ──

use serde::{Deserialize, Serialize};

/// Identity, resource and clock read-out merged into one record.
///
/// Values are passed through as the router renders them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouterInfo {
    pub router_name: Option<String>,
    pub uptime: Option<String>,
    pub version: Option<String>,
    pub cpu_load: Option<u64>,
    pub cpu_frequency: Option<u64>,
    pub cpu_count: Option<u64>,
    pub free_memory: Option<u64>,
    pub total_memory: Option<u64>,
    pub free_hdd_space: Option<u64>,
    pub total_hdd_space: Option<u64>,
    pub architecture_name: Option<String>,
    pub board_name: Option<String>,
    pub platform: Option<String>,
    pub time: Option<String>,
    pub date: Option<String>,
}
