// ── Router login accounts ──

use serde::{Deserialize, Serialize};

use super::record_id::RecordId;

/// A router login account from `/user`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Account {
    #[serde(rename = ".id")]
    pub id: RecordId,
    pub name: String,
    pub group: Option<String>,
    pub disabled: bool,
    pub last_logged_in: Option<String>,
    pub comment: Option<String>,
}
