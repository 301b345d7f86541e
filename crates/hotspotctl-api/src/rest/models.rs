// RouterOS REST response types

use serde::Deserialize;

use crate::resource::Row;

/// Error body returned with any non-2xx status.
///
/// ```json
/// { "error": 400, "message": "Bad Request", "detail": "failure: already have user with this name" }
/// ```
#[derive(Debug, Deserialize)]
pub struct RestErrorBody {
    #[serde(default)]
    pub error: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

/// A menu listing. Multi-row menus reply with an array; singleton menus
/// such as `/system/resource` reply with a bare object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListBody {
    Many(Vec<Row>),
    One(Row),
}

impl ListBody {
    pub fn into_rows(self) -> Vec<Row> {
        match self {
            Self::Many(rows) => rows,
            Self::One(row) => vec![row],
        }
    }
}
