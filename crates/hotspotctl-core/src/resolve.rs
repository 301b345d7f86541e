// ── Identifier resolution ──
//
// Mutations address rows by `.id`, but callers speak in natural keys
// (usernames, MAC or IP addresses). Resolution is a pure function over an
// already-fetched snapshot so one listing can serve many lookups.

use hotspotctl_api::Row;
use thiserror::Error;
use tracing::warn;

use crate::convert::{field_eq, record_id};
use crate::error::CoreError;
use crate::model::RecordId;

/// Why a lookup produced no identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No row has `key_field == key_value`.
    #[error("no row with {key_field} = {key_value}")]
    NotFound { key_field: String, key_value: String },

    /// A row matched but carries no `.id`.
    #[error("row with {key_field} = {key_value} has no .id")]
    MissingId { key_field: String, key_value: String },
}

impl ResolveError {
    /// Lift into the core taxonomy, naming the entity that was looked up.
    pub fn into_core(self, entity_type: &str) -> CoreError {
        match self {
            Self::NotFound { key_value, .. } => CoreError::not_found(entity_type, key_value),
            Self::MissingId { .. } => CoreError::UnexpectedReply {
                message: self.to_string(),
            },
        }
    }
}

/// Find the first row whose `key_field` equals `key_value` and return its
/// record identifier.
///
/// Duplicates are not expected from a well-formed collection; when they
/// occur the first row wins and a warning is logged.
pub fn resolve(rows: &[Row], key_field: &str, key_value: &str) -> Result<RecordId, ResolveError> {
    let mut matches = rows.iter().filter(|row| field_eq(row, key_field, key_value));

    let Some(first) = matches.next() else {
        return Err(ResolveError::NotFound {
            key_field: key_field.to_owned(),
            key_value: key_value.to_owned(),
        });
    };

    let duplicates = matches.count();
    if duplicates > 0 {
        warn!(
            key_field,
            key_value, duplicates, "natural key matches several rows; using the first"
        );
    }

    record_id(first).ok_or_else(|| ResolveError::MissingId {
        key_field: key_field.to_owned(),
        key_value: key_value.to_owned(),
    })
}
