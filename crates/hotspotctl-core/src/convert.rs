// ── Row → domain conversion ──
//
// RouterOS renders nearly everything as strings: numbers as "1234",
// booleans as "true"/"false" (older firmware: "yes"/"no"). The helpers
// below accept either the string or the native JSON form.

use hotspotctl_api::{ID_FIELD, Row};
use serde_json::Value;

use crate::error::CoreError;
use crate::model::{Account, ActiveSession, HotspotProfile, HotspotUser, RecordId, RouterInfo};

// ── Field helpers ───────────────────────────────────────────────────

/// String form of a field; `None` when absent or empty.
pub(crate) fn text(row: &Row, key: &str) -> Option<String> {
    match row.get(key)? {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Whether a field equals `expected`, comparing numbers by their text form.
pub(crate) fn field_eq(row: &Row, key: &str, expected: &str) -> bool {
    match row.get(key) {
        Some(Value::String(s)) => s == expected,
        Some(Value::Number(n)) => n.to_string() == expected,
        _ => false,
    }
}

pub(crate) fn number(row: &Row, key: &str) -> Option<u64> {
    match row.get(key)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn flag(row: &Row, key: &str) -> bool {
    match row.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => matches!(s.as_str(), "true" | "yes"),
        _ => false,
    }
}

pub(crate) fn record_id(row: &Row) -> Option<RecordId> {
    text(row, ID_FIELD).map(RecordId::from)
}

fn require_id(row: &Row, collection: &str) -> Result<RecordId, CoreError> {
    record_id(row).ok_or_else(|| CoreError::UnexpectedReply {
        message: format!("{collection} row without {ID_FIELD}"),
    })
}

// ── Conversions ─────────────────────────────────────────────────────

impl TryFrom<&Row> for Account {
    type Error = CoreError;

    fn try_from(row: &Row) -> Result<Self, Self::Error> {
        Ok(Self {
            id: require_id(row, "/user")?,
            name: text(row, "name").unwrap_or_default(),
            group: text(row, "group"),
            disabled: flag(row, "disabled"),
            last_logged_in: text(row, "last-logged-in"),
            comment: text(row, "comment"),
        })
    }
}

impl TryFrom<&Row> for HotspotUser {
    type Error = CoreError;

    fn try_from(row: &Row) -> Result<Self, Self::Error> {
        Ok(Self {
            id: require_id(row, "/ip/hotspot/user")?,
            name: text(row, "name").unwrap_or_default(),
            profile: text(row, "profile"),
            limit_uptime: text(row, "limit-uptime"),
            address: text(row, "address"),
            mac_address: text(row, "mac-address"),
            uptime: text(row, "uptime"),
            bytes_in: number(row, "bytes-in"),
            bytes_out: number(row, "bytes-out"),
            disabled: flag(row, "disabled"),
            comment: text(row, "comment"),
        })
    }
}

impl TryFrom<&Row> for HotspotProfile {
    type Error = CoreError;

    fn try_from(row: &Row) -> Result<Self, Self::Error> {
        Ok(Self {
            id: require_id(row, "/ip/hotspot/user/profile")?,
            name: text(row, "name").unwrap_or_default(),
            limit_uptime: text(row, "limit-uptime"),
            limit_bytes_in: text(row, "limit-bytes-in"),
            limit_bytes_out: text(row, "limit-bytes-out"),
            rate_limit: text(row, "rate-limit"),
            shared_users: text(row, "shared-users"),
        })
    }
}

impl TryFrom<&Row> for ActiveSession {
    type Error = CoreError;

    fn try_from(row: &Row) -> Result<Self, Self::Error> {
        Ok(Self {
            id: require_id(row, "/ip/hotspot/active")?,
            user: text(row, "user"),
            mac_address: text(row, "mac-address"),
            address: text(row, "address"),
            server: text(row, "server"),
            login_by: text(row, "login-by"),
            uptime: text(row, "uptime"),
            session_time_left: text(row, "session-time-left"),
            bytes_in: number(row, "bytes-in"),
            bytes_out: number(row, "bytes-out"),
        })
    }
}

/// Convert a whole listing, failing on the first malformed row.
pub(crate) fn convert_rows<'a, T>(rows: &'a [Row]) -> Result<Vec<T>, CoreError>
where
    T: TryFrom<&'a Row, Error = CoreError>,
{
    rows.iter().map(T::try_from).collect()
}

impl RouterInfo {
    /// Merge the singleton `/system/identity`, `/system/resource` and
    /// `/system/clock` rows.
    pub(crate) fn from_rows(identity: &Row, resource: &Row, clock: &Row) -> Self {
        Self {
            router_name: text(identity, "name"),
            uptime: text(resource, "uptime"),
            version: text(resource, "version"),
            cpu_load: number(resource, "cpu-load"),
            cpu_frequency: number(resource, "cpu-frequency"),
            cpu_count: number(resource, "cpu-count"),
            free_memory: number(resource, "free-memory"),
            total_memory: number(resource, "total-memory"),
            free_hdd_space: number(resource, "free-hdd-space"),
            total_hdd_space: number(resource, "total-hdd-space"),
            architecture_name: text(resource, "architecture-name"),
            board_name: text(resource, "board-name"),
            platform: text(resource, "platform"),
            time: text(clock, "time"),
            date: text(clock, "date"),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn row(value: Value) -> Row {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn hotspot_user_from_string_rendered_row() {
        let r = row(json!({
            ".id": "*4",
            "name": "voucher_00ff00ff",
            "profile": "default",
            "limit-uptime": "1h",
            "bytes-in": "2048",
            "bytes-out": 512,
            "disabled": "false",
            "address": ""
        }));

        let user = HotspotUser::try_from(&r).unwrap();

        assert_eq!(user.id.as_str(), "*4");
        assert_eq!(user.name, "voucher_00ff00ff");
        assert_eq!(user.limit_uptime.as_deref(), Some("1h"));
        assert_eq!(user.bytes_in, Some(2048));
        assert_eq!(user.bytes_out, Some(512));
        assert!(!user.disabled);
        assert_eq!(user.address, None);
    }

    #[test]
    fn legacy_yes_flag_is_true() {
        let r = row(json!({ ".id": "*1", "name": "ops", "disabled": "yes" }));
        assert!(Account::try_from(&r).unwrap().disabled);
    }

    #[test]
    fn row_without_id_is_unexpected_reply() {
        let r = row(json!({ "name": "ghost" }));
        let err = ActiveSession::try_from(&r).unwrap_err();
        assert!(matches!(err, CoreError::UnexpectedReply { .. }));
    }

    #[test]
    fn router_info_merges_three_menus() {
        let identity = row(json!({ "name": "gw-lobby" }));
        let resource = row(json!({
            "uptime": "3d4h",
            "version": "7.14.2 (stable)",
            "cpu-load": "7",
            "cpu-count": "4",
            "free-memory": "800000000",
            "board-name": "hAP ax3"
        }));
        let clock = row(json!({ "time": "10:15:00", "date": "2026-10-18" }));

        let info = RouterInfo::from_rows(&identity, &resource, &clock);

        assert_eq!(info.router_name.as_deref(), Some("gw-lobby"));
        assert_eq!(info.cpu_load, Some(7));
        assert_eq!(info.cpu_count, Some(4));
        assert_eq!(info.free_memory, Some(800_000_000));
        assert_eq!(info.board_name.as_deref(), Some("hAP ax3"));
        assert_eq!(info.date.as_deref(), Some("2026-10-18"));
        assert_eq!(info.platform, None);
    }

    #[test]
    fn field_eq_matches_numbers_by_text() {
        let r = row(json!({ "port": 8728, "name": "api" }));
        assert!(field_eq(&r, "port", "8728"));
        assert!(field_eq(&r, "name", "api"));
        assert!(!field_eq(&r, "missing", "api"));
    }
}
