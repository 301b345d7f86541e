// ── Session termination ──
//
// Logging a device out means removing its row from `/ip/hotspot/active`.
// The row is found by MAC or IP in a fresh snapshot; the session may expire
// between the listing and the removal, in which case the router's refusal
// surfaces as-is.

use hotspotctl_api::{ResourceClient, ResourcePath};
use tracing::info;

use crate::error::{CoreError, RemoteResultExt};
use crate::model::RecordId;
use crate::resolve::resolve;

/// Which natural key identifies the session to terminate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionSelector {
    Mac(String),
    Ip(String),
}

impl SessionSelector {
    /// Pick a selector from optional keys. MAC wins when both are given;
    /// blank values count as absent. MACs are upper-cased to match how
    /// RouterOS renders them.
    pub fn from_keys(
        mac_address: Option<&str>,
        ip_address: Option<&str>,
    ) -> Result<Self, CoreError> {
        let present = |v: Option<&str>| {
            v.map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
        };

        if let Some(mac) = present(mac_address) {
            return Ok(Self::Mac(mac.to_ascii_uppercase()));
        }
        if let Some(ip) = present(ip_address) {
            return Ok(Self::Ip(ip));
        }
        Err(CoreError::invalid(
            "either a MAC address or an IP address is required to log out a session",
        ))
    }

    /// Field of an active-session row this selector matches on.
    pub fn key_field(&self) -> &'static str {
        match self {
            Self::Mac(_) => "mac-address",
            Self::Ip(_) => "address",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Mac(v) | Self::Ip(v) => v,
        }
    }
}

/// List active sessions, resolve the selector, remove the match.
///
/// Matching is exact on the selector's value. A selector built with
/// [`SessionSelector::from_keys`] carries an upper-cased MAC, so a
/// lower-case MAC from the caller still finds the router's row.
pub async fn logout<C: ResourceClient>(
    client: &C,
    selector: &SessionSelector,
) -> Result<RecordId, CoreError> {
    let snapshot = client
        .list(ResourcePath::HOTSPOT_ACTIVE)
        .await
        .during("list active sessions")?;

    let id = resolve(&snapshot, selector.key_field(), selector.value())
        .map_err(|e| e.into_core("active session"))?;

    client
        .remove(ResourcePath::HOTSPOT_ACTIVE, id.as_str())
        .await
        .during("log out session")?;

    info!(%id, key = selector.key_field(), value = selector.value(), "session logged out");
    Ok(id)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::error::ErrorKind;
    use crate::testing::{Call, FakeRouter};

    fn router() -> FakeRouter {
        FakeRouter::new().with_rows(
            ResourcePath::HOTSPOT_ACTIVE,
            json!([
                { ".id": "*A", "user": "voucher_1", "mac-address": "AA:BB:CC:DD:EE:01", "address": "10.5.50.10" },
                { ".id": "*B", "user": "voucher_2", "mac-address": "AA:BB:CC:DD:EE:02", "address": "10.5.50.11" }
            ]),
        )
    }

    #[test]
    fn no_keys_is_invalid() {
        let err = SessionSelector::from_keys(None, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = SessionSelector::from_keys(Some(" "), Some("")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn mac_takes_precedence() {
        let sel =
            SessionSelector::from_keys(Some("AA:BB:CC:DD:EE:01"), Some("10.5.50.11")).unwrap();
        assert_eq!(sel, SessionSelector::Mac("AA:BB:CC:DD:EE:01".into()));
        assert_eq!(sel.key_field(), "mac-address");
    }

    #[test]
    fn mac_is_normalized_to_router_case() {
        let sel = SessionSelector::from_keys(Some("aa:bb:cc:dd:ee:02"), None).unwrap();
        assert_eq!(sel.value(), "AA:BB:CC:DD:EE:02");
    }

    #[tokio::test]
    async fn logout_by_ip_removes_matching_row() {
        let router = router();
        let sel = SessionSelector::from_keys(None, Some("10.5.50.11")).unwrap();

        let id = logout(&router, &sel).await.unwrap();

        assert_eq!(id.as_str(), "*B");
        assert_eq!(
            router.calls(),
            vec![
                Call::List("ip/hotspot/active"),
                Call::Remove("ip/hotspot/active", "*B".into()),
            ]
        );
        assert_eq!(router.rows(ResourcePath::HOTSPOT_ACTIVE).len(), 1);
    }

    #[tokio::test]
    async fn logout_by_lowercase_mac_finds_router_row() {
        let router = router();
        let sel = SessionSelector::from_keys(Some("aa:bb:cc:dd:ee:01"), None).unwrap();

        let id = logout(&router, &sel).await.unwrap();

        assert_eq!(id.as_str(), "*A");
        assert_eq!(router.rows(ResourcePath::HOTSPOT_ACTIVE).len(), 1);
    }

    #[tokio::test]
    async fn unknown_mac_is_not_found_after_list_only() {
        let router = router();
        let sel = SessionSelector::Mac("aa:bb:cc:dd:ee:ff".into());

        let err = logout(&router, &sel).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(router.calls(), vec![Call::List("ip/hotspot/active")]);
        assert!(!router.calls().iter().any(Call::is_mutation));
    }

    #[tokio::test]
    async fn listing_failure_is_connection_failure() {
        let router = router().refusing_login();
        let sel = SessionSelector::Ip("10.5.50.10".into());

        let err = logout(&router, &sel).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ConnectionFailure);
    }
}
