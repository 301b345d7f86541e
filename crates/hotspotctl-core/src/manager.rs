// ── Manager facade ──
//
// Single entry point for the front door. Reads are direct methods that
// list and convert; writes go through `execute(Command)`. Every mutation
// addressed by a natural key follows the same shape: list the collection,
// resolve the key locally, then mutate by `.id`. Calls are strictly
// sequential within one operation.

use hotspotctl_api::{ResourceClient, ResourcePath, RestClient, Row};
use tracing::{debug, info};

use crate::command::{Command, CommandResult};
use crate::config::RouterConfig;
use crate::convert::convert_rows;
use crate::credentials::{CredentialGenerator, DEFAULT_PREFIX, DEFAULT_SUFFIX_BYTES};
use crate::error::{CoreError, RemoteResultExt};
use crate::model::{Account, ActiveSession, HotspotProfile, HotspotUser, RecordId, RouterInfo};
use crate::resolve::resolve;
use crate::sessions::{self, SessionSelector};
use crate::vouchers;

/// One read of a collection.
///
/// `rows` is the snapshot exactly as the router sent it, every field kept;
/// `items` are the typed views of the same rows, in the same order.
#[derive(Debug, Clone)]
pub struct Listing<T> {
    pub rows: Vec<Row>,
    pub items: Vec<T>,
}

/// Stateless handle on one router. The router is the only system of record;
/// nothing is cached between calls.
pub struct Manager<C = RestClient> {
    client: C,
    voucher_prefix: String,
    voucher_suffix_bytes: usize,
}

impl Manager<RestClient> {
    /// Build a manager backed by one pooled REST client.
    ///
    /// No request is made until the first operation.
    pub fn from_config(config: &RouterConfig) -> Result<Self, CoreError> {
        let client = RestClient::new(
            config.url.clone(),
            config.username.clone(),
            config.password.clone(),
            &config.transport(),
        )
        .during("connect")?;

        Ok(Self::new(client)
            .with_voucher_format(config.voucher_prefix.clone(), config.voucher_suffix_bytes))
    }
}

impl<C: ResourceClient> Manager<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            voucher_prefix: DEFAULT_PREFIX.to_owned(),
            voucher_suffix_bytes: DEFAULT_SUFFIX_BYTES,
        }
    }

    /// Override the voucher username prefix and random width.
    #[must_use]
    pub fn with_voucher_format(mut self, prefix: impl Into<String>, suffix_bytes: usize) -> Self {
        self.voucher_prefix = prefix.into();
        self.voucher_suffix_bytes = suffix_bytes;
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    // ── Command execution ────────────────────────────────────────

    /// Execute a write operation against the router.
    pub async fn execute(&self, cmd: Command) -> Result<CommandResult, CoreError> {
        route_command(self, cmd).await
    }

    // ── Reads ────────────────────────────────────────────────────

    pub async fn list_users(&self) -> Result<Listing<Account>, CoreError> {
        self.listing(ResourcePath::USERS, "list users").await
    }

    pub async fn list_hotspot_users(&self) -> Result<Listing<HotspotUser>, CoreError> {
        self.listing(ResourcePath::HOTSPOT_USERS, "list hotspot users")
            .await
    }

    pub async fn list_profiles(&self) -> Result<Listing<HotspotProfile>, CoreError> {
        self.listing(ResourcePath::HOTSPOT_PROFILES, "list profiles")
            .await
    }

    pub async fn list_active_sessions(&self) -> Result<Listing<ActiveSession>, CoreError> {
        self.listing(ResourcePath::HOTSPOT_ACTIVE, "list active sessions")
            .await
    }

    /// Identity, resource and clock read-out.
    pub async fn router_info(&self) -> Result<RouterInfo, CoreError> {
        let identity = self.singleton(ResourcePath::SYSTEM_IDENTITY).await?;
        let resource = self.singleton(ResourcePath::SYSTEM_RESOURCE).await?;
        let clock = self.singleton(ResourcePath::SYSTEM_CLOCK).await?;
        Ok(RouterInfo::from_rows(&identity, &resource, &clock))
    }

    // ── Helpers ──────────────────────────────────────────────────

    async fn list(&self, path: ResourcePath, operation: &str) -> Result<Vec<Row>, CoreError> {
        self.client.list(path).await.during(operation)
    }

    async fn listing<T>(&self, path: ResourcePath, operation: &str) -> Result<Listing<T>, CoreError>
    where
        T: for<'a> TryFrom<&'a Row, Error = CoreError>,
    {
        let rows = self.list(path, operation).await?;
        let items = convert_rows(&rows)?;
        Ok(Listing { rows, items })
    }

    async fn singleton(&self, path: ResourcePath) -> Result<Row, CoreError> {
        let rows = self
            .list(path, &format!("read {path}"))
            .await?;
        Ok(rows.into_iter().next().unwrap_or_default())
    }

    /// Fresh snapshot, then local lookup.
    async fn resolve_name(
        &self,
        path: ResourcePath,
        entity_type: &str,
        name: &str,
    ) -> Result<RecordId, CoreError> {
        let snapshot = self.list(path, &format!("list {entity_type}s")).await?;
        resolve(&snapshot, "name", name).map_err(|e| e.into_core(entity_type))
    }

    async fn update_by_name(
        &self,
        path: ResourcePath,
        entity_type: &str,
        name: &str,
        fields: &hotspotctl_api::Fields,
    ) -> Result<CommandResult, CoreError> {
        let id = self.resolve_name(path, entity_type, name).await?;
        self.client
            .set(path, id.as_str(), fields)
            .await
            .during(&format!("update {entity_type}"))?;
        info!(%id, name, "{entity_type} updated");
        Ok(CommandResult::Ok)
    }

    async fn delete_by_name(
        &self,
        path: ResourcePath,
        entity_type: &str,
        name: &str,
    ) -> Result<CommandResult, CoreError> {
        let id = self.resolve_name(path, entity_type, name).await?;
        self.client
            .remove(path, id.as_str())
            .await
            .during(&format!("delete {entity_type}"))?;
        info!(%id, name, "{entity_type} deleted");
        Ok(CommandResult::Ok)
    }

    async fn create(
        &self,
        path: ResourcePath,
        entity_type: &str,
        fields: &hotspotctl_api::Fields,
    ) -> Result<CommandResult, CoreError> {
        let id = self
            .client
            .add(path, fields)
            .await
            .during(&format!("create {entity_type}"))?
            .map(RecordId::from);
        info!(id = id.as_ref().map(RecordId::as_str), "{entity_type} created");
        Ok(CommandResult::Created(id))
    }
}

// ── Command routing ──────────────────────────────────────────────

async fn route_command<C: ResourceClient>(
    manager: &Manager<C>,
    cmd: Command,
) -> Result<CommandResult, CoreError> {
    match cmd {
        // ── Router accounts ──────────────────────────────────────
        Command::CreateUser(req) => {
            manager
                .create(ResourcePath::USERS, "user", &req.to_fields())
                .await
        }
        Command::UpdateUser { name, update } => {
            let fields = update.to_fields()?;
            manager
                .update_by_name(ResourcePath::USERS, "user", &name, &fields)
                .await
        }
        Command::DeleteUser { name } => {
            manager
                .delete_by_name(ResourcePath::USERS, "user", &name)
                .await
        }

        // ── Hotspot users ────────────────────────────────────────
        Command::CreateHotspotUser(req) => {
            manager
                .create(ResourcePath::HOTSPOT_USERS, "hotspot user", &req.to_fields())
                .await
        }
        Command::UpdateHotspotUser { name, update } => {
            let fields = update.to_fields()?;
            manager
                .update_by_name(ResourcePath::HOTSPOT_USERS, "hotspot user", &name, &fields)
                .await
        }
        Command::DeleteHotspotUser { name } => {
            manager
                .delete_by_name(ResourcePath::HOTSPOT_USERS, "hotspot user", &name)
                .await
        }

        // ── Profiles ─────────────────────────────────────────────
        Command::CreateProfile(req) => {
            manager
                .create(ResourcePath::HOTSPOT_PROFILES, "profile", &req.to_fields())
                .await
        }

        // ── Vouchers ─────────────────────────────────────────────
        Command::CreateVouchers(req) => {
            let mut generator =
                CredentialGenerator::new(&*manager.voucher_prefix, manager.voucher_suffix_bytes);
            debug!(count = req.count, profile = %req.profile, "creating voucher batch");
            let vouchers = vouchers::create_batch(&manager.client, &req, &mut generator).await?;
            Ok(CommandResult::Vouchers(vouchers))
        }

        // ── Sessions ─────────────────────────────────────────────
        Command::Logout {
            mac_address,
            ip_address,
        } => {
            let selector =
                SessionSelector::from_keys(mac_address.as_deref(), ip_address.as_deref())?;
            sessions::logout(&manager.client, &selector).await?;
            Ok(CommandResult::Ok)
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::command::{
        CreateHotspotUserRequest, CreateProfileRequest, CreateUserRequest, CreateVouchersRequest,
        UpdateHotspotUserRequest, UpdateUserRequest,
    };
    use crate::error::ErrorKind;
    use crate::testing::{Call, FakeRouter};

    fn manager(router: FakeRouter) -> Manager<FakeRouter> {
        Manager::new(router)
    }

    fn hotspot_users() -> FakeRouter {
        FakeRouter::new().with_rows(
            ResourcePath::HOTSPOT_USERS,
            json!([
                { ".id": "*1", "name": "bob", "profile": "default" },
                { ".id": "*2", "name": "alice", "profile": "guests", "limit-uptime": "1h" }
            ]),
        )
    }

    #[tokio::test]
    async fn delete_twice_is_ok_then_not_found() {
        let m = manager(hotspot_users());
        let delete = || Command::DeleteHotspotUser {
            name: "alice".into(),
        };

        assert!(matches!(m.execute(delete()).await.unwrap(), CommandResult::Ok));
        let err = m.execute(delete()).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(
            m.client().calls(),
            vec![
                Call::List("ip/hotspot/user"),
                Call::Remove("ip/hotspot/user", "*2".into()),
                Call::List("ip/hotspot/user"),
            ]
        );
    }

    #[tokio::test]
    async fn update_patches_only_resolved_row() {
        let m = manager(hotspot_users());

        m.execute(Command::UpdateHotspotUser {
            name: "bob".into(),
            update: UpdateHotspotUserRequest {
                limit_uptime: Some("2h".into()),
                ..Default::default()
            },
        })
        .await
        .unwrap();

        let rows = m.client().rows(ResourcePath::HOTSPOT_USERS);
        assert_eq!(rows[0]["limit-uptime"], "2h");
        assert_eq!(rows[0]["profile"], "default");
        assert_eq!(rows[1]["limit-uptime"], "1h");
    }

    #[tokio::test]
    async fn empty_update_issues_no_calls() {
        let m = manager(hotspot_users());

        let err = m
            .execute(Command::UpdateUser {
                name: "bob".into(),
                update: UpdateUserRequest::default(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(m.client().calls().is_empty());
    }

    #[tokio::test]
    async fn update_of_unknown_user_is_not_found() {
        let m = manager(FakeRouter::new());

        let err = m
            .execute(Command::UpdateUser {
                name: "ghost".into(),
                update: UpdateUserRequest {
                    group: Some("full".into()),
                    ..Default::default()
                },
            })
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(!m.client().calls().iter().any(Call::is_mutation));
    }

    #[tokio::test]
    async fn creating_same_name_twice_is_rejected() {
        let m = manager(FakeRouter::new());
        let create = || {
            Command::CreateUser(CreateUserRequest {
                name: "ops".into(),
                password: "s3cret".into(),
                group: "read".into(),
            })
        };

        let first = m.execute(create()).await.unwrap();
        let err = m.execute(create()).await.unwrap_err();

        assert!(matches!(first, CommandResult::Created(Some(_))));
        assert_eq!(err.kind(), ErrorKind::RemoteRejected);
    }

    #[tokio::test]
    async fn create_hotspot_user_and_profile_send_router_fields() {
        let m = manager(FakeRouter::new());

        m.execute(Command::CreateProfile(CreateProfileRequest {
            name: "day-pass".into(),
            limit_uptime: Some("1d".into()),
            limit_bytes_in: None,
            limit_bytes_out: Some("1G".into()),
        }))
        .await
        .unwrap();
        m.execute(Command::CreateHotspotUser(CreateHotspotUserRequest {
            name: "guest".into(),
            password: "pw".into(),
            profile: "day-pass".into(),
            limit_uptime: None,
            address: Some("10.5.50.20".into()),
        }))
        .await
        .unwrap();

        let profile = &m.client().rows(ResourcePath::HOTSPOT_PROFILES)[0];
        assert_eq!(profile["limit-bytes-out"], "1G");
        assert!(!profile.contains_key("limit-bytes-in"));
        let user = &m.client().rows(ResourcePath::HOTSPOT_USERS)[0];
        assert_eq!(user["address"], "10.5.50.20");
        assert!(!user.contains_key("limit-uptime"));
    }

    #[tokio::test]
    async fn vouchers_use_configured_format() {
        let m = manager(FakeRouter::new()).with_voucher_format("lobby-", 2);

        let result = m
            .execute(Command::CreateVouchers(CreateVouchersRequest {
                profile: "default".into(),
                count: 2,
                duration: Some("30m".into()),
            }))
            .await
            .unwrap();

        let CommandResult::Vouchers(vouchers) = result else {
            panic!("expected vouchers");
        };
        assert_eq!(vouchers.len(), 2);
        for v in &vouchers {
            assert!(v.username.starts_with("lobby-"));
            assert_eq!(v.username.len(), "lobby-".len() + 4);
            assert_eq!(v.duration.as_deref(), Some("30m"));
        }
    }

    #[tokio::test]
    async fn logout_without_keys_issues_no_calls() {
        let m = manager(FakeRouter::new());

        let err = m
            .execute(Command::Logout {
                mac_address: None,
                ip_address: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(m.client().calls().is_empty());
    }

    #[tokio::test]
    async fn logout_with_unknown_mac_lists_only() {
        let m = manager(FakeRouter::new().with_rows(
            ResourcePath::HOTSPOT_ACTIVE,
            json!([{ ".id": "*9", "mac-address": "11:22:33:44:55:66" }]),
        ));

        let err = m
            .execute(Command::Logout {
                mac_address: Some("aa:bb:cc:dd:ee:ff".into()),
                ip_address: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(m.client().calls(), vec![Call::List("ip/hotspot/active")]);
    }

    #[tokio::test]
    async fn reads_convert_rows() {
        let m = manager(hotspot_users().with_rows(
            ResourcePath::USERS,
            json!([{ ".id": "*1", "name": "admin", "group": "full", "disabled": "false" }]),
        ));

        let users = m.list_users().await.unwrap().items;
        let hotspot = m.list_hotspot_users().await.unwrap().items;

        assert_eq!(users[0].group.as_deref(), Some("full"));
        assert_eq!(hotspot.len(), 2);
        assert_eq!(hotspot[1].name, "alice");
        assert!(m.list_active_sessions().await.unwrap().items.is_empty());
        assert!(m.list_profiles().await.unwrap().rows.is_empty());
    }

    #[tokio::test]
    async fn listing_keeps_every_router_field() {
        let m = manager(FakeRouter::new().with_rows(
            ResourcePath::HOTSPOT_USERS,
            json!([{
                ".id": "*1", "name": "bob", "password": "pw",
                "limit-bytes-total": "1G", "server": "hs1", "email": "b@x"
            }]),
        ));

        let listing = m.list_hotspot_users().await.unwrap();

        let row = &listing.rows[0];
        assert_eq!(row["password"], "pw");
        assert_eq!(row["limit-bytes-total"], "1G");
        assert_eq!(row["server"], "hs1");
        assert_eq!(row["email"], "b@x");
        assert!(!row.contains_key("profile"));
        assert_eq!(listing.items[0].name, "bob");
    }

    #[tokio::test]
    async fn router_info_reads_three_menus() {
        let m = manager(
            FakeRouter::new()
                .with_rows(ResourcePath::SYSTEM_IDENTITY, json!([{ "name": "gw" }]))
                .with_rows(ResourcePath::SYSTEM_RESOURCE, json!([{ "version": "7.15" }])),
        );

        let info = m.router_info().await.unwrap();

        assert_eq!(info.router_name.as_deref(), Some("gw"));
        assert_eq!(info.version.as_deref(), Some("7.15"));
        assert_eq!(info.time, None);
        assert_eq!(m.client().calls().len(), 3);
    }

    #[tokio::test]
    async fn refused_login_is_connection_failure() {
        let m = manager(FakeRouter::new().refusing_login());
        let err = m.list_users().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConnectionFailure);
    }
}
