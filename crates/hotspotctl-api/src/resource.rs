// Remote resource abstraction
//
// RouterOS exposes every configuration menu as a flat collection of rows
// addressed by a menu path. Everything above this crate talks to the router
// through the four verbs on `ResourceClient`; the REST implementation lives
// in `rest/`, tests substitute an in-memory fake.

use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;

use crate::error::Error;

/// A single remote row: hyphenated field name to value (`".id"`,
/// `"mac-address"`, `"limit-uptime"`, ...).
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Field payload for `add`/`set`. Ordered so requests are deterministic.
pub type Fields = BTreeMap<String, String>;

/// Name of the field holding the router-assigned record identifier.
pub const ID_FIELD: &str = ".id";

/// A named remote collection, addressed by its RouterOS menu path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourcePath(&'static str);

impl ResourcePath {
    /// Router login accounts (`/user`).
    pub const USERS: Self = Self("user");
    /// Hotspot accounts (`/ip/hotspot/user`).
    pub const HOTSPOT_USERS: Self = Self("ip/hotspot/user");
    /// Hotspot user profiles (`/ip/hotspot/user/profile`).
    pub const HOTSPOT_PROFILES: Self = Self("ip/hotspot/user/profile");
    /// Currently logged-in hotspot sessions (`/ip/hotspot/active`).
    pub const HOTSPOT_ACTIVE: Self = Self("ip/hotspot/active");
    pub const SYSTEM_IDENTITY: Self = Self("system/identity");
    pub const SYSTEM_RESOURCE: Self = Self("system/resource");
    pub const SYSTEM_CLOCK: Self = Self("system/clock");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.0)
    }
}

/// Request/response access to remote collections.
///
/// Implementations must not retry: a failed call surfaces exactly once.
pub trait ResourceClient {
    /// Fetch every row of a collection.
    fn list(&self, path: ResourcePath) -> impl Future<Output = Result<Vec<Row>, Error>> + Send;

    /// Create a row. Returns the new record identifier when the router
    /// reports one.
    fn add(
        &self,
        path: ResourcePath,
        fields: &Fields,
    ) -> impl Future<Output = Result<Option<String>, Error>> + Send;

    /// Change the supplied fields of an existing row; other fields stay as they are.
    fn set(
        &self,
        path: ResourcePath,
        id: &str,
        fields: &Fields,
    ) -> impl Future<Output = Result<(), Error>> + Send;

    /// Delete a row by its record identifier.
    fn remove(&self, path: ResourcePath, id: &str)
    -> impl Future<Output = Result<(), Error>> + Send;
}
