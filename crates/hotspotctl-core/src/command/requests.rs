// ── Typed request structs for Command payloads ──
//
// Each request knows how to render itself as the hyphenated field map the
// router expects. Optional fields that are unset or empty are left out, so
// an update only touches what the caller supplied.

use hotspotctl_api::Fields;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

fn default_group() -> String {
    "read".into()
}

fn default_count() -> u32 {
    1
}

/// Insert `value` under `key` unless it is absent or blank.
fn put(fields: &mut Fields, key: &str, value: Option<&str>) {
    if let Some(v) = value.filter(|v| !v.trim().is_empty()) {
        fields.insert(key.to_owned(), v.to_owned());
    }
}

fn put_flag(fields: &mut Fields, key: &str, value: Option<bool>) {
    if let Some(b) = value {
        fields.insert(key.to_owned(), if b { "true" } else { "false" }.to_owned());
    }
}

fn non_empty(fields: Fields, what: &str) -> Result<Fields, CoreError> {
    if fields.is_empty() {
        return Err(CoreError::invalid(format!(
            "{what} update has no fields to change"
        )));
    }
    Ok(fields)
}

// ── Router accounts ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub password: String,
    #[serde(default = "default_group")]
    pub group: String,
}

impl CreateUserRequest {
    pub fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("name".into(), self.name.clone());
        fields.insert("password".into(), self.password.clone());
        fields.insert("group".into(), self.group.clone());
        fields
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

impl UpdateUserRequest {
    /// Fields to patch. Errors when nothing was supplied.
    pub fn to_fields(&self) -> Result<Fields, CoreError> {
        let mut fields = Fields::new();
        put(&mut fields, "password", self.password.as_deref());
        put(&mut fields, "group", self.group.as_deref());
        put_flag(&mut fields, "disabled", self.disabled);
        non_empty(fields, "user")
    }
}

// ── Hotspot users ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHotspotUserRequest {
    pub name: String,
    pub password: String,
    pub profile: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_uptime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl CreateHotspotUserRequest {
    pub fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("name".into(), self.name.clone());
        fields.insert("password".into(), self.password.clone());
        fields.insert("profile".into(), self.profile.clone());
        put(&mut fields, "limit-uptime", self.limit_uptime.as_deref());
        put(&mut fields, "address", self.address.as_deref());
        fields
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateHotspotUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_uptime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

impl UpdateHotspotUserRequest {
    pub fn to_fields(&self) -> Result<Fields, CoreError> {
        let mut fields = Fields::new();
        put(&mut fields, "password", self.password.as_deref());
        put(&mut fields, "profile", self.profile.as_deref());
        put(&mut fields, "limit-uptime", self.limit_uptime.as_deref());
        put(&mut fields, "address", self.address.as_deref());
        put_flag(&mut fields, "disabled", self.disabled);
        non_empty(fields, "hotspot user")
    }
}

// ── Profiles ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProfileRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_uptime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_bytes_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_bytes_out: Option<String>,
}

impl CreateProfileRequest {
    pub fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("name".into(), self.name.clone());
        put(&mut fields, "limit-uptime", self.limit_uptime.as_deref());
        put(&mut fields, "limit-bytes-in", self.limit_bytes_in.as_deref());
        put(&mut fields, "limit-bytes-out", self.limit_bytes_out.as_deref());
        fields
    }
}

// ── Vouchers ───────────────────────────────────────────────────────

/// A batch of single-use hotspot accounts sharing one profile and duration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVouchersRequest {
    pub profile: String,
    #[serde(default = "default_count")]
    pub count: u32,
    /// `limit-uptime` for every voucher; blank means unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl CreateVouchersRequest {
    /// Duration with blanks normalized away.
    pub fn duration(&self) -> Option<&str> {
        self.duration.as_deref().filter(|d| !d.trim().is_empty())
    }
}
