// ── Command API ──
//
// All write operations flow through a unified `Command` enum. The manager
// resolves natural keys to record identifiers and routes each variant to
// the matching remote collection.

pub mod requests;

use crate::model::{RecordId, Voucher};

pub use requests::{
    CreateHotspotUserRequest, CreateProfileRequest, CreateUserRequest, CreateVouchersRequest,
    UpdateHotspotUserRequest, UpdateUserRequest,
};

/// All possible write operations against a hotspot router.
#[derive(Debug, Clone)]
pub enum Command {
    // ── Router accounts ──────────────────────────────────────────────
    CreateUser(CreateUserRequest),
    UpdateUser {
        name: String,
        update: UpdateUserRequest,
    },
    DeleteUser {
        name: String,
    },

    // ── Hotspot users ────────────────────────────────────────────────
    CreateHotspotUser(CreateHotspotUserRequest),
    UpdateHotspotUser {
        name: String,
        update: UpdateHotspotUserRequest,
    },
    DeleteHotspotUser {
        name: String,
    },

    // ── Profiles ─────────────────────────────────────────────────────
    CreateProfile(CreateProfileRequest),

    // ── Vouchers ─────────────────────────────────────────────────────
    CreateVouchers(CreateVouchersRequest),

    // ── Sessions ─────────────────────────────────────────────────────
    /// Log a device out. MAC wins when both keys are given.
    Logout {
        mac_address: Option<String>,
        ip_address: Option<String>,
    },
}

/// Result of executing a command.
#[derive(Debug)]
pub enum CommandResult {
    Ok,
    /// A row was created; carries its identifier when the router reported one.
    Created(Option<RecordId>),
    Vouchers(Vec<Voucher>),
}
