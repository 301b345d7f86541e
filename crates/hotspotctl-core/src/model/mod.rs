// ── Domain model ──
//
// Typed, read-only views of router rows. Every type here is a transient
// in-process copy of remote state, valid for the duration of one request;
// the router stays the only system of record. Field names serialize in the
// router's own hyphenated form so JSON output matches what RouterOS shows.

pub mod account;
pub mod hotspot;
pub mod record_id;
pub mod session;
pub mod system;

// ── Re-exports ──────────────────────────────────────────────────────

pub use account::Account;
pub use hotspot::{HotspotProfile, HotspotUser, Voucher};
pub use record_id::RecordId;
pub use session::ActiveSession;
pub use system::RouterInfo;
