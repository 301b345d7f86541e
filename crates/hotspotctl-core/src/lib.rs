//! Voucher and session lifecycle logic for RouterOS hotspot gateways.
//!
//! This crate sits between `hotspotctl-api` (raw remote collections) and the
//! `hotspotctl` CLI:
//!
//! - **[`Manager`]**: Facade over one router. `list_*` reads return a
//!   [`Listing`] (raw rows plus typed views); writes go through
//!   [`execute()`](Manager::execute) with a typed [`Command`].
//!
//! - **Identifier resolution** ([`resolve()`]): Pure lookup of a natural key
//!   (username, MAC, IP) in a fetched snapshot, yielding the router's `.id`.
//!
//! - **Vouchers** ([`CredentialGenerator`], [`create_batch()`]): Random
//!   `voucher_xxxxxxxx` credentials, created sequentially. A failed batch
//!   reports how many vouchers already exist on the router and never rolls
//!   them back.
//!
//! - **Sessions** ([`SessionSelector`], [`logout()`]): Terminate an active
//!   hotspot session by MAC or IP.
//!
//! - **Errors** ([`CoreError`], [`ErrorKind`]): Every transport failure is
//!   classified into connection failure, remote rejection, not found or
//!   invalid argument.

pub mod command;
pub mod config;
pub mod convert;
pub mod credentials;
pub mod error;
pub mod manager;
pub mod model;
pub mod resolve;
pub mod sessions;
pub mod vouchers;

#[cfg(test)]
mod testing;

// ── Primary re-exports ──────────────────────────────────────────────
pub use command::requests::*;
pub use command::{Command, CommandResult};
pub use config::{RouterConfig, TlsVerification};
pub use credentials::{Credential, CredentialGenerator};
pub use error::{CoreError, ErrorKind};
pub use manager::{Listing, Manager};
pub use resolve::{ResolveError, resolve};
pub use sessions::{SessionSelector, logout};
pub use vouchers::create_batch;

pub use hotspotctl_api::Row;

pub use model::{
    Account, ActiveSession, HotspotProfile, HotspotUser, RecordId, RouterInfo, Voucher,
};
