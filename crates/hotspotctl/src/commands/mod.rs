//! Command dispatch: bridges CLI args -> core Commands -> output formatting.

pub mod config_cmd;
pub mod hotspot_users;
pub mod profiles;
pub mod sessions;
pub mod system;
pub mod users;
pub mod util;
pub mod vouchers;

use hotspotctl_core::Manager;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a router-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, manager: &Manager, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Users(args) => users::handle(manager, args, global).await,
        Command::HotspotUsers(args) => hotspot_users::handle(manager, args, global).await,
        Command::Profiles(args) => profiles::handle(manager, args, global).await,
        Command::Vouchers(args) => vouchers::handle(manager, args, global).await,
        Command::Sessions(args) => sessions::handle(manager, args, global).await,
        Command::System(args) => system::handle(manager, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
