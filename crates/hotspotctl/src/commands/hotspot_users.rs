//! Hotspot account handlers.

use tabled::Tabled;

use hotspotctl_core::{
    Command as CoreCommand, CreateHotspotUserRequest, HotspotUser, Manager,
    UpdateHotspotUserRequest,
};

use crate::cli::{GlobalOpts, HotspotUsersArgs, HotspotUsersCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct HotspotUserRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Profile")]
    profile: String,
    #[tabled(rename = "Uptime Limit")]
    limit_uptime: String,
    #[tabled(rename = "Uptime")]
    uptime: String,
    #[tabled(rename = "Disabled")]
    disabled: String,
}

impl From<&HotspotUser> for HotspotUserRow {
    fn from(u: &HotspotUser) -> Self {
        Self {
            id: u.id.to_string(),
            name: u.name.clone(),
            profile: output::or_dash(u.profile.as_deref()),
            limit_uptime: output::or_dash(u.limit_uptime.as_deref()),
            uptime: output::or_dash(u.uptime.as_deref()),
            disabled: util::yes_no(u.disabled),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    manager: &Manager,
    args: HotspotUsersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        HotspotUsersCommand::List => {
            let users = manager.list_hotspot_users().await?;
            let out = output::render_listing(
                &global.output,
                &users,
                |u| HotspotUserRow::from(u),
                |u| u.name.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        HotspotUsersCommand::Create {
            name,
            password,
            profile,
            limit_uptime,
            address,
        } => {
            let password = util::password_or_prompt(password, &name)?;
            manager
                .execute(CoreCommand::CreateHotspotUser(CreateHotspotUserRequest {
                    name: name.clone(),
                    password,
                    profile,
                    limit_uptime,
                    address,
                }))
                .await?;
            output::success(global, &format!("Hotspot user '{name}' created"));
            Ok(())
        }

        HotspotUsersCommand::Update {
            name,
            password,
            profile,
            limit_uptime,
            address,
            state,
        } => {
            let update = UpdateHotspotUserRequest {
                password,
                profile,
                limit_uptime,
                address,
                disabled: state.disabled(),
            };
            manager
                .execute(CoreCommand::UpdateHotspotUser {
                    name: name.clone(),
                    update,
                })
                .await?;
            output::success(global, &format!("Hotspot user '{name}' updated"));
            Ok(())
        }

        HotspotUsersCommand::Delete { name } => {
            if !util::confirm(
                "hotspot-users delete",
                &format!("Delete hotspot user '{name}'?"),
                global.yes,
            )? {
                return Ok(());
            }
            manager
                .execute(CoreCommand::DeleteHotspotUser { name: name.clone() })
                .await?;
            output::success(global, &format!("Hotspot user '{name}' deleted"));
            Ok(())
        }
    }
}
