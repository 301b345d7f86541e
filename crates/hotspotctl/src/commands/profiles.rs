//! Hotspot user profile handlers.

use tabled::Tabled;

use hotspotctl_core::{Command as CoreCommand, CreateProfileRequest, HotspotProfile, Manager};

use crate::cli::{GlobalOpts, ProfilesArgs, ProfilesCommand};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Uptime Limit")]
    limit_uptime: String,
    #[tabled(rename = "Bytes In")]
    limit_bytes_in: String,
    #[tabled(rename = "Bytes Out")]
    limit_bytes_out: String,
    #[tabled(rename = "Rate Limit")]
    rate_limit: String,
    #[tabled(rename = "Shared")]
    shared_users: String,
}

impl From<&HotspotProfile> for ProfileRow {
    fn from(p: &HotspotProfile) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name.clone(),
            limit_uptime: output::or_dash(p.limit_uptime.as_deref()),
            limit_bytes_in: output::or_dash(p.limit_bytes_in.as_deref()),
            limit_bytes_out: output::or_dash(p.limit_bytes_out.as_deref()),
            rate_limit: output::or_dash(p.rate_limit.as_deref()),
            shared_users: output::or_dash(p.shared_users.as_deref()),
        }
    }
}

pub async fn handle(
    manager: &Manager,
    args: ProfilesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ProfilesCommand::List => {
            let profiles = manager.list_profiles().await?;
            let out = output::render_listing(
                &global.output,
                &profiles,
                |p| ProfileRow::from(p),
                |p| p.name.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ProfilesCommand::Create {
            name,
            limit_uptime,
            limit_bytes_in,
            limit_bytes_out,
        } => {
            manager
                .execute(CoreCommand::CreateProfile(CreateProfileRequest {
                    name: name.clone(),
                    limit_uptime,
                    limit_bytes_in,
                    limit_bytes_out,
                }))
                .await?;
            output::success(global, &format!("Profile '{name}' created"));
            Ok(())
        }
    }
}
