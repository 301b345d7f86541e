//! Active session handlers.

use tabled::Tabled;

use hotspotctl_core::{ActiveSession, Command as CoreCommand, Manager};

use crate::cli::{GlobalOpts, SessionsArgs, SessionsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct SessionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "User")]
    user: String,
    #[tabled(rename = "MAC")]
    mac_address: String,
    #[tabled(rename = "IP")]
    address: String,
    #[tabled(rename = "Uptime")]
    uptime: String,
    #[tabled(rename = "Time Left")]
    time_left: String,
    #[tabled(rename = "Login By")]
    login_by: String,
}

impl From<&ActiveSession> for SessionRow {
    fn from(s: &ActiveSession) -> Self {
        Self {
            id: s.id.to_string(),
            user: output::or_dash(s.user.as_deref()),
            mac_address: output::or_dash(s.mac_address.as_deref()),
            address: output::or_dash(s.address.as_deref()),
            uptime: output::or_dash(s.uptime.as_deref()),
            time_left: output::or_dash(s.session_time_left.as_deref()),
            login_by: output::or_dash(s.login_by.as_deref()),
        }
    }
}

pub async fn handle(
    manager: &Manager,
    args: SessionsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        SessionsCommand::List => {
            let sessions = manager.list_active_sessions().await?;
            let out = output::render_listing(
                &global.output,
                &sessions,
                |s| SessionRow::from(s),
                |s| s.id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        SessionsCommand::Logout { mac, ip } => {
            let target = mac.as_deref().or(ip.as_deref()).unwrap_or_default().to_owned();
            if !util::confirm(
                "sessions logout",
                &format!("Log out session {target}?"),
                global.yes,
            )? {
                return Ok(());
            }
            manager
                .execute(CoreCommand::Logout {
                    mac_address: mac,
                    ip_address: ip,
                })
                .await?;
            output::success(global, &format!("Session {target} logged out"));
            Ok(())
        }
    }
}
