//! Router login account handlers.

use tabled::Tabled;

use hotspotctl_core::{
    Account, Command as CoreCommand, CreateUserRequest, Manager, UpdateUserRequest,
};

use crate::cli::{GlobalOpts, UsersArgs, UsersCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct AccountRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Disabled")]
    disabled: String,
    #[tabled(rename = "Last Login")]
    last_logged_in: String,
}

impl From<&Account> for AccountRow {
    fn from(a: &Account) -> Self {
        Self {
            id: a.id.to_string(),
            name: a.name.clone(),
            group: output::or_dash(a.group.as_deref()),
            disabled: util::yes_no(a.disabled),
            last_logged_in: output::or_dash(a.last_logged_in.as_deref()),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(manager: &Manager, args: UsersArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        UsersCommand::List => {
            let accounts = manager.list_users().await?;
            let out = output::render_listing(
                &global.output,
                &accounts,
                |a| AccountRow::from(a),
                |a| a.name.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        UsersCommand::Create {
            name,
            password,
            group,
        } => {
            let password = util::password_or_prompt(password, &name)?;
            manager
                .execute(CoreCommand::CreateUser(CreateUserRequest {
                    name: name.clone(),
                    password,
                    group,
                }))
                .await?;
            output::success(global, &format!("User '{name}' created"));
            Ok(())
        }

        UsersCommand::Update {
            name,
            password,
            group,
            state,
        } => {
            let update = UpdateUserRequest {
                password,
                group,
                disabled: state.disabled(),
            };
            manager
                .execute(CoreCommand::UpdateUser {
                    name: name.clone(),
                    update,
                })
                .await?;
            output::success(global, &format!("User '{name}' updated"));
            Ok(())
        }

        UsersCommand::Delete { name } => {
            if !util::confirm("users delete", &format!("Delete user '{name}'?"), global.yes)? {
                return Ok(());
            }
            manager
                .execute(CoreCommand::DeleteUser { name: name.clone() })
                .await?;
            output::success(global, &format!("User '{name}' deleted"));
            Ok(())
        }
    }
}
