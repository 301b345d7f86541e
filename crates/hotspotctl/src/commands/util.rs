//! Shared helpers for command handlers.

use std::io::IsTerminal;

use crate::error::CliError;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
///
/// Without a terminal there is nobody to ask, so `--yes` becomes mandatory.
pub fn confirm(action: &str, message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: action.into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Use the `--password` value, or ask for one without echo.
pub fn password_or_prompt(password: Option<String>, name: &str) -> Result<String, CliError> {
    if let Some(password) = password {
        return Ok(password);
    }
    let password = rpassword::prompt_password(format!("Password for {name}: ")).map_err(|e| {
        CliError::Validation {
            field: "password".into(),
            reason: format!("pass --password or run interactively ({e})"),
        }
    })?;
    if password.is_empty() {
        return Err(CliError::Validation {
            field: "password".into(),
            reason: "password cannot be empty".into(),
        });
    }
    Ok(password)
}

/// `yes` / `no` for table cells.
pub fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.into()
}
