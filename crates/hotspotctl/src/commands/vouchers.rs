//! Voucher batch handler.

use tabled::Tabled;

use hotspotctl_core::{
    Command as CoreCommand, CommandResult, CreateVouchersRequest, Manager, Voucher,
};

use crate::cli::{GlobalOpts, VouchersArgs, VouchersCommand};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct VoucherRow {
    #[tabled(rename = "Username")]
    username: String,
    #[tabled(rename = "Password")]
    password: String,
    #[tabled(rename = "Profile")]
    profile: String,
    #[tabled(rename = "Duration")]
    duration: String,
}

impl From<&Voucher> for VoucherRow {
    fn from(v: &Voucher) -> Self {
        Self {
            username: v.username.clone(),
            password: v.password.clone(),
            profile: v.profile.clone(),
            duration: v.duration.clone().unwrap_or_else(|| "unlimited".into()),
        }
    }
}

pub async fn handle(
    manager: &Manager,
    args: VouchersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        VouchersCommand::Create {
            profile,
            count,
            duration,
        } => {
            let req = CreateVouchersRequest {
                profile,
                count,
                duration,
            };
            let vouchers = match manager.execute(CoreCommand::CreateVouchers(req)).await? {
                CommandResult::Vouchers(vouchers) => vouchers,
                _ => Vec::new(),
            };

            // Credentials are shown once and never stored locally
            let out = output::render_list(
                &global.output,
                &vouchers,
                |v| VoucherRow::from(v),
                |v| format!("{} {}", v.username, v.password),
            )?;
            output::print_output(&out, global.quiet);
            output::success(global, &format!("{} voucher(s) created", vouchers.len()));
            Ok(())
        }
    }
}
