//! Router information handler.

use hotspotctl_core::{Manager, RouterInfo};

use crate::cli::{GlobalOpts, SystemArgs, SystemCommand};
use crate::error::CliError;
use crate::output;

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".into(), |v| v.to_string())
}

fn mib(bytes: Option<u64>) -> String {
    bytes.map_or_else(|| "-".into(), |b| format!("{} MiB", b / (1024 * 1024)))
}

fn detail(info: &RouterInfo) -> String {
    [
        format!("Identity:     {}", opt(info.router_name.as_deref())),
        format!("Board:        {}", opt(info.board_name.as_deref())),
        format!("Platform:     {}", opt(info.platform.as_deref())),
        format!("Architecture: {}", opt(info.architecture_name.as_deref())),
        format!("Version:      {}", opt(info.version.as_deref())),
        format!("Uptime:       {}", opt(info.uptime.as_deref())),
        format!(
            "CPU:          {}% of {} x {} MHz",
            opt(info.cpu_load),
            opt(info.cpu_count),
            opt(info.cpu_frequency)
        ),
        format!(
            "Memory:       {} free of {}",
            mib(info.free_memory),
            mib(info.total_memory)
        ),
        format!(
            "Storage:      {} free of {}",
            mib(info.free_hdd_space),
            mib(info.total_hdd_space)
        ),
        format!(
            "Clock:        {} {}",
            opt(info.date.as_deref()),
            opt(info.time.as_deref())
        ),
    ]
    .join("\n")
}

pub async fn handle(
    manager: &Manager,
    args: SystemArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        SystemCommand::Info => {
            let info = manager.router_info().await?;
            let out = output::render_single(&global.output, &info, detail, |i| {
                i.router_name.clone().unwrap_or_default()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
