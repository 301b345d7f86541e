//! Clap derive structures for the `hotspotctl` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// hotspotctl -- kubectl-style CLI for RouterOS hotspot gateways
#[derive(Debug, Parser)]
#[command(
    name = "hotspotctl",
    version,
    about = "Manage RouterOS hotspot vouchers and sessions from the command line",
    long_about = "Administer a MikroTik RouterOS captive portal over its REST API.\n\n\
        Mint batches of single-use vouchers, manage router and hotspot\n\
        accounts, inspect and terminate active sessions, and read router\n\
        telemetry.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Router profile to use
    #[arg(long, short = 'p', env = "HOTSPOTCTL_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Router URL, e.g. https://192.168.88.1 (overrides profile)
    #[arg(long, short = 'r', env = "HOTSPOTCTL_ROUTER", global = true)]
    pub router: Option<String>,

    /// Router login account (overrides profile)
    #[arg(long, short = 'u', env = "HOTSPOTCTL_USERNAME", global = true)]
    pub username: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "HOTSPOTCTL_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "HOTSPOTCTL_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds [default: profile, then 30]
    #[arg(long, env = "HOTSPOTCTL_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage router login accounts
    #[command(alias = "user")]
    Users(UsersArgs),

    /// Manage hotspot accounts
    #[command(alias = "hs")]
    HotspotUsers(HotspotUsersArgs),

    /// Manage hotspot user profiles
    Profiles(ProfilesArgs),

    /// Mint single-use hotspot vouchers
    #[command(alias = "v")]
    Vouchers(VouchersArgs),

    /// Inspect and terminate active hotspot sessions
    #[command(alias = "active")]
    Sessions(SessionsArgs),

    /// Router information
    #[command(alias = "sys")]
    System(SystemArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// `--enable` / `--disable` pair shared by update commands.
#[derive(Debug, Args)]
pub struct EnableFlags {
    /// Disable the account
    #[arg(long, conflicts_with = "enable")]
    pub disable: bool,

    /// Re-enable the account
    #[arg(long)]
    pub enable: bool,
}

impl EnableFlags {
    /// `Some(true)` to disable, `Some(false)` to enable, `None` to leave as is.
    pub fn disabled(&self) -> Option<bool> {
        match (self.disable, self.enable) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  USERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommand,
}

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// List router login accounts
    #[command(alias = "ls")]
    List,

    /// Create a router login account
    Create {
        /// Account name
        name: String,

        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,

        /// Permission group
        #[arg(long, default_value = "read")]
        group: String,
    },

    /// Change fields of an existing account
    Update {
        /// Account name
        name: String,

        /// New password
        #[arg(long)]
        password: Option<String>,

        /// New permission group
        #[arg(long)]
        group: Option<String>,

        #[command(flatten)]
        state: EnableFlags,
    },

    /// Delete an account
    #[command(alias = "rm")]
    Delete {
        /// Account name
        name: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  HOTSPOT USERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct HotspotUsersArgs {
    #[command(subcommand)]
    pub command: HotspotUsersCommand,
}

#[derive(Debug, Subcommand)]
pub enum HotspotUsersCommand {
    /// List hotspot accounts
    #[command(alias = "ls")]
    List,

    /// Create a hotspot account
    Create {
        /// Account name
        name: String,

        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,

        /// Hotspot user profile
        #[arg(long, default_value = "default")]
        profile: String,

        /// Uptime limit, RouterOS duration (e.g. 1h, 1d2h)
        #[arg(long)]
        limit_uptime: Option<String>,

        /// Static IP address binding
        #[arg(long)]
        address: Option<String>,
    },

    /// Change fields of an existing hotspot account
    Update {
        /// Account name
        name: String,

        /// New password
        #[arg(long)]
        password: Option<String>,

        /// New profile
        #[arg(long)]
        profile: Option<String>,

        /// New uptime limit
        #[arg(long)]
        limit_uptime: Option<String>,

        /// New static IP address binding
        #[arg(long)]
        address: Option<String>,

        #[command(flatten)]
        state: EnableFlags,
    },

    /// Delete a hotspot account
    #[command(alias = "rm")]
    Delete {
        /// Account name
        name: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PROFILES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ProfilesArgs {
    #[command(subcommand)]
    pub command: ProfilesCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProfilesCommand {
    /// List hotspot user profiles
    #[command(alias = "ls")]
    List,

    /// Create a hotspot user profile
    Create {
        /// Profile name
        name: String,

        /// Uptime limit, RouterOS duration
        #[arg(long)]
        limit_uptime: Option<String>,

        /// Download byte limit (e.g. 500M)
        #[arg(long)]
        limit_bytes_in: Option<String>,

        /// Upload byte limit (e.g. 100M)
        #[arg(long)]
        limit_bytes_out: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  VOUCHERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct VouchersArgs {
    #[command(subcommand)]
    pub command: VouchersCommand,
}

#[derive(Debug, Subcommand)]
pub enum VouchersCommand {
    /// Generate a batch of vouchers
    Create {
        /// Hotspot user profile for every voucher
        #[arg(long, default_value = "default")]
        profile: String,

        /// Number of vouchers to generate
        #[arg(long, short = 'n', default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,

        /// Uptime limit per voucher, RouterOS duration (e.g. 1h)
        #[arg(long)]
        duration: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SESSIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct SessionsArgs {
    #[command(subcommand)]
    pub command: SessionsCommand,
}

#[derive(Debug, Subcommand)]
pub enum SessionsCommand {
    /// List active sessions
    #[command(alias = "ls")]
    List,

    /// Log a device out (MAC wins when both are given)
    #[command(group(ArgGroup::new("target").required(true).multiple(true).args(["mac", "ip"])))]
    Logout {
        /// Client MAC address
        #[arg(long)]
        mac: Option<String>,

        /// Client IP address
        #[arg(long)]
        ip: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SYSTEM
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct SystemArgs {
    #[command(subcommand)]
    pub command: SystemCommand,
}

#[derive(Debug, Subcommand)]
pub enum SystemCommand {
    /// Identity, resources and clock
    Info,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current resolved configuration
    Show,

    /// Set a value on the active profile
    Set {
        /// Profile key (router, username, password_env, insecure, timeout, ...)
        key: String,

        /// Value to set
        value: String,
    },

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Store a router password in the system keyring
    SetPassword {
        /// Profile name
        #[arg(long)]
        profile: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
