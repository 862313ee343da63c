//! Clap derive structures for the `magview` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// magview -- console for Magma LTE gateway fleets
#[derive(Debug, Parser)]
#[command(
    name = "magview",
    version,
    about = "Manage Magma LTE gateways from the command line",
    long_about = "A console for administering the LTE gateways of a Magma network.\n\n\
        Talks to the orchestrator REST API; gateway health, software tiers,\n\
        and subscriber attribution are derived the same way the web console\n\
        shows them.",
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
    /// Orchestrator profile to use
    #[arg(long, short = 'p', env = "MAGVIEW_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Orchestrator URL (overrides profile)
    #[arg(long, short = 'c', env = "MAGVIEW_ORCHESTRATOR", global = true)]
    pub orchestrator: Option<String>,

    /// Network id
    #[arg(long, short = 'n', env = "MAGVIEW_NETWORK", global = true)]
    pub network: Option<String>,

    /// Orchestrator API bearer token
    #[arg(long, env = "MAGVIEW_TOKEN", global = true, hide_env = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "MAGVIEW_OUTPUT",
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
    #[arg(long, short = 'k', env = "MAGVIEW_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "MAGVIEW_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,
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
    /// Manage the network's LTE gateways
    #[command(alias = "gw", alias = "g")]
    Gateways(GatewaysArgs),

    /// View the network's software tiers
    #[command(alias = "t")]
    Tiers(TiersArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  GATEWAYS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct GatewaysArgs {
    #[command(subcommand)]
    pub command: GatewaysCommand,
}

#[derive(Debug, Subcommand)]
pub enum GatewaysCommand {
    /// List gateways (status or upgrade view)
    #[command(alias = "ls")]
    List {
        /// Which table view to render
        #[arg(long, default_value = "status")]
        view: TableView,
    },

    /// Get gateway details
    Get {
        /// Gateway id
        gateway: String,
    },

    /// Move a gateway to a different software tier
    SetTier {
        /// Gateway id
        gateway: String,

        /// Target tier id (must exist in the network's tier catalog)
        tier: String,
    },

    /// Remove a gateway from the network
    Remove {
        /// Gateway id
        gateway: String,
    },

    /// Print the console route for a gateway
    Open {
        /// Gateway id
        gateway: String,

        /// Route to the config editor instead of the detail page
        #[arg(long)]
        config: bool,
    },
}

/// The two parallel table views, mirroring the web console toggle.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TableView {
    /// Health, checkin, eNodeB and subscriber counts
    Status,
    /// Hardware id, tier, and reported software version
    Upgrade,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  TIERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct TiersArgs {
    #[command(subcommand)]
    pub command: TiersCommand,
}

#[derive(Debug, Subcommand)]
pub enum TiersCommand {
    /// List the network's tier ids
    #[command(alias = "ls")]
    List,
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
    /// Show the resolved configuration (tokens redacted)
    Show,

    /// List configured profiles
    Profiles,

    /// Print the config file path
    Path,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
