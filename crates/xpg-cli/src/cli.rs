use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "xpg",
    about = "xpgraph — XP and audit reports over platform record files",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Full report: summary, daily XP series, and audit distribution
    Report(ReportArgs),
    /// Daily XP series
    Series(SeriesArgs),
    /// Audit outcome distribution
    Audits(AuditsArgs),
    /// Profile summary with total XP
    Summary(SummaryArgs),
}

/// Scope and day-derivation options shared by every report.
#[derive(Args)]
pub struct ScopeArgs {
    /// Keep only transactions whose path starts with this prefix
    #[arg(long, conflicts_with = "exclude")]
    pub prefix: Option<String>,

    /// Drop transactions whose path contains this substring (repeatable)
    #[arg(long)]
    pub exclude: Vec<String>,

    /// Path segment after which the module name is read
    #[arg(long, default_value = xpg_types::DEFAULT_MODULE_ANCHOR)]
    pub anchor: String,

    /// Timezone for calendar days: 'utc' or a ±HH:MM offset
    #[arg(long, default_value = "utc")]
    pub timezone: String,
}

#[derive(Args)]
pub struct ReportArgs {
    /// JSON file with the transaction list
    pub transactions: String,
    /// JSON file with the audit list
    pub audits: String,
    /// Optional JSON file with the user profile
    #[arg(long)]
    pub profile: Option<String>,
    #[command(flatten)]
    pub scope: ScopeArgs,
}

#[derive(Args)]
pub struct SeriesArgs {
    /// JSON file with the transaction list
    pub transactions: String,
    /// Sum across modules, one row per day
    #[arg(long)]
    pub combined: bool,
    /// Sort rows chronologically instead of first-seen order
    #[arg(long)]
    pub sorted: bool,
    #[command(flatten)]
    pub scope: ScopeArgs,
}

#[derive(Args)]
pub struct AuditsArgs {
    /// JSON file with the audit list
    pub audits: String,
}

#[derive(Args)]
pub struct SummaryArgs {
    /// JSON file with the transaction list
    pub transactions: String,
    /// JSON file with the user profile
    pub profile: String,
    /// Show XP in kB display units
    #[arg(long)]
    pub scaled: bool,
    #[command(flatten)]
    pub scope: ScopeArgs,
}
