use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "member-status",
    version,
    about = "Membership status rules engine: score attendance against organization rules"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute one member's status from an attendance file
    Status(StatusCommand),
    /// Compute statuses for every member in a roster file
    Roster(RosterCommand),
    /// Validate the organization configuration
    Check(CheckCommand),
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StatusFilter {
    Active,
    General,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Directory containing membership.toml
    #[arg(long, default_value = ".")]
    pub config_dir: PathBuf,
}

#[derive(Args)]
pub struct StatusCommand {
    /// JSON array of attendance records
    pub attendance: PathBuf,
    #[command(flatten)]
    pub config: ConfigArgs,
    #[arg(long, allow_negative_numbers = true)]
    pub required_points: Option<f64>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct RosterCommand {
    /// JSON array of { member, attendance } entries
    pub roster: PathBuf,
    #[command(flatten)]
    pub config: ConfigArgs,
    #[arg(long, allow_negative_numbers = true)]
    pub required_points: Option<f64>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Only list members with this status
    #[arg(long, value_enum)]
    pub status: Option<StatusFilter>,
}

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub config: ConfigArgs,
}
