mod cli;

use clap::Parser;
use member_status::error::StatusError;
use member_status::report::{self, OutputFormat, RosterReport, StatusReport};
use member_status::types::status::Status;
use member_status::{attendance, config, telemetry};
use tracing::{info, warn};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_CONFIG: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn output_format(format: &cli::ReportFormat) -> OutputFormat {
    match format {
        cli::ReportFormat::Json => OutputFormat::Json,
        cli::ReportFormat::Md => OutputFormat::Md,
    }
}

fn run() -> Result<i32, StatusError> {
    let cli = cli::Cli::parse();
    telemetry::init(telemetry::level_for(cli.verbose, cli.quiet))?;

    match cli.command {
        cli::Commands::Status(cmd) => {
            let org = config::load_config(&cmd.config.config_dir)?;
            let required_points = config::resolve_required_points(&org, cmd.required_points)?;
            let records = attendance::load_attendance(&cmd.attendance)?;

            let status_report = StatusReport::build(&records, &org, required_points);
            if !status_report.unscored_event_types.is_empty() {
                warn!(
                    event_types = %status_report.unscored_event_types.join(", "),
                    "attendance includes event types with no scoring rules"
                );
            }
            info!(
                status = %status_report.status,
                total_points = status_report.total_points,
                required_points,
                "status determined"
            );

            let rendered = report::render_status(&status_report, output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Roster(cmd) => {
            let org = config::load_config(&cmd.config.config_dir)?;
            let required_points = config::resolve_required_points(&org, cmd.required_points)?;
            let members = attendance::load_roster(&cmd.roster)?;

            let only = cmd.status.map(|filter| match filter {
                cli::StatusFilter::Active => Status::Active,
                cli::StatusFilter::General => Status::General,
            });
            let roster_report = RosterReport::build(&members, &org, required_points, only);
            info!(
                active = roster_report.active_count,
                general = roster_report.general_count,
                "roster evaluated"
            );

            let rendered = report::render_roster(&roster_report, output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Check(cmd) => {
            let org = config::load_config(&cmd.config.config_dir)?;
            if let Err(e) = org.validate() {
                eprintln!("error: {e}");
                return Ok(exit_code::INVALID_CONFIG);
            }

            println!("config ok: {} event type(s)", org.event_types.len());
            for event_type in &org.event_types {
                println!("- {}: {} rule(s)", event_type.name, event_type.rules.len());
            }
            if org.organization.required_points.is_none() {
                println!("note: organization.required_points is not set; pass --required-points");
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
