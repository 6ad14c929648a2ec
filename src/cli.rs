//! CLI interface for oncall.
//!
//! Non-interactive subcommands: arguments in, lines on stdout out. Every
//! command needs an API key, resolved through `--api-key`, `ONCALL_API_KEY`,
//! or `~/.oncall/config.toml` (see [`crate::config`]).

mod format;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jiff::Zoned;
use jiff::civil::Date;

use crate::api::{AlertFilter, ApiClient, Interval};
use crate::config::Config;

use format::{format_alert, format_period, format_rotation, format_rotation_header, format_schedule};

/// oncall — query Opsgenie for alerts and on-call schedules.
#[derive(Debug, Parser)]
#[command(name = "oncall")]
pub struct Cli {
    /// Config file (default: ~/.oncall/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Opsgenie API key. Overrides ONCALL_API_KEY and the config file.
    #[arg(long, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List alerts, newest first.
    Alerts {
        /// Only alerts acknowledged by this user.
        #[arg(long)]
        acknowledged_by: Option<String>,

        /// Only alerts created on or after this date (YYYY-MM-DD).
        #[arg(long)]
        start_date: Option<Date>,

        /// Only alerts created up to this date (YYYY-MM-DD).
        #[arg(long)]
        end_date: Option<Date>,
    },

    /// List on-call schedules.
    Schedules {
        /// Also list each schedule's rotations.
        #[arg(long)]
        expand_rotations: bool,
    },

    /// List the rotations of a schedule.
    Rotations {
        /// Schedule name.
        schedule: String,
    },

    /// Print a schedule's on-call timeline, one compacted line per hand-off.
    Timeline {
        /// Schedule name.
        schedule: String,

        /// First day of the window (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        start_date: Option<Date>,

        /// Window length, like `14days`, `2weeks`, or `1months`.
        #[arg(long, default_value = "14days")]
        interval: Interval,
    },
}

/// Run the CLI, returning an error message on failure.
pub fn run() -> Result<(), String> {
    let cli = Cli::parse();

    let config = Config::load(cli.api_key.as_deref(), cli.config.as_deref())?;
    let client = ApiClient::new(&config).map_err(|e| e.to_string())?;

    match cli.command {
        Command::Alerts {
            acknowledged_by,
            start_date,
            end_date,
        } => cmd_alerts(
            &client,
            AlertFilter {
                acknowledged_by,
                start_date,
                end_date,
            },
        ),
        Command::Schedules { expand_rotations } => cmd_schedules(&client, expand_rotations),
        Command::Rotations { schedule } => cmd_rotations(&client, &schedule),
        Command::Timeline {
            schedule,
            start_date,
            interval,
        } => cmd_timeline(&client, &schedule, start_date, interval),
    }
}

fn cmd_alerts(client: &ApiClient, filter: AlertFilter) -> Result<(), String> {
    let alerts = client
        .list_alerts(&filter)
        .map_err(|e| format!("failed to list alerts: {e}"))?;

    if alerts.is_empty() {
        println!("No alerts");
        return Ok(());
    }
    for alert in &alerts {
        println!("{}", format_alert(alert));
    }
    Ok(())
}

fn cmd_schedules(client: &ApiClient, expand_rotations: bool) -> Result<(), String> {
    let schedules = client
        .list_schedules(expand_rotations)
        .map_err(|e| format!("failed to list schedules: {e}"))?;

    if schedules.is_empty() {
        println!("No schedules");
        return Ok(());
    }
    for schedule in &schedules {
        println!("{}", format_schedule(schedule));
        for rotation in &schedule.rotations {
            println!("  {}", format_rotation(rotation));
        }
    }
    Ok(())
}

fn cmd_rotations(client: &ApiClient, schedule: &str) -> Result<(), String> {
    let rotations = client
        .list_rotations(schedule)
        .map_err(|e| format!("failed to list rotations for '{schedule}': {e}"))?;

    if rotations.is_empty() {
        println!("No rotations");
        return Ok(());
    }
    for rotation in &rotations {
        println!("{}", format_rotation(rotation));
    }
    Ok(())
}

fn cmd_timeline(
    client: &ApiClient,
    schedule: &str,
    start_date: Option<Date>,
    interval: Interval,
) -> Result<(), String> {
    let start_date = start_date.unwrap_or_else(|| Zoned::now().date());

    let timelines = client
        .schedule_timeline(schedule, start_date, interval)
        .map_err(|e| format!("failed to get timeline for '{schedule}': {e}"))?;

    if timelines.is_empty() {
        println!("No rotations in timeline");
        return Ok(());
    }
    for timeline in &timelines {
        println!("{}", format_rotation_header(&timeline.rotation));
        if timeline.periods.is_empty() {
            println!("  (no periods)");
        }
        for period in &timeline.periods {
            println!("  {}", format_period(period));
        }
    }
    Ok(())
}
