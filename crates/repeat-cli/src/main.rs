//! `repeat` CLI — expand recurring events and query recurrence rules from the
//! command line.
//!
//! ## Usage
//!
//! ```sh
//! # Expand an event (stdin → stdout) into a create-many request body
//! repeat expand < event.json
//!
//! # One date per line, with an explicit horizon for rules without an end date
//! repeat expand -i event.json --dates-only --horizon 2026-06-30
//!
//! # Is a date an occurrence of the event?
//! repeat check -i event.json --date 2025-09-01
//!
//! # What should be stored: the single event, or a batch of occurrences?
//! repeat plan -i event.json
//!
//! # Render the rule as RFC 5545 text
//! repeat rrule -i event.json
//!
//! # Calendar helpers
//! repeat leap-year 2024
//! repeat month-length 2023 2
//!
//! # Settings file (TOML): max_horizon = "2026-12-31", log_level = "debug"
//! repeat --config repeat.toml expand -i event.json
//! ```
//!
//! Logs go to stderr; stdout carries only the command's result.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use repeat_engine::calendar::{format_date, parse_date};
use repeat_engine::rrule_text::to_rrule;
use repeat_engine::{
    create_repeating_events, should_create_event_for_date, AnchorEvent, EngineConfig,
    OccurrenceBatch, SavePlan,
};
use serde::Deserialize;
use std::io::{self, Read};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "repeat",
    version,
    about = "Expand recurring calendar events into concrete occurrences"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML settings file (max_horizon, log_level)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Last date (YYYY-MM-DD) for rules without an end date; overrides the settings file
    #[arg(long, global = true)]
    horizon: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand an event into its occurrences
    Expand {
        /// Input event JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Print one YYYY-MM-DD date per line instead of JSON
        #[arg(long)]
        dates_only: bool,
    },
    /// Check whether a date is an occurrence of an event
    Check {
        /// Candidate date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Input event JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Show how an event would be stored: as a single event or as a batch
    Plan {
        /// Input event JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Render the event's rule as an RFC 5545 RRULE
    Rrule {
        /// Input event JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Report whether a year is a leap year
    LeapYear { year: i32 },
    /// Report the number of days in a month
    MonthLength { year: i32, month: u32 },
}

/// Settings-file keys that only the CLI reads. `max_horizon` is read by
/// [`EngineConfig`] from the same file.
#[derive(Debug, Default, Deserialize)]
struct CliSettings {
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings_text = match cli.config.as_deref() {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?,
        ),
        None => None,
    };

    let cli_settings: CliSettings = match settings_text.as_deref() {
        Some(text) => toml::from_str(text).context("Failed to parse config file")?,
        None => CliSettings::default(),
    };
    init_logging(cli_settings.log_level.as_deref())?;

    let config = build_engine_config(settings_text.as_deref(), cli.horizon.as_deref())?;
    debug!(max_horizon = %config.max_horizon, "engine configured");

    match cli.command {
        Commands::Expand {
            input,
            output,
            dates_only,
        } => {
            let event = read_event(input.as_deref())?;
            let occurrences = create_repeating_events(&event, &config)
                .context("Failed to expand repeating event")?;
            info!(count = occurrences.len(), "expanded event");

            let rendered = if dates_only {
                occurrences
                    .iter()
                    .map(|o| format!("{}\n", format_date(o.date)))
                    .collect::<String>()
            } else {
                let batch = OccurrenceBatch::from(occurrences);
                format!("{}\n", serde_json::to_string_pretty(&batch)?)
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Check { date, input } => {
            let event = read_event(input.as_deref())?;
            let candidate = parse_date(&date).context("Invalid --date")?;
            println!(
                "{}",
                should_create_event_for_date(&event, candidate, &config)
            );
        }
        Commands::Plan { input, output } => {
            let event = read_event(input.as_deref())?;
            let plan = SavePlan::for_event(&event, &config).context("Failed to plan save")?;
            write_output(
                output.as_deref(),
                &format!("{}\n", serde_json::to_string_pretty(&plan)?),
            )?;
        }
        Commands::Rrule { input } => {
            let event = read_event(input.as_deref())?;
            event.repeat().validate()?;
            let rrule = to_rrule(&event, &config)
                .context("Event does not repeat; there is no RRULE to render")?;
            println!("{}", rrule);
        }
        Commands::LeapYear { year } => {
            println!("{}", repeat_engine::is_leap_year(year));
        }
        Commands::MonthLength { year, month } => {
            println!("{}", repeat_engine::last_day_of_month(year, month)?);
        }
    }

    Ok(())
}

/// Install the stderr subscriber. An explicit level from the settings file
/// wins over `RUST_LOG`; with neither, only warnings are shown.
fn init_logging(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(level) => {
            EnvFilter::try_new(level).with_context(|| format!("Invalid log_level: {}", level))?
        }
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

/// Resolve the engine configuration: `--horizon`, then the settings file,
/// then the built-in default.
fn build_engine_config(settings: Option<&str>, horizon: Option<&str>) -> Result<EngineConfig> {
    let mut config = match settings {
        Some(text) => EngineConfig::from_toml_str(text)?,
        None => EngineConfig::default(),
    };
    if let Some(raw) = horizon {
        config = config.with_max_horizon(parse_date(raw).context("Invalid --horizon")?);
    }
    Ok(config)
}

fn read_event(path: Option<&str>) -> Result<AnchorEvent> {
    let json = read_input(path)?;
    AnchorEvent::from_json(&json).context("Failed to parse event JSON")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
