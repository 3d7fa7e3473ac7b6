mod commands;
mod date_input;
mod logging;
mod render;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use huddle_core::config::HuddleConfig;
use huddle_core::month::YearMonth;

#[derive(Parser)]
#[command(name = "huddle")]
#[command(about = "Plan group events: month calendar, day agenda and RSVPs")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the calendar, create events and RSVP (default)
    Session,
    /// Print a month grid with event counts
    Month {
        /// Month to show (YYYY-MM), defaults to the current month
        month: Option<String>,
    },
    /// Print the events of one day
    Day {
        /// Day to show (YYYY-MM-DD), defaults to today
        date: Option<String>,
    },
    /// Show where configuration lives and what is in effect
    Config,
}

fn main() -> Result<()> {
    logging::init_logger();
    let cli = Cli::parse();
    let config = HuddleConfig::load()?;

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => commands::session::run(commands::build_planner(&config)?),
        Commands::Month { month } => {
            let month = month.map(|m| m.parse::<YearMonth>()).transpose()?;
            commands::month::run(commands::build_planner(&config)?, month)
        }
        Commands::Day { date } => {
            let date = date.as_deref().map(parse_day).transpose()?;
            commands::day::run(commands::build_planner(&config)?, date)
        }
        Commands::Config => commands::config::run(&config),
    }
}

fn parse_day(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
}
