use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use clap::{Parser, Subcommand};

use crate::alfred::{filter_response, toggle_response};
use crate::parser::{parse, ClockTime};
use crate::session::{inspect, ProcessQuery};
use crate::settings::Settings;

#[derive(Parser, Debug)]
#[command(name = "caffeine-dose")]
#[command(about = "Keep your Mac awake for a while, straight from Alfred")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Query words for `filter` when no subcommand is given
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub query: Vec<String>,
}

impl Cli {
    /// A bare query (or nothing at all) is shorthand for `filter`.
    pub fn into_command(self) -> Commands {
        self.command
            .unwrap_or(Commands::Filter { query: self.query })
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Parse a time expression and print the script filter result
    Filter {
        /// e.g. `45`, `1 30`, `2h`, `7:30pm`, `9:`, `s`, `i`, `d`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,
    },
    /// Print the single on/off toggle item
    Toggle,
    /// Print the current caffeinate session as JSON
    Status,
}

/// Runs one command against an already-resolved environment and returns what
/// should be printed.
pub fn execute<Q>(
    command: &Commands,
    settings: &Settings,
    query: &Q,
    now: DateTime<Local>,
) -> Result<String>
where
    Q: ProcessQuery + ?Sized,
{
    let session = || inspect(query, &settings.process_name, now);
    match command {
        Commands::Filter { query: words } => {
            let raw = words.join(" ");
            let instruction = parse(&raw, ClockTime::of(&now));
            log::debug!("[cli] {:?} -> {:?}", raw, instruction);
            filter_response(&instruction, session, now, settings.time_format).to_json()
        }
        Commands::Toggle => toggle_response(&session()).to_json(),
        Commands::Status => {
            serde_json::to_string(&session()).context("Failed to serialize session status")
        }
    }
}
