mod alfred;
mod cli;
pub mod parser;
pub mod session;
mod settings;
pub mod timefmt;
mod utils;

use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;

use cli::{execute, Cli};
use session::SystemProcessQuery;

pub use settings::Settings;

pub fn run() -> Result<()> {
    // stdout belongs to Alfred; logs go to stderr (reads RUST_LOG)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let command = Cli::parse().into_command();
    let settings = Settings::from_env();
    let now = Local::now();
    log::debug!("caffeine-dose {:?} at {} with {:?}", command, now, settings);

    let output = execute(&command, &settings, &SystemProcessQuery::new(), now)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}").context("Failed to write response to stdout")?;
    Ok(())
}
