//! Startup report
//!
//! Composes the config, greeting, user and arithmetic helpers into the
//! report the binary prints. Rendering writes to any `io::Write` so the
//! output can be checked without spawning the process.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

use crate::clock::Clock;
use crate::config::Config;
use crate::logging;
use crate::models::User;
use crate::utils::{average, format_numbers, greet, sum};

pub const GREETING_NAME: &str = "Developer";
pub const DEMO_USER_NAME: &str = "Alice";
pub const DEMO_USER_EMAIL: &str = "alice@example.com";
pub const DEMO_NUMBERS: [i64; 5] = [1, 2, 3, 4, 5];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Everything the demo computes, in print order
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub config: Config,
    pub greeting: String,
    pub user: User,
    pub numbers: Vec<i64>,
    pub sum: i64,
    pub average: f64,
}

impl Report {
    pub fn build(config: Config, clock: &dyn Clock) -> Self {
        let greeting = greet(GREETING_NAME);
        let user = User::with_clock(DEMO_USER_NAME, DEMO_USER_EMAIL, clock);
        let numbers = DEMO_NUMBERS.to_vec();

        Self {
            greeting,
            user,
            sum: sum(&numbers),
            average: average(&numbers),
            numbers,
            config,
        }
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<()> {
        let banner = format!("Welcome to {}!", self.config.app_name);
        writeln!(out, "{}", banner.bold())?;
        writeln!(
            out,
            "Application: {} v{}",
            self.config.app_name, self.config.version
        )?;
        writeln!(out, "{}", self.greeting)?;
        writeln!(
            out,
            "User created: {} ({})",
            self.user.name, self.user.email
        )?;
        writeln!(
            out,
            "Sum of {} = {}",
            format_numbers(&self.numbers),
            self.sum
        )?;
        Ok(())
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize report")?;
        writeln!(out, "{json}")?;
        Ok(())
    }
}

/// Builds the report, writes it in the requested format and logs startup
pub fn run<W: Write>(
    config: Config,
    clock: &dyn Clock,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    logging::log_config_loaded(&config);

    let report = Report::build(config, clock);
    logging::log_user_created(&report.user);

    let written = match format {
        OutputFormat::Text => report.write_text(out),
        OutputFormat::Json => report.write_json(out),
    };
    written.context("Failed to write report")?;

    out.flush().context("Failed to flush output")?;
    logging::log_startup_complete(&report.config);

    Ok(())
}
