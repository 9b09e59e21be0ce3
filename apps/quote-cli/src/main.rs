//! # Box Office Quote
//!
//! Prices tickets for a session and prints the quote as JSON.
//!
//! ## Usage
//! ```bash
//! boxoffice-quote price --type orchestra --base-price 10.00 \
//!     --total-seats 10 --reserved-seats 9 --duration 90 --quantity 2
//!
//! boxoffice-quote reserve --type theater --base-price 10.00 --total-seats 5 -q 3
//!
//! echo '{"session": {...}, "quantity": 1}' | boxoffice-quote file -
//! ```
//!
//! ## Exit Codes
//! - `0` quote printed
//! - `1` I/O, JSON or configuration failure
//! - `2` request rejected (invalid argument, not enough seats)

use std::process::ExitCode;

use anyhow::Context;
use boxoffice_quote::commands::{self, EXIT_FAILURE};
use boxoffice_quote::logging::init_logging;
use boxoffice_quote::{Cli, QuoteConfig};
use clap::Parser;
use tracing::{error, info};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logging depends on config, so config errors go straight to stderr
    let config = match QuoteConfig::load(cli.config.as_deref()).context("failed to load configuration") {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    init_logging(&config);
    info!(
        log_format = ?config.log_format,
        currency_decimals = config.currency_decimals,
        "Configuration loaded"
    );

    match commands::execute(&cli.command, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %format!("{err:#}"), "Quote failed");
            eprintln!("error: {err:#}");
            ExitCode::from(commands::exit_code(&err))
        }
    }
}
