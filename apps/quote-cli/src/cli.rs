//! Command-line arguments.

use std::path::PathBuf;

use boxoffice_core::{Money, PerformanceType, SessionSnapshot};
use clap::{Args, Parser, Subcommand};

/// Quote ticket prices for a performance session.
#[derive(Debug, Parser)]
#[command(name = "boxoffice-quote", version)]
pub struct Cli {
    /// Config file (defaults to ./boxoffice.toml when present)
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Price tickets for a session described by flags
    Price(TicketArgs),

    /// Price tickets and show the session after the seats are taken
    Reserve(TicketArgs),

    /// Price a JSON pricing request read from a file ("-" for stdin)
    File {
        #[arg(value_name = "PATH")]
        path: String,
    },
}

/// Session attributes plus how many tickets to price.
#[derive(Debug, Args)]
pub struct TicketArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Number of tickets
    #[arg(long, short, default_value_t = 1, allow_negative_numbers = true)]
    pub quantity: i64,
}

#[derive(Debug, Args)]
pub struct SessionArgs {
    /// cinema, show, ballet, orchestra or theater
    #[arg(long = "type", value_name = "TYPE")]
    pub performance_type: PerformanceType,

    /// Ticket price before surcharges, e.g. 10.00
    #[arg(long, value_name = "DECIMAL")]
    pub base_price: Money,

    #[arg(long, allow_negative_numbers = true)]
    pub total_seats: i64,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub reserved_seats: i64,

    /// Running time in minutes
    #[arg(long = "duration", value_name = "MINUTES", default_value_t = 0)]
    pub duration_minutes: u32,
}

impl SessionArgs {
    pub fn to_snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::new(
            self.performance_type,
            self.base_price,
            self.total_seats,
            self.duration_minutes,
        )
        .with_reserved_seats(self.reserved_seats)
    }
}
