//! Command handlers.
//!
//! Each handler turns parsed input into a JSON document for stdout. Pricing
//! itself is delegated to [`PricingEngine`].

use std::fs;
use std::io::Read;

use anyhow::Context;
use boxoffice_core::{
    CoreError, PriceQuote, PricingEngine, PricingRequest, ReservationQuote, SessionSnapshot,
};
use tracing::{debug, info, instrument};

use crate::cli::{Command, TicketArgs};
use crate::config::QuoteConfig;

/// Exit code for requests the engine rejected.
pub const EXIT_REJECTED: u8 = 2;

/// Exit code for everything else that went wrong.
pub const EXIT_FAILURE: u8 = 1;

/// Runs `command` and returns the pretty-printed JSON result.
pub fn execute(command: &Command, config: &QuoteConfig) -> anyhow::Result<String> {
    let engine = PricingEngine::new();

    match command {
        Command::Price(args) => {
            let request = ticket_request(args);
            let quote = price(&engine, &request, config)?;
            Ok(serde_json::to_string_pretty(&quote)?)
        }
        Command::Reserve(args) => {
            let session = args.session.to_snapshot();
            let reservation = reserve(&engine, &session, args.quantity, config)?;
            Ok(serde_json::to_string_pretty(&reservation)?)
        }
        Command::File { path } => {
            let raw = read_input(path)?;
            let request: PricingRequest = serde_json::from_str(&raw)
                .with_context(|| format!("{path} is not a valid pricing request"))?;
            let quote = price(&engine, &request, config)?;
            Ok(serde_json::to_string_pretty(&quote)?)
        }
    }
}

/// Maps a failure to the process exit code.
///
/// Rejections from the engine (bad arguments, not enough seats) are told
/// apart from I/O and config trouble so scripts can branch on them.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    let rejected = err
        .chain()
        .any(|cause| cause.downcast_ref::<CoreError>().is_some());

    if rejected {
        EXIT_REJECTED
    } else {
        EXIT_FAILURE
    }
}

fn ticket_request(args: &TicketArgs) -> PricingRequest {
    PricingRequest::new(args.session.to_snapshot(), args.quantity)
}

#[instrument(skip_all, fields(performance_type = %request.session.performance_type, quantity = request.quantity))]
fn price(
    engine: &PricingEngine,
    request: &PricingRequest,
    config: &QuoteConfig,
) -> anyhow::Result<PriceQuote> {
    let quote = engine
        .quote(request)
        .context("pricing request rejected")?;
    let quote = rescale(quote, config);

    for surcharge in &quote.surcharges {
        debug!(reason = ?surcharge.reason, rate = %surcharge.rate, amount = %surcharge.amount, "surcharge applied");
    }
    info!(unit_price = %quote.unit_price, total_price = %quote.total_price, "quote computed");

    Ok(quote)
}

#[instrument(skip_all, fields(performance_type = %session.performance_type, quantity = quantity))]
fn reserve(
    engine: &PricingEngine,
    session: &SessionSnapshot,
    quantity: i64,
    config: &QuoteConfig,
) -> anyhow::Result<ReservationQuote> {
    let mut reservation = engine
        .quote_reservation(session, quantity)
        .context("reservation rejected")?;
    reservation.quote = rescale(reservation.quote, config);

    info!(
        total_price = %reservation.quote.total_price,
        seats_left = reservation.session_after.available_seats(),
        "reservation quoted"
    );

    Ok(reservation)
}

/// Pads prices to the configured number of currency decimals.
fn rescale(mut quote: PriceQuote, config: &QuoteConfig) -> PriceQuote {
    quote.unit_price = quote.unit_price.to_minor_scale(config.currency_decimals);
    quote.total_price = quote.total_price.to_minor_scale(config.currency_decimals);
    for surcharge in &mut quote.surcharges {
        surcharge.amount = surcharge.amount.to_minor_scale(config.currency_decimals);
    }
    quote
}

fn read_input(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("failed to read pricing request from stdin")?;
        Ok(raw)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
    }
}
