//! Price service — synthetic and externally sourced FX quotes over a small
//! command interface.
//!
//! The binary wires together four building blocks:
//!
//! - `QuoteGenerator` — mean-reverting random walk producing one synthetic
//!   tick per call.
//! - `HistorySynthesizer` — per-call chained walk producing ordered OHLC
//!   series.
//! - `YahooFinance` — the external provider adapter behind the
//!   `MarketDataProvider` seam; any failure there degrades silently into
//!   synthetic data.
//! - `PriceService` — the facade owning per-symbol last-price state and the
//!   fetch-then-fallback policy.
//!
//! Usage examples (CLI):
//! ```bash
//! price_service price EUR/USD --base-price 1.25
//! price_service price USD/JPY --real
//! price_service historical GBP/USD --period 5d --interval 15m
//! ```
//!
//! Output is pretty-printed JSON on stdout; diagnostics go to the logger
//! (stderr), controlled via `RUST_LOG`.
#![warn(missing_docs)]
use std::time::Duration;

use clap::Parser;
use log::info;
use price_common::ServiceError;
use price_common::model::ohlc;

use crate::args::{Args, Command};
use crate::provider::YahooFinance;
use crate::service::PriceService;

mod args;
mod generator;
mod history;
mod provider;
mod service;

/// Upper bound on any single external-provider request.
const PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

fn main() -> Result<(), ServiceError> {
    init_logger();
    let args = Args::parse();

    let provider = YahooFinance::new(PROVIDER_TIMEOUT)?;
    let service = PriceService::new(provider);

    match args.command {
        Command::Price { symbol, real, base_price } => {
            info!("quote requested for {} (external: {})", symbol, real);
            let quote = service.get_price(&symbol, real, base_price)?;
            println!("{}", quote.to_json_pretty()?);
        }
        Command::Historical { symbol, period, interval } => {
            info!("history requested for {} ({} / {})", symbol, period, interval);
            let series = service.get_history(&symbol, &period, &interval)?;
            println!("{}", ohlc::series_to_json_pretty(&series)?);
        }
    }
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
