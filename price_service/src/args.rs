//! Command-line arguments for the price service.
//!
//! This module defines the CLI interface using `clap`. Optional flags are
//! schema-validated named parameters; a missing symbol or an unknown command
//! is a usage error with a non-zero exit, reported by clap before any data
//! is emitted.
use clap::{Parser, Subcommand};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "price_service", version, about, long_about = None)]
pub struct Args {
    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Emit one quote for a currency pair as formatted JSON.
    Price {
        /// Pair name, e.g. "EUR/USD". Unknown pairs fall back to a 1.0 base price.
        symbol: String,

        /// Prefer a live quote from the external provider.
        #[clap(long)]
        real: bool,

        /// Override the catalog base price for synthetic generation.
        #[clap(long)]
        base_price: Option<f64>,
    },
    /// Emit historical OHLC bars as a formatted JSON array.
    Historical {
        /// Pair name, e.g. "EUR/USD".
        symbol: String,

        /// History window: 1d, 5d or 1mo. Unknown values fall back to 1d.
        #[clap(long, default_value = "1d")]
        period: String,

        /// Bar spacing: 1m, 5m, 15m or 1h. Unknown values fall back to 1m.
        #[clap(long, default_value = "1m")]
        interval: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_command_parses_flags() {
        let args = Args::try_parse_from([
            "price_service",
            "price",
            "EUR/USD",
            "--real",
            "--base-price",
            "1.25",
        ])
        .unwrap();
        match args.command {
            Command::Price { symbol, real, base_price } => {
                assert_eq!(symbol, "EUR/USD");
                assert!(real);
                assert_eq!(base_price, Some(1.25));
            }
            _ => panic!("expected price command"),
        }
    }

    #[test]
    fn historical_command_defaults_period_and_interval() {
        let args = Args::try_parse_from(["price_service", "historical", "USD/JPY"]).unwrap();
        match args.command {
            Command::Historical { symbol, period, interval } => {
                assert_eq!(symbol, "USD/JPY");
                assert_eq!(period, "1d");
                assert_eq!(interval, "1m");
            }
            _ => panic!("expected historical command"),
        }
    }

    #[test]
    fn missing_symbol_is_a_usage_error() {
        assert!(Args::try_parse_from(["price_service", "price"]).is_err());
    }

    #[test]
    fn unknown_command_is_a_usage_error() {
        assert!(Args::try_parse_from(["price_service", "frobnicate", "EUR/USD"]).is_err());
    }

    #[test]
    fn non_numeric_base_price_is_rejected() {
        let result = Args::try_parse_from([
            "price_service",
            "price",
            "EUR/USD",
            "--base-price",
            "abc",
        ]);
        assert!(result.is_err());
    }
}
