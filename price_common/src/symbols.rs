//! Currency pair catalog shared by the generator and the provider adapter.
//!
//! Maps canonical pair names (e.g. `EUR/USD`) to the external provider's own
//! identifiers and to default base prices for synthetic generation. Lookups
//! are pure and infallible: an unknown symbol is a normal outcome, not an
//! error, and degrades to a base price of 1.0.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Fixed set of supported currency pairs.
///
/// The string form is the canonical pair name with a slash separator, parsed
/// case-insensitively via `FromStr`.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
#[strum(ascii_case_insensitive)]
pub enum Pair {
    #[strum(serialize = "EUR/USD")]
    EurUsd,
    #[strum(serialize = "GBP/USD")]
    GbpUsd,
    #[strum(serialize = "USD/JPY")]
    UsdJpy,
    #[strum(serialize = "AUD/USD")]
    AudUsd,
    #[strum(serialize = "USD/CHF")]
    UsdChf,
    #[strum(serialize = "EUR/GBP")]
    EurGbp,
    #[strum(serialize = "EUR/JPY")]
    EurJpy,
    #[strum(serialize = "GBP/JPY")]
    GbpJpy,
}

impl Pair {
    /// Identifier the external provider uses for this pair.
    pub fn provider_symbol(&self) -> &'static str {
        match self {
            Pair::EurUsd => "EURUSD=X",
            Pair::GbpUsd => "GBPUSD=X",
            Pair::UsdJpy => "USDJPY=X",
            Pair::AudUsd => "AUDUSD=X",
            Pair::UsdChf => "USDCHF=X",
            Pair::EurGbp => "EURGBP=X",
            Pair::EurJpy => "EURJPY=X",
            Pair::GbpJpy => "GBPJPY=X",
        }
    }

    /// Default base price around which synthetic quotes are generated.
    pub fn base_price(&self) -> f64 {
        match self {
            Pair::EurUsd => 1.2000,
            Pair::GbpUsd => 1.3000,
            Pair::UsdJpy => 110.00,
            Pair::AudUsd => 0.7500,
            Pair::UsdChf => 0.9200,
            Pair::EurGbp => 0.8500,
            Pair::EurJpy => 132.00,
            Pair::GbpJpy => 143.00,
        }
    }
}

/// Resolve a caller-supplied symbol string to a catalog pair, if known.
pub fn lookup(symbol: &str) -> Option<Pair> {
    symbol.parse().ok()
}

/// Default base price for a symbol; 1.0 when the symbol is not in the catalog.
pub fn default_base_price(symbol: &str) -> f64 {
    lookup(symbol).map(|pair| pair.base_price()).unwrap_or(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_pairs_resolve_to_provider_symbols() {
        assert_eq!(lookup("EUR/USD"), Some(Pair::EurUsd));
        assert_eq!(lookup("GBP/JPY").unwrap().provider_symbol(), "GBPJPY=X");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("eur/usd"), Some(Pair::EurUsd));
        assert_eq!(lookup("Usd/Jpy"), Some(Pair::UsdJpy));
    }

    #[test]
    fn unknown_symbols_are_absent_not_errors() {
        assert_eq!(lookup("BTC/USD"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn base_price_defaults_to_one_for_unknown_symbols() {
        assert_eq!(default_base_price("EUR/USD"), 1.2);
        assert_eq!(default_base_price("USD/JPY"), 110.0);
        assert_eq!(default_base_price("XXX/YYY"), 1.0);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        assert_eq!(Pair::EurGbp.to_string(), "EUR/GBP");
        assert_eq!("EUR/GBP".parse::<Pair>().unwrap(), Pair::EurGbp);
    }
}
