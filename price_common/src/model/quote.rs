//! Quote data model and JSON encoding helpers.
//!
//! A `Quote` is the payload emitted for the `price` command. It carries the
//! pair symbol, the mid price, bid/ask, a volume figure, an ISO-8601 UTC
//! timestamp, and the source that produced it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::ServiceError;

/// Origin of a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum QuoteSource {
    /// Synthesized by the random-walk generator.
    Dummy,
    /// Fetched from the external market-data provider.
    External,
}

/// Market quote for a single currency pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Pair symbol as supplied by the caller (e.g. `EUR/USD`).
    pub symbol: String,
    /// Last price, rounded to 5 decimal places for synthetic quotes.
    pub price: f64,
    /// Bid price.
    pub bid: f64,
    /// Ask price.
    pub ask: f64,
    /// Volume associated with this tick.
    pub volume: u32,
    /// UTC wall-clock time the quote was produced, serialized as RFC 3339.
    pub timestamp: DateTime<Utc>,
    /// Where the quote came from.
    pub source: QuoteSource,
}

impl Quote {
    /// Encode the quote as pretty-printed JSON for CLI output.
    pub fn to_json_pretty(&self) -> Result<String, ServiceError> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Quote {
        Quote {
            symbol: "EUR/USD".to_string(),
            price: 1.2001,
            bid: 1.20005,
            ask: 1.20015,
            volume: 500,
            timestamp: Utc::now(),
            source: QuoteSource::Dummy,
        }
    }

    #[test]
    fn source_serializes_as_lowercase_string() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["source"], "dummy");

        let mut external = sample();
        external.source = QuoteSource::External;
        let json = serde_json::to_value(external).unwrap();
        assert_eq!(json["source"], "external");
    }

    #[test]
    fn json_carries_all_documented_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        for field in ["symbol", "price", "bid", "ask", "volume", "timestamp", "source"] {
            assert!(json.get(field).is_some(), "missing field {}", field);
        }
    }

    #[test]
    fn timestamp_is_iso8601() {
        let json = serde_json::to_value(sample()).unwrap();
        let ts = json["timestamp"].as_str().unwrap();
        assert!(ts.parse::<DateTime<Utc>>().is_ok(), "not ISO-8601: {}", ts);
    }
}
