//! OHLC bar model for historical series.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ServiceError;

/// Open/high/low/close/volume summary of one time interval.
///
/// A history series is an ordered `Vec<OhlcBar>`, oldest bar first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OhlcBar {
    /// Bar start time in UTC, serialized as RFC 3339.
    pub timestamp: DateTime<Utc>,
    /// Opening price.
    pub open: f64,
    /// Highest price within the interval.
    pub high: f64,
    /// Lowest price within the interval.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Trading volume within the interval.
    pub volume: u32,
}

/// Encode a history series as pretty-printed JSON for CLI output.
pub fn series_to_json_pretty(bars: &[OhlcBar]) -> Result<String, ServiceError> {
    let json = serde_json::to_string_pretty(bars)?;
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_encodes_as_json_array() {
        let bars = vec![OhlcBar {
            timestamp: Utc::now(),
            open: 1.2,
            high: 1.2001,
            low: 1.1999,
            close: 1.2,
            volume: 300,
        }];
        let json = series_to_json_pretty(&bars).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["volume"], 300);
    }
}
