//! External market-data boundary.
//!
//! `MarketDataProvider` is the narrow seam between the facade and whatever
//! supplies real quotes. Implementations signal "no data" with `None`; any
//! transport or parse failure must be swallowed here and reported the same
//! way — provider errors never cross this boundary.
//!
//! `YahooFinance` is the production implementation, built on the public
//! chart API. Every request carries a client-level timeout so a slow
//! provider degrades into an `unavailable` outcome instead of stalling the
//! service.

use std::time::Duration;

use chrono::{DateTime, Utc};
use isahc::config::Configurable;
use isahc::prelude::*;
use isahc::HttpClient;
use log::debug;
use price_common::model::ohlc::OhlcBar;
use price_common::model::quote::{Quote, QuoteSource};
use price_common::model::timeframe::{Interval, Period};
use price_common::symbols;
use price_common::ServiceError;
use serde_json::Value;

/// Narrow collaborator interface to a third-party market-data source.
pub trait MarketDataProvider {
    /// Current quote for `symbol`, or `None` when the provider has no data.
    fn fetch_quote(&self, symbol: &str) -> Option<Quote>;

    /// Historical bars for `symbol`, or `None` when unavailable.
    fn fetch_history(
        &self,
        symbol: &str,
        period: Period,
        interval: Interval,
    ) -> Option<Vec<OhlcBar>>;
}

const CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Provider volumes are u64; saturate rather than truncate on overflow.
fn saturate_volume(volume: u64) -> u32 {
    u32::try_from(volume).unwrap_or(u32::MAX)
}

/// Yahoo Finance chart-API client.
pub struct YahooFinance {
    http: HttpClient,
}

impl YahooFinance {
    /// Build a client whose every request is bounded by `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, ServiceError> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::Http(e.to_string()))?;
        Ok(Self { http })
    }

    /// GET a chart payload; all failures collapse to `None`.
    fn get_chart(&self, provider_symbol: &str, range: &str, interval: &str) -> Option<Value> {
        let url = format!("{CHART_URL}/{provider_symbol}?range={range}&interval={interval}");
        let mut response = match self.http.get(url.as_str()) {
            Ok(response) => response,
            Err(e) => {
                debug!("chart request for {} failed: {}", provider_symbol, e);
                return None;
            }
        };
        if !response.status().is_success() {
            debug!(
                "chart request for {} returned {}",
                provider_symbol,
                response.status()
            );
            return None;
        }
        let body = response.text().ok()?;
        serde_json::from_str(&body).ok()
    }
}

impl MarketDataProvider for YahooFinance {
    fn fetch_quote(&self, symbol: &str) -> Option<Quote> {
        let pair = symbols::lookup(symbol)?;
        let body = self.get_chart(pair.provider_symbol(), "1d", "1m")?;
        parse_quote(symbol, &body)
    }

    fn fetch_history(
        &self,
        symbol: &str,
        period: Period,
        interval: Interval,
    ) -> Option<Vec<OhlcBar>> {
        let pair = symbols::lookup(symbol)?;
        // The catalog's period/interval strings coincide with the provider's
        // range/interval values.
        let body = self.get_chart(
            pair.provider_symbol(),
            &period.to_string(),
            &interval.to_string(),
        )?;
        parse_history(&body)
    }
}

/// Extract a normalized quote from a chart payload.
///
/// Price preference: the live market price, else quoted bid/ask, else the
/// most recent non-null close. Bid/ask default to the resolved price and
/// volume to 0 when the provider does not report them.
pub(crate) fn parse_quote(symbol: &str, body: &Value) -> Option<Quote> {
    let result = body.get("chart")?.get("result")?.get(0)?;
    let meta = result.get("meta")?;

    let last_close = result
        .pointer("/indicators/quote/0/close")
        .and_then(Value::as_array)
        .and_then(|closes| closes.iter().rev().find_map(Value::as_f64));

    let price = meta
        .get("regularMarketPrice")
        .and_then(Value::as_f64)
        .or_else(|| meta.get("bid").and_then(Value::as_f64))
        .or_else(|| meta.get("ask").and_then(Value::as_f64))
        .or(last_close)?;

    let bid = meta.get("bid").and_then(Value::as_f64).unwrap_or(price);
    let ask = meta.get("ask").and_then(Value::as_f64).unwrap_or(price);
    let volume = meta
        .get("regularMarketVolume")
        .and_then(Value::as_u64)
        .map_or(0, saturate_volume);

    Some(Quote {
        symbol: symbol.to_string(),
        price,
        bid,
        ask,
        volume,
        timestamp: Utc::now(),
        source: QuoteSource::External,
    })
}

/// Extract historical bars from a chart payload, oldest first.
///
/// Rows with null prices (halted minutes) are skipped; an empty result is
/// reported as unavailable.
pub(crate) fn parse_history(body: &Value) -> Option<Vec<OhlcBar>> {
    let result = body.get("chart")?.get("result")?.get(0)?;
    let timestamps = result.get("timestamp")?.as_array()?;
    let quote = result.pointer("/indicators/quote/0")?;
    let opens = quote.get("open")?.as_array()?;
    let highs = quote.get("high")?.as_array()?;
    let lows = quote.get("low")?.as_array()?;
    let closes = quote.get("close")?.as_array()?;
    let volumes = quote.get("volume")?.as_array()?;

    let mut bars = Vec::with_capacity(timestamps.len());
    for (i, ts) in timestamps.iter().enumerate() {
        let Some(seconds) = ts.as_i64() else {
            continue;
        };
        let (Some(open), Some(high), Some(low), Some(close)) = (
            opens.get(i).and_then(Value::as_f64),
            highs.get(i).and_then(Value::as_f64),
            lows.get(i).and_then(Value::as_f64),
            closes.get(i).and_then(Value::as_f64),
        ) else {
            continue;
        };
        let timestamp = DateTime::<Utc>::from_timestamp(seconds, 0)?;
        bars.push(OhlcBar {
            timestamp,
            open,
            high,
            low,
            close,
            volume: volumes.get(i).and_then(Value::as_u64).map_or(0, saturate_volume),
        });
    }
    if bars.is_empty() { None } else { Some(bars) }
}
