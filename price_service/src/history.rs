//! Synthetic OHLC history.
//!
//! The synthesizer materializes a full series of bars ending at the current
//! time. Each bar opens at the previous bar's close and gets high/low/close
//! values drawn around the open at the symbol's pip scale. The walk is local
//! to one call: it starts from the caller-supplied price and is never written
//! back to the persistent last-price state.

use chrono::{Duration, Utc};
use price_common::model::ohlc::OhlcBar;
use price_common::model::timeframe::{Interval, Period, bar_count};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::generator::{pip_size, round5};

/// Per-call random walk producing ordered OHLC series.
pub struct HistorySynthesizer<R: Rng> {
    rng: R,
}

impl HistorySynthesizer<StdRng> {
    /// Synthesizer backed by OS entropy for production use.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for HistorySynthesizer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> HistorySynthesizer<R> {
    /// Build a synthesizer over a caller-supplied RNG.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Synthesize `bar_count(period, interval)` bars for `symbol`, oldest
    /// first, spaced `interval` apart and ending at the current time.
    ///
    /// `start_price` seeds the walk (the facade passes the symbol's last
    /// known price). Total function: always returns a full series.
    pub fn synthesize(
        &mut self,
        symbol: &str,
        period: Period,
        interval: Interval,
        start_price: f64,
    ) -> Vec<OhlcBar> {
        let bars = bar_count(period, interval);
        let step = i64::from(interval.minutes());
        let end_time = Utc::now();

        let volatility = pip_size(symbol);
        let mut current_price = start_price;
        let mut series = Vec::with_capacity(bars);

        for i in 0..bars {
            let offset = (bars - i - 1) as i64 * step;
            let timestamp = end_time - Duration::minutes(offset);

            let open = current_price;
            let high = open + self.rng.random_range(0.0..1.0) * volatility;
            let low = open - self.rng.random_range(0.0..1.0) * volatility;
            let close = low + self.rng.random_range(0.0..1.0) * (high - low);

            series.push(OhlcBar {
                timestamp,
                open: round5(open),
                high: round5(high),
                low: round5(low),
                close: round5(close),
                volume: self.rng.random_range(100..=1000),
            });
            // Chain the unrounded close into the next bar's open.
            current_price = close;
        }
        series
    }
}
