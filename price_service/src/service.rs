//! Price service facade.
//!
//! Owns the per-symbol last-price state and the two synthetic engines, and
//! routes every request through the fetch-then-fallback policy: consult the
//! external provider when asked, and degrade silently to synthetic data when
//! it has nothing. The facade is the only writer of the last-price map;
//! mutation is serialized behind mutexes so one instance can be shared
//! across threads without losing updates.

use std::collections::HashMap;
use std::sync::Mutex;

use log::{debug, warn};
use price_common::Result;
use price_common::model::ohlc::OhlcBar;
use price_common::model::quote::Quote;
use price_common::model::timeframe::{Interval, Period};
use rand::rngs::StdRng;

use crate::generator::QuoteGenerator;
use crate::history::HistorySynthesizer;
use crate::provider::MarketDataProvider;

/// Walk start price for history when a symbol has no recorded state yet.
const HISTORY_START_PRICE: f64 = 1.2;

/// Facade orchestrating the provider, the generator, and per-symbol state.
pub struct PriceService<P> {
    provider: P,
    last_prices: Mutex<HashMap<String, f64>>,
    generator: Mutex<QuoteGenerator<StdRng>>,
    synthesizer: Mutex<HistorySynthesizer<StdRng>>,
}

impl<P: MarketDataProvider> PriceService<P> {
    /// Build a facade over `provider` with empty price state.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            last_prices: Mutex::new(HashMap::new()),
            generator: Mutex::new(QuoteGenerator::new()),
            synthesizer: Mutex::new(HistorySynthesizer::new()),
        }
    }

    /// Current quote for `symbol`.
    ///
    /// With `use_external` set the provider is consulted first and a
    /// successful quote is returned as-is, leaving the symbol's walk state
    /// untouched. Otherwise (or whenever the provider reports no data) the
    /// generator produces a tick and advances the symbol's last price.
    pub fn get_price(
        &self,
        symbol: &str,
        use_external: bool,
        base_price: Option<f64>,
    ) -> Result<Quote> {
        if use_external {
            if let Some(quote) = self.provider.fetch_quote(symbol) {
                return Ok(quote);
            }
            warn!("no external quote for {}, falling back to synthetic data", symbol);
        }

        let mut last_prices = self.last_prices.lock()?;
        let last_price = last_prices.get(symbol).copied();
        let (quote, new_price) = self
            .generator
            .lock()?
            .generate(symbol, base_price, last_price);
        last_prices.insert(symbol.to_string(), new_price);
        Ok(quote)
    }

    /// Historical bars for `symbol` over `period` at `interval` spacing.
    ///
    /// Unrecognized period/interval strings fall back to the 1d/1m defaults.
    /// The provider is always tried first; on unavailability the series is
    /// synthesized, seeded from the symbol's last known price.
    pub fn get_history(&self, symbol: &str, period: &str, interval: &str) -> Result<Vec<OhlcBar>> {
        let period = Period::parse_or_default(period);
        let interval = Interval::parse_or_default(interval);

        if let Some(bars) = self.provider.fetch_history(symbol, period, interval) {
            return Ok(bars);
        }
        debug!("no external history for {}, synthesizing", symbol);

        let start_price = {
            let last_prices = self.last_prices.lock()?;
            last_prices.get(symbol).copied().unwrap_or(HISTORY_START_PRICE)
        };
        let series = self
            .synthesizer
            .lock()?
            .synthesize(symbol, period, interval, start_price);
        Ok(series)
    }
}
