//! Synthetic quote generation.
//!
//! The generator produces one tick per call using a mean-reverting random
//! walk around a per-symbol base price: a small drift pulls the price back
//! toward the base, a uniform perturbation of one pip adds noise, and the
//! result is clamped to a ±5% band around the base. The bid/ask spread is a
//! random 1–3 pip band split evenly around the new price.
//!
//! The generator owns its RNG so tests can inject a seeded `StdRng` and
//! assert exact output streams. It holds no per-symbol state; the facade
//! passes the last walk price in and stores the returned one.

use chrono::Utc;
use price_common::model::quote::{Quote, QuoteSource};
use price_common::symbols;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Pip size for a symbol.
///
/// Classification is a plain substring match on `JPY`: any symbol containing
/// it anywhere is treated as a two-decimal instrument. This is a deliberate
/// simplification and would misclassify a hypothetical non-JPY-quoted symbol
/// containing the same letters.
pub(crate) fn pip_size(symbol: &str) -> f64 {
    if symbol.contains("JPY") { 0.01 } else { 0.0001 }
}

/// Round to the 5 decimal places used for emitted prices.
pub(crate) fn round5(value: f64) -> f64 {
    (value * 100_000.0).round() / 100_000.0
}

/// Mean-reverting random-walk engine producing synthetic quotes.
pub struct QuoteGenerator<R: Rng> {
    rng: R,
}

impl QuoteGenerator<StdRng> {
    /// Generator backed by OS entropy for production use.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for QuoteGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> QuoteGenerator<R> {
    /// Build a generator over a caller-supplied RNG.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Produce the next synthetic tick for `symbol`.
    ///
    /// `base_price` overrides the catalog default (1.0 for unknown symbols).
    /// `last_price` is the walk state held by the caller, absent on the first
    /// request for a symbol. Returns the quote together with the unrounded
    /// new walk price the caller must store so the next call continues from
    /// it. Total function: there is no failure path.
    pub fn generate(
        &mut self,
        symbol: &str,
        base_price: Option<f64>,
        last_price: Option<f64>,
    ) -> (Quote, f64) {
        let base_price = base_price.unwrap_or_else(|| symbols::default_base_price(symbol));
        let last_price = last_price.unwrap_or(base_price);

        let pip = pip_size(symbol);
        let volatility = pip;

        // Drift pulls the walk back toward the base price.
        let trend = (base_price - last_price) * 0.001;
        let change = self.rng.random_range(-volatility..volatility);

        // Order-insensitive bounds: a negative base price flips which of
        // the two products is the floor, and f64::clamp panics on min > max.
        let lo = f64::min(base_price * 0.95, base_price * 1.05);
        let hi = f64::max(base_price * 0.95, base_price * 1.05);
        let new_price = (last_price + trend + change).clamp(lo, hi);

        let spread = pip * f64::from(self.rng.random_range(1u32..=3));
        let quote = Quote {
            symbol: symbol.to_string(),
            price: round5(new_price),
            bid: round5(new_price - spread / 2.0),
            ask: round5(new_price + spread / 2.0),
            volume: self.rng.random_range(100..=1000),
            timestamp: Utc::now(),
            source: QuoteSource::Dummy,
        };
        (quote, new_price)
    }
}
