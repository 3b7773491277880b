//! Value types shared by the quote generator, history synthesizer, and the
//! provider adapter:
//! - `quote` — market `Quote` type and JSON encoding helpers.
//! - `ohlc` — OHLC bar type forming historical series.
//! - `timeframe` — history window and bar spacing with lenient parsing.

pub mod ohlc;
pub mod quote;
pub mod timeframe;
