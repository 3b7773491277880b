//!
//! Common types shared by the price service components.
//!
//! This crate aggregates:
//! - `error` — unified error type `ServiceError` used across the workspace.
//! - `result` — handy `Result<T, ServiceError>` alias.
//! - `symbols` — currency pair catalog: provider identifiers and base prices.
//! - `model` — quote, OHLC bar, and timeframe value types.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod symbols;
pub mod model;

pub use error::ServiceError;
pub use result::Result;
