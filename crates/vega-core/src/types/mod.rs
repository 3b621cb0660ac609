//! Domain types for swaption volatility analytics.
//!
//! This module provides type-safe representations of the concepts the
//! volatility surfaces work with:
//!
//! - [`Date`]: Calendar date for financial calculations
//! - [`Volatility`]: Implied volatility value
//! - [`Spread`]: Additive volatility spread

mod date;
mod spread;
mod volatility;

pub use date::Date;
pub use spread::Spread;
pub use volatility::Volatility;
