//! Concrete volatility surface implementations.
//!
//! - [`FlatSwaptionVolSurface`]: Constant volatility for every query
//! - [`SpreadedSwaptionVolSurface`]: Live-linked additive spread over
//!   another surface

mod flat;
mod spreaded;

pub use flat::FlatSwaptionVolSurface;
pub use spreaded::SpreadedSwaptionVolSurface;
