//! # Vega Core
//!
//! Core types and abstractions for the Vega swaption volatility analytics library.
//!
//! This crate provides the foundational building blocks used throughout Vega:
//!
//! - **Types**: Domain-specific types like `Date`, `Volatility`, `Spread`
//! - **Errors**: Structured error handling with context
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing incompatible values
//! - **Explicit Over Implicit**: Clear, self-documenting APIs
//! - **No Panics**: Fallible constructors return `Result` rather than panicking
//!
//! ## Example
//!
//! ```rust
//! use vega_core::prelude::*;
//!
//! let start = Date::parse("2026-06-15").unwrap();
//! assert_eq!(start.add_months(6).unwrap().to_string(), "2026-12-15");
//!
//! // A 100 bps spread lifts a 20% vol to 21%
//! let vol = Volatility::new(0.20);
//! let spread = Spread::from_bps(100.0);
//! assert!(((vol + spread).value() - 0.21).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod error;
pub mod types;

pub use error::{VegaError, VegaResult};
pub use types::{Date, Spread, Volatility};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{VegaError, VegaResult};
    pub use crate::types::{Date, Spread, Volatility};
}
