//! # Vega Surfaces
//!
//! Swaption volatility surface abstractions for the Vega analytics library.
//!
//! This crate provides:
//!
//! - **Surface Trait**: Core [`SwaptionVolSurface`] trait all surfaces implement
//! - **Handles**: Relinkable shared [`Handle`]s for live-linked surface composition
//! - **Surfaces**: A constant-volatility surface and a spread-adjusted wrapper
//!
//! ## Design Philosophy
//!
//! A volatility surface answers one question: what is the implied volatility
//! for a swaption with a given start date and underlying tenor? Everything
//! else — interpolation schemes, calibration, quote handling — lives in the
//! concrete implementations behind the trait.
//!
//! Surfaces represent live market data, so composition goes through
//! [`Handle`]s rather than value copies: a [`SpreadedSwaptionVolSurface`]
//! re-resolves its source on every query and therefore always reflects the
//! source's current state. Nothing is cached.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use vega_core::{Date, Spread, Volatility};
//! use vega_surfaces::prelude::*;
//!
//! let today = Date::from_ymd(2026, 1, 2).unwrap();
//! let base = FlatSwaptionVolSurface::new(today, Volatility::new(0.20));
//!
//! let handle: Handle<dyn SwaptionVolSurface> = Handle::new(Arc::new(base));
//! let spreaded = SpreadedSwaptionVolSurface::new(handle, Spread::from_bps(100.0));
//!
//! let start = today.add_years(1).unwrap();
//! let vol = spreaded.vol(start, 5.0).unwrap();
//! assert!((vol.value() - 0.21).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]

pub mod error;
pub mod handle;
pub mod surfaces;
pub mod traits;

pub use error::{SurfaceError, SurfaceResult};
pub use handle::Handle;
pub use surfaces::{FlatSwaptionVolSurface, SpreadedSwaptionVolSurface};
pub use traits::SwaptionVolSurface;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{SurfaceError, SurfaceResult};
    pub use crate::handle::Handle;
    pub use crate::surfaces::{FlatSwaptionVolSurface, SpreadedSwaptionVolSurface};
    pub use crate::traits::SwaptionVolSurface;
}
