//! Core trait for swaption volatility surfaces.
//!
//! This module defines the primary [`SwaptionVolSurface`] trait that all
//! volatility surface implementations must satisfy. The trait provides the
//! single query every caller depends on; concrete surfaces decide how the
//! volatility is obtained (constant value, interpolated quote grid, spread
//! over another surface, ...).

use vega_core::{Date, Volatility};

use crate::error::SurfaceResult;

/// The core trait for swaption volatility surfaces.
///
/// A swaption volatility surface maps a (start date, tenor length) pair to
/// the implied volatility for a swaption starting on that date whose
/// underlying swap runs for that length. All surface types in the library
/// implement this trait, enabling generic pricing code that never depends
/// on a concrete surface type.
///
/// # Contract
///
/// - Querying must not mutate the surface's own state. The result is
///   deterministic given the current state of the market data the surface
///   represents; it may differ across calls made at different real times if
///   the surface is linked to mutable data.
/// - Range validation (minimum start date, maximum tenor, ...) belongs to
///   each concrete implementation. The trait imposes none.
/// - Implementations must be `Send + Sync` so surfaces can be shared across
///   pricing threads. Concurrent `vol` calls on the same surface are safe
///   to interleave; surfaces whose underlying data mutates must make those
///   mutations safe against concurrent reads themselves.
///
/// # Example
///
/// ```rust
/// use vega_core::Date;
/// use vega_surfaces::{SurfaceResult, SwaptionVolSurface};
///
/// fn black_input<S: SwaptionVolSurface>(
///     surface: &S,
///     start: Date,
///     length: f64,
/// ) -> SurfaceResult<f64> {
///     let vol = surface.vol(start, length)?;
///     Ok(vol.value() * vol.value() * length)
/// }
/// ```
pub trait SwaptionVolSurface: Send + Sync {
    /// Returns the implied volatility for a given start date and length.
    ///
    /// # Arguments
    ///
    /// * `start` - Calendar date on which the swaption starts
    /// * `length` - Tenor of the underlying swap, in years
    ///
    /// # Errors
    ///
    /// Returns whatever error the concrete surface defines for inputs
    /// outside its supported range.
    fn vol(&self, start: Date, length: f64) -> SurfaceResult<Volatility>;
}
