//! Spread-adjusted volatility surface.

use std::fmt;

use vega_core::{Date, Spread, Volatility};

use crate::error::SurfaceResult;
use crate::handle::Handle;
use crate::traits::SwaptionVolSurface;

/// A surface that adds a constant spread to another surface.
///
/// The wrapper stays linked to its source: every query re-resolves the
/// [`Handle`] and delegates, so any change in the source — a relink of the
/// handle, or a market-data update inside the source surface itself — is
/// reflected immediately. Nothing is memoized.
///
/// The wrapper adds no logic beyond the additive transform. Validation and
/// failure behavior are inherited entirely from whatever surface is
/// wrapped; delegate errors propagate unchanged.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use vega_core::{Date, Spread, Volatility};
/// use vega_surfaces::prelude::*;
///
/// let today = Date::from_ymd(2026, 1, 2).unwrap();
/// let base = FlatSwaptionVolSurface::new(today, Volatility::new(0.20));
/// let handle: Handle<dyn SwaptionVolSurface> = Handle::new(Arc::new(base));
///
/// let spreaded = SpreadedSwaptionVolSurface::new(handle.clone(), Spread::new(0.01));
/// let vol = spreaded.vol(today, 5.0).unwrap();
/// assert!((vol.value() - 0.21).abs() < 1e-12);
///
/// // Relinking the handle shifts the spreaded view with it
/// handle.relink(Arc::new(FlatSwaptionVolSurface::new(today, Volatility::new(0.25))));
/// let vol = spreaded.vol(today, 5.0).unwrap();
/// assert!((vol.value() - 0.26).abs() < 1e-12);
/// ```
#[derive(Clone)]
pub struct SpreadedSwaptionVolSurface {
    /// Source surface the spread is applied over.
    source: Handle<dyn SwaptionVolSurface>,
    /// Additive spread, fixed at construction.
    spread: Spread,
}

impl SpreadedSwaptionVolSurface {
    /// Creates a spread-adjusted view over the given source surface.
    ///
    /// Both the handle and the spread are fixed for the lifetime of the
    /// wrapper. The source itself remains free to change behind the handle.
    #[must_use]
    pub fn new(source: Handle<dyn SwaptionVolSurface>, spread: Spread) -> Self {
        Self { source, spread }
    }

    /// Returns the spread applied to the source surface.
    #[must_use]
    pub fn spread(&self) -> Spread {
        self.spread
    }

    /// Returns the handle to the source surface.
    #[must_use]
    pub fn source(&self) -> &Handle<dyn SwaptionVolSurface> {
        &self.source
    }
}

impl fmt::Debug for SpreadedSwaptionVolSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpreadedSwaptionVolSurface")
            .field("spread", &self.spread)
            .finish_non_exhaustive()
    }
}

impl SwaptionVolSurface for SpreadedSwaptionVolSurface {
    /// Returns the source surface's volatility plus the spread.
    fn vol(&self, start: Date, length: f64) -> SurfaceResult<Volatility> {
        let base = self.source.linked_to().vol(start, length)?;
        Ok(base + self.spread)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surfaces::FlatSwaptionVolSurface;
    use approx::assert_relative_eq;
    use std::sync::Arc;

    fn reference_date() -> Date {
        Date::from_ymd(2026, 1, 2).unwrap()
    }

    fn flat_handle(vol: f64) -> Handle<dyn SwaptionVolSurface> {
        Handle::new(Arc::new(FlatSwaptionVolSurface::new(
            reference_date(),
            Volatility::new(vol),
        )))
    }

    #[test]
    fn test_adds_spread_to_source_vol() {
        let spreaded = SpreadedSwaptionVolSurface::new(flat_handle(0.20), Spread::new(0.01));

        let vol = spreaded.vol(reference_date(), 5.0).unwrap();
        assert_relative_eq!(vol.value(), 0.21, epsilon = 1e-15);
    }

    #[test]
    fn test_negative_spread() {
        let spreaded = SpreadedSwaptionVolSurface::new(flat_handle(0.20), Spread::from_bps(-50.0));

        let vol = spreaded.vol(reference_date(), 2.0).unwrap();
        assert_relative_eq!(vol.value(), 0.195, epsilon = 1e-15);
    }

    #[test]
    fn test_zero_spread_is_identity() {
        let handle = flat_handle(0.1775);
        let spreaded = SpreadedSwaptionVolSurface::new(handle.clone(), Spread::zero());

        let start = reference_date().add_months(18).unwrap();
        let base = handle.linked_to().vol(start, 7.0).unwrap();
        let wrapped = spreaded.vol(start, 7.0).unwrap();
        assert_eq!(wrapped, base);
    }

    #[test]
    fn test_spreads_compose_additively() {
        let inner = SpreadedSwaptionVolSurface::new(flat_handle(0.20), Spread::new(0.01));
        let outer =
            SpreadedSwaptionVolSurface::new(Handle::new(Arc::new(inner)), Spread::new(0.002));

        let vol = outer.vol(reference_date(), 10.0).unwrap();
        assert_relative_eq!(vol.value(), 0.212, epsilon = 1e-15);
    }

    #[test]
    fn test_delegate_errors_propagate_unchanged() {
        let spreaded = SpreadedSwaptionVolSurface::new(flat_handle(0.20), Spread::new(0.05));
        let stale = reference_date().add_days(-10);

        let err = spreaded.vol(stale, 1.0).unwrap_err();
        assert!(matches!(
            err,
            crate::error::SurfaceError::StartBeforeReference { start, reference }
                if start == stale && reference == reference_date()
        ));
    }

    #[test]
    fn test_relink_is_visible_immediately() {
        let handle = flat_handle(0.20);
        let spreaded = SpreadedSwaptionVolSurface::new(handle.clone(), Spread::new(0.01));

        handle.relink(Arc::new(FlatSwaptionVolSurface::new(
            reference_date(),
            Volatility::new(0.30),
        )));

        let vol = spreaded.vol(reference_date(), 5.0).unwrap();
        assert_relative_eq!(vol.value(), 0.31, epsilon = 1e-15);
    }

    #[test]
    fn test_accessors() {
        let handle = flat_handle(0.20);
        let spreaded = SpreadedSwaptionVolSurface::new(handle.clone(), Spread::from_bps(75.0));

        assert_relative_eq!(spreaded.spread().as_bps(), 75.0, epsilon = 1e-12);
        assert!(Arc::ptr_eq(
            &spreaded.source().linked_to(),
            &handle.linked_to()
        ));
    }
}
