//! Constant-volatility surface.

use serde::{Deserialize, Serialize};
use vega_core::{Date, Volatility};

use crate::error::{SurfaceError, SurfaceResult};
use crate::traits::SwaptionVolSurface;

/// A surface returning the same volatility for every (start, length) pair.
///
/// Used wherever a full quote grid is unnecessary: single-quote markets,
/// scenario analysis, and as the canonical delegate in tests for surface
/// wrappers.
///
/// # Validation
///
/// The surface rejects start dates before its reference date and negative
/// tenor lengths. This is the surface's own policy, not a trait
/// requirement; wrappers inherit it transparently.
///
/// # Example
///
/// ```rust
/// use vega_core::{Date, Volatility};
/// use vega_surfaces::{FlatSwaptionVolSurface, SwaptionVolSurface};
///
/// let today = Date::from_ymd(2026, 1, 2).unwrap();
/// let surface = FlatSwaptionVolSurface::new(today, Volatility::new(0.20));
///
/// let vol = surface.vol(today.add_years(2).unwrap(), 10.0).unwrap();
/// assert_eq!(vol, Volatility::new(0.20));
///
/// assert!(surface.vol(today, -1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlatSwaptionVolSurface {
    reference_date: Date,
    volatility: Volatility,
}

impl FlatSwaptionVolSurface {
    /// Creates a flat surface anchored at the given reference date.
    #[must_use]
    pub fn new(reference_date: Date, volatility: Volatility) -> Self {
        Self {
            reference_date,
            volatility,
        }
    }

    /// Returns the surface's reference date.
    #[must_use]
    pub fn reference_date(&self) -> Date {
        self.reference_date
    }

    /// Returns the constant volatility.
    #[must_use]
    pub fn volatility(&self) -> Volatility {
        self.volatility
    }
}

impl SwaptionVolSurface for FlatSwaptionVolSurface {
    fn vol(&self, start: Date, length: f64) -> SurfaceResult<Volatility> {
        if start < self.reference_date {
            return Err(SurfaceError::StartBeforeReference {
                start,
                reference: self.reference_date,
            });
        }
        if length < 0.0 {
            return Err(SurfaceError::NegativeLength { length });
        }
        Ok(self.volatility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_date() -> Date {
        Date::from_ymd(2026, 1, 2).unwrap()
    }

    #[test]
    fn test_constant_vol_for_any_query() {
        let surface = FlatSwaptionVolSurface::new(reference_date(), Volatility::new(0.18));

        let spot = surface.vol(reference_date(), 0.0).unwrap();
        let forward = surface
            .vol(reference_date().add_years(5).unwrap(), 30.0)
            .unwrap();

        assert_eq!(spot, Volatility::new(0.18));
        assert_eq!(forward, spot);
    }

    #[test]
    fn test_rejects_start_before_reference() {
        let surface = FlatSwaptionVolSurface::new(reference_date(), Volatility::new(0.18));
        let stale = reference_date().add_days(-1);

        let err = surface.vol(stale, 1.0).unwrap_err();
        assert!(matches!(
            err,
            SurfaceError::StartBeforeReference { start, reference }
                if start == stale && reference == reference_date()
        ));
    }

    #[test]
    fn test_rejects_negative_length() {
        let surface = FlatSwaptionVolSurface::new(reference_date(), Volatility::new(0.18));

        let err = surface.vol(reference_date(), -0.5).unwrap_err();
        assert!(matches!(err, SurfaceError::NegativeLength { length } if length == -0.5));
    }

    #[test]
    fn test_serde_round_trip() {
        let surface = FlatSwaptionVolSurface::new(reference_date(), Volatility::new(0.18));
        let json = serde_json::to_string(&surface).unwrap();
        let back: FlatSwaptionVolSurface = serde_json::from_str(&json).unwrap();
        assert_eq!(back, surface);
    }
}
