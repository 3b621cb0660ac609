//! Additive volatility spread type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A signed additive offset in the same units as [`Volatility`].
///
/// Spreads shift every point of a volatility surface uniformly. They are
/// quoted either as a decimal in vol units (0.01 = one vol point) or in
/// basis points of vol (100 bps = 0.01).
///
/// [`Volatility`]: super::Volatility
///
/// # Example
///
/// ```rust
/// use vega_core::types::Spread;
///
/// let spread = Spread::from_bps(100.0);
/// assert!((spread.value() - 0.01).abs() < 1e-15);
/// assert!((-spread).value() < 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Spread(f64);

impl Spread {
    /// Creates a new spread from a decimal value in vol units.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Spread(value)
    }

    /// Creates a spread from basis points of volatility.
    #[must_use]
    pub fn from_bps(bps: f64) -> Self {
        Spread(bps / 10_000.0)
    }

    /// The zero spread.
    #[must_use]
    pub const fn zero() -> Self {
        Spread(0.0)
    }

    /// Returns the spread as a decimal in vol units.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Returns the spread in basis points of volatility.
    #[must_use]
    pub fn as_bps(&self) -> f64 {
        self.0 * 10_000.0
    }
}

impl Neg for Spread {
    type Output = Spread;

    fn neg(self) -> Self::Output {
        Spread(-self.0)
    }
}

impl Add for Spread {
    type Output = Spread;

    fn add(self, other: Spread) -> Self::Output {
        Spread(self.0 + other.0)
    }
}

impl Sub for Spread {
    type Output = Spread;

    fn sub(self, other: Spread) -> Self::Output {
        Spread(self.0 - other.0)
    }
}

impl fmt::Display for Spread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} bps", self.as_bps())
    }
}
