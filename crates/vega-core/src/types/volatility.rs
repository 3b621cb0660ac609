//! Implied volatility value type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use super::spread::Spread;

/// An implied volatility, quoted as an annualized decimal.
///
/// A value of 0.20 represents 20% annualized volatility. No range is
/// enforced at this level: a spread-adjusted surface may legitimately
/// produce values a plain quote never would, and the adjustment must not
/// introduce failure modes of its own. Concrete surfaces that need range
/// checks perform them before constructing a `Volatility`.
///
/// # Example
///
/// ```rust
/// use vega_core::types::{Spread, Volatility};
///
/// let vol = Volatility::new(0.20);
/// let shifted = vol + Spread::new(0.01);
/// assert!((shifted.value() - 0.21).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Volatility(f64);

impl Volatility {
    /// Creates a new volatility from an annualized decimal value.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Volatility(value)
    }

    /// Returns the volatility as an annualized decimal.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Returns the volatility in percent (0.20 becomes 20.0).
    #[must_use]
    pub fn as_percent(&self) -> f64 {
        self.0 * 100.0
    }
}

impl Add<Spread> for Volatility {
    type Output = Volatility;

    /// Applies an additive spread to the volatility.
    fn add(self, spread: Spread) -> Self::Output {
        Volatility(self.0 + spread.value())
    }
}

impl Sub<Spread> for Volatility {
    type Output = Volatility;

    /// Removes an additive spread from the volatility.
    fn sub(self, spread: Spread) -> Self::Output {
        Volatility(self.0 - spread.value())
    }
}

impl Sub<Volatility> for Volatility {
    type Output = Spread;

    /// Returns the spread between two volatilities.
    fn sub(self, other: Volatility) -> Self::Output {
        Spread::new(self.0 - other.0)
    }
}

impl fmt::Display for Volatility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}%", self.as_percent())
    }
}
