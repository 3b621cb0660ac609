//! Error types for volatility surface queries.
//!
//! The trait itself imposes no validation; these errors are produced by the
//! concrete surfaces that do. Wrappers such as
//! [`SpreadedSwaptionVolSurface`](crate::SpreadedSwaptionVolSurface)
//! propagate them unchanged and define no variants of their own.

use thiserror::Error;
use vega_core::Date;

/// A specialized Result type for surface operations.
pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Error types for volatility surface queries.
#[derive(Error, Debug, Clone)]
pub enum SurfaceError {
    /// Requested start date precedes the surface's reference date.
    #[error("Start date {start} before surface reference date {reference}")]
    StartBeforeReference {
        /// The requested start date.
        start: Date,
        /// The surface's reference date.
        reference: Date,
    },

    /// Requested tenor length is negative.
    #[error("Negative tenor length: {length:.4}")]
    NegativeLength {
        /// The requested length in years.
        length: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_before_reference_display() {
        let err = SurfaceError::StartBeforeReference {
            start: Date::from_ymd(2025, 12, 31).unwrap(),
            reference: Date::from_ymd(2026, 1, 2).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "Start date 2025-12-31 before surface reference date 2026-01-02"
        );
    }

    #[test]
    fn test_negative_length_display() {
        let err = SurfaceError::NegativeLength { length: -0.25 };
        assert_eq!(err.to_string(), "Negative tenor length: -0.2500");
    }
}
