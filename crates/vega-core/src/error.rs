//! Error types for the Vega library.
//!
//! This module defines the error types used throughout Vega,
//! providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for Vega operations.
pub type VegaResult<T> = Result<T, VegaError>;

/// The main error type for Vega operations.
#[derive(Error, Debug, Clone)]
pub enum VegaError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },
}

impl VegaError {
    /// Creates an `InvalidDate` error with the given message.
    pub fn invalid_date(message: impl Into<String>) -> Self {
        VegaError::InvalidDate {
            message: message.into(),
        }
    }
}
