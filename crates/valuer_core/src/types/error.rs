//! Error types for structured error handling.
//!
//! This module provides:
//! - `ValuationError`: Errors from valuation requests

use thiserror::Error;

/// Categorised valuation errors.
///
/// Provides structured error handling for the fallible seams of the
/// toolkit: parsing option sides and pricing methods from text, and
/// rejecting requests the engine layer cannot serve.
///
/// Numeric edge cases (zero volatility, zero maturity, singular closed-form
/// denominators) are deliberately NOT represented here; they surface as
/// non-finite arithmetic results.
///
/// # Variants
/// - `InvalidInput`: Input text or parameters that cannot be interpreted
/// - `UnsupportedMethod`: Pricing method name not recognised
///
/// # Examples
/// ```
/// use valuer_core::types::ValuationError;
///
/// let err = ValuationError::InvalidInput("right must be \"call\" or \"put\"".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: right must be \"call\" or \"put\"");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValuationError {
    /// Input data or parameters that cannot be interpreted.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Pricing method name not recognised.
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),
}
