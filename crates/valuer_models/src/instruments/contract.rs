//! Option contract terms.

use super::{Right, Underlying};

/// Option contract: side, strike, maturity and rate, plus the underlying
/// reference it is written on.
///
/// Immutable per valuation call. The floating-strike lookback valuers ignore
/// `strike`; it is still part of the contract so the same value type serves
/// both option families.
///
/// # Examples
/// ```
/// use valuer_models::instruments::{OptionContract, Right, Underlying};
///
/// let contract = OptionContract::new(
///     Underlying::new(42.0, 0.2, 0.0),
///     Right::Put,
///     40.0,
///     0.5,
///     0.1,
/// );
/// assert_eq!(contract.strike, 40.0);
/// assert_eq!(contract.right, Right::Put);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract {
    /// Underlying asset reference.
    pub underlying: Underlying,
    /// Option side.
    pub right: Right,
    /// Strike price (K). Unused by floating-strike valuations.
    pub strike: f64,
    /// Time to maturity in years (T).
    pub expiry: f64,
    /// Continuously compounded risk-free rate (r).
    pub rate: f64,
}

impl OptionContract {
    /// Creates a new contract.
    #[inline]
    pub fn new(underlying: Underlying, right: Right, strike: f64, expiry: f64, rate: f64) -> Self {
        Self {
            underlying,
            right,
            strike,
            expiry,
            rate,
        }
    }

    /// Returns the ±1 sign of the contract's side.
    #[inline]
    pub fn sign(&self) -> f64 {
        self.right.sign()
    }
}
