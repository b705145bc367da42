//! Underlying asset reference.

/// Market reference for the underlying asset.
///
/// Carries the spot price, annualised volatility and continuous dividend
/// yield. Construction performs no validation: the closed forms that require
/// positivity enforce it themselves, and elsewhere non-finite arithmetic is
/// the documented failure mode for degenerate inputs.
///
/// # Examples
/// ```
/// use valuer_models::instruments::Underlying;
///
/// let stock = Underlying::new(50.0, 0.4, 0.0);
/// assert_eq!(stock.spot, 50.0);
/// assert_eq!(stock.vol, 0.4);
/// assert_eq!(stock.div_yield, 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Underlying {
    /// Current spot price (S0).
    pub spot: f64,
    /// Annualised volatility (σ).
    pub vol: f64,
    /// Continuous dividend yield (q).
    pub div_yield: f64,
}

impl Underlying {
    /// Creates a new underlying reference.
    #[inline]
    pub fn new(spot: f64, vol: f64, div_yield: f64) -> Self {
        Self {
            spot,
            vol,
            div_yield,
        }
    }
}
