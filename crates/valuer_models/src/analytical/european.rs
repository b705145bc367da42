//! European Black-Scholes closed form.
//!
//! Standard BSM valuation (Hull p.335) with a continuous dividend yield on
//! the spot leg:
//!
//! - `d1 = (ln(S/K) + (r + σ²/2)·T) / (σ·√T)`
//! - `d2 = d1 − σ·√T`
//! - `call = S·e^(−qT)·Φ(d1) − K·e^(−rT)·Φ(d2)`
//! - `put  = −S·e^(−qT)·Φ(−d1) + K·e^(−rT)·Φ(−d2)`
//!
//! No input validation happens here. With `T = 0` or `σ = 0` the `d1`
//! denominator is zero and the non-finite result propagates to the caller;
//! that is the documented failure mode, not a bug to patch.

use super::distributions::norm_cdf;
use crate::instruments::{OptionContract, Right};

/// Output of the European Black-Scholes closed form.
///
/// Both sides are always computed; the caller selects the one matching the
/// contract with [`BsQuote::price`] and may keep the other for reporting.
///
/// # Examples
/// ```
/// use valuer_models::analytical::bs_quote;
/// use valuer_models::instruments::{OptionContract, Right, Underlying};
///
/// // Hull p.339: S0=42, K=40, r=10%, vol=20%, T=0.5
/// let contract = OptionContract::new(
///     Underlying::new(42.0, 0.2, 0.0),
///     Right::Call,
///     40.0,
///     0.5,
///     0.1,
/// );
/// let quote = bs_quote(&contract);
/// assert!((quote.call - 4.76).abs() < 0.01);
/// assert!((quote.put - 0.81).abs() < 0.01);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BsQuote {
    /// Call price.
    pub call: f64,
    /// Put price.
    pub put: f64,
    /// The d1 auxiliary term.
    pub d1: f64,
    /// The d2 auxiliary term.
    pub d2: f64,
}

impl BsQuote {
    /// Selects the price matching the requested side.
    #[inline]
    pub fn price(&self, right: Right) -> f64 {
        match right {
            Right::Call => self.call,
            Right::Put => self.put,
        }
    }
}

/// Evaluates the Black-Scholes closed form for a contract.
///
/// Returns both call and put prices together with the d1/d2 terms.
///
/// # Arguments
/// * `contract` - Contract terms and underlying reference
///
/// # Examples
/// ```
/// use valuer_models::analytical::bs_quote;
/// use valuer_models::instruments::{OptionContract, Right, Underlying};
///
/// let contract = OptionContract::new(
///     Underlying::new(100.0, 0.2, 0.0),
///     Right::Call,
///     100.0,
///     1.0,
///     0.05,
/// );
/// let quote = bs_quote(&contract);
/// // Put-call parity: C - P = S·e^(-qT) - K·e^(-rT)
/// let forward = 100.0 - 100.0 * (-0.05_f64).exp();
/// assert!((quote.call - quote.put - forward).abs() < 1e-10);
/// ```
pub fn bs_quote(contract: &OptionContract) -> BsQuote {
    let s = contract.underlying.spot;
    let vol = contract.underlying.vol;
    let q = contract.underlying.div_yield;
    let k = contract.strike;
    let t = contract.expiry;
    let r = contract.rate;

    let d1 = ((s / k).ln() + (r + vol * vol / 2.0) * t) / (vol * t.sqrt());
    let d2 = d1 - vol * t.sqrt();

    let spot_leg = s * (-q * t).exp();
    let strike_leg = k * (-r * t).exp();

    let call = spot_leg * norm_cdf(d1) - strike_leg * norm_cdf(d2);
    let put = -spot_leg * norm_cdf(-d1) + strike_leg * norm_cdf(-d2);

    BsQuote { call, put, d1, d2 }
}
