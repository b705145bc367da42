//! Floating-strike lookback closed form (Goldman-Sosin-Gatto, Hull Ch. 26).
//!
//! A floating-strike lookback call pays `S_T − S_min`, a put `S_max − S_T`,
//! where the extremum runs over the observed path. The closed form takes the
//! extremum realised so far as an input: `floating_ref` is the minimum price
//! to date for a call and the maximum to date for a put (equal to spot for a
//! freshly originated contract).
//!
//! ## Preconditions
//!
//! `S ≥ 0`, `Sfl > 0`, `T > 0`, `σ > 0`, `r ≥ 0`, `q ≥ 0` are enforced by
//! assertions that halt with a descriptive message. The `(r − q)`
//! denominator is singular at `r == q`; this is intentionally unguarded and
//! yields a non-finite price.

use super::distributions::norm_cdf;
use crate::instruments::{OptionContract, Right};

/// Output of the floating-strike lookback closed form.
///
/// The auxiliary terms a1/a2/a3/Y1 are side-dependent (they embed the ±1
/// sign), so unlike [`super::BsQuote`] the off-side price here is the raw
/// value of the companion formula, not a valid price for the other side.
/// Callers should read only the price matching the contract via
/// [`LookbackQuote::price`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LookbackQuote {
    /// Call-formula value.
    pub call: f64,
    /// Put-formula value.
    pub put: f64,
    /// The a1 auxiliary term.
    pub a1: f64,
    /// The a2 auxiliary term.
    pub a2: f64,
    /// The a3 auxiliary term.
    pub a3: f64,
    /// The Y1 exponent term correcting for the (r − q) denominator.
    pub y1: f64,
}

impl LookbackQuote {
    /// Selects the price matching the requested side.
    #[inline]
    pub fn price(&self, right: Right) -> f64 {
        match right {
            Right::Call => self.call,
            Right::Put => self.put,
        }
    }
}

/// Evaluates the floating-strike lookback closed form.
///
/// # Arguments
/// * `contract` - Contract terms; the fixed strike is ignored
/// * `floating_ref` - Extremum realised to date (minimum for a call,
///   maximum for a put)
///
/// # Panics
/// Panics with a descriptive message when a precondition is violated:
/// `S ≥ 0`, `Sfl > 0`, `T > 0`, `σ > 0`, `r ≥ 0`, `q ≥ 0`.
///
/// # Examples
/// ```
/// use valuer_models::analytical::floating_strike_quote;
/// use valuer_models::instruments::{OptionContract, Right, Underlying};
///
/// // Hull Ch.26 example: S0 = Smin = 50, vol = 40%, r = 10%, T = 0.25
/// let contract = OptionContract::new(
///     Underlying::new(50.0, 0.4, 0.0),
///     Right::Call,
///     50.0,
///     0.25,
///     0.1,
/// );
/// let quote = floating_strike_quote(&contract, 50.0);
/// assert!((quote.price(Right::Call) - 8.037).abs() < 0.01);
/// ```
pub fn floating_strike_quote(contract: &OptionContract, floating_ref: f64) -> LookbackQuote {
    let s = contract.underlying.spot;
    let vol = contract.underlying.vol;
    let q = contract.underlying.div_yield;
    let t = contract.expiry;
    let r = contract.rate;
    let sfl = floating_ref;
    let sign = contract.sign();

    assert!(s >= 0.0, "S must be >= 0");
    assert!(sfl > 0.0, "Sfl must be > 0");
    assert!(t > 0.0, "T must be > 0");
    assert!(vol > 0.0, "vol must be > 0");
    assert!(r >= 0.0, "r must be >= 0");
    assert!(q >= 0.0, "q must be >= 0");

    // Normalised spot: S/Sfl for a call (extremum is the running minimum),
    // Sfl/S for a put (running maximum).
    let s_new = if contract.right.is_call() {
        s / sfl
    } else {
        sfl / s
    };

    let vol_sqrt_t = vol * t.sqrt();
    let ln_s = s_new.ln();

    let a1 = (ln_s + (sign * (r - q) + vol * vol / 2.0) * t) / vol_sqrt_t;
    let a2 = a1 - vol_sqrt_t;
    let a3 = (ln_s + sign * (-r + q + vol * vol / 2.0) * t) / vol_sqrt_t;
    let y1 = sign * (-2.0 * (r - q - vol * vol / 2.0) * ln_s) / (vol * vol);

    let spot_leg = s * (-q * t).exp();
    let float_leg = sfl * (-r * t).exp();
    // Singular at r == q; the division by zero is observable behaviour.
    let vol_ratio = vol * vol / (2.0 * (r - q));

    let call = spot_leg * norm_cdf(a1) - spot_leg * vol_ratio * norm_cdf(-a1)
        - float_leg * (norm_cdf(a2) - vol_ratio * y1.exp() * norm_cdf(-a3));
    let put = float_leg * (norm_cdf(a1) - vol_ratio * y1.exp() * norm_cdf(-a3))
        + spot_leg * vol_ratio * norm_cdf(-a2)
        - spot_leg * norm_cdf(a2);

    LookbackQuote {
        call,
        put,
        a1,
        a2,
        a3,
        y1,
    }
}
