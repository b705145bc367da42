//! Valuation results.
//!
//! This module provides the immutable result value produced by every
//! valuation call, together with the typed intermediate-term and
//! tree-history containers.

use crate::config::Method;
use crate::lattice::LatticeParams;

/// Intermediate terms of a closed-form valuation.
///
/// Which family of terms is present depends on the formula that ran.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Interim {
    /// d1/d2 terms of the European Black-Scholes formula.
    BlackScholes {
        /// The d1 term.
        d1: f64,
        /// The d2 term.
        d2: f64,
    },
    /// a1/a2/a3/Y1 terms of the floating-strike lookback formula.
    GoldmanSosinGatto {
        /// The a1 term.
        a1: f64,
        /// The a2 term.
        a2: f64,
        /// The a3 term.
        a3: f64,
        /// The Y1 exponent term.
        y1: f64,
    },
}

/// Retained lattice history.
///
/// Each field holds one vector per time step, ordered chronologically from
/// expiry back to the present (the expiry level is the longest; the present
/// level has a single node).
///
/// The European full tree is rounded to five decimal places so snapshots
/// are reproducible; the lookback history is stored unrounded and
/// additionally retains the floating-strike tree.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeHistory {
    /// Stock-price vector per step.
    pub stock: Vec<Vec<f64>>,
    /// Option-value vector per step.
    pub option: Vec<Vec<f64>>,
    /// Floating-strike vector per step (lookback lattice only).
    pub strike: Option<Vec<Vec<f64>>>,
}

/// Result of a single valuation call.
///
/// Created fresh by every call and returned by value; nothing on the
/// contract is mutated. `price` is `None` only for the Monte Carlo and
/// finite-difference extension-point stubs.
///
/// # Examples
/// ```
/// use valuer_models::instruments::{OptionContract, Right, Underlying};
/// use valuer_pricing::{european, Method, ValuationConfig};
///
/// let contract = OptionContract::new(
///     Underlying::new(42.0, 0.2, 0.0),
///     Right::Put,
///     40.0,
///     0.5,
///     0.1,
/// );
/// let result = european::value(&contract, &ValuationConfig::default());
///
/// assert_eq!(result.method, Method::ClosedForm);
/// assert!(result.price.is_some());
/// // Both sides are retained for the European closed form.
/// assert!(result.call_price.is_some() && result.put_price.is_some());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceResult {
    /// Method that produced the result.
    pub method: Method,
    /// Human-readable sub-method description.
    pub sub_method: Option<String>,
    /// The price selected by the contract's side. `None` for stubs.
    pub price: Option<f64>,
    /// Decomposed call price, where the formula yields both sides.
    pub call_price: Option<f64>,
    /// Decomposed put price, where the formula yields both sides.
    pub put_price: Option<f64>,
    /// Intermediate terms of the closed form that ran.
    pub interim: Option<Interim>,
    /// Lattice parameters used by a tree valuation.
    pub lattice: Option<LatticeParams>,
    /// Step count used by a tree valuation.
    pub nsteps: Option<usize>,
    /// Path count as configured. Unused by the core.
    pub npaths: Option<usize>,
    /// Floating-strike reference used by a lookback valuation.
    pub floating_ref: Option<f64>,
    /// Retained tree history, when requested.
    pub history: Option<TreeHistory>,
}

impl PriceResult {
    /// Creates an empty result for a method.
    ///
    /// All optional fields start unset; the valuers fill in what their
    /// method produced.
    pub fn new(method: Method) -> Self {
        Self {
            method,
            sub_method: None,
            price: None,
            call_price: None,
            put_price: None,
            interim: None,
            lattice: None,
            nsteps: None,
            npaths: None,
            floating_ref: None,
            history: None,
        }
    }

    /// Sets the sub-method description.
    pub fn with_sub_method(mut self, sub_method: impl Into<String>) -> Self {
        self.sub_method = Some(sub_method.into());
        self
    }

    /// Sets the selected price.
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the decomposed call/put prices.
    pub fn with_sides(mut self, call: f64, put: f64) -> Self {
        self.call_price = Some(call);
        self.put_price = Some(put);
        self
    }

    /// Sets the intermediate terms.
    pub fn with_interim(mut self, interim: Interim) -> Self {
        self.interim = Some(interim);
        self
    }

    /// Sets the lattice parameters and step count.
    pub fn with_lattice(mut self, lattice: LatticeParams, nsteps: usize) -> Self {
        self.lattice = Some(lattice);
        self.nsteps = Some(nsteps);
        self
    }

    /// Sets the configured path count.
    pub fn with_npaths(mut self, npaths: Option<usize>) -> Self {
        self.npaths = npaths;
        self
    }

    /// Sets the floating-strike reference.
    pub fn with_floating_ref(mut self, floating_ref: f64) -> Self {
        self.floating_ref = Some(floating_ref);
        self
    }

    /// Sets the retained history.
    pub fn with_history(mut self, history: TreeHistory) -> Self {
        self.history = Some(history);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let result = PriceResult::new(Method::MonteCarlo);
        assert_eq!(result.method, Method::MonteCarlo);
        assert!(result.price.is_none());
        assert!(result.history.is_none());
    }

    #[test]
    fn test_with_chain() {
        let result = PriceResult::new(Method::ClosedForm)
            .with_sub_method("standard; Hull p.335")
            .with_price(4.7594)
            .with_sides(4.7594, 0.8086)
            .with_interim(Interim::BlackScholes {
                d1: 0.7693,
                d2: 0.6278,
            });
        assert_eq!(result.sub_method.as_deref(), Some("standard; Hull p.335"));
        assert_eq!(result.price, Some(4.7594));
        assert_eq!(result.call_price, Some(4.7594));
        assert_eq!(result.put_price, Some(0.8086));
        assert!(matches!(
            result.interim,
            Some(Interim::BlackScholes { .. })
        ));
    }

    #[test]
    fn test_history_shape() {
        let history = TreeHistory {
            stock: vec![vec![663.17191, 810.0, 989.33623], vec![810.0]],
            option: vec![vec![0.0, 10.0, 189.33623], vec![53.39472]],
            strike: None,
        };
        assert_eq!(history.stock[0].len(), 3);
        assert_eq!(history.option[1].len(), 1);
    }

    // Serde tests (feature-gated)
    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_result_serde_round_trip() {
            let result = PriceResult::new(Method::LatticeTree)
                .with_sub_method("binomial tree; Hull Ch.13")
                .with_price(53.394716374961348);
            let json = serde_json::to_string(&result).unwrap();
            let deserialized: PriceResult = serde_json::from_str(&json).unwrap();
            assert_eq!(result, deserialized);
        }
    }
}
