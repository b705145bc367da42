//! Lookback option valuation entry point.
//!
//! Dispatches a [`ValuationConfig`] to the matching pricing routine for a
//! floating-strike lookback option. The closed form (Goldman-Sosin-Gatto)
//! requires the extremum realised to date (`floating_ref`); the lattice
//! valuer reconstructs the extremum per node from the tree itself.

use valuer_models::analytical::floating_strike_quote;
use valuer_models::instruments::OptionContract;

use crate::config::{Method, ValuationConfig};
use crate::lattice::{self, LatticeParams};
use crate::result::{Interim, PriceResult};
use crate::{fd, mc};

/// Values a floating-strike lookback option according to the configuration.
///
/// # Panics
/// The closed form asserts its preconditions (`Sfl > 0`, `T > 0`, `σ > 0`,
/// `r ≥ 0`, `q ≥ 0`, `S ≥ 0`) and halts on violation.
///
/// # Examples
/// ```
/// use valuer_models::instruments::{OptionContract, Right, Underlying};
/// use valuer_pricing::{lookback, ValuationConfig};
///
/// let contract = OptionContract::new(
///     Underlying::new(50.0, 0.4, 0.0),
///     Right::Call,
///     50.0,
///     0.25,
///     0.1,
/// );
/// let config = ValuationConfig::builder().floating_ref(50.0).build();
/// let result = lookback::value(&contract, &config);
/// assert!((result.price.unwrap() - 8.037120139607019).abs() < 1e-3);
/// ```
pub fn value(contract: &OptionContract, config: &ValuationConfig) -> PriceResult {
    let result = match config.method() {
        Method::ClosedForm => closed_form(contract, config.floating_ref_or_default()),
        Method::LatticeTree => {
            lattice_tree(contract, config.steps_or_default(), config.keep_hist())
        }
        Method::MonteCarlo => mc::value(contract, config),
        Method::FiniteDifference => fd::value(contract, config),
    };
    result.with_npaths(config.npaths())
}

/// Values a floating-strike lookback option with the closed form.
///
/// `floating_ref` is the minimum realised price to date for a call and the
/// maximum for a put. Only the price matching the contract's side is
/// recorded: the companion formula's value is not a valid price for the
/// other side because the auxiliary terms embed the ±1 sign.
pub fn closed_form(contract: &OptionContract, floating_ref: f64) -> PriceResult {
    let quote = floating_strike_quote(contract, floating_ref);
    PriceResult::new(Method::ClosedForm)
        .with_sub_method("Look back, Hull Ch.26")
        .with_price(quote.price(contract.right))
        .with_interim(Interim::GoldmanSosinGatto {
            a1: quote.a1,
            a2: quote.a2,
            a3: quote.a3,
            y1: quote.y1,
        })
        .with_floating_ref(floating_ref)
}

/// Values a floating-strike lookback option on a CRR binomial tree.
///
/// With `keep_hist` the stock, floating-strike and option trees are
/// retained on the result.
pub fn lattice_tree(contract: &OptionContract, nsteps: usize, keep_hist: bool) -> PriceResult {
    let params = LatticeParams::derive(contract, nsteps);
    let result = PriceResult::new(Method::LatticeTree)
        .with_sub_method("binomial tree; Hull Ch.13")
        .with_lattice(params, nsteps);

    if keep_hist {
        let (px, history) = lattice::lookback::price_with_history(contract, nsteps);
        result.with_price(px).with_history(history)
    } else {
        result.with_price(lattice::lookback::price(contract, nsteps))
    }
}
