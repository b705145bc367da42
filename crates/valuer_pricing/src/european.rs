//! European option valuation entry point.
//!
//! Dispatches a [`ValuationConfig`] to the matching pricing routine and
//! assembles the per-call [`PriceResult`]. Closed-form valuation runs the
//! Black-Scholes formula from `valuer_models`; lattice valuation runs the
//! CRR kernels from [`crate::lattice::european`].

use valuer_models::analytical::bs_quote;
use valuer_models::instruments::OptionContract;

use crate::config::{Method, ValuationConfig};
use crate::lattice::{self, LatticeParams};
use crate::result::{Interim, PriceResult};
use crate::{fd, mc};

/// Values a European option according to the configuration.
///
/// Every call returns a fresh result; the contract is never mutated, so
/// repeated calls with identical inputs produce identical results.
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
///
/// let bs = european::value(&contract, &ValuationConfig::default());
/// assert!((bs.price.unwrap() - 0.8086).abs() < 1e-3);
/// ```
pub fn value(contract: &OptionContract, config: &ValuationConfig) -> PriceResult {
    let result = match config.method() {
        Method::ClosedForm => closed_form(contract),
        Method::LatticeTree => {
            lattice_tree(contract, config.steps_or_default(), config.keep_hist())
        }
        Method::MonteCarlo => mc::value(contract, config),
        Method::FiniteDifference => fd::value(contract, config),
    };
    result.with_npaths(config.npaths())
}

/// Values a European option with the Black-Scholes closed form.
///
/// Both call and put prices are retained on the result alongside the d1/d2
/// terms; `price` selects the side matching the contract.
pub fn closed_form(contract: &OptionContract) -> PriceResult {
    let quote = bs_quote(contract);
    PriceResult::new(Method::ClosedForm)
        .with_sub_method("standard; Hull p.335")
        .with_price(quote.price(contract.right))
        .with_sides(quote.call, quote.put)
        .with_interim(Interim::BlackScholes {
            d1: quote.d1,
            d2: quote.d2,
        })
}

/// Values a European option on a CRR binomial tree.
///
/// Without history the closed-sum kernel runs (no tree is materialised);
/// with `keep_hist` the full tree is built by backward induction and
/// recorded on the result.
pub fn lattice_tree(contract: &OptionContract, nsteps: usize, keep_hist: bool) -> PriceResult {
    let params = LatticeParams::derive(contract, nsteps);
    let result = PriceResult::new(Method::LatticeTree)
        .with_sub_method("binomial tree; Hull Ch.13")
        .with_lattice(params, nsteps);

    if keep_hist {
        let (px, history) = lattice::european::price_with_tree(contract, nsteps);
        result.with_price(px).with_history(history)
    } else {
        result.with_price(lattice::european::price(contract, nsteps))
    }
}

/// Prices one option per step count, for convergence analysis.
///
/// # Examples
/// ```
/// use valuer_models::instruments::{OptionContract, Right, Underlying};
/// use valuer_pricing::european;
///
/// let contract = OptionContract::new(
///     Underlying::new(810.0, 0.2, 0.02),
///     Right::Call,
///     800.0,
///     0.5,
///     0.05,
/// );
/// let ladder = european::lattice_prices(&contract, &[2, 20, 200]);
/// assert!(ladder.windows(2).all(|w| (w[0] - w[1]).abs() < 5.0));
/// ```
pub fn lattice_prices(contract: &OptionContract, step_counts: &[usize]) -> Vec<f64> {
    lattice::european::prices(contract, step_counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use valuer_models::instruments::{Right, Underlying};

    fn hull_p339_put() -> OptionContract {
        OptionContract::new(Underlying::new(42.0, 0.2, 0.0), Right::Put, 40.0, 0.5, 0.1)
    }

    fn hull_p291_call() -> OptionContract {
        OptionContract::new(
            Underlying::new(810.0, 0.2, 0.02),
            Right::Call,
            800.0,
            0.5,
            0.05,
        )
    }

    // ==========================================================
    // Dispatch tests
    // ==========================================================

    #[test]
    fn test_default_config_runs_closed_form() {
        let result = value(&hull_p339_put(), &ValuationConfig::default());
        assert_eq!(result.method, Method::ClosedForm);
        assert_eq!(result.sub_method.as_deref(), Some("standard; Hull p.335"));
        assert_relative_eq!(result.price.unwrap(), 0.8086, epsilon = 1e-3);
    }

    #[test]
    fn test_closed_form_retains_both_sides_and_terms() {
        let result = closed_form(&hull_p339_put());
        assert_relative_eq!(result.call_price.unwrap(), 4.7594, epsilon = 1e-3);
        assert_relative_eq!(result.put_price.unwrap(), 0.8086, epsilon = 1e-3);
        match result.interim.unwrap() {
            Interim::BlackScholes { d1, d2 } => {
                assert_relative_eq!(d2, d1 - 0.2 * 0.5_f64.sqrt(), epsilon = 1e-12);
            }
            other => panic!("expected BlackScholes terms, got {:?}", other),
        }
    }

    #[test]
    fn test_lattice_dispatch_uses_configured_steps() {
        let config = ValuationConfig::builder()
            .method(Method::LatticeTree)
            .nsteps(2)
            .build();
        let result = value(&hull_p291_call(), &config);
        assert_eq!(result.method, Method::LatticeTree);
        assert_eq!(result.nsteps, Some(2));
        assert_relative_eq!(
            result.price.unwrap(),
            53.394716374961348,
            epsilon = 1e-9
        );
        assert!(result.lattice.is_some());
        assert!(result.history.is_none());
    }

    #[test]
    fn test_lattice_dispatch_defaults_to_three_steps() {
        let config = ValuationConfig::builder().method(Method::LatticeTree).build();
        let result = value(&hull_p291_call(), &config);
        assert_eq!(result.nsteps, Some(3));
        assert_eq!(
            result.price,
            lattice_tree(&hull_p291_call(), 3, false).price
        );
    }

    #[test]
    fn test_keep_hist_attaches_tree() {
        let config = ValuationConfig::builder()
            .method(Method::LatticeTree)
            .nsteps(2)
            .keep_hist(true)
            .build();
        let result = value(&hull_p291_call(), &config);
        let history = result.history.unwrap();
        assert_eq!(history.stock.len(), 3);
        assert!(history.strike.is_none());
    }

    #[test]
    fn test_stub_methods_return_priceless_results() {
        for method in [Method::MonteCarlo, Method::FiniteDifference] {
            let config = ValuationConfig::builder()
                .method(method)
                .npaths(10_000)
                .build();
            let result = value(&hull_p291_call(), &config);
            assert_eq!(result.method, method);
            assert!(result.price.is_none());
            assert_eq!(result.npaths, Some(10_000));
        }
    }

    // ==========================================================
    // Idempotence
    // ==========================================================

    #[test]
    fn test_repeated_valuation_is_identical() {
        let config = ValuationConfig::builder()
            .method(Method::LatticeTree)
            .nsteps(50)
            .keep_hist(true)
            .build();
        let first = value(&hull_p291_call(), &config);
        let second = value(&hull_p291_call(), &config);
        assert_eq!(first, second);
    }
}
