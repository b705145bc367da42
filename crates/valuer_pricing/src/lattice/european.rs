//! European binomial lattice valuer.
//!
//! Two modes over the same CRR tree (Hull Ch. 13):
//!
//! - **Closed-sum** ([`price`]): no tree is materialised. The price is the
//!   discounted expectation over terminal nodes,
//!   `df_T · Σ_j C(n,j)·p^j·(1−p)^(n−j) · payoff_j`, evaluated entirely in
//!   log space. Naive factorials overflow `f64` beyond roughly 170 steps;
//!   cumulative sums of `ln k` keep the combinatorial weights finite at any
//!   step count.
//! - **Full-tree** ([`price_with_tree`]): step-by-step backward induction,
//!   discounting each step by the per-step factor and recording every
//!   (stock, option) level, rounded for display determinism.

use valuer_core::math::util::{demote, round_to};
use valuer_models::instruments::OptionContract;

use super::{terminal_stock, LatticeParams};
use crate::result::TreeHistory;

/// Decimal places kept in display trees.
const TREE_DECIMALS: u32 = 5;

/// Terminal payoffs `max(sign·(S − K), 0)` per terminal node.
fn terminal_payoff(contract: &OptionContract, stock: &[f64]) -> Vec<f64> {
    let sign = contract.sign();
    stock
        .iter()
        .map(|s| (sign * (s - contract.strike)).max(0.0))
        .collect()
}

/// Prices a European option on a CRR tree in closed-sum mode.
///
/// # Arguments
/// * `contract` - Contract terms and underlying reference
/// * `nsteps` - Number of tree periods
///
/// # Examples
/// ```
/// use valuer_models::instruments::{OptionContract, Right, Underlying};
/// use valuer_pricing::lattice::european;
///
/// // Hull p.291: S0=810, vol=20%, q=2%, K=800, T=0.5, r=5%
/// let contract = OptionContract::new(
///     Underlying::new(810.0, 0.2, 0.02),
///     Right::Call,
///     800.0,
///     0.5,
///     0.05,
/// );
/// let px = european::price(&contract, 2);
/// assert!((px - 53.394716374961348).abs() < 1e-9);
/// ```
pub fn price(contract: &OptionContract, nsteps: usize) -> f64 {
    let params = LatticeParams::derive(contract, nsteps);
    let stock = terminal_stock(contract.underlying.spot, &params, nsteps);
    let payoff = terminal_payoff(contract, &stock);

    // log_fact[j] = ln(j!), built as a cumulative sum so the combinatorial
    // weights below stay in the exponent until the last moment.
    let mut log_fact = vec![0.0_f64; nsteps + 1];
    for j in 1..=nsteps {
        log_fact[j] = log_fact[j - 1] + (j as f64).ln();
    }

    let ln_p = params.prob_up.ln();
    let ln_1mp = (1.0 - params.prob_up).ln();

    let mut expectation = 0.0;
    for (j, pay) in payoff.iter().enumerate() {
        let ln_weight = log_fact[nsteps] - log_fact[j] - log_fact[nsteps - j]
            + j as f64 * ln_p
            + (nsteps - j) as f64 * ln_1mp;
        expectation += ln_weight.exp() * pay;
    }

    params.total_discount * expectation
}

/// Prices one option per step count, for convergence analysis.
///
/// # Examples
/// ```
/// use valuer_models::instruments::{OptionContract, Right, Underlying};
/// use valuer_pricing::lattice::european;
///
/// let contract = OptionContract::new(
///     Underlying::new(810.0, 0.2, 0.02),
///     Right::Call,
///     800.0,
///     0.5,
///     0.05,
/// );
/// let ladder = european::prices(&contract, &[2, 20, 200]);
/// assert_eq!(ladder.len(), 3);
/// ```
pub fn prices(contract: &OptionContract, step_counts: &[usize]) -> Vec<f64> {
    step_counts.iter().map(|&n| price(contract, n)).collect()
}

/// Prices a European option by full backward induction, returning the
/// chronological tree (expiry first) alongside the price.
///
/// The recorded levels are rounded to five decimal places; the returned
/// price is taken from the unrounded induction.
pub fn price_with_tree(contract: &OptionContract, nsteps: usize) -> (f64, TreeHistory) {
    let params = LatticeParams::derive(contract, nsteps);
    let mut stock = terminal_stock(contract.underlying.spot, &params, nsteps);
    let mut option = terminal_payoff(contract, &stock);

    let round_level = |level: &[f64]| -> Vec<f64> {
        level.iter().map(|x| round_to(*x, TREE_DECIMALS)).collect()
    };

    let mut stock_levels = vec![round_level(&stock)];
    let mut option_levels = vec![round_level(&option)];

    for i in (1..=nsteps).rev() {
        option = (0..i)
            .map(|j| {
                params.step_discount
                    * ((1.0 - params.prob_up) * option[j] + params.prob_up * option[j + 1])
            })
            .collect();
        stock = stock[1..=i].iter().map(|s| params.down * s).collect();
        stock_levels.push(round_level(&stock));
        option_levels.push(round_level(&option));
    }

    let price = demote(&option).expect("backward induction ends at the root node");
    let history = TreeHistory {
        stock: stock_levels,
        option: option_levels,
        strike: None,
    };
    (price, history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use valuer_models::analytical::bs_quote;
    use valuer_models::instruments::{Right, Underlying};

    fn hull_p291() -> OptionContract {
        OptionContract::new(
            Underlying::new(810.0, 0.2, 0.02),
            Right::Call,
            800.0,
            0.5,
            0.05,
        )
    }

    // ==========================================================
    // Reference value tests
    // ==========================================================

    #[test]
    fn test_two_step_reference_value() {
        assert_relative_eq!(price(&hull_p291(), 2), 53.394716374961348, epsilon = 1e-9);
    }

    #[test]
    fn test_step_ladder_reference_values() {
        let ladder = prices(&hull_p291(), &[2, 20, 200]);
        assert_relative_eq!(ladder[0], 53.394716374961348, epsilon = 1e-9);
        assert_relative_eq!(ladder[1], 56.40278872645991, epsilon = 1e-9);
        assert_relative_eq!(ladder[2], 56.324021659469274, epsilon = 1e-9);
    }

    #[test]
    fn test_converges_to_closed_form() {
        // Within 0.5% of the closed form at 200 steps.
        let closed = bs_quote(&hull_p291()).call;
        let lattice = price(&hull_p291(), 200);
        assert!((lattice - closed).abs() / closed < 0.005);
    }

    #[test]
    fn test_tree_mode_agrees_with_closed_sum() {
        let (tree_px, _) = price_with_tree(&hull_p291(), 2);
        assert_relative_eq!(tree_px, price(&hull_p291(), 2), epsilon = 1e-10);
    }

    #[test]
    fn test_two_step_tree_snapshot() {
        // Stock and option levels from the worked Hull p.291 tree,
        // chronological from expiry back to the present.
        let (_, tree) = price_with_tree(&hull_p291(), 2);

        assert_eq!(tree.stock.len(), 3);
        let expiry = &tree.stock[0];
        assert_relative_eq!(expiry[0], 663.17191, epsilon = 1e-9);
        assert_relative_eq!(expiry[1], 810.0, epsilon = 1e-9);
        assert_relative_eq!(expiry[2], 989.33623, epsilon = 1e-9);

        assert_relative_eq!(tree.option[0][0], 0.0, epsilon = 1e-9);
        assert_relative_eq!(tree.option[0][1], 10.0, epsilon = 1e-9);
        assert_relative_eq!(tree.option[0][2], 189.33623, epsilon = 1e-9);

        assert_relative_eq!(tree.stock[1][0], 732.91831, epsilon = 1e-9);
        assert_relative_eq!(tree.stock[1][1], 895.18844, epsilon = 1e-9);
        assert_relative_eq!(tree.option[1][0], 5.06232, epsilon = 1e-9);
        assert_relative_eq!(tree.option[1][1], 100.66143, epsilon = 1e-9);

        assert_eq!(tree.stock[2], vec![810.0]);
        assert_relative_eq!(tree.option[2][0], 53.39472, epsilon = 1e-9);
        assert!(tree.strike.is_none());
    }

    // ==========================================================
    // Numerical robustness
    // ==========================================================

    #[test]
    fn test_single_step_is_finite() {
        let px = price(&hull_p291(), 1);
        assert!(px.is_finite());
        assert!(px >= 0.0);
    }

    #[test]
    fn test_high_step_count_stays_finite() {
        // Naive factorial weights overflow beyond ~170 steps; the log-domain
        // evaluation must stay finite and near the converged value.
        let closed = bs_quote(&hull_p291()).call;
        let px = price(&hull_p291(), 1000);
        assert!(px.is_finite());
        assert!((px - closed).abs() / closed < 0.005);
    }

    #[test]
    fn test_put_side_uses_put_payoff() {
        let put_contract = OptionContract::new(
            Underlying::new(810.0, 0.2, 0.02),
            Right::Put,
            800.0,
            0.5,
            0.05,
        );
        let call_px = price(&hull_p291(), 50);
        let put_px = price(&put_contract, 50);
        assert!(call_px > put_px);
        assert!(put_px > 0.0);
    }

    proptest! {
        #[test]
        fn prop_price_is_finite_and_non_negative(
            spot in 10.0_f64..400.0,
            strike in 10.0_f64..400.0,
            vol in 0.2_f64..0.8,
            expiry in 0.1_f64..2.0,
            rate in 0.0_f64..0.05,
            nsteps in 1_usize..400,
        ) {
            // Ranges keep the risk-neutral probability inside (0, 1); outside
            // that region the valuer propagates NaN by design.
            let contract = OptionContract::new(
                Underlying::new(spot, vol, 0.0),
                Right::Call,
                strike,
                expiry,
                rate,
            );
            let px = price(&contract, nsteps);
            prop_assert!(px.is_finite());
            prop_assert!(px >= 0.0);
        }
    }
}
