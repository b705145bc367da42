//! Floating-strike lookback binomial lattice valuer.
//!
//! A lookback payoff depends on the path extremum, so alongside the stock
//! tree the valuer grows a floating-strike tree: at every step the strike
//! vector anchors to the running maximum (put) or running minimum (call) of
//! the paths reaching each node, carrying one boundary term from the
//! previous level. Both vectors grow by one element per step and stay in
//! exact correspondence; terminal payoffs `max(sign·(S − K), 0)` are then
//! computed against the node-specific floating strike, and backward
//! induction discounts exactly as in the European lattice.

use valuer_core::math::util::demote;
use valuer_models::instruments::OptionContract;

use super::{terminal_stock, LatticeParams};
use crate::result::TreeHistory;

/// Prices a floating-strike lookback option on a CRR tree.
///
/// # Arguments
/// * `contract` - Contract terms; the fixed strike is ignored
/// * `nsteps` - Number of tree periods
///
/// # Examples
/// ```
/// use valuer_models::instruments::{OptionContract, Right, Underlying};
/// use valuer_pricing::lattice::lookback;
///
/// // Hull p.607: S0=35, vol=5%, r=10%, T=0.25, 100 steps
/// let contract = OptionContract::new(
///     Underlying::new(35.0, 0.05, 0.0),
///     Right::Call,
///     50.0,
///     0.25,
///     0.1,
/// );
/// let px = lookback::price(&contract, 100);
/// assert!((px - 1.829899147224415).abs() < 1e-9);
/// ```
pub fn price(contract: &OptionContract, nsteps: usize) -> f64 {
    run(contract, nsteps, false).0
}

/// Prices a floating-strike lookback option and retains the stock,
/// floating-strike and option trees (chronological from expiry back to the
/// present, unrounded).
pub fn price_with_history(contract: &OptionContract, nsteps: usize) -> (f64, TreeHistory) {
    let (px, history) = run(contract, nsteps, true);
    (px, history.expect("history requested"))
}

fn run(contract: &OptionContract, nsteps: usize, keep: bool) -> (f64, Option<TreeHistory>) {
    let params = LatticeParams::derive(contract, nsteps);
    let sign = contract.sign();
    let is_put = !contract.right.is_call();

    // Grow the stock and floating-strike vectors together, one element
    // longer per step. For a put the strike anchors to the running maximum
    // (up-factor applied to the previous level, plus the carried boundary
    // term); for a call the symmetric running-minimum construction applies.
    let mut stock = vec![contract.underlying.spot];
    let mut stock_levels = vec![stock.clone()];
    let mut strike_levels = vec![stock.clone()];

    for _ in 0..nsteps {
        let last = *stock.last().expect("stock level is never empty");
        let strike: Vec<f64> = if is_put {
            stock
                .iter()
                .map(|s| params.up * s)
                .chain(std::iter::once(last))
                .collect()
        } else {
            std::iter::once(stock[0])
                .chain(stock.iter().map(|s| params.down * s))
                .collect()
        };
        stock = stock
            .iter()
            .map(|s| params.up * s)
            .chain(std::iter::once(params.down * last))
            .collect();
        stock_levels.push(stock.clone());
        strike_levels.push(strike);
    }

    // Levels were appended forward in time; flip to expiry-first order.
    stock_levels.reverse();
    strike_levels.reverse();

    // Terminal payoffs pair the ascending terminal stock vector with the
    // final strike vector in construction order.
    let terminal = terminal_stock(contract.underlying.spot, &params, nsteps);
    let strike_at_expiry = &strike_levels[0];
    let mut option: Vec<f64> = terminal
        .iter()
        .zip(strike_at_expiry.iter())
        .map(|(s, k)| (sign * (s - k)).max(0.0))
        .collect();
    let mut option_levels = vec![option.clone()];

    for i in (1..=nsteps).rev() {
        option = (0..i)
            .map(|j| {
                params.step_discount
                    * ((1.0 - params.prob_up) * option[j] + params.prob_up * option[j + 1])
            })
            .collect();
        option_levels.push(option.clone());
    }

    let px = demote(&option).expect("backward induction ends at the root node");
    let history = keep.then_some(TreeHistory {
        stock: stock_levels,
        option: option_levels,
        strike: Some(strike_levels),
    });
    (px, history)
}
