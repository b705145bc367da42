//! Cox-Ross-Rubinstein lattice parameters.

use valuer_models::instruments::OptionContract;

/// Parameters of a recombining CRR binomial tree.
///
/// Derived deterministically from the contract and a step count; recomputed
/// per call, never cached. Over a step of length `dt = T/n`:
///
/// - `up = e^(σ·√dt)`, `down = e^(−σ·√dt)`
/// - `growth = e^((r−q)·dt)` (the risk-neutral growth factor)
/// - `prob_up = (growth − down) / (up − down)`
/// - `step_discount = e^(−r·dt)`, `total_discount = e^(−r·T)`
///
/// # Examples
/// ```
/// use valuer_models::instruments::{OptionContract, Right, Underlying};
/// use valuer_pricing::LatticeParams;
///
/// let contract = OptionContract::new(
///     Underlying::new(35.0, 0.05, 0.0),
///     Right::Call,
///     50.0,
///     0.25,
///     0.1,
/// );
/// let params = LatticeParams::derive(&contract, 100);
/// assert!((params.dt - 0.0025).abs() < 1e-15);
/// assert!((params.up * params.down - 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatticeParams {
    /// Step length in years.
    pub dt: f64,
    /// Up-move factor.
    pub up: f64,
    /// Down-move factor.
    pub down: f64,
    /// Risk-neutral growth factor per step.
    pub growth: f64,
    /// Risk-neutral probability of an up move.
    pub prob_up: f64,
    /// Per-step discount factor.
    pub step_discount: f64,
    /// Full-horizon discount factor.
    pub total_discount: f64,
}

impl LatticeParams {
    /// Derives the lattice parameters for a contract and step count.
    ///
    /// A step count of zero makes `dt` infinite and poisons every derived
    /// factor; as everywhere else, degenerate inputs propagate as
    /// non-finite arithmetic rather than being rejected here.
    pub fn derive(contract: &OptionContract, nsteps: usize) -> Self {
        let vol = contract.underlying.vol;
        let q = contract.underlying.div_yield;
        let r = contract.rate;

        let dt = contract.expiry / nsteps as f64;
        let up = (vol * dt.sqrt()).exp();
        let down = (-vol * dt.sqrt()).exp();
        let growth = ((r - q) * dt).exp();
        let prob_up = (growth - down) / (up - down);
        let step_discount = (-r * dt).exp();
        let total_discount = (-r * contract.expiry).exp();

        Self {
            dt,
            up,
            down,
            growth,
            prob_up,
            step_discount,
            total_discount,
        }
    }
}
