//! Binomial lattice machinery.
//!
//! This module provides:
//! - [`LatticeParams`]: Cox-Ross-Rubinstein parameter derivation
//! - [`european`]: European lattice valuer (closed-sum and full-tree modes)
//! - [`lookback`]: floating-strike lookback lattice valuer

mod params;

pub mod european;
pub mod lookback;

pub use params::LatticeParams;

/// Terminal stock prices of a recombining tree, ascending in up-moves:
/// `S_j = S0 · down^(n−j) · up^j` for `j = 0..=n`.
pub(crate) fn terminal_stock(spot: f64, params: &LatticeParams, nsteps: usize) -> Vec<f64> {
    (0..=nsteps)
        .map(|j| spot * params.down.powi((nsteps - j) as i32) * params.up.powi(j as i32))
        .collect()
}
