//! Closed-form valuation formulas.
//!
//! This module provides:
//! - The European Black-Scholes closed form ([`european`])
//! - The floating-strike lookback closed form ([`lookback`],
//!   Goldman-Sosin-Gatto, Hull Ch. 26)
//! - Standard normal distribution functions backing both
//!   ([`distributions`])
//!
//! ## Error behaviour
//!
//! The European formula performs no input validation; degenerate inputs
//! (T = 0, σ = 0) produce non-finite values that propagate to the caller.
//! The lookback formula asserts its documented preconditions and halts on
//! violation. The lookback denominator `(r − q)` is singular at `r == q`
//! and is intentionally unguarded.

pub mod distributions;
pub mod european;
pub mod lookback;

// Re-export main entry points at module level
pub use distributions::{norm_cdf, norm_pdf};
pub use european::{bs_quote, BsQuote};
pub use lookback::{floating_strike_quote, LookbackQuote};
