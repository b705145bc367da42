//! Financial instrument definitions.
//!
//! This module provides the immutable value types a valuation call consumes:
//!
//! - [`Right`]: call/put side with its ±1 sign encoding
//! - [`Underlying`]: spot price, volatility and dividend yield of the
//!   reference asset
//! - [`OptionContract`]: the contract terms (side, strike, maturity, rate)
//!   together with its underlying reference
//!
//! # Architecture
//!
//! Contracts are plain data. A valuation never mutates them; each pricing
//! function takes `&OptionContract` and returns a fresh result value. The
//! same contract value is shared by the European and lookback valuers (the
//! lookback ignores the fixed strike).
//!
//! # Examples
//!
//! ```
//! use valuer_models::instruments::{OptionContract, Right, Underlying};
//!
//! let stock = Underlying::new(810.0, 0.2, 0.02);
//! let contract = OptionContract::new(stock, Right::Call, 800.0, 0.5, 0.05);
//!
//! assert_eq!(contract.right.sign(), 1.0);
//! assert_eq!(contract.underlying.spot, 810.0);
//! ```

mod contract;
mod right;
mod underlying;

pub use contract::OptionContract;
pub use right::Right;
pub use underlying::Underlying;
