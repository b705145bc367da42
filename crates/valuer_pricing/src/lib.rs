//! # Valuer Pricing (engine layer)
//!
//! Valuation engines for the option valuation toolkit.
//!
//! This crate provides:
//! - Lattice parameter derivation ([`lattice::LatticeParams`])
//! - Binomial lattice valuers: European (closed-sum and full-tree modes)
//!   and floating-strike lookback
//! - The pricing-method enum and valuation configuration
//!   ([`Method`], [`ValuationConfig`])
//! - Immutable per-call results ([`PriceResult`])
//! - Monte Carlo and finite-difference extension-point stubs
//!
//! ## Design Principles
//!
//! - **Enum dispatch**: a `match` on [`Method`] selects the pricing routine;
//!   there is no reflection and no inheritance
//! - **Fresh results**: every valuation call returns a new [`PriceResult`];
//!   contracts are never mutated
//! - **Caller-sized lattices**: step counts are taken as given; no resource
//!   limits are enforced
//!
//! ## Quick Start
//!
//! ```
//! use valuer_models::instruments::{OptionContract, Right, Underlying};
//! use valuer_pricing::{european, Method, ValuationConfig};
//!
//! let contract = OptionContract::new(
//!     Underlying::new(810.0, 0.2, 0.02),
//!     Right::Call,
//!     800.0,
//!     0.5,
//!     0.05,
//! );
//! let config = ValuationConfig::builder()
//!     .method(Method::LatticeTree)
//!     .nsteps(2)
//!     .build();
//!
//! let result = european::value(&contract, &config);
//! assert!((result.price.unwrap() - 53.394716374961348).abs() < 1e-9);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

mod config;
mod result;

pub mod european;
pub mod fd;
pub mod lattice;
pub mod lookback;
pub mod mc;

pub use config::{Method, ValuationConfig, ValuationConfigBuilder, DEFAULT_FLOATING_REF, DEFAULT_STEPS};
pub use lattice::LatticeParams;
pub use result::{Interim, PriceResult, TreeHistory};
