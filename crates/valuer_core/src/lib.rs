//! # valuer_core: Foundation for the Option Valuation Toolkit
//!
//! ## Layer Role
//!
//! valuer_core is the bottom layer of the workspace, providing:
//! - Error categories shared across the valuation crates (`types::error`)
//! - Numeric utilities consumed by the lattice valuers (`math::util`)
//!
//! ## Zero Dependency Principle
//!
//! This layer has no dependencies on other valuer_* crates and a single
//! external dependency (`thiserror`), so every crate in the workspace can
//! depend on it without cycles.
//!
//! ## Usage Examples
//!
//! ```rust
//! use valuer_core::math::util::{demote, round_to};
//! use valuer_core::types::ValuationError;
//!
//! // Fixed-decimal rounding used for display trees
//! assert_eq!(round_to(53.394716374961348, 5), 53.39472);
//!
//! // Collapse a single-element vector to a scalar
//! assert_eq!(demote(&[1.829899147224415]), Some(1.829899147224415));
//! assert_eq!(demote(&[1.0, 2.0]), None);
//!
//! // Error values carry their diagnostic message
//! let err = ValuationError::UnsupportedMethod("XVA".to_string());
//! assert!(format!("{}", err).contains("XVA"));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
