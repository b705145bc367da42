//! # Valuer Models (model layer)
//!
//! Instrument value types and closed-form option valuation formulas.
//!
//! This crate provides:
//! - Instrument definitions (`Underlying`, `OptionContract`, `Right`)
//! - Standard normal distribution functions for the closed forms
//! - The European Black-Scholes closed form
//! - The floating-strike lookback closed form (Goldman-Sosin-Gatto)
//!
//! ## Design Principles
//!
//! - **Plain immutable values**: contracts are data passed by reference into
//!   pure functions; no valuation state lives on the instrument
//! - **No validation below the formula that needs it**: the European closed
//!   form evaluates whatever it is given and lets non-finite arithmetic
//!   propagate; only the lookback closed form enforces its preconditions

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
