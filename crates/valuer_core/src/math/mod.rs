//! Numeric helpers shared by the valuation crates.
//!
//! This module provides:
//! - `util`: fixed-decimal rounding and scalar demotion

pub mod util;
