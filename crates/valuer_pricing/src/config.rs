//! Valuation configuration.
//!
//! This module provides the pricing-method enum and the per-call valuation
//! configuration with its builder.

use std::fmt;
use std::str::FromStr;

use valuer_core::types::ValuationError;

/// Step count used by the lattice valuers when none is configured.
pub const DEFAULT_STEPS: usize = 3;

/// Floating-strike reference used by the lookback closed form when none is
/// configured (the extremum of a freshly observed path in the documented
/// examples).
pub const DEFAULT_FLOATING_REF: f64 = 50.0;

/// Pricing method.
///
/// An explicit tagged variant per numerical method; valuation entry points
/// `match` on it. Renders and parses as the conventional short tags.
///
/// # Examples
/// ```
/// use valuer_pricing::Method;
///
/// assert_eq!(Method::ClosedForm.to_string(), "BS");
/// assert_eq!("lt".parse::<Method>().unwrap(), Method::LatticeTree);
/// assert!("XVA".parse::<Method>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    /// Closed-form valuation (BS).
    #[default]
    ClosedForm,
    /// Binomial lattice tree (LT).
    LatticeTree,
    /// Monte Carlo simulation (MC). Extension point; no computation.
    MonteCarlo,
    /// Finite-difference grid (FD). Extension point; no computation.
    FiniteDifference,
}

impl Method {
    /// Returns the conventional short tag for the method.
    #[inline]
    pub fn tag(&self) -> &'static str {
        match self {
            Method::ClosedForm => "BS",
            Method::LatticeTree => "LT",
            Method::MonteCarlo => "MC",
            Method::FiniteDifference => "FD",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Method {
    type Err = ValuationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "BS" => Ok(Method::ClosedForm),
            "LT" => Ok(Method::LatticeTree),
            "MC" => Ok(Method::MonteCarlo),
            "FD" => Ok(Method::FiniteDifference),
            _ => Err(ValuationError::UnsupportedMethod(s.to_string())),
        }
    }
}

/// Per-call valuation configuration.
///
/// Immutable once built. Use [`ValuationConfig::builder`] to construct
/// instances. Step counts and path counts are recorded as given; sizing the
/// lattice is the caller's responsibility, so `build` never rejects.
///
/// # Examples
/// ```
/// use valuer_pricing::{Method, ValuationConfig};
///
/// let config = ValuationConfig::builder()
///     .method(Method::LatticeTree)
///     .nsteps(100)
///     .keep_hist(true)
///     .build();
///
/// assert_eq!(config.method(), Method::LatticeTree);
/// assert_eq!(config.nsteps(), Some(100));
/// assert!(config.keep_hist());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValuationConfig {
    /// Pricing method to run.
    method: Method,
    /// Lattice step count.
    nsteps: Option<usize>,
    /// Simulation path count. Recorded but unused by the core.
    npaths: Option<usize>,
    /// Whether to retain tree history on the result.
    keep_hist: bool,
    /// Floating-strike reference for the lookback closed form.
    floating_ref: Option<f64>,
}

impl ValuationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> ValuationConfigBuilder {
        ValuationConfigBuilder::default()
    }

    /// Returns the pricing method.
    #[inline]
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns the configured step count, if any.
    #[inline]
    pub fn nsteps(&self) -> Option<usize> {
        self.nsteps
    }

    /// Returns the configured path count, if any.
    #[inline]
    pub fn npaths(&self) -> Option<usize> {
        self.npaths
    }

    /// Returns whether tree history is retained.
    #[inline]
    pub fn keep_hist(&self) -> bool {
        self.keep_hist
    }

    /// Returns the configured floating-strike reference, if any.
    #[inline]
    pub fn floating_ref(&self) -> Option<f64> {
        self.floating_ref
    }

    /// Step count to run, falling back to [`DEFAULT_STEPS`].
    #[inline]
    pub fn steps_or_default(&self) -> usize {
        self.nsteps.unwrap_or(DEFAULT_STEPS)
    }

    /// Floating-strike reference, falling back to [`DEFAULT_FLOATING_REF`].
    #[inline]
    pub fn floating_ref_or_default(&self) -> f64 {
        self.floating_ref.unwrap_or(DEFAULT_FLOATING_REF)
    }
}

/// Builder for [`ValuationConfig`].
///
/// # Examples
/// ```
/// use valuer_pricing::{Method, ValuationConfig};
///
/// let config = ValuationConfig::builder()
///     .method(Method::MonteCarlo)
///     .npaths(10_000)
///     .build();
/// assert_eq!(config.npaths(), Some(10_000));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ValuationConfigBuilder {
    method: Method,
    nsteps: Option<usize>,
    npaths: Option<usize>,
    keep_hist: bool,
    floating_ref: Option<f64>,
}

impl ValuationConfigBuilder {
    /// Sets the pricing method.
    #[inline]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Sets the lattice step count.
    #[inline]
    pub fn nsteps(mut self, nsteps: usize) -> Self {
        self.nsteps = Some(nsteps);
        self
    }

    /// Sets the simulation path count.
    #[inline]
    pub fn npaths(mut self, npaths: usize) -> Self {
        self.npaths = Some(npaths);
        self
    }

    /// Sets whether tree history is retained on the result.
    #[inline]
    pub fn keep_hist(mut self, keep_hist: bool) -> Self {
        self.keep_hist = keep_hist;
        self
    }

    /// Sets the floating-strike reference for the lookback closed form.
    #[inline]
    pub fn floating_ref(mut self, floating_ref: f64) -> Self {
        self.floating_ref = Some(floating_ref);
        self
    }

    /// Builds the configuration.
    #[inline]
    pub fn build(self) -> ValuationConfig {
        ValuationConfig {
            method: self.method,
            nsteps: self.nsteps,
            npaths: self.npaths,
            keep_hist: self.keep_hist,
            floating_ref: self.floating_ref,
        }
    }
}
