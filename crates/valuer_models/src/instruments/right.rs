//! Option side (call/put) with sign encoding.

use std::fmt;
use std::str::FromStr;

use valuer_core::types::ValuationError;

/// Option side.
///
/// Every payoff in the toolkit is written as `max(sign · (S − K), 0)`, so
/// the side carries its ±1 encoding via [`Right::sign`].
///
/// # Examples
/// ```
/// use valuer_models::instruments::Right;
///
/// assert_eq!(Right::Call.sign(), 1.0);
/// assert_eq!(Right::Put.sign(), -1.0);
///
/// // Parsing is case-insensitive; anything else is rejected
/// assert_eq!("Put".parse::<Right>().unwrap(), Right::Put);
/// assert!("straddle".parse::<Right>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Right {
    /// Call option: pays `max(S − K, 0)`.
    Call,
    /// Put option: pays `max(K − S, 0)`.
    Put,
}

impl Right {
    /// Returns the ±1 sign used in payoff and closed-form expressions.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            Right::Call => 1.0,
            Right::Put => -1.0,
        }
    }

    /// Returns true for the call side.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, Right::Call)
    }
}

impl fmt::Display for Right {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Right::Call => write!(f, "call"),
            Right::Put => write!(f, "put"),
        }
    }
}

impl FromStr for Right {
    type Err = ValuationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "call" => Ok(Right::Call),
            "put" => Ok(Right::Put),
            _ => Err(ValuationError::InvalidInput(
                "right must be \"call\" or \"put\"".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_encoding() {
        assert_eq!(Right::Call.sign(), 1.0);
        assert_eq!(Right::Put.sign(), -1.0);
    }

    #[test]
    fn test_is_call() {
        assert!(Right::Call.is_call());
        assert!(!Right::Put.is_call());
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("call".parse::<Right>().unwrap(), Right::Call);
        assert_eq!("CALL".parse::<Right>().unwrap(), Right::Call);
        assert_eq!("Put".parse::<Right>().unwrap(), Right::Put);
    }

    #[test]
    fn test_parse_rejects_unknown_side() {
        let err = "digital".parse::<Right>().unwrap_err();
        assert_eq!(
            err,
            ValuationError::InvalidInput("right must be \"call\" or \"put\"".to_string())
        );
    }

    #[test]
    fn test_display_round_trip() {
        for right in [Right::Call, Right::Put] {
            let parsed: Right = right.to_string().parse().unwrap();
            assert_eq!(parsed, right);
        }
    }
}
