//! Small numeric utilities consumed by the lattice valuers.
//!
//! This module provides:
//! - `round_to`: round a value to a fixed number of decimal places
//! - `demote`: collapse a single-element slice to a scalar

/// Rounds a value to `digits` decimal places.
///
/// Used when materialising display trees, so that snapshots of the same
/// lattice are byte-for-byte reproducible across runs.
///
/// # Arguments
/// * `x` - Value to round
/// * `digits` - Number of decimal places to keep
///
/// # Examples
/// ```
/// use valuer_core::math::util::round_to;
///
/// assert_eq!(round_to(663.17191000000003, 5), 663.17191);
/// assert_eq!(round_to(0.99750312239746, 2), 1.0);
/// assert_eq!(round_to(-1.23456, 3), -1.235);
/// ```
#[inline]
pub fn round_to(x: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (x * scale).round() / scale
}

/// Collapses a single-element slice to its scalar value.
///
/// Backward induction over a lattice shrinks the option-value vector by one
/// element per step; at the root exactly one value remains. Returns `None`
/// when the slice does not hold exactly one element.
///
/// # Examples
/// ```
/// use valuer_core::math::util::demote;
///
/// assert_eq!(demote(&[53.39472]), Some(53.39472));
/// assert_eq!(demote(&[]), None);
/// assert_eq!(demote(&[1.0, 2.0]), None);
/// ```
#[inline]
pub fn demote(values: &[f64]) -> Option<f64> {
    match values {
        [single] => Some(*single),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_round_to_five_places() {
        assert_relative_eq!(round_to(989.33623000000001, 5), 989.33623, epsilon = 1e-12);
    }

    #[test]
    fn test_round_to_zero_places() {
        assert_relative_eq!(round_to(53.6, 0), 54.0, epsilon = 1e-12);
    }

    #[test]
    fn test_round_to_idempotent() {
        let once = round_to(8.037120139607019, 4);
        let twice = round_to(once, 4);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_round_to_negative_values() {
        assert_relative_eq!(round_to(-0.123456, 4), -0.1235, epsilon = 1e-12);
    }

    #[test]
    fn test_demote_single_element() {
        assert_eq!(demote(&[1.829899147224415]), Some(1.829899147224415));
    }

    #[test]
    fn test_demote_empty() {
        assert_eq!(demote(&[]), None);
    }

    #[test]
    fn test_demote_multiple_elements() {
        assert_eq!(demote(&[1.0, 2.0, 3.0]), None);
    }
}
