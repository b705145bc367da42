//! Finite-difference valuation stub.
//!
//! Extension point: the signature matches the real valuers and the returned
//! result carries the method tag, but no grid is built and no price is
//! populated. An implementation must keep this contract: same inputs, a
//! populated `price` on the returned result.

use valuer_models::instruments::OptionContract;

use crate::config::{Method, ValuationConfig};
use crate::result::PriceResult;

/// Returns a priceless result tagged [`Method::FiniteDifference`].
pub fn value(_contract: &OptionContract, _config: &ValuationConfig) -> PriceResult {
    PriceResult::new(Method::FiniteDifference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use valuer_models::instruments::{Right, Underlying};

    #[test]
    fn test_stub_performs_no_computation() {
        let contract =
            OptionContract::new(Underlying::new(50.0, 0.4, 0.0), Right::Put, 50.0, 0.25, 0.1);
        let result = value(&contract, &ValuationConfig::default());
        assert_eq!(result.method, Method::FiniteDifference);
        assert!(result.price.is_none());
        assert!(result.lattice.is_none());
    }
}
