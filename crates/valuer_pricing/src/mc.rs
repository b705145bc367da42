//! Monte Carlo valuation stub.
//!
//! Extension point: the signature matches the real valuers and the returned
//! result carries the method tag, but no simulation is performed and no
//! price is populated. An implementation must keep this contract (same
//! inputs, a populated `price` on the returned result) so callers can
//! switch methods without code changes.

use valuer_models::instruments::OptionContract;

use crate::config::{Method, ValuationConfig};
use crate::result::PriceResult;

/// Returns a priceless result tagged [`Method::MonteCarlo`].
pub fn value(_contract: &OptionContract, _config: &ValuationConfig) -> PriceResult {
    PriceResult::new(Method::MonteCarlo)
}
