//! European valuation command.

use tracing::info;
use valuer_models::instruments::{OptionContract, Right, Underlying};
use valuer_pricing::{european, Interim, Method, ValuationConfig};

use crate::Result;

/// Runs the european command.
#[allow(clippy::too_many_arguments)]
pub fn run(
    spot: f64,
    vol: f64,
    div_yield: f64,
    right: &str,
    strike: f64,
    expiry: f64,
    rate: f64,
    method: &str,
    nsteps: Option<usize>,
    keep_hist: bool,
) -> Result<()> {
    let right: Right = right.parse()?;
    let method: Method = method.parse()?;

    info!("Valuing European {}...", right);
    info!("  Spot: {}, vol: {}, q: {}", spot, vol, div_yield);
    info!("  K: {}, T: {}, r: {}", strike, expiry, rate);
    info!("  Method: {}", method);

    let contract = OptionContract::new(
        Underlying::new(spot, vol, div_yield),
        right,
        strike,
        expiry,
        rate,
    );
    let mut builder = ValuationConfig::builder().method(method).keep_hist(keep_hist);
    if let Some(n) = nsteps {
        builder = builder.nsteps(n);
    }
    let result = european::value(&contract, &builder.build());

    super::print_result(&result);
    if let Some(Interim::BlackScholes { d1, d2 }) = result.interim {
        println!("d1 / d2     : {:.10} / {:.10}", d1, d2);
    }

    info!("Valuation complete");
    Ok(())
}
