//! Lookback valuation command.

use tracing::info;
use valuer_models::instruments::{OptionContract, Right, Underlying};
use valuer_pricing::{lookback, Interim, Method, ValuationConfig};

use crate::Result;

/// Runs the lookback command.
#[allow(clippy::too_many_arguments)]
pub fn run(
    spot: f64,
    vol: f64,
    div_yield: f64,
    right: &str,
    expiry: f64,
    rate: f64,
    method: &str,
    nsteps: Option<usize>,
    floating_ref: Option<f64>,
    keep_hist: bool,
) -> Result<()> {
    let right: Right = right.parse()?;
    let method: Method = method.parse()?;

    info!("Valuing floating-strike lookback {}...", right);
    info!("  Spot: {}, vol: {}, q: {}", spot, vol, div_yield);
    info!("  T: {}, r: {}", expiry, rate);
    info!("  Method: {}", method);

    // The fixed strike is unused by floating-strike valuations; the spot
    // stands in so the contract value is fully populated.
    let contract = OptionContract::new(
        Underlying::new(spot, vol, div_yield),
        right,
        spot,
        expiry,
        rate,
    );
    let mut builder = ValuationConfig::builder().method(method).keep_hist(keep_hist);
    if let Some(n) = nsteps {
        builder = builder.nsteps(n);
    }
    if let Some(sfl) = floating_ref {
        builder = builder.floating_ref(sfl);
    }
    let result = lookback::value(&contract, &builder.build());

    super::print_result(&result);
    if let Some(sfl) = result.floating_ref {
        println!("floating ref: {}", sfl);
    }
    if let Some(Interim::GoldmanSosinGatto { a1, a2, a3, y1 }) = result.interim {
        println!("a1 / a2 / a3: {:.10} / {:.10} / {:.10}", a1, a2, a3);
        println!("Y1          : {:.10}", y1);
    }

    info!("Valuation complete");
    Ok(())
}
