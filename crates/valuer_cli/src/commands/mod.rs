//! CLI command implementations.

pub mod european;
pub mod lookback;

use valuer_pricing::PriceResult;

/// Prints the shared portion of a valuation result.
pub(crate) fn print_result(result: &PriceResult) {
    println!("method      : {}", result.method);
    if let Some(sub) = &result.sub_method {
        println!("sub-method  : {}", sub);
    }
    match result.price {
        Some(px) => println!("price       : {:.10}", px),
        None => println!("price       : (not computed; method is a stub)"),
    }
    if let (Some(call), Some(put)) = (result.call_price, result.put_price) {
        println!("call / put  : {:.10} / {:.10}", call, put);
    }
    if let Some(nsteps) = result.nsteps {
        println!("steps       : {}", nsteps);
    }
    if let Some(history) = &result.history {
        println!("tree levels : {}", history.stock.len());
    }
}
