//! Reference-value tests against the worked examples from Hull,
//! *Options, Futures, and Other Derivatives* (European lattice p.291,
//! lookback closed form Ch.26 and lattice p.607), exercised through the
//! public valuation entry points.

use approx::assert_relative_eq;
use valuer_models::instruments::{OptionContract, Right, Underlying};
use valuer_pricing::{european, lookback, Method, ValuationConfig};

fn european_hull_p291() -> OptionContract {
    OptionContract::new(
        Underlying::new(810.0, 0.2, 0.02),
        Right::Call,
        800.0,
        0.5,
        0.05,
    )
}

fn lookback_hull_ch26(right: Right) -> OptionContract {
    OptionContract::new(Underlying::new(50.0, 0.4, 0.0), right, 50.0, 0.25, 0.1)
}

#[test]
fn european_lattice_step_ladder() {
    let ladder = european::lattice_prices(&european_hull_p291(), &[2, 20, 200]);
    assert_relative_eq!(ladder[0], 53.394716374961348, epsilon = 1e-9);
    assert_relative_eq!(ladder[1], 56.40278872645991, epsilon = 1e-9);
    assert_relative_eq!(ladder[2], 56.324021659469274, epsilon = 1e-9);
}

#[test]
fn european_lattice_converges_to_closed_form() {
    let contract = european_hull_p291();
    let closed = european::closed_form(&contract).price.unwrap();
    let config = ValuationConfig::builder()
        .method(Method::LatticeTree)
        .nsteps(200)
        .build();
    let lattice = european::value(&contract, &config).price.unwrap();
    assert!((lattice - closed).abs() / closed < 0.005);
}

#[test]
fn european_put_call_parity_through_entry_point() {
    let call = european::value(&european_hull_p291(), &ValuationConfig::default());
    // Parity from the decomposed sides of a single quote.
    let forward = 810.0 * (-0.02_f64 * 0.5).exp() - 800.0 * (-0.05_f64 * 0.5).exp();
    let parity = call.call_price.unwrap() - call.put_price.unwrap();
    assert_relative_eq!(parity, forward, epsilon = 1e-6);
}

#[test]
fn european_full_tree_snapshot() {
    let config = ValuationConfig::builder()
        .method(Method::LatticeTree)
        .nsteps(2)
        .keep_hist(true)
        .build();
    let result = european::value(&european_hull_p291(), &config);
    let tree = result.history.unwrap();

    // Chronological from expiry back to the present, rounded for display.
    assert_relative_eq!(tree.stock[0][0], 663.17191, epsilon = 1e-9);
    assert_relative_eq!(tree.stock[0][2], 989.33623, epsilon = 1e-9);
    assert_relative_eq!(tree.option[2][0], 53.39472, epsilon = 1e-9);
    assert_eq!(tree.stock[2], vec![810.0]);
}

#[test]
fn lookback_closed_form_call_and_put() {
    let config = ValuationConfig::builder().floating_ref(50.0).build();

    let call = lookback::value(&lookback_hull_ch26(Right::Call), &config);
    assert_relative_eq!(call.price.unwrap(), 8.037120139607019, epsilon = 1e-4);

    let put = lookback::value(&lookback_hull_ch26(Right::Put), &config);
    assert_relative_eq!(put.price.unwrap(), 7.79021925989035, epsilon = 1e-4);
}

#[test]
fn lookback_lattice_reference_values() {
    let cases: [(f64, f64, f64, f64, usize, f64); 3] = [
        (35.0, 0.05, 0.25, 0.1, 100, 1.829899147224415),
        (50.0, 0.4, 0.25, 0.1, 1000, 8.13575890392886),
        (100.0, 0.02, 3.0, 0.01, 50, 6.436996102693329),
    ];
    for (spot, vol, expiry, rate, nsteps, expected) in cases {
        let contract = OptionContract::new(
            Underlying::new(spot, vol, 0.0),
            Right::Call,
            50.0,
            expiry,
            rate,
        );
        let config = ValuationConfig::builder()
            .method(Method::LatticeTree)
            .nsteps(nsteps)
            .build();
        let result = lookback::value(&contract, &config);
        assert_relative_eq!(result.price.unwrap(), expected, epsilon = 1e-9);
    }
}

#[test]
fn single_step_lattices_do_not_degenerate() {
    let config = ValuationConfig::builder()
        .method(Method::LatticeTree)
        .nsteps(1)
        .build();

    let eu = european::value(&european_hull_p291(), &config);
    assert!(eu.price.unwrap().is_finite());

    let lb = lookback::value(&lookback_hull_ch26(Right::Call), &config);
    assert!(lb.price.unwrap().is_finite());
}

#[test]
fn valuation_is_idempotent_across_methods() {
    let contract = lookback_hull_ch26(Right::Call);
    for method in [Method::ClosedForm, Method::LatticeTree] {
        let config = ValuationConfig::builder()
            .method(method)
            .nsteps(40)
            .keep_hist(true)
            .build();
        assert_eq!(
            lookback::value(&contract, &config),
            lookback::value(&contract, &config)
        );
    }
}
