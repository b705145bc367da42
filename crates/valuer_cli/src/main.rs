//! Optval CLI - Command Line Valuation
//!
//! Operational entry point for the option valuation toolkit.
//!
//! # Commands
//!
//! - `optval european` - Value a European option
//! - `optval lookback` - Value a floating-strike lookback option
//!
//! Both commands accept `--method BS|LT|MC|FD`, lattice step counts, and a
//! history flag; `lookback` additionally takes the floating-strike
//! reference. All valuation logic lives in the library crates; this binary
//! parses flags, runs one valuation, and prints the result.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Option valuation toolkit CLI
#[derive(Parser)]
#[command(name = "optval")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Value a European option
    European {
        /// Spot price of the underlying
        #[arg(long)]
        spot: f64,

        /// Annualised volatility
        #[arg(long)]
        vol: f64,

        /// Continuous dividend yield
        #[arg(long, default_value = "0.0")]
        div_yield: f64,

        /// Option side: call or put
        #[arg(long, default_value = "call")]
        right: String,

        /// Strike price
        #[arg(long)]
        strike: f64,

        /// Time to maturity in years
        #[arg(long)]
        expiry: f64,

        /// Risk-free rate
        #[arg(long)]
        rate: f64,

        /// Pricing method (BS, LT, MC, FD)
        #[arg(short, long, default_value = "BS")]
        method: String,

        /// Lattice step count
        #[arg(short, long)]
        nsteps: Option<usize>,

        /// Retain and report the lattice history
        #[arg(long)]
        keep_hist: bool,
    },

    /// Value a floating-strike lookback option
    Lookback {
        /// Spot price of the underlying
        #[arg(long)]
        spot: f64,

        /// Annualised volatility
        #[arg(long)]
        vol: f64,

        /// Continuous dividend yield
        #[arg(long, default_value = "0.0")]
        div_yield: f64,

        /// Option side: call or put
        #[arg(long, default_value = "call")]
        right: String,

        /// Time to maturity in years
        #[arg(long)]
        expiry: f64,

        /// Risk-free rate
        #[arg(long)]
        rate: f64,

        /// Pricing method (BS, LT, MC, FD)
        #[arg(short, long, default_value = "BS")]
        method: String,

        /// Lattice step count
        #[arg(short, long)]
        nsteps: Option<usize>,

        /// Floating-strike reference (minimum to date for a call, maximum
        /// for a put)
        #[arg(long)]
        floating_ref: Option<f64>,

        /// Retain and report the lattice history
        #[arg(long)]
        keep_hist: bool,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::European {
            spot,
            vol,
            div_yield,
            right,
            strike,
            expiry,
            rate,
            method,
            nsteps,
            keep_hist,
        } => commands::european::run(
            spot, vol, div_yield, &right, strike, expiry, rate, &method, nsteps, keep_hist,
        ),
        Commands::Lookback {
            spot,
            vol,
            div_yield,
            right,
            expiry,
            rate,
            method,
            nsteps,
            floating_ref,
            keep_hist,
        } => commands::lookback::run(
            spot,
            vol,
            div_yield,
            &right,
            expiry,
            rate,
            &method,
            nsteps,
            floating_ref,
            keep_hist,
        ),
    }
}
