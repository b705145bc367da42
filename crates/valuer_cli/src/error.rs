//! CLI error types.

use thiserror::Error;
use valuer_core::types::ValuationError;

/// Errors surfaced by the CLI.
///
/// The CLI's own failure set is small: every flag clap cannot reject itself
/// is handed to the valuation layer, whose parse errors (unknown side or
/// method) bubble up here.
#[derive(Debug, Error)]
pub enum CliError {
    /// A valuation-layer failure (unknown side or method).
    #[error(transparent)]
    Valuation(#[from] ValuationError),
}

/// CLI result alias.
pub type Result<T> = std::result::Result<T, CliError>;
