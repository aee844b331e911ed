//! Error types for solver operations.

use thiserror::Error;

/// Errors that can occur during circuit reduction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// A reduction step would divide by a zero-valued equivalent or branch
    /// resistance. `id` names the offending component when there is one;
    /// `None` means the equivalent resistance of the whole arrangement is
    /// zero (e.g. no resistive path exists).
    #[error("Zero resistance{}", .id.as_ref().map(|i| format!(" in component '{i}'")).unwrap_or_else(|| " in equivalent circuit".to_string()))]
    ZeroResistance { id: Option<String> },

    #[error("Non-finite {what} computed during reduction")]
    NonFinite { what: &'static str },
}

pub type SolverResult<T> = Result<T, SolverError>;
