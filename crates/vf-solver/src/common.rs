//! Common helpers for reduction arithmetic.

use crate::error::{SolverError, SolverResult};
use vf_core::numeric::ensure_finite;

/// Ensure a computed quantity is finite, returning SolverError if not.
pub fn check_finite(value: f64, what: &'static str) -> SolverResult<()> {
    ensure_finite(value, what).map_err(|_| SolverError::NonFinite { what })?;
    Ok(())
}
