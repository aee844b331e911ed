//! vf-results: published analysis report types and aggregation.
//!
//! The aggregator is a pure reshape + sum over the solver's raw flows: it
//! computes per-element power (`p = v * i`), totals them, and shapes the
//! output into the series (`voltage_drops`) or parallel (`branch_currents`)
//! variant. No further validation happens here.

pub mod aggregate;
pub mod types;

pub use aggregate::aggregate;
pub use types::*;
