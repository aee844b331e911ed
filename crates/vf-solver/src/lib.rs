//! DC reduction solver for series and parallel circuits.
//!
//! This crate consumes a validated [`vf_topology::ResolvedCircuit`] and
//! produces a [`RawSolution`]: the equivalent resistance, the source-driven
//! current, and per-element voltages and currents from Ohm's-law
//! propagation. Capacitors and inductors are carried through as identified
//! but non-resistive at DC; they contribute nothing to the equivalent
//! resistance and dissipate no power.
//!
//! All arithmetic is double precision with no internal rounding. Zero
//! checks on resistance are exact compares on validated input values, not
//! epsilon tests.

pub mod common;
pub mod error;
pub mod parallel;
pub mod series;
pub mod solution;
pub mod solve;

pub use error::{SolverError, SolverResult};
pub use solution::{ElementFlow, RawSolution};
pub use solve::solve;
