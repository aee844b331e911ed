//! vf-topology: circuit arrangement classification and validation.
//!
//! The component model carries no wiring information, so the arrangement is
//! an explicit caller-supplied [`Topology`] tag. [`resolve`] partitions the
//! component ensemble into passive elements and the single energizing
//! source, validates the ensemble (unique ids, exactly one source, at least
//! one passive element), and hands the solver a [`ResolvedCircuit`] of
//! borrowed views. Passive ordering is preserved for reporting.

pub mod error;
pub mod resolve;
pub mod topology;

// Re-exports
pub use error::{TopologyError, TopologyResult};
pub use resolve::{Drive, ResolvedCircuit, resolve};
pub use topology::Topology;
