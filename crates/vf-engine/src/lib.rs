//! vf-engine: the single analysis operation.
//!
//! [`analyze`] chains topology resolution, reduction, and aggregation into
//! one pure call:
//!
//! ```
//! use vf_components::Component;
//! use vf_engine::analyze;
//! use vf_topology::Topology;
//!
//! let comps = vec![
//!     Component::resistor("R1", 10.0).unwrap(),
//!     Component::resistor("R2", 20.0).unwrap(),
//!     Component::voltage_source("V1", 9.0).unwrap(),
//! ];
//!
//! let report = analyze(&comps, Topology::Series).unwrap();
//! assert_eq!(report.total_resistance_ohm, 30.0);
//! assert_eq!(report.current_a, Some(0.3));
//! ```
//!
//! The engine holds no state: every call owns nothing beyond its borrowed
//! input slice and returns a freshly allocated report. Concurrent calls with
//! independent inputs need no coordination. Any failure at any stage aborts
//! the call; there is no partial result and no retry.
//!
//! The [`schema`] module is the host-facing input surface: a JSON circuit
//! document that deserializes into validated components plus a topology tag.

pub mod error;
pub mod schema;

use tracing::debug;
use vf_components::Component;
use vf_results::{AnalysisReport, aggregate};
use vf_topology::{Topology, resolve};

pub use error::{EngineError, EngineResult};
pub use schema::{CircuitDoc, ComponentSpec, load_circuit, parse_circuit};

/// Analyze a component ensemble under an explicit topology tag.
///
/// The caller slice is never mutated or retained.
pub fn analyze(components: &[Component], topology: Topology) -> EngineResult<AnalysisReport> {
    debug!(
        components = components.len(),
        topology = %topology,
        "analysis requested"
    );
    let resolved = resolve(components, topology)?;
    let raw = vf_solver::solve(&resolved)?;
    Ok(aggregate(&raw))
}
