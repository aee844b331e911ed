//! Raw solver output, consumed by the result aggregator.

use vf_topology::Topology;

/// Voltage and current through one passive element.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementFlow {
    pub id: String,
    /// DC resistance in ohms; `None` for reactive elements (capacitors and
    /// inductors carry no DC resistance).
    pub resistance_ohm: Option<f64>,
    /// Voltage across the element (V)
    pub voltage_v: f64,
    /// Current through the element (A)
    pub current_a: f64,
}

impl ElementFlow {
    pub fn is_resistive(&self) -> bool {
        self.resistance_ohm.is_some()
    }
}

/// Everything the reduction produced, before reshaping into the published
/// report: totals plus per-element flows in input order.
#[derive(Debug, Clone)]
pub struct RawSolution {
    pub topology: Topology,
    /// Equivalent resistance of the resistive elements (Ω)
    pub total_resistance_ohm: f64,
    /// Series: the single shared loop current. Parallel: the sum of branch
    /// currents. (A)
    pub total_current_a: f64,
    /// Series: the source EMF across the chain. Parallel: the voltage shared
    /// by every branch. (V)
    pub shared_voltage_v: f64,
    pub source_id: String,
    /// Per-passive-element flows, in caller order.
    pub elements: Vec<ElementFlow>,
}
