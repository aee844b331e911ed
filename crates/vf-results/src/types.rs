//! Report data types.

use serde::{Deserialize, Serialize};
use vf_topology::Topology;

/// Voltage across and current through one resistive element in a series
/// chain. The current is the same for every entry (series invariant).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoltageDrop {
    pub component_id: String,
    pub voltage_v: f64,
    pub current_a: f64,
}

/// Current through one parallel branch. The voltage is the same for every
/// entry (parallel invariant).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchCurrent {
    pub component_id: String,
    pub current_a: f64,
    pub voltage_v: f64,
}

/// Power dissipated by one passive element. Reactive elements report 0 W
/// at DC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerEntry {
    pub component_id: String,
    pub power_w: f64,
}

/// The published result of one analysis call.
///
/// `total_resistance_ohm`, `total_power_w`, `source_power_w` and
/// `power_consumption` are always present. The series variant populates
/// `current_a` and `voltage_drops`; the parallel variant populates
/// `total_current_a` and `branch_currents`.
///
/// Sign convention: dissipated power is positive; `source_power_w` is the
/// sign-free magnitude of power delivered by the source, and equals
/// `total_power_w` for every valid result (energy conservation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub topology: Topology,
    pub total_resistance_ohm: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_a: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_current_a: Option<f64>,
    pub total_power_w: f64,
    pub source_id: String,
    pub source_power_w: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voltage_drops: Option<Vec<VoltageDrop>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_currents: Option<Vec<BranchCurrent>>,
    pub power_consumption: Vec<PowerEntry>,
}
