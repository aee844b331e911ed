//! Reshape raw solver output into the published report.

use vf_core::units::{amp, volt};
use vf_solver::RawSolution;
use vf_topology::Topology;

use crate::types::{AnalysisReport, BranchCurrent, PowerEntry, VoltageDrop};

/// Assemble the final report from a raw solution.
///
/// Computes `p = v * i` per passive element, sums into `total_power_w`, and
/// shapes the topology-specific section. Pure reshape + sum; all validation
/// happened upstream.
pub fn aggregate(raw: &RawSolution) -> AnalysisReport {
    let mut total_power = 0.0;
    let mut power_consumption = Vec::with_capacity(raw.elements.len());
    for e in &raw.elements {
        let p = (volt(e.voltage_v) * amp(e.current_a)).value;
        total_power += p;
        power_consumption.push(PowerEntry {
            component_id: e.id.clone(),
            power_w: p,
        });
    }

    // Delivered magnitude: the source sees the total current at the shared
    // voltage, whichever quantity it imposed.
    let source_power = (volt(raw.shared_voltage_v) * amp(raw.total_current_a))
        .value
        .abs();

    let (current_a, total_current_a, voltage_drops, branch_currents) = match raw.topology {
        Topology::Series => {
            let drops = raw
                .elements
                .iter()
                .filter(|e| e.is_resistive())
                .map(|e| VoltageDrop {
                    component_id: e.id.clone(),
                    voltage_v: e.voltage_v,
                    current_a: e.current_a,
                })
                .collect();
            (Some(raw.total_current_a), None, Some(drops), None)
        }
        Topology::Parallel => {
            let branches = raw
                .elements
                .iter()
                .filter(|e| e.is_resistive())
                .map(|e| BranchCurrent {
                    component_id: e.id.clone(),
                    current_a: e.current_a,
                    voltage_v: e.voltage_v,
                })
                .collect();
            (None, Some(raw.total_current_a), None, Some(branches))
        }
    };

    AnalysisReport {
        topology: raw.topology,
        total_resistance_ohm: raw.total_resistance_ohm,
        current_a,
        total_current_a,
        total_power_w: total_power,
        source_id: raw.source_id.clone(),
        source_power_w: source_power,
        voltage_drops,
        branch_currents,
        power_consumption,
    }
}
