//! Series reduction: one shared current path.

use tracing::debug;
use vf_core::units::{Current, Resistance, Voltage, amp, ohm, volt};
use vf_topology::{Drive, ResolvedCircuit};

use crate::common::check_finite;
use crate::error::{SolverError, SolverResult};
use crate::solution::{ElementFlow, RawSolution};

/// Reduce a series arrangement.
///
/// `total_r = Σ r_i` over resistors; the shared current follows from the
/// drive (Ohm's law for a voltage source, imposed directly for a current
/// source); per-resistor drops are `i * r_i`. Reactive elements sit in the
/// path carrying the shared current with zero DC drop.
pub(crate) fn solve_series(circuit: &ResolvedCircuit<'_>) -> SolverResult<RawSolution> {
    let total_r: Resistance = circuit
        .resistors()
        .filter_map(|c| c.resistance())
        .fold(ohm(0.0), |acc, r| acc + r);

    let (current, shared_voltage): (Current, Voltage) = match circuit.drive {
        Drive::Voltage(v) => {
            // Exact-zero compare: the sum of validated positive resistances
            // is zero only when no resistor is present at all.
            if total_r.value == 0.0 {
                return Err(SolverError::ZeroResistance { id: None });
            }
            let v = volt(v);
            (v / total_r, v)
        }
        // A current source imposes the loop current directly.
        Drive::Current(i) => {
            let i = amp(i);
            (i, i * total_r)
        }
    };

    check_finite(current.value, "current")?;

    let elements = circuit
        .passives
        .iter()
        .map(|comp| match comp.resistance() {
            Some(r) => ElementFlow {
                id: comp.id().to_string(),
                resistance_ohm: Some(r.value),
                voltage_v: (current * r).value,
                current_a: current.value,
            },
            // Reactive element: carries the loop current, drops nothing at DC
            None => ElementFlow {
                id: comp.id().to_string(),
                resistance_ohm: None,
                voltage_v: 0.0,
                current_a: current.value,
            },
        })
        .collect();

    debug!(
        total_resistance_ohm = total_r.value,
        current_a = current.value,
        "series reduction complete"
    );

    Ok(RawSolution {
        topology: circuit.topology,
        total_resistance_ohm: total_r.value,
        total_current_a: current.value,
        shared_voltage_v: shared_voltage.value,
        source_id: circuit.source.id().to_string(),
        elements,
    })
}
