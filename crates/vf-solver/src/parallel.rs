//! Parallel reduction: one shared voltage, one branch per passive element.

use tracing::debug;
use vf_core::units::{Current, Voltage, amp, siemens, volt};
use vf_topology::{Drive, ResolvedCircuit};

use crate::common::check_finite;
use crate::error::{SolverError, SolverResult};
use crate::solution::{ElementFlow, RawSolution};

/// Reduce a parallel arrangement.
///
/// `total_r = 1 / Σ (1 / r_i)` over resistors (harmonic combination). The
/// shared voltage is the source EMF, or `i_total * total_r` for a current
/// source; each resistive branch then carries `v / r_i`. Reactive branches
/// see the shared voltage but pass no DC current.
pub(crate) fn solve_parallel(circuit: &ResolvedCircuit<'_>) -> SolverResult<RawSolution> {
    let mut g_total = siemens(0.0);
    let mut has_resistor = false;
    for comp in &circuit.passives {
        let Some(r) = comp.resistance() else {
            continue;
        };
        // The constructor rejects non-positive passives, but the reciprocal
        // must never see a zero; check the input value exactly.
        if r.value == 0.0 {
            return Err(SolverError::ZeroResistance {
                id: Some(comp.id().to_string()),
            });
        }
        g_total += r.recip();
        has_resistor = true;
    }

    // All-reactive arrangement has no DC path between the shared nodes.
    if !has_resistor {
        return Err(SolverError::ZeroResistance { id: None });
    }
    let total_r = g_total.recip();

    let (shared_voltage, total_current): (Voltage, Current) = match circuit.drive {
        Drive::Voltage(v) => {
            let v = volt(v);
            (v, v * g_total)
        }
        // Back-substitute through the equivalent resistance.
        Drive::Current(i) => {
            let i = amp(i);
            (i * total_r, i)
        }
    };

    // Conductance of a subnormal branch resistance overflows the sum, so
    // both derived quantities need the check even when the drive is finite.
    check_finite(shared_voltage.value, "shared voltage")?;
    check_finite(total_current.value, "total current")?;

    let elements = circuit
        .passives
        .iter()
        .map(|comp| match comp.resistance() {
            Some(r) => ElementFlow {
                id: comp.id().to_string(),
                resistance_ohm: Some(r.value),
                voltage_v: shared_voltage.value,
                current_a: (shared_voltage / r).value,
            },
            // Reactive branch: shared voltage across it, no DC current
            None => ElementFlow {
                id: comp.id().to_string(),
                resistance_ohm: None,
                voltage_v: shared_voltage.value,
                current_a: 0.0,
            },
        })
        .collect();

    debug!(
        total_resistance_ohm = total_r.value,
        total_current_a = total_current.value,
        shared_voltage_v = shared_voltage.value,
        "parallel reduction complete"
    );

    Ok(RawSolution {
        topology: circuit.topology,
        total_resistance_ohm: total_r.value,
        total_current_a: total_current.value,
        shared_voltage_v: shared_voltage.value,
        source_id: circuit.source.id().to_string(),
        elements,
    })
}
