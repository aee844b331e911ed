//! High-level solver interface.

use tracing::debug;
use vf_topology::{ResolvedCircuit, Topology};

use crate::error::SolverResult;
use crate::parallel::solve_parallel;
use crate::series::solve_series;
use crate::solution::RawSolution;

/// Apply the arrangement-specific reduction to a resolved circuit.
///
/// Pure and synchronous: one linear pass over the passive elements for
/// series, one reciprocal-sum pass plus one division pass for parallel.
/// Fails with [`crate::SolverError::ZeroResistance`] when a reduction step
/// would divide by a zero-valued equivalent or branch resistance.
pub fn solve(circuit: &ResolvedCircuit<'_>) -> SolverResult<RawSolution> {
    debug!(
        topology = %circuit.topology,
        passives = circuit.passives.len(),
        source = circuit.source.id(),
        "solving circuit"
    );
    match circuit.topology {
        Topology::Series => solve_series(circuit),
        Topology::Parallel => solve_parallel(circuit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vf_components::Component;
    use vf_topology::resolve;

    #[test]
    fn dispatch_matches_topology() {
        let comps = vec![
            Component::resistor("R1", 10.0).unwrap(),
            Component::resistor("R2", 10.0).unwrap(),
            Component::voltage_source("V1", 10.0).unwrap(),
        ];

        let series = solve(&resolve(&comps, Topology::Series).unwrap()).unwrap();
        assert_eq!(series.total_resistance_ohm, 20.0);

        let parallel = solve(&resolve(&comps, Topology::Parallel).unwrap()).unwrap();
        assert_eq!(parallel.total_resistance_ohm, 5.0);
    }
}
