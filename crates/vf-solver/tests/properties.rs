//! Property tests for the reduction algebra.

use proptest::prelude::*;
use vf_components::Component;
use vf_solver::solve;
use vf_topology::{Topology, resolve};

fn circuit_with_resistors(values: &[f64], volts: f64) -> Vec<Component> {
    let mut comps: Vec<Component> = values
        .iter()
        .enumerate()
        .map(|(i, &r)| Component::resistor(format!("R{}", i + 1), r).unwrap())
        .collect();
    comps.push(Component::voltage_source("V1", volts).unwrap());
    comps
}

proptest! {
    #[test]
    fn series_resistance_is_additive(
        values in prop::collection::vec(1e-3_f64..1e6, 1..8),
        volts in 0.1_f64..1e3,
    ) {
        let comps = circuit_with_resistors(&values, volts);
        let resolved = resolve(&comps, Topology::Series).unwrap();
        let sol = solve(&resolved).unwrap();

        let expected: f64 = values.iter().sum();
        prop_assert!((sol.total_resistance_ohm - expected).abs() <= 1e-9 * expected);
    }

    #[test]
    fn parallel_resistance_below_min_branch(
        values in prop::collection::vec(1e-3_f64..1e6, 2..8),
        volts in 0.1_f64..1e3,
    ) {
        let comps = circuit_with_resistors(&values, volts);
        let resolved = resolve(&comps, Topology::Parallel).unwrap();
        let sol = solve(&resolved).unwrap();

        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        prop_assert!(sol.total_resistance_ohm < min);
    }

    #[test]
    fn series_ohms_law_round_trip(
        values in prop::collection::vec(1e-3_f64..1e6, 1..8),
        volts in 0.1_f64..1e3,
    ) {
        let comps = circuit_with_resistors(&values, volts);
        let resolved = resolve(&comps, Topology::Series).unwrap();
        let sol = solve(&resolved).unwrap();

        for e in &sol.elements {
            let r = e.resistance_ohm.unwrap();
            let v = sol.total_current_a * r;
            prop_assert!((e.voltage_v - v).abs() <= 1e-9 * v.abs().max(1e-12));
            prop_assert_eq!(e.current_a, sol.total_current_a);
        }
    }

    #[test]
    fn parallel_branch_currents_sum(
        values in prop::collection::vec(1e-3_f64..1e6, 1..8),
        volts in 0.1_f64..1e3,
    ) {
        let comps = circuit_with_resistors(&values, volts);
        let resolved = resolve(&comps, Topology::Parallel).unwrap();
        let sol = solve(&resolved).unwrap();

        let sum: f64 = sol.elements.iter().map(|e| e.current_a).sum();
        prop_assert!((sum - sol.total_current_a).abs() <= 1e-9 * sol.total_current_a.abs());

        for e in &sol.elements {
            let r = e.resistance_ohm.unwrap();
            let i = sol.shared_voltage_v / r;
            prop_assert!((e.current_a - i).abs() <= 1e-9 * i.abs().max(1e-12));
        }
    }
}
