//! Ensemble validation and source/passive partitioning.

use std::collections::HashSet;

use crate::error::{TopologyError, TopologyResult};
use crate::topology::Topology;
use vf_components::Component;

/// How the single source energizes the circuit. Values are SI base units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Drive {
    /// An imposed EMF in volts.
    Voltage(f64),
    /// An imposed current in amps.
    Current(f64),
}

/// A validated view of one circuit, ready for the solver.
///
/// Borrows from the caller's component slice; the engine never takes
/// ownership of or mutates caller input.
#[derive(Debug, Clone)]
pub struct ResolvedCircuit<'a> {
    pub topology: Topology,
    /// The single energizing element.
    pub source: &'a Component,
    /// What the source imposes, extracted so the solver can match on it
    /// exhaustively.
    pub drive: Drive,
    /// Passive elements in caller order. In a parallel arrangement each one
    /// is its own branch.
    pub passives: Vec<&'a Component>,
}

impl<'a> ResolvedCircuit<'a> {
    /// Passive elements that carry DC resistance (resistors).
    pub fn resistors(&self) -> impl Iterator<Item = &'a Component> + '_ {
        self.passives
            .iter()
            .copied()
            .filter(|c| c.resistance().is_some())
    }
}

/// Classify and validate a component ensemble under an explicit topology tag.
///
/// Checks, in order:
/// 1. ids are unique across the whole ensemble,
/// 2. exactly one source element is present,
/// 3. at least one passive element is present.
///
/// Passive ordering is preserved; it does not affect the arithmetic but it
/// fixes the reporting order downstream.
pub fn resolve<'a>(
    components: &'a [Component],
    topology: Topology,
) -> TopologyResult<ResolvedCircuit<'a>> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(components.len());
    for comp in components {
        if !seen.insert(comp.id()) {
            return Err(TopologyError::DuplicateId {
                id: comp.id().to_string(),
            });
        }
    }

    let mut source: Option<(&Component, Drive)> = None;
    let mut passives: Vec<&Component> = Vec::new();

    for comp in components {
        let drive = if let Some(v) = comp.source_voltage() {
            Some(Drive::Voltage(v.value))
        } else {
            comp.source_current().map(|i| Drive::Current(i.value))
        };

        match drive {
            Some(drive) => match source {
                None => source = Some((comp, drive)),
                Some((first, _)) => {
                    return Err(TopologyError::MultipleSources {
                        first: first.id().to_string(),
                        second: comp.id().to_string(),
                    });
                }
            },
            None => passives.push(comp),
        }
    }

    let (source, drive) = source.ok_or(TopologyError::NoSource)?;
    if passives.is_empty() {
        return Err(TopologyError::EmptyCircuit);
    }

    Ok(ResolvedCircuit {
        topology,
        source,
        drive,
        passives,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vf_components::ComponentKind;

    fn series_input() -> Vec<Component> {
        vec![
            Component::resistor("R1", 10.0).unwrap(),
            Component::resistor("R2", 20.0).unwrap(),
            Component::voltage_source("V1", 9.0).unwrap(),
        ]
    }

    #[test]
    fn resolve_partitions_source_and_passives() {
        let comps = series_input();
        let resolved = resolve(&comps, Topology::Series).unwrap();
        assert_eq!(resolved.source.id(), "V1");
        assert_eq!(resolved.passives.len(), 2);
        assert_eq!(resolved.topology, Topology::Series);
    }

    #[test]
    fn resolve_preserves_passive_order() {
        let comps = vec![
            Component::voltage_source("V1", 5.0).unwrap(),
            Component::resistor("Rb", 2.0).unwrap(),
            Component::capacitor("Ca", 1e-6).unwrap(),
            Component::resistor("Ra", 1.0).unwrap(),
        ];
        let resolved = resolve(&comps, Topology::Parallel).unwrap();
        let ids: Vec<&str> = resolved.passives.iter().map(|c| c.id()).collect();
        assert_eq!(ids, ["Rb", "Ca", "Ra"]);
    }

    #[test]
    fn drive_reflects_source_kind() {
        let comps = series_input();
        let resolved = resolve(&comps, Topology::Series).unwrap();
        assert_eq!(resolved.drive, Drive::Voltage(9.0));

        let comps = vec![
            Component::current_source("I1", 0.25).unwrap(),
            Component::resistor("R1", 4.0).unwrap(),
        ];
        let resolved = resolve(&comps, Topology::Parallel).unwrap();
        assert_eq!(resolved.drive, Drive::Current(0.25));
    }

    #[test]
    fn resolve_rejects_no_source() {
        let comps = vec![Component::resistor("R1", 10.0).unwrap()];
        assert_eq!(
            resolve(&comps, Topology::Series).unwrap_err(),
            TopologyError::NoSource
        );
    }

    #[test]
    fn resolve_rejects_multiple_sources() {
        let comps = vec![
            Component::voltage_source("V1", 5.0).unwrap(),
            Component::voltage_source("V2", 9.0).unwrap(),
            Component::resistor("R1", 10.0).unwrap(),
        ];
        let err = resolve(&comps, Topology::Series).unwrap_err();
        assert_eq!(
            err,
            TopologyError::MultipleSources {
                first: "V1".into(),
                second: "V2".into(),
            }
        );
    }

    #[test]
    fn mixed_source_kinds_still_rejected() {
        let comps = vec![
            Component::voltage_source("V1", 5.0).unwrap(),
            Component::current_source("I1", 0.1).unwrap(),
            Component::resistor("R1", 10.0).unwrap(),
        ];
        assert!(matches!(
            resolve(&comps, Topology::Parallel).unwrap_err(),
            TopologyError::MultipleSources { .. }
        ));
    }

    #[test]
    fn resolve_rejects_empty_passives() {
        let comps = vec![Component::voltage_source("V1", 5.0).unwrap()];
        assert_eq!(
            resolve(&comps, Topology::Parallel).unwrap_err(),
            TopologyError::EmptyCircuit
        );
    }

    #[test]
    fn resolve_rejects_duplicate_ids() {
        let comps = vec![
            Component::resistor("R1", 10.0).unwrap(),
            Component::resistor("R1", 20.0).unwrap(),
            Component::voltage_source("V1", 9.0).unwrap(),
        ];
        assert_eq!(
            resolve(&comps, Topology::Series).unwrap_err(),
            TopologyError::DuplicateId { id: "R1".into() }
        );
    }

    #[test]
    fn duplicate_id_across_kinds_rejected() {
        let comps = vec![
            Component::resistor("X", 10.0).unwrap(),
            Component::new("X", ComponentKind::VoltageSource, 9.0, "V").unwrap(),
        ];
        assert!(matches!(
            resolve(&comps, Topology::Series).unwrap_err(),
            TopologyError::DuplicateId { .. }
        ));
    }

    #[test]
    fn resistors_iterator_skips_reactive() {
        let comps = vec![
            Component::resistor("R1", 10.0).unwrap(),
            Component::capacitor("C1", 1e-6).unwrap(),
            Component::inductor("L1", 1e-3).unwrap(),
            Component::voltage_source("V1", 9.0).unwrap(),
        ];
        let resolved = resolve(&comps, Topology::Series).unwrap();
        let ids: Vec<&str> = resolved.resistors().map(|c| c.id()).collect();
        assert_eq!(ids, ["R1"]);
    }
}
