//! Circuit file schema: the host-facing JSON input surface.
//!
//! ```json
//! {
//!   "topology": "series",
//!   "components": [
//!     { "id": "R1", "kind": "resistor", "value": 10.0 },
//!     { "id": "R2", "kind": "resistor", "value": 20.0, "unit": "Ω" },
//!     { "id": "V1", "kind": "voltage-source", "value": 9.0 }
//!   ]
//! }
//! ```
//!
//! Deserialization is raw; [`CircuitDoc::into_circuit`] runs the component
//! validation, so a loaded circuit is exactly as trustworthy as one built
//! through [`Component::new`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use vf_components::{Component, ComponentKind};
use vf_topology::Topology;

use crate::error::EngineResult;

/// One component entry as written in a circuit file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentSpec {
    pub id: String,
    pub kind: ComponentKind,
    pub value: f64,
    /// Optional display unit; defaults to the canonical unit of the kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl ComponentSpec {
    /// Validate into a typed component.
    pub fn into_component(self) -> EngineResult<Component> {
        let unit = self
            .unit
            .unwrap_or_else(|| self.kind.canonical_unit().to_string());
        Ok(Component::new(self.id, self.kind, self.value, unit)?)
    }
}

/// A whole circuit document: topology tag plus component list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircuitDoc {
    pub topology: String,
    pub components: Vec<ComponentSpec>,
}

impl CircuitDoc {
    /// Validate into typed input for [`crate::analyze`].
    ///
    /// Parses the topology tag (rejecting anything outside
    /// series/parallel) and constructs each component through the
    /// validating constructor.
    pub fn into_circuit(self) -> EngineResult<(Vec<Component>, Topology)> {
        let topology: Topology = self.topology.parse()?;
        let components = self
            .components
            .into_iter()
            .map(ComponentSpec::into_component)
            .collect::<EngineResult<Vec<_>>>()?;
        Ok((components, topology))
    }
}

/// Parse a circuit document from a JSON string.
pub fn parse_circuit(json: &str) -> EngineResult<(Vec<Component>, Topology)> {
    let doc: CircuitDoc = serde_json::from_str(json)?;
    doc.into_circuit()
}

/// Load a circuit document from a JSON file.
pub fn load_circuit(path: &Path) -> EngineResult<(Vec<Component>, Topology)> {
    let json = fs::read_to_string(path)?;
    parse_circuit(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EngineError;
    use vf_topology::TopologyError;

    const SERIES_DOC: &str = r#"{
        "topology": "series",
        "components": [
            { "id": "R1", "kind": "resistor", "value": 10.0 },
            { "id": "R2", "kind": "resistor", "value": 20.0, "unit": "Ω" },
            { "id": "V1", "kind": "voltage-source", "value": 9.0 }
        ]
    }"#;

    #[test]
    fn parse_valid_document() {
        let (comps, topology) = parse_circuit(SERIES_DOC).unwrap();
        assert_eq!(topology, Topology::Series);
        assert_eq!(comps.len(), 3);
        assert_eq!(comps[0].id(), "R1");
        assert_eq!(comps[0].unit(), "Ω");
        assert_eq!(comps[2].kind(), ComponentKind::VoltageSource);
    }

    #[test]
    fn unknown_kind_tag_is_a_json_error() {
        let doc = r#"{
            "topology": "series",
            "components": [ { "id": "D1", "kind": "diode", "value": 0.7 } ]
        }"#;
        assert!(matches!(
            parse_circuit(doc).unwrap_err(),
            EngineError::Json(_)
        ));
    }

    #[test]
    fn unknown_topology_tag_is_rejected() {
        let doc = r#"{
            "topology": "mesh",
            "components": [ { "id": "R1", "kind": "resistor", "value": 1.0 } ]
        }"#;
        assert!(matches!(
            parse_circuit(doc).unwrap_err(),
            EngineError::Topology(TopologyError::UnsupportedTopology { .. })
        ));
    }

    #[test]
    fn invalid_component_value_is_rejected_on_load() {
        let doc = r#"{
            "topology": "series",
            "components": [
                { "id": "R1", "kind": "resistor", "value": -1.0 },
                { "id": "V1", "kind": "voltage-source", "value": 9.0 }
            ]
        }"#;
        assert!(matches!(
            parse_circuit(doc).unwrap_err(),
            EngineError::Component(_)
        ));
    }

    #[test]
    fn default_unit_fills_canonical_tag() {
        let (comps, _) = parse_circuit(SERIES_DOC).unwrap();
        assert_eq!(comps[2].unit(), "V");
    }
}
