//! Closed set of supported component kinds.

use core::fmt;

/// The five supported element kinds.
///
/// Closed enum: the solver matches on this exhaustively, so adding a kind is
/// a compile-time event, not a runtime surprise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ComponentKind {
    Resistor,
    Capacitor,
    Inductor,
    VoltageSource,
    CurrentSource,
}

impl ComponentKind {
    /// Passive elements consume or store energy; they never supply it.
    pub fn is_passive(self) -> bool {
        matches!(
            self,
            ComponentKind::Resistor | ComponentKind::Capacitor | ComponentKind::Inductor
        )
    }

    /// Sources energize the circuit.
    pub fn is_source(self) -> bool {
        matches!(
            self,
            ComponentKind::VoltageSource | ComponentKind::CurrentSource
        )
    }

    /// Canonical SI display unit for this kind.
    pub fn canonical_unit(self) -> &'static str {
        match self {
            ComponentKind::Resistor => "Ω",
            ComponentKind::Capacitor => "F",
            ComponentKind::Inductor => "H",
            ComponentKind::VoltageSource => "V",
            ComponentKind::CurrentSource => "A",
        }
    }

    /// Stable string tag, matching the serialized form.
    pub fn tag(self) -> &'static str {
        match self {
            ComponentKind::Resistor => "resistor",
            ComponentKind::Capacitor => "capacitor",
            ComponentKind::Inductor => "inductor",
            ComponentKind::VoltageSource => "voltage-source",
            ComponentKind::CurrentSource => "current-source",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
