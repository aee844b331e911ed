//! The validated component record.

use crate::error::{ComponentError, ComponentResult};
use crate::kind::ComponentKind;
use vf_core::units::{Capacitance, Current, Inductance, Resistance, Voltage};
use vf_core::units::{amp, farad, henry, ohm, volt};

/// One electrical element: id + kind + nominal value + display unit.
///
/// Immutable after construction. The value is stored in SI base units of the
/// kind (ohms, farads, henries, volts, amps); the unit string is a display
/// tag only and is never used in arithmetic.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Component {
    id: String,
    kind: ComponentKind,
    value: f64,
    unit: String,
}

impl Component {
    /// Create a validated component.
    ///
    /// Fails if `value` is not finite, or if `kind` is passive and `value`
    /// is not strictly positive. Sources accept any finite value; zero means
    /// a disabled source.
    pub fn new(
        id: impl Into<String>,
        kind: ComponentKind,
        value: f64,
        unit: impl Into<String>,
    ) -> ComponentResult<Self> {
        let id = id.into();
        if !value.is_finite() {
            return Err(ComponentError::NonFinite { id, value });
        }
        if kind.is_passive() && value <= 0.0 {
            return Err(ComponentError::NonPositivePassive { id, kind, value });
        }
        Ok(Self {
            id,
            kind,
            value,
            unit: unit.into(),
        })
    }

    /// Resistor with value in ohms.
    pub fn resistor(id: impl Into<String>, ohms: f64) -> ComponentResult<Self> {
        Self::new(id, ComponentKind::Resistor, ohms, "Ω")
    }

    /// Capacitor with value in farads.
    pub fn capacitor(id: impl Into<String>, farads: f64) -> ComponentResult<Self> {
        Self::new(id, ComponentKind::Capacitor, farads, "F")
    }

    /// Inductor with value in henries.
    pub fn inductor(id: impl Into<String>, henries: f64) -> ComponentResult<Self> {
        Self::new(id, ComponentKind::Inductor, henries, "H")
    }

    /// Ideal voltage source with value in volts.
    pub fn voltage_source(id: impl Into<String>, volts: f64) -> ComponentResult<Self> {
        Self::new(id, ComponentKind::VoltageSource, volts, "V")
    }

    /// Ideal current source with value in amps.
    pub fn current_source(id: impl Into<String>, amps: f64) -> ComponentResult<Self> {
        Self::new(id, ComponentKind::CurrentSource, amps, "A")
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// Nominal magnitude in SI base units of the kind.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Display unit tag.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn is_passive(&self) -> bool {
        self.kind.is_passive()
    }

    pub fn is_source(&self) -> bool {
        self.kind.is_source()
    }

    /// Typed resistance, present for resistors only.
    pub fn resistance(&self) -> Option<Resistance> {
        (self.kind == ComponentKind::Resistor).then(|| ohm(self.value))
    }

    /// Typed capacitance, present for capacitors only.
    pub fn capacitance(&self) -> Option<Capacitance> {
        (self.kind == ComponentKind::Capacitor).then(|| farad(self.value))
    }

    /// Typed inductance, present for inductors only.
    pub fn inductance(&self) -> Option<Inductance> {
        (self.kind == ComponentKind::Inductor).then(|| henry(self.value))
    }

    /// Typed EMF, present for voltage sources only.
    pub fn source_voltage(&self) -> Option<Voltage> {
        (self.kind == ComponentKind::VoltageSource).then(|| volt(self.value))
    }

    /// Typed drive current, present for current sources only.
    pub fn source_current(&self) -> Option<Current> {
        (self.kind == ComponentKind::CurrentSource).then(|| amp(self.value))
    }
}
