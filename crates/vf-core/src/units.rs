// vf-core/src/units.rs

use uom::si::f64::{
    Capacitance as UomCapacitance, ElectricCurrent as UomElectricCurrent,
    ElectricPotential as UomElectricPotential, ElectricalConductance as UomElectricalConductance,
    ElectricalResistance as UomElectricalResistance, Inductance as UomInductance,
    Power as UomPower,
};

// Public canonical unit types (SI, f64)
pub type Capacitance = UomCapacitance;
pub type Conductance = UomElectricalConductance;
pub type Current = UomElectricCurrent;
pub type Inductance = UomInductance;
pub type Power = UomPower;
pub type Resistance = UomElectricalResistance;
pub type Voltage = UomElectricPotential;

#[inline]
pub fn ohm(v: f64) -> Resistance {
    use uom::si::electrical_resistance::ohm;
    Resistance::new::<ohm>(v)
}

#[inline]
pub fn siemens(v: f64) -> Conductance {
    use uom::si::electrical_conductance::siemens;
    Conductance::new::<siemens>(v)
}

#[inline]
pub fn volt(v: f64) -> Voltage {
    use uom::si::electric_potential::volt;
    Voltage::new::<volt>(v)
}

#[inline]
pub fn amp(v: f64) -> Current {
    use uom::si::electric_current::ampere;
    Current::new::<ampere>(v)
}

#[inline]
pub fn watt(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

#[inline]
pub fn farad(v: f64) -> Capacitance {
    use uom::si::capacitance::farad;
    Capacitance::new::<farad>(v)
}

#[inline]
pub fn henry(v: f64) -> Inductance {
    use uom::si::inductance::henry;
    Inductance::new::<henry>(v)
}
