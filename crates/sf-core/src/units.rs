// sf-core/src/units.rs

use uom::si::f64::{
    Length as UomLength, Mass as UomMass, MassDensity as UomMassDensity,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Mass = UomMass;
pub type Density = UomMassDensity;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn kgpm3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

/// Raw SI magnitudes, for code that works on plain `f64` fields.
pub mod raw {
    use super::*;

    #[inline]
    pub fn kelvin(t: Temperature) -> f64 {
        t.get::<uom::si::thermodynamic_temperature::kelvin>()
    }

    #[inline]
    pub fn kilograms(m: Mass) -> f64 {
        m.get::<uom::si::mass::kilogram>()
    }

    #[inline]
    pub fn kg_per_m3(d: Density) -> f64 {
        d.get::<uom::si::mass_density::kilogram_per_cubic_meter>()
    }

    #[inline]
    pub fn meters(l: Length) -> f64 {
        l.get::<uom::si::length::meter>()
    }
}
