//! Physical constants of a single run.
//!
//! Immutable once built and passed explicitly to every component, so two
//! scenarios can coexist in one process.

use crate::error::{SfError, SfResult};
use crate::numeric::Real;
use crate::units::{Density, Length, Mass, Temperature, raw};

/// Boltzmann constant used by the reference atmosphere (J/K).
pub const BOLTZMANN: Real = 1.38e-23;

/// Atomic mass unit used by the reference atmosphere (kg).
pub const AMU: Real = 1.67e-27;

/// Adiabatic index of a monatomic gas.
pub const GAMMA_MONATOMIC: Real = 5.0 / 3.0;

/// Scale height that defines the reference gravity (m).
pub const REFERENCE_SCALE_HEIGHT: Real = 100_000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicalConstants {
    /// Reference temperature (K).
    pub t0: Real,
    /// Molecular mass (kg).
    pub mass: Real,
    /// Density at the bottom of the column (kg/m^3).
    pub r0: Real,
    /// Boltzmann constant (J/K).
    pub kb: Real,
    /// Adiabatic index.
    pub gamma: Real,
    /// Gravitational acceleration, negative points down (m/s^2).
    pub gravity: Real,
}

impl PhysicalConstants {
    /// Build constants with gravity derived so that the isothermal scale
    /// height at `t0` equals [`REFERENCE_SCALE_HEIGHT`].
    pub fn new(t0: Real, mass: Real, r0: Real, kb: Real) -> SfResult<Self> {
        Self::with_scale_height(t0, mass, r0, kb, REFERENCE_SCALE_HEIGHT)
    }

    /// Same as [`PhysicalConstants::new`] with an explicit reference scale height.
    pub fn with_scale_height(
        t0: Real,
        mass: Real,
        r0: Real,
        kb: Real,
        scale_height: Real,
    ) -> SfResult<Self> {
        for (v, what) in [
            (t0, "t0 must be positive and finite"),
            (mass, "mass must be positive and finite"),
            (r0, "r0 must be positive and finite"),
            (kb, "kb must be positive and finite"),
            (scale_height, "reference scale height must be positive and finite"),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(SfError::InvalidArg { what });
            }
        }
        Ok(Self {
            t0,
            mass,
            r0,
            kb,
            gamma: GAMMA_MONATOMIC,
            gravity: -kb * t0 / (mass * scale_height),
        })
    }

    /// Build from SI quantities.
    pub fn from_quantities(
        t0: Temperature,
        mass: Mass,
        r0: Density,
        kb: Real,
        scale_height: Length,
    ) -> SfResult<Self> {
        Self::with_scale_height(
            raw::kelvin(t0),
            raw::kilograms(mass),
            raw::kg_per_m3(r0),
            kb,
            raw::meters(scale_height),
        )
    }

    /// The reference atomic-oxygen column: `t0 = 1000 K`, `mass = 16 amu`,
    /// `r0 = 1e19 * mass`.
    pub fn reference() -> Self {
        let mass = 16.0 * AMU;
        let t0 = 1000.0;
        Self {
            t0,
            mass,
            r0: 1.0e19 * mass,
            kb: BOLTZMANN,
            gamma: GAMMA_MONATOMIC,
            gravity: -BOLTZMANN * t0 / (mass * REFERENCE_SCALE_HEIGHT),
        }
    }

    pub fn with_gamma(mut self, gamma: Real) -> SfResult<Self> {
        if !(gamma.is_finite() && gamma > 1.0) {
            return Err(SfError::InvalidArg {
                what: "gamma must be finite and greater than 1",
            });
        }
        self.gamma = gamma;
        Ok(self)
    }

    /// Override the derived gravity (zero gives an unstratified column).
    pub fn with_gravity(mut self, gravity: Real) -> SfResult<Self> {
        if !gravity.is_finite() {
            return Err(SfError::NonFinite {
                what: "gravity",
                value: gravity,
            });
        }
        self.gravity = gravity;
        Ok(self)
    }

    /// Specific gas constant `kb / mass`.
    #[inline]
    pub fn kom(&self) -> Real {
        self.kb / self.mass
    }

    /// Isothermal scale height `kb*T / (mass*|g|)`; infinite without gravity.
    #[inline]
    pub fn scale_height(&self, temp: Real) -> Real {
        let g = self.gravity.abs();
        if g == 0.0 {
            Real::INFINITY
        } else {
            self.kb * temp / (self.mass * g)
        }
    }

    /// Adiabatic sound speed `sqrt(gamma * kom * e)`.
    #[inline]
    pub fn sound_speed(&self, temp: Real) -> Real {
        (self.gamma * self.kom() * temp).sqrt()
    }
}
