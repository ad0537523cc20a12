//! Forward-Euler finite-volume stepper.

use sf_core::{Field, PhysicalConstants, Real};
use sf_mesh::Mesh;
use sf_numerics::{FluxScheme, ReconstructionScheme, euler_fluxes, reconstruct};
use tracing::{debug, warn};

use crate::boundary::BoundaryPolicy;
use crate::error::{SimError, SimResult};
use crate::state::ColumnState;

/// Courant-limited step: for every interior cell the signal speed is the
/// larger of the wave speeds on its two faces, the raw step is the smallest
/// `width / speed`, and `safety` scales it.
///
/// Every face bounding an interior cell must carry a finite, positive speed;
/// a NaN is reported against its face rather than dropped by the max.
pub fn compute_dt(mesh: &Mesh, wave_speed: &Field, safety: Real) -> SimResult<Real> {
    if !(safety > 0.0 && safety <= 1.0) {
        return Err(SimError::InvalidArg {
            what: "safety factor must be in (0, 1]",
        });
    }
    if wave_speed.len() != mesh.n_faces() {
        return Err(SimError::InvalidArg {
            what: "wave speed must be face-indexed",
        });
    }

    let widths = mesh.widths();
    let mut dt = Real::INFINITY;
    let interior = mesh.interior();
    for face in interior.start..=interior.end {
        let speed = wave_speed[face];
        if !(speed.is_finite() && speed > 0.0) {
            return Err(SimError::NonPhysical {
                field: "wave speed",
                index: face,
                value: speed,
            });
        }
    }
    for i in interior {
        let speed = wave_speed[i].max(wave_speed[i + 1]);
        dt = dt.min(widths[i] / speed);
    }
    Ok(dt * safety)
}

/// Outcome of one accepted step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepReport {
    pub dt: Real,
    /// Smallest interior density after the step.
    pub min_density: Real,
    /// Largest interior `|u|` after the step.
    pub max_speed: Real,
}

/// Explicit update of the column: reconstruct, flux, step, bound.
#[derive(Clone, Debug)]
pub struct FiniteVolumeStepper {
    constants: PhysicalConstants,
    pub reconstruction: ReconstructionScheme,
    pub flux: FluxScheme,
    pub boundary: BoundaryPolicy,
    cfl_safety: Real,
    density_floor: Real,
    max_dt: Option<Real>,
}

impl FiniteVolumeStepper {
    /// Default schemes: parabolic reconstruction, Rusanov fluxes, physical
    /// boundaries, safety 0.001, zero density floor.
    pub fn new(constants: PhysicalConstants) -> Self {
        Self {
            constants,
            reconstruction: ReconstructionScheme::default(),
            flux: FluxScheme::default(),
            boundary: BoundaryPolicy::default(),
            cfl_safety: 1.0e-3,
            density_floor: 0.0,
            max_dt: None,
        }
    }

    pub fn with_schemes(
        mut self,
        reconstruction: ReconstructionScheme,
        flux: FluxScheme,
        boundary: BoundaryPolicy,
    ) -> Self {
        self.reconstruction = reconstruction;
        self.flux = flux;
        self.boundary = boundary;
        self
    }

    pub fn with_cfl_safety(mut self, safety: Real) -> SimResult<Self> {
        if !(safety > 0.0 && safety <= 1.0) {
            return Err(SimError::InvalidArg {
                what: "safety factor must be in (0, 1]",
            });
        }
        self.cfl_safety = safety;
        Ok(self)
    }

    /// Densities at or below `floor` abort the step.
    pub fn with_density_floor(mut self, floor: Real) -> SimResult<Self> {
        if !(floor.is_finite() && floor >= 0.0) {
            return Err(SimError::InvalidArg {
                what: "density floor must be finite and non-negative",
            });
        }
        self.density_floor = floor;
        Ok(self)
    }

    /// Cap every step at `max_dt` on top of the Courant limit.
    pub fn with_max_dt(mut self, max_dt: Option<Real>) -> SimResult<Self> {
        if let Some(dt) = max_dt
            && !(dt.is_finite() && dt > 0.0)
        {
            return Err(SimError::InvalidArg {
                what: "max dt must be positive and finite",
            });
        }
        self.max_dt = max_dt;
        Ok(self)
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    pub fn cfl_safety(&self) -> Real {
        self.cfl_safety
    }

    pub fn density_floor(&self) -> Real {
        self.density_floor
    }

    /// Advance `state` by one Courant-limited step.
    ///
    /// On error `state` is left exactly as it was. A state carrying a
    /// non-finite value or a non-positive temperature is refused before
    /// any flux is computed.
    pub fn step(&self, mesh: &Mesh, state: &mut ColumnState) -> SimResult<StepReport> {
        state.check_layout(mesh)?;
        guard_primitives(state)?;
        let c = &self.constants;

        let rho_f = reconstruct(self.reconstruction, &state.rho, mesh)?;
        let vel_f = reconstruct(self.reconstruction, &state.vel, mesh)?;
        let temp_f = reconstruct(self.reconstruction, &state.temp, mesh)?;
        let fluxes = euler_fluxes(self.flux, &rho_f, &vel_f, &temp_f, c)?;

        let mut dt = compute_dt(mesh, &fluxes.wave_speed, self.cfl_safety)?;
        if let Some(cap) = self.max_dt {
            dt = dt.min(cap);
        }

        let mut next = state.clone();
        let widths = mesh.widths();
        for i in mesh.interior() {
            let k = dt / widths[i];
            next.rho[i] -= k * (fluxes.mass[i + 1] - fluxes.mass[i]);
            next.momentum[i] -= k * (fluxes.momentum[i + 1] - fluxes.momentum[i]);
            next.momentum[i] += c.gravity * next.rho[i] * dt;
            next.total_energy[i] -= k * (fluxes.energy[i + 1] - fluxes.energy[i]);
        }

        self.guard_density(mesh, &next)?;
        self.boundary.apply(mesh, &mut next, c);
        guard_primitives(&next)?;

        let report = StepReport {
            dt,
            min_density: mesh
                .interior()
                .map(|i| next.rho[i])
                .fold(Real::INFINITY, Real::min),
            max_speed: mesh
                .interior()
                .map(|i| next.vel[i].abs())
                .fold(0.0, Real::max),
        };
        debug!(
            dt = report.dt,
            min_density = report.min_density,
            max_speed = report.max_speed,
            "step accepted"
        );
        *state = next;
        Ok(report)
    }

    fn guard_density(&self, mesh: &Mesh, state: &ColumnState) -> SimResult<()> {
        for i in mesh.interior() {
            let rho = state.rho[i];
            if !(rho > self.density_floor) {
                warn!(cell = i, rho, floor = self.density_floor, "density at or below floor");
                return Err(SimError::NonPhysical {
                    field: "density",
                    index: i,
                    value: rho,
                });
            }
        }
        Ok(())
    }
}

fn guard_primitives(state: &ColumnState) -> SimResult<()> {
    for i in 0..state.len() {
        let checks = [
            ("density", state.rho[i]),
            ("velocity", state.vel[i]),
            ("momentum", state.momentum[i]),
            ("total energy", state.total_energy[i]),
        ];
        for (field, value) in checks {
            if !value.is_finite() {
                warn!(cell = i, field, value, "non-finite value");
                return Err(SimError::NonPhysical {
                    field,
                    index: i,
                    value,
                });
            }
        }
        let temp = state.temp[i];
        if !(temp.is_finite() && temp > 0.0) {
            warn!(cell = i, temp, "temperature not positive");
            return Err(SimError::NonPhysical {
                field: "temperature",
                index: i,
                value: temp,
            });
        }
    }
    Ok(())
}
