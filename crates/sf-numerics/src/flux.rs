//! Numerical fluxes through faces.
//!
//! Fluxes are evaluated on [`flux_faces`] only; the two faces at each end
//! of the column stay zero and must not enter the update.

use sf_core::{Field, PhysicalConstants, Real};

use crate::error::NumericsResult;
use crate::faces::{FaceValues, check_faces, flux_faces};

/// Numerical flux family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FluxScheme {
    /// Donor-cell upwinding by the face-average velocity.
    Godunov,
    /// Local Lax-Friedrichs: central average plus wave-speed diffusion.
    #[default]
    Rusanov,
}

impl FluxScheme {
    pub fn label(&self) -> &'static str {
        match self {
            FluxScheme::Godunov => "godunov",
            FluxScheme::Rusanov => "rusanov",
        }
    }
}

#[inline]
fn upwind(left: Real, right: Real, vel: Real) -> Real {
    if vel > 0.0 { left * vel } else { right * vel }
}

#[inline]
fn rusanov(flux_l: Real, flux_r: Real, q_l: Real, q_r: Real, speed: Real) -> Real {
    0.5 * (flux_l + flux_r) - 0.5 * speed * (q_r - q_l)
}

fn check_sides(
    left: &Field,
    right: &Field,
    vel_left: &Field,
    vel_right: &Field,
) -> NumericsResult<usize> {
    let n_faces = left.len();
    check_faces(right, n_faces, "right values")?;
    check_faces(vel_left, n_faces, "left velocity")?;
    check_faces(vel_right, n_faces, "right velocity")?;
    Ok(n_faces)
}

/// Upwind flux of a passive scalar: the side the face-average velocity
/// comes from donates its value.
pub fn godunov_flux(
    left: &Field,
    right: &Field,
    vel_left: &Field,
    vel_right: &Field,
) -> NumericsResult<Field> {
    let n_faces = check_sides(left, right, vel_left, vel_right)?;
    let mut flux = Field::zeros(n_faces);
    for i in flux_faces(n_faces) {
        let vel = 0.5 * (vel_left[i] + vel_right[i]);
        flux[i] = upwind(left[i], right[i], vel);
    }
    Ok(flux)
}

/// Rusanov flux of a passive scalar with wave speed `|u| + 1`.
pub fn rusanov_flux(
    left: &Field,
    right: &Field,
    vel_left: &Field,
    vel_right: &Field,
) -> NumericsResult<Field> {
    let n_faces = check_sides(left, right, vel_left, vel_right)?;
    let mut flux = Field::zeros(n_faces);
    for i in flux_faces(n_faces) {
        let speed = (0.5 * (vel_left[i] + vel_right[i])).abs() + 1.0;
        flux[i] = rusanov(
            left[i] * vel_left[i],
            right[i] * vel_right[i],
            left[i],
            right[i],
            speed,
        );
    }
    Ok(flux)
}

/// Fastest signal speed of a state: `|u| + sqrt(gamma * kom * e)`.
#[inline]
pub fn acoustic_speed(vel: Real, temp: Real, constants: &PhysicalConstants) -> Real {
    vel.abs() + constants.sound_speed(temp)
}

/// Primitive state on one side of a face.
#[derive(Clone, Copy, Debug)]
struct FaceState {
    rho: Real,
    vel: Real,
    temp: Real,
}

impl FaceState {
    fn pressure(&self, c: &PhysicalConstants) -> Real {
        self.rho * c.kom() * self.temp
    }

    fn momentum(&self) -> Real {
        self.rho * self.vel
    }

    fn total_energy(&self, c: &PhysicalConstants) -> Real {
        self.pressure(c) + 0.5 * self.rho * self.vel * self.vel
    }

    /// Per-volume energy carried by the flow: `rho (u^2/2 + gamma kom e)`.
    fn enthalpy(&self, c: &PhysicalConstants) -> Real {
        self.rho * (0.5 * self.vel * self.vel + c.gamma * c.kom() * self.temp)
    }

    fn mass_flux(&self) -> Real {
        self.momentum()
    }

    fn momentum_flux(&self, c: &PhysicalConstants) -> Real {
        self.rho * (self.vel * self.vel + c.kom() * self.temp)
    }

    fn energy_flux(&self, c: &PhysicalConstants) -> Real {
        self.vel * self.enthalpy(c)
    }
}

/// Fluxes of the three conserved equations plus the face wave speed.
#[derive(Clone, Debug)]
pub struct EulerFluxes {
    pub mass: Field,
    pub momentum: Field,
    pub energy: Field,
    /// `max` of the acoustic speeds on the two sides of each face.
    pub wave_speed: Field,
}

/// Compute mass, momentum and energy fluxes from reconstructed primitives.
pub fn euler_fluxes(
    scheme: FluxScheme,
    rho: &FaceValues,
    vel: &FaceValues,
    temp: &FaceValues,
    constants: &PhysicalConstants,
) -> NumericsResult<EulerFluxes> {
    let n_faces = rho.n_faces();
    rho.check(n_faces, "density faces")?;
    vel.check(n_faces, "velocity faces")?;
    temp.check(n_faces, "temperature faces")?;

    let mut out = EulerFluxes {
        mass: Field::zeros(n_faces),
        momentum: Field::zeros(n_faces),
        energy: Field::zeros(n_faces),
        wave_speed: Field::zeros(n_faces),
    };

    let c = constants;
    for i in flux_faces(n_faces) {
        let l = FaceState {
            rho: rho.left[i],
            vel: vel.left[i],
            temp: temp.left[i],
        };
        let r = FaceState {
            rho: rho.right[i],
            vel: vel.right[i],
            temp: temp.right[i],
        };
        let speed = acoustic_speed(l.vel, l.temp, c).max(acoustic_speed(r.vel, r.temp, c));
        out.wave_speed[i] = speed;

        match scheme {
            FluxScheme::Rusanov => {
                out.mass[i] = rusanov(l.mass_flux(), r.mass_flux(), l.rho, r.rho, speed);
                out.momentum[i] = rusanov(
                    l.momentum_flux(c),
                    r.momentum_flux(c),
                    l.momentum(),
                    r.momentum(),
                    speed,
                );
                out.energy[i] = rusanov(
                    l.energy_flux(c),
                    r.energy_flux(c),
                    l.total_energy(c),
                    r.total_energy(c),
                    speed,
                );
            }
            FluxScheme::Godunov => {
                let u = 0.5 * (l.vel + r.vel);
                out.mass[i] = upwind(l.rho, r.rho, u);
                out.momentum[i] =
                    upwind(l.momentum(), r.momentum(), u) + 0.5 * (l.pressure(c) + r.pressure(c));
                out.energy[i] = upwind(l.enthalpy(c), r.enthalpy(c), u);
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faces(n: usize, left: Real, right: Real) -> FaceValues {
        FaceValues {
            left: Field::from_element(n, left),
            right: Field::from_element(n, right),
        }
    }

    #[test]
    fn godunov_picks_upwind_side() {
        let n = 6;
        let val_l = Field::from_element(n, 2.0);
        let val_r = Field::from_element(n, 5.0);
        let up = Field::from_element(n, 1.0);
        let down = Field::from_element(n, -1.0);

        let f = godunov_flux(&val_l, &val_r, &up, &up).unwrap();
        assert_eq!(f[2], 2.0);
        let f = godunov_flux(&val_l, &val_r, &down, &down).unwrap();
        assert_eq!(f[3], -5.0);
        assert_eq!(f[0], 0.0);
        assert_eq!(f[1], 0.0);
        assert_eq!(f[n - 2], 0.0);
        assert_eq!(f[n - 1], 0.0);
    }

    #[test]
    fn scalar_rusanov_is_central_for_equal_states() {
        let n = 6;
        let v = Field::from_element(n, 3.0);
        let u = Field::from_element(n, 2.0);
        let f = rusanov_flux(&v, &v, &u, &u).unwrap();
        assert_eq!(f[2], 6.0);
    }

    #[test]
    fn scalar_rusanov_diffuses_jumps() {
        let n = 6;
        let l = Field::from_element(n, 1.0);
        let r = Field::from_element(n, 3.0);
        let zero = Field::zeros(n);
        let f = rusanov_flux(&l, &r, &zero, &zero).unwrap();
        // -0.5 * (|0| + 1) * (3 - 1)
        assert_eq!(f[2], -1.0);
    }

    #[test]
    fn at_rest_momentum_flux_is_mean_pressure() {
        let c = PhysicalConstants::reference();
        let n = 8;
        let rho = faces(n, 2.0e-7, 1.0e-7);
        let vel = faces(n, 0.0, 0.0);
        let temp = faces(n, 1000.0, 900.0);
        let p_l = 2.0e-7 * c.kom() * 1000.0;
        let p_r = 1.0e-7 * c.kom() * 900.0;

        for scheme in [FluxScheme::Godunov, FluxScheme::Rusanov] {
            let f = euler_fluxes(scheme, &rho, &vel, &temp, &c).unwrap();
            for i in flux_faces(n) {
                assert!((f.momentum[i] - 0.5 * (p_l + p_r)).abs() <= 1e-12 * p_l);
                if scheme == FluxScheme::Godunov {
                    assert_eq!(f.mass[i], 0.0);
                    assert_eq!(f.energy[i], 0.0);
                }
            }
        }
    }

    #[test]
    fn wave_speed_is_max_of_sides() {
        let c = PhysicalConstants::reference();
        let n = 8;
        let rho = faces(n, 1.0, 1.0);
        let vel = faces(n, 10.0, -30.0);
        let temp = faces(n, 1000.0, 1000.0);
        let f = euler_fluxes(FluxScheme::Rusanov, &rho, &vel, &temp, &c).unwrap();
        let expected = 30.0 + c.sound_speed(1000.0);
        assert!((f.wave_speed[3] - expected).abs() < 1e-9);
        assert_eq!(f.wave_speed[0], 0.0);
        assert_eq!(f.wave_speed[n - 1], 0.0);
    }

    #[test]
    fn uniform_flow_has_physical_fluxes() {
        let c = PhysicalConstants::reference();
        let n = 8;
        let (rho0, u0, t0) = (1.5, 20.0, 800.0);
        let rho = faces(n, rho0, rho0);
        let vel = faces(n, u0, u0);
        let temp = faces(n, t0, t0);
        let f = euler_fluxes(FluxScheme::Rusanov, &rho, &vel, &temp, &c).unwrap();
        let tol = 1e-12;
        assert!((f.mass[4] - rho0 * u0).abs() <= tol * rho0 * u0);
        let mom = rho0 * (u0 * u0 + c.kom() * t0);
        assert!((f.momentum[4] - mom).abs() <= tol * mom);
        let energy = rho0 * u0 * (0.5 * u0 * u0 + c.gamma * c.kom() * t0);
        assert!((f.energy[4] - energy).abs() <= tol * energy);
    }

    #[test]
    fn mismatched_faces_are_rejected() {
        let c = PhysicalConstants::reference();
        let rho = faces(8, 1.0, 1.0);
        let vel = faces(7, 0.0, 0.0);
        let temp = faces(8, 1.0, 1.0);
        assert!(euler_fluxes(FluxScheme::Rusanov, &rho, &vel, &temp, &c).is_err());
    }
}
