//! Column state: primitive and conserved fields kept side by side.

use std::ops::Range;

use sf_core::{Field, PhysicalConstants, Real, ensure_len};
use sf_mesh::Mesh;

use crate::error::SimResult;

/// Isothermal hydrostatic density at `t0`, anchored at `r0` in cell 0.
pub fn init_density(centers: &Field, constants: &PhysicalConstants) -> Field {
    let n = centers.len();
    let mut rho = Field::zeros(n);
    if n == 0 {
        return rho;
    }
    let h = constants.scale_height(constants.t0);
    rho[0] = constants.r0;
    for i in 1..n {
        let dx = centers[i] - centers[i - 1];
        rho[i] = rho[i - 1] * (-dx / h).exp();
    }
    rho
}

pub fn init_velocity(n: usize) -> Field {
    Field::zeros(n)
}

pub fn init_temperature(n: usize, constants: &PhysicalConstants) -> Field {
    Field::from_element(n, constants.t0)
}

/// Primitive fields (`rho`, `vel`, `temp`) and the conserved fields the
/// update advances (`momentum`, `total_energy`). Density is both.
///
/// `temp` is the specific internal energy variable `e`; pressure is
/// `rho * kom * e`.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnState {
    pub rho: Field,
    pub vel: Field,
    pub temp: Field,
    pub momentum: Field,
    pub total_energy: Field,
}

impl ColumnState {
    /// Resting isothermal column in hydrostatic balance.
    pub fn hydrostatic(mesh: &Mesh, constants: &PhysicalConstants) -> Self {
        let n = mesh.len();
        let rho = init_density(mesh.centers(), constants);
        let vel = init_velocity(n);
        let temp = init_temperature(n, constants);
        Self::assemble(rho, vel, temp, constants)
    }

    /// Build from primitives; all three must have the same length.
    pub fn from_primitives(
        rho: Field,
        vel: Field,
        temp: Field,
        constants: &PhysicalConstants,
    ) -> SimResult<Self> {
        ensure_len(&vel, rho.len(), "velocity")?;
        ensure_len(&temp, rho.len(), "temperature")?;
        Ok(Self::assemble(rho, vel, temp, constants))
    }

    fn assemble(rho: Field, vel: Field, temp: Field, constants: &PhysicalConstants) -> Self {
        let n = rho.len();
        let mut state = Self {
            rho,
            vel,
            temp,
            momentum: Field::zeros(n),
            total_energy: Field::zeros(n),
        };
        state.refresh_conserved(0..n, constants);
        state
    }

    pub fn len(&self) -> usize {
        self.rho.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rho.is_empty()
    }

    /// Check that every field is sized for `mesh`.
    pub fn check_layout(&self, mesh: &Mesh) -> SimResult<()> {
        let n = mesh.len();
        ensure_len(&self.rho, n, "density")?;
        ensure_len(&self.vel, n, "velocity")?;
        ensure_len(&self.temp, n, "temperature")?;
        ensure_len(&self.momentum, n, "momentum")?;
        ensure_len(&self.total_energy, n, "total energy")?;
        Ok(())
    }

    /// `momentum = rho u`, `E = rho kom e + rho u^2 / 2` on `cells`.
    pub fn refresh_conserved(&mut self, cells: Range<usize>, constants: &PhysicalConstants) {
        let kom = constants.kom();
        for i in cells {
            let (rho, vel) = (self.rho[i], self.vel[i]);
            self.momentum[i] = rho * vel;
            self.total_energy[i] = rho * self.temp[i] * kom + 0.5 * rho * vel * vel;
        }
    }

    /// `u = momentum / rho`, `e = (E / rho - u^2 / 2) / kom` on `cells`.
    pub fn recover_primitives(&mut self, cells: Range<usize>, constants: &PhysicalConstants) {
        let kom = constants.kom();
        for i in cells {
            let rho = self.rho[i];
            let vel = self.momentum[i] / rho;
            self.vel[i] = vel;
            self.temp[i] = (self.total_energy[i] / rho - 0.5 * vel * vel) / kom;
        }
    }

    /// Mass per unit area held by the interior cells.
    pub fn interior_mass(&self, mesh: &Mesh) -> Real {
        mesh.interior()
            .map(|i| self.rho[i] * mesh.widths()[i])
            .sum()
    }

    /// Total energy per unit area held by the interior cells.
    pub fn interior_energy(&self, mesh: &Mesh) -> Real {
        mesh.interior()
            .map(|i| self.total_energy[i] * mesh.widths()[i])
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_core::{Tolerances, nearly_equal};

    #[test]
    fn density_decays_with_scale_height() {
        let c = PhysicalConstants::reference();
        let mesh = Mesh::uniform(100, 2, 200_000.0).unwrap();
        let rho = init_density(mesh.centers(), &c);
        assert_eq!(rho[0], c.r0);
        let h = c.scale_height(c.t0);
        // reference scale height is 100 km
        assert!(nearly_equal(h, 100_000.0, Tolerances::default()));
        let ratio = (-2000.0 / h).exp();
        for i in 1..rho.len() {
            assert!(nearly_equal(rho[i] / rho[i - 1], ratio, Tolerances::default()));
        }
    }

    #[test]
    fn hydrostatic_state_is_at_rest() {
        let c = PhysicalConstants::reference();
        let mesh = Mesh::uniform(10, 2, 1000.0).unwrap();
        let s = ColumnState::hydrostatic(&mesh, &c);
        s.check_layout(&mesh).unwrap();
        assert!(s.vel.iter().all(|&u| u == 0.0));
        assert!(s.momentum.iter().all(|&m| m == 0.0));
        assert!(s.temp.iter().all(|&t| t == c.t0));
        for i in 0..s.len() {
            let e = s.rho[i] * c.t0 * c.kom();
            assert!(nearly_equal(s.total_energy[i], e, Tolerances::default()));
        }
    }

    #[test]
    fn primitive_recovery_inverts_refresh() {
        let c = PhysicalConstants::reference();
        let rho = Field::from_vec(vec![1.0, 2.0, 0.5]);
        let vel = Field::from_vec(vec![-3.0, 0.0, 40.0]);
        let temp = Field::from_vec(vec![900.0, 1000.0, 1200.0]);
        let mut s = ColumnState::from_primitives(rho, vel.clone(), temp.clone(), &c).unwrap();
        s.vel.fill(0.0);
        s.temp.fill(0.0);
        s.recover_primitives(0..3, &c);
        let tol = Tolerances::default();
        for i in 0..3 {
            assert!(nearly_equal(s.vel[i], vel[i], tol));
            assert!(nearly_equal(s.temp[i], temp[i], tol));
        }
    }

    #[test]
    fn mismatched_primitives_are_rejected() {
        let c = PhysicalConstants::reference();
        let r = ColumnState::from_primitives(Field::zeros(4), Field::zeros(3), Field::zeros(4), &c);
        assert!(r.is_err());
    }
}
