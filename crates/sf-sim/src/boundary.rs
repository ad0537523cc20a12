//! Ghost-cell policies.

use sf_core::{Field, PhysicalConstants};
use sf_mesh::Mesh;

use crate::state::ColumnState;

/// How ghost cells are filled after every update. Chosen once per run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Hydrostatic reservoir below, extrapolated atmosphere above.
    #[default]
    Physical,
    /// Wrap the column onto itself.
    Periodic,
}

impl BoundaryPolicy {
    pub fn label(&self) -> &'static str {
        match self {
            BoundaryPolicy::Physical => "physical",
            BoundaryPolicy::Periodic => "periodic",
        }
    }

    /// Fill the ghost cells of a freshly updated state and bring every
    /// primitive in line with the conserved fields.
    ///
    /// Expects interior conserved fields to be current.
    pub fn apply(&self, mesh: &Mesh, state: &mut ColumnState, constants: &PhysicalConstants) {
        match self {
            BoundaryPolicy::Physical => {
                state.recover_primitives(mesh.interior(), constants);
                set_physical_bcs(mesh, state, constants);
            }
            BoundaryPolicy::Periodic => {
                let (n_pts, n_gcs) = (mesh.n_pts(), mesh.n_gcs());
                exchange(&mut state.rho, n_pts, n_gcs);
                exchange(&mut state.momentum, n_pts, n_gcs);
                exchange(&mut state.total_energy, n_pts, n_gcs);
                state.recover_primitives(0..mesh.len(), constants);
            }
        }
    }
}

/// Physical boundaries on primitives, then ghost conserved fields refreshed.
///
/// Lower ghosts are pinned to the hydrostatic profile at `t0` starting from
/// `r0` in cell 0, at rest. Upper ghosts copy temperature and velocity from
/// the cell below and decay density over one scale height of that
/// temperature.
pub fn set_physical_bcs(mesh: &Mesh, state: &mut ColumnState, constants: &PhysicalConstants) {
    let x = mesh.centers();

    let lower = mesh.lower_ghosts();
    let h0 = constants.scale_height(constants.t0);
    for i in lower.clone() {
        state.rho[i] = if i == 0 {
            constants.r0
        } else {
            state.rho[i - 1] * (-(x[i] - x[i - 1]) / h0).exp()
        };
        state.vel[i] = 0.0;
        state.temp[i] = constants.t0;
    }

    let upper = mesh.upper_ghosts();
    for i in upper.clone() {
        let temp = state.temp[i - 1];
        let h = constants.scale_height(temp);
        state.temp[i] = temp;
        state.rho[i] = state.rho[i - 1] * (-(x[i] - x[i - 1]) / h).exp();
        state.vel[i] = state.vel[i - 1];
    }

    state.refresh_conserved(lower, constants);
    state.refresh_conserved(upper, constants);
}

/// Periodic exchange: lower ghosts take the top interior cells, upper
/// ghosts take the bottom interior cells.
pub fn exchange(values: &mut Field, n_pts: usize, n_gcs: usize) {
    let end = n_pts + 2 * n_gcs;
    for i in 0..n_gcs {
        values[i] = values[end - 2 * n_gcs + i];
        values[end - n_gcs + i] = values[n_gcs + i];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_core::{Tolerances, nearly_equal};

    #[test]
    fn exchange_maps_indices() {
        // n_pts = 4, n_gcs = 2: cells 0..8, interior 2..6
        let mut v = Field::from_iterator(8, (0..8).map(|i| i as f64));
        exchange(&mut v, 4, 2);
        assert_eq!(v.as_slice(), &[4.0, 5.0, 2.0, 3.0, 4.0, 5.0, 2.0, 3.0]);
    }

    #[test]
    fn physical_bcs_keep_hydrostatic_column() {
        let c = PhysicalConstants::reference();
        let mesh = Mesh::uniform(20, 2, 40_000.0).unwrap();
        let reference = ColumnState::hydrostatic(&mesh, &c);
        let mut s = reference.clone();
        for i in mesh.lower_ghosts().chain(mesh.upper_ghosts()) {
            s.rho[i] = 0.0;
            s.vel[i] = 5.0;
            s.temp[i] = 1.0;
        }
        set_physical_bcs(&mesh, &mut s, &c);
        let tol = Tolerances::default();
        for i in 0..s.len() {
            assert!(nearly_equal(s.rho[i], reference.rho[i], tol), "rho {i}");
            assert!(nearly_equal(s.total_energy[i], reference.total_energy[i], tol));
            assert_eq!(s.vel[i], 0.0);
        }
    }

    #[test]
    fn upper_ghosts_extrapolate_the_top_cell() {
        let c = PhysicalConstants::reference();
        let mesh = Mesh::uniform(8, 3, 10_000.0).unwrap();
        let mut s = ColumnState::hydrostatic(&mesh, &c);
        let top = mesh.interior().end - 1;
        s.temp[top] = 1500.0;
        s.vel[top] = 12.0;
        set_physical_bcs(&mesh, &mut s, &c);

        let h = c.scale_height(1500.0);
        for i in mesh.upper_ghosts() {
            assert_eq!(s.temp[i], 1500.0);
            assert_eq!(s.vel[i], 12.0);
            let expected = s.rho[i - 1] * (-mesh.spacing_below(i) / h).exp();
            assert!(nearly_equal(s.rho[i], expected, Tolerances::default()));
            assert_eq!(s.momentum[i], s.rho[i] * 12.0);
        }
    }

    #[test]
    fn periodic_policy_wraps_conserved_fields() {
        let c = PhysicalConstants::reference().with_gravity(0.0).unwrap();
        let mesh = Mesh::uniform(6, 2, 6.0).unwrap();
        let n = mesh.len();
        let rho = Field::from_iterator(n, (0..n).map(|i| 1.0 + i as f64));
        let vel = Field::from_element(n, 2.0);
        let temp = Field::from_element(n, 300.0);
        let mut s = ColumnState::from_primitives(rho, vel, temp, &c).unwrap();
        BoundaryPolicy::Periodic.apply(&mesh, &mut s, &c);
        assert_eq!(s.rho[0], s.rho[6]);
        assert_eq!(s.rho[1], s.rho[7]);
        assert_eq!(s.rho[8], s.rho[2]);
        assert_eq!(s.rho[9], s.rho[3]);
        assert!(nearly_equal(s.vel[0], 2.0, Tolerances::default()));
        assert!(nearly_equal(s.temp[9], 300.0, Tolerances::default()));
    }
}
