//! Quadratic face reconstruction on non-uniform spacing, with value clamping.

use sf_core::{Field, Real};
use sf_mesh::Mesh;

use crate::error::NumericsResult;
use crate::faces::{FaceValues, check_cells, left_faces, right_faces};
use crate::limiter::limiter_value;

/// Geometry of the three-cell stencil around cell `i`.
struct Stencil {
    /// Width of cell `i`.
    dxe: Real,
    /// `centers[i] - centers[i - 1]`.
    dxc: Real,
    /// `centers[i + 1] - centers[i]`.
    dxc1: Real,
}

impl Stencil {
    fn at(mesh: &Mesh, i: usize) -> Self {
        let x = mesh.centers();
        let e = mesh.edges();
        Self {
            dxe: e[i + 1] - e[i],
            dxc: x[i] - x[i - 1],
            dxc1: x[i + 1] - x[i],
        }
    }

    /// Curvature contribution shared by both faces of the cell.
    fn curvature(&self, v: &Field, i: usize) -> Real {
        let r = self.dxc1 / self.dxc;
        0.125 * self.dxe * self.dxe * (v[i + 1] + r * v[i - 1] - (1.0 + r) * v[i])
            / (self.dxc * self.dxc1)
    }
}

/// Value on the upper face of each cell, seen from inside the cell:
/// `left[i + 1]` for cells `1 ..= len - 2`, clamped between the neighbours.
pub fn project_from_left(values: &Field, mesh: &Mesh) -> NumericsResult<Field> {
    let n = mesh.len();
    check_cells(values, n, "parabolic input")?;

    let mut projected = Field::zeros(mesh.n_faces());
    for i in 1..n - 1 {
        let st = Stencil::at(mesh, i);
        projected[i + 1] = values[i]
            + 0.5 * st.dxe * (values[i] - values[i - 1]) / st.dxc
            + st.curvature(values, i);
    }
    Ok(limiter_value(&projected, values, left_faces(n)))
}

/// Value on the lower face of each cell, seen from inside the cell:
/// `right[i]` for cells `1 ..= len - 2`, clamped between the neighbours.
pub fn project_from_right(values: &Field, mesh: &Mesh) -> NumericsResult<Field> {
    let n = mesh.len();
    check_cells(values, n, "parabolic input")?;

    let mut projected = Field::zeros(mesh.n_faces());
    for i in 1..n - 1 {
        let st = Stencil::at(mesh, i);
        projected[i] = values[i] - 0.5 * st.dxe * (values[i + 1] - values[i]) / st.dxc1
            + st.curvature(values, i);
    }
    Ok(limiter_value(&projected, values, right_faces(n)))
}

/// Both sides of every face from the parabolic reconstruction.
pub fn parabolic_faces(values: &Field, mesh: &Mesh) -> NumericsResult<FaceValues> {
    Ok(FaceValues {
        left: project_from_left(values, mesh)?,
        right: project_from_right(values, mesh)?,
    })
}
