//! Cell gradients from a four-point stencil, limited and projected to faces.

use sf_core::{Field, Real};
use sf_mesh::Mesh;

use crate::error::NumericsResult;
use crate::faces::{FaceValues, check_cells};
use crate::limiter::limiter_mc;

const NEAR_WEIGHT: Real = 0.625;
const FAR_WEIGHT: Real = 0.0416667;

/// Limited slope in every cell.
///
/// Each cell gets a slope estimate across its lower face and one across its
/// upper face. Both use the four cells straddling that face, except at the
/// outermost stencil cells (`n_gcs - 1` below, `n_gcs + n_pts` above) where
/// the outward side falls back to a two-point difference. Cells outside that
/// band have zero slope. The two estimates are merged with [`limiter_mc`].
pub fn calc_grad(values: &Field, mesh: &Mesh) -> NumericsResult<Field> {
    let n = mesh.len();
    check_cells(values, n, "gradient input")?;

    let x = mesh.centers();
    let n_gcs = mesh.n_gcs();
    let top = n_gcs + mesh.n_pts();

    // slope across the face between cell `a` and cell `a + 1`
    let across = |a: usize| -> Real {
        let b = a + 1;
        let h = 2.0 / (x[b] - x[a]);
        h * (NEAR_WEIGHT * (values[b] - values[a]) - FAR_WEIGHT * (values[b + 1] - values[a - 1]))
    };
    let simple = |a: usize| -> Real { (values[a + 1] - values[a]) / (x[a + 1] - x[a]) };

    let mut grad_l = Field::zeros(n);
    let mut grad_r = Field::zeros(n);

    let i = n_gcs - 1;
    grad_r[i] = across(i);
    grad_l[i] = simple(i - 1);

    for i in n_gcs..top {
        grad_l[i] = across(i - 1);
        grad_r[i] = across(i);
    }

    let i = top;
    grad_l[i] = across(i - 1);
    grad_r[i] = simple(i);

    Ok(limiter_mc(&grad_l, &grad_r))
}

/// Extend each cell's value linearly with its slope to both of its faces.
///
/// `left[i + 1]` and `right[i]` are filled for cells `1 ..= len - 2`.
pub fn project_gradients(
    values: &Field,
    gradients: &Field,
    mesh: &Mesh,
) -> NumericsResult<FaceValues> {
    let n = mesh.len();
    check_cells(values, n, "projected values")?;
    check_cells(gradients, n, "gradients")?;

    let x = mesh.centers();
    let e = mesh.edges();
    let mut faces = FaceValues::zeros(mesh.n_faces());

    for i in 1..n - 1 {
        faces.left[i + 1] = values[i] + gradients[i] * (e[i + 1] - x[i]);
        faces.right[i] = values[i] + gradients[i] * (e[i] - x[i]);
    }
    Ok(faces)
}
