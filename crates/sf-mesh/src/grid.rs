//! Cell-centre generators and derived geometry.

use std::f64::consts::PI;

use sf_core::{Field, Real};

use crate::error::{MeshError, MeshResult};
use crate::validate;

/// How cell centres are laid out along the column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GridKind {
    /// Constant spacing; interior spans `[0, domain_length)`.
    Uniform { domain_length: Real },
    /// Cosine-weighted spacing rescaled so the last interior centre sits at `top`.
    Stretched { top: Real },
}

impl GridKind {
    pub fn centers(&self, n_pts: usize, n_gcs: usize) -> MeshResult<Field> {
        match *self {
            GridKind::Uniform { domain_length } => uniform_centers(n_pts, n_gcs, domain_length),
            GridKind::Stretched { top } => stretched_centers(n_pts, n_gcs, top),
        }
    }
}

/// `centers[i + n_gcs] = i * domain_length / n_pts` for `i` in `[-n_gcs, n_pts + n_gcs)`.
///
/// Ghost cells continue the interior spacing below zero and above the top.
pub fn uniform_centers(n_pts: usize, n_gcs: usize, domain_length: Real) -> MeshResult<Field> {
    validate::check_layout(n_pts, n_gcs)?;
    validate::check_extent(domain_length)?;

    let dx = 1.0 / n_pts as Real;
    let offset = n_gcs as Real;
    Ok(Field::from_fn(n_pts + 2 * n_gcs, |i, _| {
        (i as Real - offset) * dx * domain_length
    }))
}

/// Variable spacing `1 + (1 + cos(2*pi*i / (n_pts - 1)))`, widest at the
/// bottom and top of the interior and narrowest in the middle.
///
/// The centre at index `n_gcs` is the origin; the result is rescaled so the
/// last interior centre equals `top`.
pub fn stretched_centers(n_pts: usize, n_gcs: usize, top: Real) -> MeshResult<Field> {
    validate::check_layout(n_pts, n_gcs)?;
    validate::check_extent(top)?;

    let i2pi = 2.0 * PI / (n_pts - 1) as Real;
    let spacing = |i: Real| 1.0 + (1.0 + (i * i2pi).cos());

    let mut x = Field::zeros(n_pts + 2 * n_gcs);
    for i in 1..(n_pts + n_gcs) {
        let j = i + n_gcs;
        x[j] = x[j - 1] + spacing(i as Real);
    }
    for i in 1..=n_gcs {
        let j = n_gcs - i;
        x[j] = x[j + 1] - spacing(-(i as Real));
    }

    let max_x = x[n_pts + n_gcs - 1];
    Ok(x * (top / max_x))
}

/// Face coordinates from cell centres.
///
/// The first cell is centred between `edges[0]` and `edges[1]`; every later
/// edge mirrors the previous one through the centre between them, so each
/// centre is exactly the midpoint of its two edges.
pub fn edges_from_centers(centers: &Field) -> MeshResult<Field> {
    let n = centers.len();
    if n < 2 {
        return Err(MeshError::LayoutMismatch {
            expected: 2,
            actual: n,
        });
    }

    let dc = centers[1] - centers[0];
    let mut edges = Field::zeros(n + 1);
    edges[0] = centers[0] - dc / 2.0;
    edges[1] = centers[0] + dc / 2.0;
    for i in 2..=n {
        edges[i] = 2.0 * centers[i - 1] - edges[i - 1];
    }
    Ok(edges)
}

/// `widths[i] = edges[i + 1] - edges[i]`.
pub fn widths_from_edges(edges: &Field) -> Field {
    let n = edges.len().saturating_sub(1);
    Field::from_fn(n, |i, _| edges[i + 1] - edges[i])
}
