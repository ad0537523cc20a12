//! Validated one-dimensional mesh with ghost cells.

use std::ops::Range;

use sf_core::{Field, Real, Tolerances, nearly_equal};

use crate::error::{MeshError, MeshResult};
use crate::grid::{GridKind, edges_from_centers, widths_from_edges};
use crate::validate;

/// Minimum ghost layer: the reconstruction stencils reach two cells out.
pub const MIN_GHOST_CELLS: usize = 2;

pub(crate) const MIN_INTERIOR_CELLS: usize = 2;

/// Immutable column geometry.
///
/// Cell `i` spans `[edges[i], edges[i + 1]]`; face `i` sits between cell
/// `i - 1` and cell `i`. Interior cells are `n_gcs .. n_gcs + n_pts`.
#[derive(Clone, Debug)]
pub struct Mesh {
    n_pts: usize,
    n_gcs: usize,
    centers: Field,
    edges: Field,
    widths: Field,
}

impl Mesh {
    /// Build a mesh from explicit centres (ghost cells included).
    pub fn from_centers(n_pts: usize, n_gcs: usize, centers: Field) -> MeshResult<Self> {
        validate::check_layout(n_pts, n_gcs)?;
        let expected = n_pts + 2 * n_gcs;
        if centers.len() != expected {
            return Err(MeshError::LayoutMismatch {
                expected,
                actual: centers.len(),
            });
        }
        validate::check_centers(&centers)?;

        let edges = edges_from_centers(&centers)?;
        let widths = widths_from_edges(&edges);
        validate::check_cells(&centers, &edges, &widths)?;

        Ok(Self {
            n_pts,
            n_gcs,
            centers,
            edges,
            widths,
        })
    }

    pub fn from_kind(kind: GridKind, n_pts: usize, n_gcs: usize) -> MeshResult<Self> {
        let centers = kind.centers(n_pts, n_gcs)?;
        Self::from_centers(n_pts, n_gcs, centers)
    }

    pub fn uniform(n_pts: usize, n_gcs: usize, domain_length: Real) -> MeshResult<Self> {
        Self::from_kind(GridKind::Uniform { domain_length }, n_pts, n_gcs)
    }

    pub fn stretched(n_pts: usize, n_gcs: usize, top: Real) -> MeshResult<Self> {
        Self::from_kind(GridKind::Stretched { top }, n_pts, n_gcs)
    }

    pub fn n_pts(&self) -> usize {
        self.n_pts
    }

    pub fn n_gcs(&self) -> usize {
        self.n_gcs
    }

    /// Total cell count, ghosts included.
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    pub fn n_faces(&self) -> usize {
        self.edges.len()
    }

    pub fn centers(&self) -> &Field {
        &self.centers
    }

    pub fn edges(&self) -> &Field {
        &self.edges
    }

    pub fn widths(&self) -> &Field {
        &self.widths
    }

    pub fn interior(&self) -> Range<usize> {
        self.n_gcs..self.n_gcs + self.n_pts
    }

    pub fn lower_ghosts(&self) -> Range<usize> {
        0..self.n_gcs
    }

    pub fn upper_ghosts(&self) -> Range<usize> {
        self.n_gcs + self.n_pts..self.len()
    }

    /// Faces with a full reconstruction stencil on both sides.
    pub fn flux_faces(&self) -> Range<usize> {
        2..self.n_faces() - 2
    }

    /// Centre spacing below cell `i` (`centers[i] - centers[i - 1]`).
    pub fn spacing_below(&self, i: usize) -> Real {
        self.centers[i] - self.centers[i - 1]
    }

    /// True when every width matches the first one within `tol`.
    pub fn is_uniform(&self, tol: Tolerances) -> bool {
        let w0 = self.widths[0];
        self.widths.iter().all(|&w| nearly_equal(w, w0, tol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_mesh_layout() {
        let mesh = Mesh::uniform(100, 2, 200_000.0).unwrap();
        assert_eq!(mesh.n_pts(), 100);
        assert_eq!(mesh.n_gcs(), 2);
        assert_eq!(mesh.len(), 104);
        assert_eq!(mesh.n_faces(), 105);
        assert_eq!(mesh.interior(), 2..102);
        assert_eq!(mesh.lower_ghosts(), 0..2);
        assert_eq!(mesh.upper_ghosts(), 102..104);
        assert_eq!(mesh.flux_faces(), 2..103);
        assert!(mesh.is_uniform(Tolerances::default()));
    }

    #[test]
    fn uniform_widths_match_spacing() {
        let mesh = Mesh::uniform(100, 2, 200_000.0).unwrap();
        let tol = Tolerances::default();
        for &w in mesh.widths().iter() {
            assert!(nearly_equal(w, 2_000.0, tol));
        }
        assert!(nearly_equal(mesh.spacing_below(3), 2_000.0, tol));
    }

    #[test]
    fn stretched_mesh_is_valid_and_non_uniform() {
        let mesh = Mesh::stretched(100, 2, 100.0).unwrap();
        assert!(!mesh.is_uniform(Tolerances::default()));
        assert!(mesh.widths().iter().all(|&w| w > 0.0));
    }

    #[test]
    fn rejects_decreasing_centers() {
        let centers = Field::from_vec(vec![0.0, 1.0, 2.0, 1.5, 4.0, 5.0]);
        assert_eq!(
            Mesh::from_centers(2, 2, centers).unwrap_err(),
            MeshError::NotIncreasing { index: 3 }
        );
    }

    #[test]
    fn rejects_wrong_center_count() {
        let centers = Field::from_vec(vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(
            Mesh::from_centers(2, 2, centers).unwrap_err(),
            MeshError::LayoutMismatch {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn rejects_single_ghost_layer() {
        assert!(matches!(
            Mesh::uniform(10, 1, 1.0),
            Err(MeshError::TooFewGhostCells { n_gcs: 1, .. })
        ));
    }

    #[test]
    fn rejects_centres_the_edge_recurrence_cannot_bracket() {
        // a sudden spacing drop puts edge 2 beyond centre 2
        let centers = Field::from_vec(vec![0.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        assert!(matches!(
            Mesh::from_centers(2, 2, centers),
            Err(MeshError::CenterOutsideCell { index: 2, .. })
        ));
    }
}
