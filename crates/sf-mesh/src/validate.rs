//! Geometry validation logic.

use sf_core::Field;

use crate::error::{MeshError, MeshResult};
use crate::mesh::{MIN_GHOST_CELLS, MIN_INTERIOR_CELLS};

pub(crate) fn check_layout(n_pts: usize, n_gcs: usize) -> MeshResult<()> {
    if n_pts < MIN_INTERIOR_CELLS {
        return Err(MeshError::TooFewCells {
            n_pts,
            min: MIN_INTERIOR_CELLS,
        });
    }
    if n_gcs < MIN_GHOST_CELLS {
        return Err(MeshError::TooFewGhostCells {
            n_gcs,
            min: MIN_GHOST_CELLS,
        });
    }
    Ok(())
}

pub(crate) fn check_extent(value: f64) -> MeshResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MeshError::InvalidExtent { value })
    }
}

/// Centres finite and strictly increasing.
pub(crate) fn check_centers(centers: &Field) -> MeshResult<()> {
    for (index, &value) in centers.iter().enumerate() {
        if !value.is_finite() {
            return Err(MeshError::NonFinite {
                what: "cell centre",
                index,
                value,
            });
        }
    }
    for i in 1..centers.len() {
        if centers[i] <= centers[i - 1] {
            return Err(MeshError::NotIncreasing { index: i });
        }
    }
    Ok(())
}

/// Every cell has a positive width and contains its centre.
pub(crate) fn check_cells(centers: &Field, edges: &Field, widths: &Field) -> MeshResult<()> {
    for (index, &center) in centers.iter().enumerate() {
        let (left, right) = (edges[index], edges[index + 1]);
        if !(left < center && center < right) {
            return Err(MeshError::CenterOutsideCell {
                index,
                left,
                right,
                center,
            });
        }
    }
    for (index, &width) in widths.iter().enumerate() {
        if !(width > 0.0) {
            return Err(MeshError::NonPositiveWidth { index, width });
        }
    }
    Ok(())
}
