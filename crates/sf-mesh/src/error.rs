//! Mesh construction errors.

use thiserror::Error;

pub type MeshResult<T> = Result<T, MeshError>;

/// Geometry precondition violations. All of them are caller errors and are
/// reported when the mesh is built, never later.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    #[error("Too few interior cells: {n_pts} (need at least {min})")]
    TooFewCells { n_pts: usize, min: usize },

    #[error("Too few ghost cells: {n_gcs} (need at least {min})")]
    TooFewGhostCells { n_gcs: usize, min: usize },

    #[error("Domain extent must be positive and finite, got {value}")]
    InvalidExtent { value: f64 },

    #[error("Non-finite {what} at index {index}: {value}")]
    NonFinite {
        what: &'static str,
        index: usize,
        value: f64,
    },

    #[error("Cell centres not strictly increasing at index {index}")]
    NotIncreasing { index: usize },

    #[error("Non-positive cell width at index {index}: {width}")]
    NonPositiveWidth { index: usize, width: f64 },

    #[error("Cell centre {index} lies outside its edges [{left}, {right}]: {center}")]
    CenterOutsideCell {
        index: usize,
        left: f64,
        right: f64,
        center: f64,
    },

    #[error("Expected {expected} centres for the ghost layout, got {actual}")]
    LayoutMismatch { expected: usize, actual: usize },
}
