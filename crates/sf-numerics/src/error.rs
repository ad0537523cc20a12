//! Error types for discretisation operations.

use thiserror::Error;

/// Shape errors. Both are caller bugs: fields must be sized from the mesh.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumericsError {
    #[error("Field '{what}' has {actual} cells, mesh has {expected}")]
    CellCount {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Face vector '{what}' has {actual} entries, expected {expected}")]
    FaceCount {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

pub type NumericsResult<T> = Result<T, NumericsError>;
