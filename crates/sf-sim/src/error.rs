//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered while marching the column.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// A cell left the physical domain; the step that produced it is discarded.
    #[error("Non-physical {field} at cell {index}: {value}")]
    NonPhysical {
        field: &'static str,
        index: usize,
        value: f64,
    },

    #[error("Observer failed: {message}")]
    Observer { message: String },

    #[error("Backend error: {message}")]
    Backend { message: String },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<sf_numerics::NumericsError> for SimError {
    fn from(e: sf_numerics::NumericsError) -> Self {
        SimError::Backend {
            message: e.to_string(),
        }
    }
}

impl From<sf_mesh::MeshError> for SimError {
    fn from(e: sf_mesh::MeshError) -> Self {
        SimError::Backend {
            message: e.to_string(),
        }
    }
}

impl From<sf_core::SfError> for SimError {
    fn from(e: sf_core::SfError) -> Self {
        SimError::Backend {
            message: e.to_string(),
        }
    }
}
