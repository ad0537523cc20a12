//! Error types for the sf-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Project(String),

    #[error("Config validation failed: {0}")]
    Validation(String),

    #[error("Runtime compilation failed: {0}")]
    Compile(String),

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Run not found: {0}")]
    RunNotFound(PathBuf),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sf-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<sf_project::ProjectError> for AppError {
    fn from(err: sf_project::ProjectError) -> Self {
        match err {
            sf_project::ProjectError::Validation(e) => AppError::Validation(e.to_string()),
            other => AppError::Project(other.to_string()),
        }
    }
}

impl From<sf_project::ValidationError> for AppError {
    fn from(err: sf_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<sf_mesh::MeshError> for AppError {
    fn from(err: sf_mesh::MeshError) -> Self {
        AppError::Compile(err.to_string())
    }
}

impl From<sf_core::SfError> for AppError {
    fn from(err: sf_core::SfError) -> Self {
        AppError::Compile(err.to_string())
    }
}

impl From<sf_sim::SimError> for AppError {
    fn from(err: sf_sim::SimError) -> Self {
        AppError::Simulation(err.to_string())
    }
}

impl From<sf_results::ResultsError> for AppError {
    fn from(err: sf_results::ResultsError) -> Self {
        match err {
            sf_results::ResultsError::RunNotFound { dir } => AppError::RunNotFound(dir.into()),
            other => AppError::Results(other.to_string()),
        }
    }
}
