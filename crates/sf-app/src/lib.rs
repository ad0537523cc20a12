//! Shared application service layer for stratoflow.
//!
//! Centralizes config handling, runtime compilation, run execution and
//! result queries so front ends stay thin.

pub mod error;
pub mod progress;
pub mod project_service;
pub mod query;
pub mod run_service;
pub mod runtime_compile;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use progress::{RunProgressEvent, RunStage, TransientProgress};
pub use project_service::{load_config, save_config, validate_config, write_template};
pub use query::{RunSummary, extract_profile, get_run_summary};
pub use run_service::{
    RunOptions, RunRequest, RunResponse, RunTimingSummary, execute_config, execute_run,
    execute_run_with_progress,
};
pub use runtime_compile::{RunRuntime, compile_config};
