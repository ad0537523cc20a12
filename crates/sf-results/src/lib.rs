//! sf-results: per-field text histories and run manifests.

pub mod hash;
pub mod store;
pub mod types;

pub use hash::compute_run_id;
pub use store::{
    FieldHistoryWriter, HistoryRecord, load_manifest, read_field_history, save_manifest,
};
pub use types::*;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Run not found in {dir}")]
    RunNotFound { dir: String },

    #[error("Parse error in {path} line {line}: {message}")]
    Parse {
        path: String,
        line: usize,
        message: String,
    },

    #[error("Record has {actual} values for {field}, expected {expected}")]
    RecordLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}
