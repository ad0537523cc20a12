//! Read back finished runs.

use std::path::Path;

use sf_results::{HistoryField, RunManifest};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub manifest: RunManifest,
    /// Rows found in each history file, in [`HistoryField::ALL`] order.
    pub history_rows: Vec<(HistoryField, usize)>,
}

pub fn get_run_summary(dir: &Path) -> AppResult<RunSummary> {
    if !dir.is_dir() {
        return Err(AppError::RunNotFound(dir.to_path_buf()));
    }
    let manifest = sf_results::load_manifest(dir)?;
    let mut history_rows = Vec::with_capacity(HistoryField::ALL.len());
    for field in HistoryField::ALL {
        let rows = sf_results::read_field_history(&dir.join(field.file_name()))?;
        history_rows.push((field, rows.len()));
    }
    Ok(RunSummary {
        manifest,
        history_rows,
    })
}

/// One recorded profile of `field` paired with the cell centres.
///
/// `row` counts snapshots from zero; `None` picks the last one.
pub fn extract_profile(
    dir: &Path,
    field: HistoryField,
    row: Option<usize>,
) -> AppResult<Vec<(f64, f64)>> {
    let positions = sf_results::read_field_history(&dir.join(HistoryField::Position.file_name()))?;
    let x = positions
        .first()
        .ok_or_else(|| AppError::Results(format!("no positions in {}", dir.display())))?;
    let rows = sf_results::read_field_history(&dir.join(field.file_name()))?;
    let idx = match row {
        Some(r) => r,
        None => rows.len().saturating_sub(1),
    };
    let values = rows.get(idx).ok_or_else(|| {
        AppError::InvalidInput(format!(
            "{} has {} rows, asked for row {}",
            field.file_name(),
            rows.len(),
            idx
        ))
    })?;
    if values.len() != x.len() {
        return Err(AppError::Results(format!(
            "{} row {} has {} values for {} cells",
            field.file_name(),
            idx,
            values.len(),
            x.len()
        )));
    }
    Ok(x.iter().copied().zip(values.iter().copied()).collect())
}
