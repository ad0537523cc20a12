//! Field history files and manifest storage.
//!
//! Each history file holds one line per recorded snapshot with every cell
//! of the column (ghosts included), space separated.

use crate::types::{HistoryField, MANIFEST_FILE, RunManifest};
use crate::{ResultsError, ResultsResult};
use sf_core::Field;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Fields of one snapshot, borrowed from the running state.
#[derive(Clone, Copy, Debug)]
pub struct HistoryRecord<'a> {
    pub rho: &'a Field,
    pub vel: &'a Field,
    pub temp: &'a Field,
    pub total_energy: &'a Field,
}

/// Appends snapshots to `rho.txt`, `vel.txt`, `temp.txt` and `totale.txt`.
///
/// The first snapshot truncates any history left in the directory; later
/// ones append. `x.txt` is written once when the writer is created.
pub struct FieldHistoryWriter {
    dir: PathBuf,
    n_cells: usize,
    records: usize,
}

impl FieldHistoryWriter {
    pub fn create(dir: &Path, positions: &Field) -> ResultsResult<Self> {
        fs::create_dir_all(dir)?;
        let writer = Self {
            dir: dir.to_path_buf(),
            n_cells: positions.len(),
            records: 0,
        };
        writer.write_row(HistoryField::Position, positions, false)?;
        Ok(writer)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, field: HistoryField) -> PathBuf {
        self.dir.join(field.file_name())
    }

    /// Snapshots written so far.
    pub fn records(&self) -> usize {
        self.records
    }

    pub fn write(&mut self, record: &HistoryRecord<'_>) -> ResultsResult<()> {
        let append = self.records > 0;
        for (field, values) in [
            (HistoryField::Density, record.rho),
            (HistoryField::Velocity, record.vel),
            (HistoryField::Temperature, record.temp),
            (HistoryField::TotalEnergy, record.total_energy),
        ] {
            self.write_row(field, values, append)?;
        }
        self.records += 1;
        Ok(())
    }

    fn write_row(&self, field: HistoryField, values: &Field, append: bool) -> ResultsResult<()> {
        if values.len() != self.n_cells {
            return Err(ResultsError::RecordLength {
                field: field.file_name(),
                expected: self.n_cells,
                actual: values.len(),
            });
        }
        let path = self.path(field);
        let file = if append {
            OpenOptions::new().append(true).create(true).open(path)?
        } else {
            File::create(path)?
        };
        let mut out = BufWriter::new(file);
        for v in values.iter() {
            write!(out, "{:e} ", v)?;
        }
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}

/// Parse a history file back into one row per snapshot.
pub fn read_field_history(path: &Path) -> ResultsResult<Vec<Vec<f64>>> {
    let content = fs::read_to_string(path)?;
    let mut rows = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|tok| tok.parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ResultsError::Parse {
                path: path.display().to_string(),
                line: idx + 1,
                message: e.to_string(),
            })?;
        rows.push(row);
    }
    Ok(rows)
}

pub fn save_manifest(dir: &Path, manifest: &RunManifest) -> ResultsResult<()> {
    fs::create_dir_all(dir)?;
    let manifest_json = serde_json::to_string_pretty(manifest)?;
    fs::write(dir.join(MANIFEST_FILE), manifest_json)?;
    Ok(())
}

pub fn load_manifest(dir: &Path) -> ResultsResult<RunManifest> {
    let manifest_path = dir.join(MANIFEST_FILE);

    if !manifest_path.exists() {
        return Err(ResultsError::RunNotFound {
            dir: dir.display().to_string(),
        });
    }

    let content = fs::read_to_string(manifest_path)?;
    let manifest = serde_json::from_str(&content)?;
    Ok(manifest)
}
