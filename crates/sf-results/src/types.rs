//! Result data types.

use serde::{Deserialize, Serialize};
use sf_core::PhysicalConstants;

pub type RunId = String;

pub const MANIFEST_FILE: &str = "manifest.json";

/// One column-shaped history file per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryField {
    Density,
    Velocity,
    Temperature,
    TotalEnergy,
    /// Cell centres, written once.
    Position,
}

impl HistoryField {
    pub const ALL: [HistoryField; 5] = [
        HistoryField::Density,
        HistoryField::Velocity,
        HistoryField::Temperature,
        HistoryField::TotalEnergy,
        HistoryField::Position,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            HistoryField::Density => "rho.txt",
            HistoryField::Velocity => "vel.txt",
            HistoryField::Temperature => "temp.txt",
            HistoryField::TotalEnergy => "totale.txt",
            HistoryField::Position => "x.txt",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunManifest {
    pub run_id: RunId,
    pub config_name: String,
    /// RFC 3339
    pub timestamp: String,
    pub solver_version: String,
    pub n_pts: usize,
    pub n_gcs: usize,
    pub constants: PhysicalConstants,
    pub steps: usize,
    pub final_time_s: f64,
    pub last_dt_s: f64,
    /// Rows written to each time-dependent history file.
    pub records: usize,
}
