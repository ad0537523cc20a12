//! Run configuration schema.

use serde::{Deserialize, Serialize};

/// Newest schema version this build reads and writes.
pub const CONFIG_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunConfig {
    pub version: u32,
    pub name: String,
    pub grid: GridDef,
    pub physics: PhysicsDef,
    #[serde(default)]
    pub numerics: NumericsDef,
    pub time: TimeDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridDef {
    pub kind: GridKindDef,
    pub n_pts: usize,
    #[serde(default = "default_n_gcs")]
    pub n_gcs: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum GridKindDef {
    /// Equal cells from the bottom of the column up to `domain_length_m`.
    Uniform { domain_length_m: f64 },
    /// Cosine-stretched cells with the top interior centre at `top_m`.
    Stretched { top_m: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhysicsDef {
    pub t0_k: f64,
    pub molecular_mass_kg: f64,
    pub base_density_kg_m3: f64,
    #[serde(default = "default_boltzmann")]
    pub boltzmann_j_per_k: f64,
    #[serde(default = "default_gamma")]
    pub gamma: f64,
    #[serde(default = "default_scale_height")]
    pub reference_scale_height_m: f64,
    /// Overrides the gravity derived from the reference scale height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gravity_mps2: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ReconstructionDef {
    GradientLimited,
    #[default]
    ParabolicLimited,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum FluxDef {
    Godunov,
    #[default]
    Rusanov,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum BoundaryDef {
    #[default]
    Physical,
    Periodic,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NumericsDef {
    #[serde(default)]
    pub reconstruction: ReconstructionDef,
    #[serde(default)]
    pub flux: FluxDef,
    #[serde(default)]
    pub boundary: BoundaryDef,
    #[serde(default = "default_cfl_safety")]
    pub cfl_safety: f64,
    #[serde(default)]
    pub density_floor: f64,
}

impl Default for NumericsDef {
    fn default() -> Self {
        Self {
            reconstruction: ReconstructionDef::default(),
            flux: FluxDef::default(),
            boundary: BoundaryDef::default(),
            cfl_safety: default_cfl_safety(),
            density_floor: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeDef {
    pub t_max_s: f64,
    /// Upper bound on every step, on top of the Courant limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_dt_s: Option<f64>,
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
    #[serde(default = "default_record_every")]
    pub record_every: usize,
}

fn default_n_gcs() -> usize {
    2
}

fn default_boltzmann() -> f64 {
    1.38e-23
}

fn default_gamma() -> f64 {
    5.0 / 3.0
}

fn default_scale_height() -> f64 {
    100_000.0
}

fn default_cfl_safety() -> f64 {
    1.0e-3
}

fn default_max_steps() -> usize {
    1_000_000
}

fn default_record_every() -> usize {
    1
}

impl RunConfig {
    /// Atomic oxygen at 1000 K over 200 km, 100 cells, run for 0.1 s.
    pub fn reference() -> Self {
        let mass = 16.0 * 1.67e-27;
        Self {
            version: CONFIG_VERSION,
            name: "reference column".to_string(),
            grid: GridDef {
                kind: GridKindDef::Uniform {
                    domain_length_m: 200_000.0,
                },
                n_pts: 100,
                n_gcs: 2,
            },
            physics: PhysicsDef {
                t0_k: 1000.0,
                molecular_mass_kg: mass,
                base_density_kg_m3: 1.0e19 * mass,
                boltzmann_j_per_k: default_boltzmann(),
                gamma: default_gamma(),
                reference_scale_height_m: default_scale_height(),
                gravity_mps2: None,
            },
            numerics: NumericsDef::default(),
            time: TimeDef {
                t_max_s: 0.1,
                max_dt_s: None,
                max_steps: default_max_steps(),
                record_every: default_record_every(),
            },
        }
    }
}
