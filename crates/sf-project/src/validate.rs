//! Config validation logic.

use crate::schema::{CONFIG_VERSION, GridKindDef, RunConfig};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be positive and finite"))
    }
}

pub fn validate_config(config: &RunConfig) -> Result<(), ValidationError> {
    if config.version == 0 || config.version > CONFIG_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: config.version,
        });
    }

    let grid = &config.grid;
    if grid.n_pts < 2 {
        return Err(invalid("grid.n_pts", grid.n_pts, "need at least 2 cells"));
    }
    if grid.n_gcs < 2 {
        return Err(invalid(
            "grid.n_gcs",
            grid.n_gcs,
            "need at least 2 ghost cells per side",
        ));
    }
    match grid.kind {
        GridKindDef::Uniform { domain_length_m } => {
            positive("grid.kind.domain_length_m", domain_length_m)?
        }
        GridKindDef::Stretched { top_m } => positive("grid.kind.top_m", top_m)?,
    }

    let p = &config.physics;
    positive("physics.t0_k", p.t0_k)?;
    positive("physics.molecular_mass_kg", p.molecular_mass_kg)?;
    positive("physics.base_density_kg_m3", p.base_density_kg_m3)?;
    positive("physics.boltzmann_j_per_k", p.boltzmann_j_per_k)?;
    positive("physics.reference_scale_height_m", p.reference_scale_height_m)?;
    if !(p.gamma.is_finite() && p.gamma > 1.0) {
        return Err(invalid("physics.gamma", p.gamma, "must be greater than 1"));
    }
    if let Some(g) = p.gravity_mps2
        && !g.is_finite()
    {
        return Err(invalid("physics.gravity_mps2", g, "must be finite"));
    }

    let n = &config.numerics;
    if !(n.cfl_safety > 0.0 && n.cfl_safety <= 1.0) {
        return Err(invalid("numerics.cfl_safety", n.cfl_safety, "must be in (0, 1]"));
    }
    if !(n.density_floor.is_finite() && n.density_floor >= 0.0) {
        return Err(invalid(
            "numerics.density_floor",
            n.density_floor,
            "must be non-negative",
        ));
    }

    let t = &config.time;
    positive("time.t_max_s", t.t_max_s)?;
    if let Some(dt) = t.max_dt_s {
        positive("time.max_dt_s", dt)?;
    }
    if t.max_steps == 0 {
        return Err(invalid("time.max_steps", t.max_steps, "must be positive"));
    }
    if t.record_every == 0 {
        return Err(invalid("time.record_every", t.record_every, "must be positive"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_is_valid() {
        validate_config(&RunConfig::reference()).unwrap();
    }

    #[test]
    fn rejects_future_version() {
        let mut c = RunConfig::reference();
        c.version = CONFIG_VERSION + 1;
        assert!(matches!(
            validate_config(&c),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }

    fn expect_invalid(field: &str, mutate: impl Fn(&mut RunConfig)) {
        let mut c = RunConfig::reference();
        mutate(&mut c);
        match validate_config(&c) {
            Err(ValidationError::InvalidValue { field: f, .. }) => assert_eq!(f, field),
            other => panic!("{field}: expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn rejects_bad_values() {
        expect_invalid("grid.n_pts", |c| c.grid.n_pts = 1);
        expect_invalid("grid.n_gcs", |c| c.grid.n_gcs = 1);
        expect_invalid("grid.kind.top_m", |c| {
            c.grid.kind = GridKindDef::Stretched { top_m: -1.0 }
        });
        expect_invalid("physics.t0_k", |c| c.physics.t0_k = 0.0);
        expect_invalid("physics.molecular_mass_kg", |c| {
            c.physics.molecular_mass_kg = f64::NAN
        });
        expect_invalid("physics.gamma", |c| c.physics.gamma = 1.0);
        expect_invalid("physics.gravity_mps2", |c| {
            c.physics.gravity_mps2 = Some(f64::INFINITY)
        });
        expect_invalid("numerics.cfl_safety", |c| c.numerics.cfl_safety = 1.5);
        expect_invalid("numerics.density_floor", |c| c.numerics.density_floor = -1.0);
        expect_invalid("time.t_max_s", |c| c.time.t_max_s = 0.0);
        expect_invalid("time.max_dt_s", |c| c.time.max_dt_s = Some(0.0));
        expect_invalid("time.max_steps", |c| c.time.max_steps = 0);
        expect_invalid("time.record_every", |c| c.time.record_every = 0);
    }

    #[test]
    fn zero_gravity_is_allowed() {
        let mut c = RunConfig::reference();
        c.physics.gravity_mps2 = Some(0.0);
        validate_config(&c).unwrap();
    }
}
