//! Runtime compilation of a RunConfig into executable objects.

use sf_core::PhysicalConstants;
use sf_core::units::{k, kg, kgpm3, m};
use sf_mesh::{GridKind, Mesh};
use sf_numerics::{FluxScheme, ReconstructionScheme};
use sf_project::schema::{
    BoundaryDef, FluxDef, GridDef, GridKindDef, NumericsDef, PhysicsDef, ReconstructionDef,
    RunConfig,
};
use sf_sim::{BoundaryPolicy, FiniteVolumeStepper, SimOptions};

use crate::error::{AppError, AppResult};

/// Everything a run needs, built from a validated config.
#[derive(Clone, Debug)]
pub struct RunRuntime {
    pub mesh: Mesh,
    pub constants: PhysicalConstants,
    pub stepper: FiniteVolumeStepper,
    pub options: SimOptions,
}

/// Compile a config into runtime structures.
pub fn compile_config(config: &RunConfig) -> AppResult<RunRuntime> {
    sf_project::validate_config(config)?;

    let mesh = compile_mesh(&config.grid)?;
    let constants = compile_constants(&config.physics)?;
    let stepper = compile_stepper(constants, &config.numerics, config.time.max_dt_s)?;
    let options = SimOptions {
        t_max: config.time.t_max_s,
        max_steps: config.time.max_steps,
        record_every: config.time.record_every,
    };

    Ok(RunRuntime {
        mesh,
        constants,
        stepper,
        options,
    })
}

fn compile_mesh(grid: &GridDef) -> AppResult<Mesh> {
    let kind = match grid.kind {
        GridKindDef::Uniform { domain_length_m } => GridKind::Uniform {
            domain_length: domain_length_m,
        },
        GridKindDef::Stretched { top_m } => GridKind::Stretched { top: top_m },
    };
    Ok(Mesh::from_kind(kind, grid.n_pts, grid.n_gcs)?)
}

/// Physical constants via SI quantities, then the optional overrides.
fn compile_constants(physics: &PhysicsDef) -> AppResult<PhysicalConstants> {
    let mut constants = PhysicalConstants::from_quantities(
        k(physics.t0_k),
        kg(physics.molecular_mass_kg),
        kgpm3(physics.base_density_kg_m3),
        physics.boltzmann_j_per_k,
        m(physics.reference_scale_height_m),
    )?
    .with_gamma(physics.gamma)?;
    if let Some(g) = physics.gravity_mps2 {
        constants = constants.with_gravity(g)?;
    }
    Ok(constants)
}

fn compile_stepper(
    constants: PhysicalConstants,
    numerics: &NumericsDef,
    max_dt_s: Option<f64>,
) -> AppResult<FiniteVolumeStepper> {
    let reconstruction = match numerics.reconstruction {
        ReconstructionDef::GradientLimited => ReconstructionScheme::GradientLimited,
        ReconstructionDef::ParabolicLimited => ReconstructionScheme::ParabolicLimited,
    };
    let flux = match numerics.flux {
        FluxDef::Godunov => FluxScheme::Godunov,
        FluxDef::Rusanov => FluxScheme::Rusanov,
    };
    let boundary = match numerics.boundary {
        BoundaryDef::Physical => BoundaryPolicy::Physical,
        BoundaryDef::Periodic => BoundaryPolicy::Periodic,
    };

    FiniteVolumeStepper::new(constants)
        .with_schemes(reconstruction, flux, boundary)
        .with_cfl_safety(numerics.cfl_safety)
        .and_then(|s| s.with_density_floor(numerics.density_floor))
        .and_then(|s| s.with_max_dt(max_dt_s))
        .map_err(|e| AppError::Compile(e.to_string()))
}
