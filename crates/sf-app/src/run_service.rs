//! Run execution service.

use std::path::Path;
use std::time::Instant;

use sf_project::RunConfig;
use sf_results::{FieldHistoryWriter, HistoryRecord, RunManifest};
use sf_sim::{ColumnState, SimError, run_sim_with_progress};
use tracing::info;

use crate::error::AppResult;
use crate::progress::{RunProgressEvent, RunStage, TransientProgress};
use crate::project_service;
use crate::runtime_compile;

/// Options for running simulations.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub solver_version: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            solver_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Request to execute a run.
pub struct RunRequest<'a> {
    pub config_path: &'a Path,
    pub out_dir: &'a Path,
    pub options: RunOptions,
}

/// Concise timing and execution summary for a run.
#[derive(Debug, Clone, Default)]
pub struct RunTimingSummary {
    pub compile_time_s: f64,
    pub init_time_s: f64,
    pub solve_time_s: f64,
    pub save_time_s: f64,
    pub total_time_s: f64,
    pub steps: usize,
    pub records: usize,
}

/// Response from a run execution.
#[derive(Debug, Clone)]
pub struct RunResponse {
    pub run_id: String,
    pub manifest: RunManifest,
    pub timing: RunTimingSummary,
}

fn emit_progress(
    progress_cb: &mut Option<&mut dyn FnMut(RunProgressEvent)>,
    stage: RunStage,
    started: Instant,
    message: Option<String>,
    transient: Option<TransientProgress>,
) {
    if let Some(cb) = progress_cb.as_deref_mut() {
        cb(RunProgressEvent {
            stage,
            elapsed_wall_s: started.elapsed().as_secs_f64(),
            message,
            transient,
        });
    }
}

/// Load a config file and run it.
pub fn execute_run(request: &RunRequest) -> AppResult<RunResponse> {
    execute_run_with_progress(request, None)
}

/// Load a config file and run it, streaming progress events.
pub fn execute_run_with_progress(
    request: &RunRequest,
    mut progress_cb: Option<&mut dyn FnMut(RunProgressEvent)>,
) -> AppResult<RunResponse> {
    let started = Instant::now();
    emit_progress(
        &mut progress_cb,
        RunStage::LoadingConfig,
        started,
        Some(format!("Loading {}", request.config_path.display())),
        None,
    );
    let config = project_service::load_config(request.config_path)?;
    execute_config_inner(
        &config,
        request.out_dir,
        &request.options,
        progress_cb,
        started,
    )
}

/// Run an in-memory config, writing histories and the manifest to `out_dir`.
pub fn execute_config(
    config: &RunConfig,
    out_dir: &Path,
    options: &RunOptions,
    progress_cb: Option<&mut dyn FnMut(RunProgressEvent)>,
) -> AppResult<RunResponse> {
    execute_config_inner(config, out_dir, options, progress_cb, Instant::now())
}

fn execute_config_inner(
    config: &RunConfig,
    out_dir: &Path,
    options: &RunOptions,
    mut progress_cb: Option<&mut dyn FnMut(RunProgressEvent)>,
    started: Instant,
) -> AppResult<RunResponse> {
    let mut timing = RunTimingSummary::default();

    emit_progress(
        &mut progress_cb,
        RunStage::CompilingRuntime,
        started,
        Some("Compiling runtime".to_string()),
        None,
    );
    let compile_started = Instant::now();
    let runtime = runtime_compile::compile_config(config)?;
    timing.compile_time_s = compile_started.elapsed().as_secs_f64();

    emit_progress(
        &mut progress_cb,
        RunStage::InitializingState,
        started,
        Some("Initializing hydrostatic column".to_string()),
        None,
    );
    let init_started = Instant::now();
    let run_id = sf_results::compute_run_id(config, &options.solver_version);
    let mesh = &runtime.mesh;
    let mut state = ColumnState::hydrostatic(mesh, &runtime.constants);
    let mut writer = FieldHistoryWriter::create(out_dir, mesh.centers())?;
    timing.init_time_s = init_started.elapsed().as_secs_f64();

    info!(
        run_id = %run_id,
        config = %config.name,
        out_dir = %out_dir.display(),
        "executing run"
    );

    let t_max = runtime.options.t_max;
    emit_progress(
        &mut progress_cb,
        RunStage::RunningSimulation,
        started,
        Some("Running simulation".to_string()),
        Some(TransientProgress {
            t_max_s: t_max,
            ..TransientProgress::default()
        }),
    );

    let solve_started = Instant::now();
    let summary = run_sim_with_progress(
        &runtime.stepper,
        mesh,
        &mut state,
        &runtime.options,
        |snap| {
            writer
                .write(&HistoryRecord {
                    rho: &snap.state.rho,
                    vel: &snap.state.vel,
                    temp: &snap.state.temp,
                    total_energy: &snap.state.total_energy,
                })
                .map_err(|e| SimError::Observer {
                    message: e.to_string(),
                })
        },
        Some(&mut |p| {
            emit_progress(
                &mut progress_cb,
                RunStage::RunningSimulation,
                started,
                Some(format!(
                    "Step {} | t={:.4e}/{:.4e} s | dt={:.3e} s",
                    p.step, p.sim_time, p.t_max, p.dt
                )),
                Some(TransientProgress {
                    sim_time_s: p.sim_time,
                    t_max_s: p.t_max,
                    fraction_complete: p.fraction_complete,
                    step: p.step,
                    dt_s: p.dt,
                }),
            )
        }),
    )?;
    timing.solve_time_s = solve_started.elapsed().as_secs_f64();
    timing.steps = summary.steps;
    timing.records = writer.records();

    emit_progress(
        &mut progress_cb,
        RunStage::SavingResults,
        started,
        Some("Saving manifest".to_string()),
        None,
    );
    let save_started = Instant::now();
    let manifest = RunManifest {
        run_id: run_id.clone(),
        config_name: config.name.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        solver_version: options.solver_version.clone(),
        n_pts: mesh.n_pts(),
        n_gcs: mesh.n_gcs(),
        constants: runtime.constants,
        steps: summary.steps,
        final_time_s: summary.final_time,
        last_dt_s: summary.last_dt,
        records: writer.records(),
    };
    sf_results::save_manifest(out_dir, &manifest)?;
    timing.save_time_s = save_started.elapsed().as_secs_f64();
    timing.total_time_s = started.elapsed().as_secs_f64();

    emit_progress(
        &mut progress_cb,
        RunStage::Completed,
        started,
        Some("Run complete".to_string()),
        None,
    );
    info!(
        run_id = %run_id,
        steps = summary.steps,
        final_time = summary.final_time,
        total_time_s = timing.total_time_s,
        "run complete"
    );

    Ok(RunResponse {
        run_id,
        manifest,
        timing,
    })
}
