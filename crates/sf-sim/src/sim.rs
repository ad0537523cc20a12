//! Run loop and snapshot delivery.

use sf_core::Real;
use sf_mesh::Mesh;
use tracing::info;

use crate::error::{SimError, SimResult};
use crate::integrator::FiniteVolumeStepper;
use crate::state::ColumnState;

/// Options for a run.
#[derive(Clone, Debug)]
pub struct SimOptions {
    /// Stop once simulated time reaches this value (seconds)
    pub t_max: Real,
    /// Maximum number of steps (safety limit)
    pub max_steps: usize,
    /// Hand every N-th step to the observer
    pub record_every: usize,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            t_max: 0.1,
            max_steps: 100_000,
            record_every: 1,
        }
    }
}

/// Borrowed view of the column handed to observers.
#[derive(Clone, Copy, Debug)]
pub struct SimSnapshot<'a> {
    pub step: usize,
    pub time: Real,
    /// Step that produced this state; zero for the initial snapshot.
    pub dt: Real,
    pub mesh: &'a Mesh,
    pub state: &'a ColumnState,
}

/// Transient progress, emitted after every step.
#[derive(Clone, Copy, Debug)]
pub struct SimProgress {
    pub step: usize,
    pub sim_time: Real,
    pub t_max: Real,
    pub fraction_complete: Real,
    pub dt: Real,
}

/// What a finished run looked like.
#[derive(Clone, Debug, PartialEq)]
pub struct SimSummary {
    pub steps: usize,
    pub final_time: Real,
    pub last_dt: Real,
    /// Snapshots delivered to the observer, initial one included.
    pub records: usize,
    pub min_density: Real,
    pub max_speed: Real,
}

/// March `state` from `t = 0` until `t_max` or `max_steps`.
///
/// The observer sees the initial state, every `record_every`-th step and
/// the final state. An observer error stops the run.
pub fn run_sim<F>(
    stepper: &FiniteVolumeStepper,
    mesh: &Mesh,
    state: &mut ColumnState,
    opts: &SimOptions,
    observer: F,
) -> SimResult<SimSummary>
where
    F: FnMut(&SimSnapshot<'_>) -> SimResult<()>,
{
    run_sim_with_progress(stepper, mesh, state, opts, observer, None)
}

/// [`run_sim`] with a progress callback invoked after every step.
pub fn run_sim_with_progress<F>(
    stepper: &FiniteVolumeStepper,
    mesh: &Mesh,
    state: &mut ColumnState,
    opts: &SimOptions,
    mut observer: F,
    mut progress: Option<&mut dyn FnMut(SimProgress)>,
) -> SimResult<SimSummary>
where
    F: FnMut(&SimSnapshot<'_>) -> SimResult<()>,
{
    if !(opts.t_max.is_finite() && opts.t_max > 0.0) {
        return Err(SimError::InvalidArg {
            what: "t_max must be positive and finite",
        });
    }
    if opts.max_steps == 0 {
        return Err(SimError::InvalidArg {
            what: "max_steps must be positive",
        });
    }
    if opts.record_every == 0 {
        return Err(SimError::InvalidArg {
            what: "record_every must be positive",
        });
    }
    state.check_layout(mesh)?;

    info!(
        n_pts = mesh.n_pts(),
        n_gcs = mesh.n_gcs(),
        reconstruction = stepper.reconstruction.label(),
        flux = stepper.flux.label(),
        boundary = stepper.boundary.label(),
        t_max = opts.t_max,
        "starting run"
    );

    let mut t = 0.0;
    let mut step = 0;
    let mut last_dt = 0.0;
    let mut records = 0;
    let mut summary_min = Real::INFINITY;
    let mut summary_max: Real = 0.0;

    observer(&SimSnapshot {
        step,
        time: t,
        dt: last_dt,
        mesh,
        state,
    })?;
    records += 1;

    while t < opts.t_max && step < opts.max_steps {
        let report = stepper.step(mesh, state)?;
        t += report.dt;
        step += 1;
        last_dt = report.dt;
        summary_min = summary_min.min(report.min_density);
        summary_max = summary_max.max(report.max_speed);

        if let Some(cb) = progress.as_deref_mut() {
            cb(SimProgress {
                step,
                sim_time: t,
                t_max: opts.t_max,
                fraction_complete: (t / opts.t_max).min(1.0),
                dt: report.dt,
            });
        }

        if step % opts.record_every == 0 {
            observer(&SimSnapshot {
                step,
                time: t,
                dt: report.dt,
                mesh,
                state,
            })?;
            records += 1;
        }
    }

    // Always deliver the final state
    if step > 0 && step % opts.record_every != 0 {
        observer(&SimSnapshot {
            step,
            time: t,
            dt: last_dt,
            mesh,
            state,
        })?;
        records += 1;
    }

    info!(steps = step, final_time = t, last_dt, records, "run finished");

    Ok(SimSummary {
        steps: step,
        final_time: t,
        last_dt,
        records,
        min_density: summary_min,
        max_speed: summary_max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_core::PhysicalConstants;

    #[test]
    fn sim_options_defaults() {
        let opts = SimOptions::default();
        assert_eq!(opts.t_max, 0.1);
        assert_eq!(opts.max_steps, 100_000);
        assert_eq!(opts.record_every, 1);
    }

    #[test]
    fn invalid_options_are_rejected() {
        let c = PhysicalConstants::reference();
        let mesh = Mesh::uniform(8, 2, 16_000.0).unwrap();
        let stepper = FiniteVolumeStepper::new(c);
        let mut state = ColumnState::hydrostatic(&mesh, &c);
        for opts in [
            SimOptions {
                t_max: 0.0,
                ..SimOptions::default()
            },
            SimOptions {
                max_steps: 0,
                ..SimOptions::default()
            },
            SimOptions {
                record_every: 0,
                ..SimOptions::default()
            },
        ] {
            let r = run_sim(&stepper, &mesh, &mut state, &opts, |_| Ok(()));
            assert!(matches!(r, Err(SimError::InvalidArg { .. })));
        }
    }

    #[test]
    fn records_initial_decimated_and_final() {
        let c = PhysicalConstants::reference();
        let mesh = Mesh::uniform(8, 2, 16_000.0).unwrap();
        let stepper = FiniteVolumeStepper::new(c);
        let mut state = ColumnState::hydrostatic(&mesh, &c);
        let opts = SimOptions {
            t_max: 1.0e3,
            max_steps: 7,
            record_every: 3,
        };
        let mut seen = Vec::new();
        let summary = run_sim(&stepper, &mesh, &mut state, &opts, |snap| {
            seen.push(snap.step);
            Ok(())
        })
        .unwrap();
        assert_eq!(seen, vec![0, 3, 6, 7]);
        assert_eq!(summary.steps, 7);
        assert_eq!(summary.records, 4);
    }

    #[test]
    fn observer_error_stops_the_run() {
        let c = PhysicalConstants::reference();
        let mesh = Mesh::uniform(8, 2, 16_000.0).unwrap();
        let stepper = FiniteVolumeStepper::new(c);
        let mut state = ColumnState::hydrostatic(&mesh, &c);
        let opts = SimOptions {
            t_max: 1.0e3,
            max_steps: 10,
            record_every: 1,
        };
        let mut calls = 0;
        let r = run_sim(&stepper, &mesh, &mut state, &opts, |snap| {
            calls += 1;
            if snap.step == 2 {
                Err(SimError::Observer {
                    message: "disk full".to_string(),
                })
            } else {
                Ok(())
            }
        });
        assert!(matches!(r, Err(SimError::Observer { .. })));
        assert_eq!(calls, 3);
    }

    #[test]
    fn progress_reaches_completion() {
        let c = PhysicalConstants::reference();
        let mesh = Mesh::uniform(8, 2, 16_000.0).unwrap();
        let stepper = FiniteVolumeStepper::new(c).with_cfl_safety(0.5).unwrap();
        let mut state = ColumnState::hydrostatic(&mesh, &c);
        let opts = SimOptions {
            t_max: 5.0,
            max_steps: 1000,
            record_every: 100,
        };
        let mut last = None;
        let mut cb = |p: SimProgress| last = Some(p);
        let summary =
            run_sim_with_progress(&stepper, &mesh, &mut state, &opts, |_| Ok(()), Some(&mut cb))
                .unwrap();
        let last = last.unwrap();
        assert_eq!(last.step, summary.steps);
        assert_eq!(last.fraction_complete, 1.0);
        assert!(summary.final_time >= 5.0);
    }
}
