//! Integration test: the reference isothermal column.
//!
//! 100 interior cells over 200 km, parabolic reconstruction, Rusanov
//! fluxes, physical boundaries, safety 0.001, run to t = 0.1 s.
//! The column starts in hydrostatic balance and should stay close to it.

use sf_core::PhysicalConstants;
use sf_mesh::Mesh;
use sf_numerics::{FluxScheme, ReconstructionScheme};
use sf_sim::{BoundaryPolicy, ColumnState, FiniteVolumeStepper, SimOptions, run_sim};

fn reference_setup() -> (Mesh, PhysicalConstants, ColumnState) {
    let c = PhysicalConstants::reference();
    let mesh = Mesh::uniform(100, 2, 200_000.0).unwrap();
    let state = ColumnState::hydrostatic(&mesh, &c);
    (mesh, c, state)
}

#[test]
fn reference_column_stays_hydrostatic() {
    let (mesh, c, mut state) = reference_setup();
    let stepper = FiniteVolumeStepper::new(c);
    let opts = SimOptions::default();
    let initial = state.clone();

    let mut times = Vec::new();
    let mut cell80_density = Vec::new();
    let summary = run_sim(&stepper, &mesh, &mut state, &opts, |snap| {
        times.push(snap.time);
        let rho = &snap.state.rho;
        for i in snap.mesh.interior() {
            assert!(rho[i] > 0.0, "step {}: rho[{i}] = {}", snap.step, rho[i]);
        }
        for i in snap.mesh.interior().skip(1) {
            assert!(
                rho[i] <= rho[i - 1],
                "step {}: density rises at cell {i}",
                snap.step
            );
        }
        cell80_density.push(rho[80]);
        Ok(())
    })
    .unwrap();

    // dt is about 2.16 ms, so roughly 47 steps
    assert!(summary.steps > 30 && summary.steps < 70, "{}", summary.steps);
    assert!(summary.final_time >= opts.t_max);
    assert_eq!(times.len(), summary.steps + 1);
    assert!(times.windows(2).all(|w| w[1] > w[0]));
    assert_eq!(cell80_density.len(), times.len());
    assert!(cell80_density.iter().all(|&r| r > 0.0 && r < c.r0));

    for i in mesh.interior() {
        assert!(state.rho[i] > 0.0);
        assert!(state.temp[i] > 0.0);
        assert!(state.vel[i].abs() < 10.0, "vel[{i}] = {}", state.vel[i]);
        let rel = (state.rho[i] - initial.rho[i]).abs() / initial.rho[i];
        assert!(rel < 1.0e-2, "rho[{i}] drifted by {rel}");
    }
    for i in mesh.interior().skip(1) {
        assert!(state.rho[i] < state.rho[i - 1], "density not decreasing at {i}");
    }
}

#[test]
fn every_scheme_combination_runs() {
    let (mesh, c, _) = reference_setup();
    let opts = SimOptions {
        t_max: 0.02,
        ..SimOptions::default()
    };
    for reconstruction in [
        ReconstructionScheme::GradientLimited,
        ReconstructionScheme::ParabolicLimited,
    ] {
        for flux in [FluxScheme::Godunov, FluxScheme::Rusanov] {
            let stepper = FiniteVolumeStepper::new(c).with_schemes(
                reconstruction,
                flux,
                BoundaryPolicy::Physical,
            );
            let mut state = ColumnState::hydrostatic(&mesh, &c);
            let summary = run_sim(&stepper, &mesh, &mut state, &opts, |_| Ok(())).unwrap();
            assert!(summary.steps > 0);
            assert!(summary.min_density > 0.0);
        }
    }
}

#[test]
fn stretched_column_runs() {
    let c = PhysicalConstants::reference();
    let mesh = Mesh::stretched(60, 2, 100_000.0).unwrap();
    let mut state = ColumnState::hydrostatic(&mesh, &c);
    let stepper = FiniteVolumeStepper::new(c);
    let opts = SimOptions {
        t_max: 1.0e3,
        max_steps: 25,
        record_every: 5,
    };
    let summary = run_sim(&stepper, &mesh, &mut state, &opts, |_| Ok(())).unwrap();
    assert_eq!(summary.steps, 25);
    assert_eq!(summary.records, 6);
    assert!(summary.min_density > 0.0);
}
