//! Finite-volume discretisation for a stratified column.
//!
//! This crate turns cell-centred fields into face values (limited
//! reconstruction) and face values into numerical fluxes for the three
//! conserved equations. Face `i` sits between cell `i - 1` and cell `i`;
//! `FaceValues::left[i]` comes from cell `i - 1`, `FaceValues::right[i]`
//! from cell `i`.

pub mod error;
pub mod faces;
pub mod flux;
pub mod gradient;
pub mod limiter;
pub mod parabolic;
pub mod reconstruction;

pub use error::{NumericsError, NumericsResult};
pub use faces::{FaceValues, flux_faces, left_faces, right_faces};
pub use flux::{
    EulerFluxes, FluxScheme, acoustic_speed, euler_fluxes, godunov_flux, rusanov_flux,
};
pub use gradient::{calc_grad, project_gradients};
pub use limiter::{MC_BETA, limiter_mc, limiter_value, mc_slope};
pub use parabolic::{parabolic_faces, project_from_left, project_from_right};
pub use reconstruction::{ReconstructionScheme, reconstruct};
