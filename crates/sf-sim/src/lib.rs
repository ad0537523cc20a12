//! Explicit time marching of a stratified gas column.
//!
//! Provides:
//! - hydrostatic initial state and conserved/primitive bookkeeping
//! - physical (reservoir + extrapolation) and periodic boundaries
//! - a forward-Euler finite-volume stepper with a Courant-limited step
//! - a run loop that hands snapshots to an observer

pub mod boundary;
pub mod error;
pub mod integrator;
pub mod sim;
pub mod state;

pub use boundary::{BoundaryPolicy, exchange, set_physical_bcs};
pub use error::{SimError, SimResult};
pub use integrator::{FiniteVolumeStepper, StepReport, compute_dt};
pub use sim::{SimOptions, SimProgress, SimSnapshot, SimSummary, run_sim, run_sim_with_progress};
pub use state::{ColumnState, init_density, init_temperature, init_velocity};
