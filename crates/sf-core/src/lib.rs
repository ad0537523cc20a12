//! sf-core: stable foundation for stratoflow.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real, Field + tolerances + float helpers)
//! - constants (physical constants of a run)
//! - error (shared error types)

pub mod constants;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use constants::PhysicalConstants;
pub use error::{SfError, SfResult};
pub use numeric::*;
pub use units::*;
