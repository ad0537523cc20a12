//! sf-mesh: one-dimensional finite-volume mesh for stratoflow.
//!
//! Provides:
//! - Cell-centre generators (uniform, cosine-stretched)
//! - Edge and width derivation from centres
//! - `Mesh`, a validated immutable geometry with ghost-cell bookkeeping
//!
//! # Example
//!
//! ```
//! use sf_mesh::Mesh;
//!
//! let mesh = Mesh::uniform(100, 2, 200_000.0).unwrap();
//! assert_eq!(mesh.len(), 104);
//! assert_eq!(mesh.n_faces(), 105);
//! assert_eq!(mesh.interior(), 2..102);
//! ```

pub mod error;
pub mod grid;
pub mod mesh;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use error::{MeshError, MeshResult};
pub use grid::{
    GridKind, edges_from_centers, stretched_centers, uniform_centers, widths_from_edges,
};
pub use mesh::{MIN_GHOST_CELLS, Mesh};
