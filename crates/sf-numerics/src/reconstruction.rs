//! Reconstruction policy selection.

use sf_core::Field;
use sf_mesh::Mesh;

use crate::error::NumericsResult;
use crate::faces::FaceValues;
use crate::gradient::{calc_grad, project_gradients};
use crate::parabolic::parabolic_faces;

/// How cell values are carried to the faces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReconstructionScheme {
    /// Four-point slopes merged by the MC limiter, projected linearly.
    GradientLimited,
    /// Quadratic profile clamped between the two cells sharing each face.
    #[default]
    ParabolicLimited,
}

impl ReconstructionScheme {
    pub fn label(&self) -> &'static str {
        match self {
            ReconstructionScheme::GradientLimited => "gradient-limited",
            ReconstructionScheme::ParabolicLimited => "parabolic-limited",
        }
    }
}

/// Reconstruct `values` on both sides of every face.
pub fn reconstruct(
    scheme: ReconstructionScheme,
    values: &Field,
    mesh: &Mesh,
) -> NumericsResult<FaceValues> {
    match scheme {
        ReconstructionScheme::GradientLimited => {
            let gradients = calc_grad(values, mesh)?;
            project_gradients(values, &gradients, mesh)
        }
        ReconstructionScheme::ParabolicLimited => parabolic_faces(values, mesh),
    }
}
