use crate::SfError;

/// Floating point type used throughout system
pub type Real = f64;

/// Cell- or face-indexed numeric vector with elementwise arithmetic.
pub type Field = nalgebra::DVector<Real>;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Check that a field has exactly `expected` entries.
pub fn ensure_len(field: &Field, expected: usize, what: &'static str) -> Result<(), SfError> {
    if field.len() == expected {
        Ok(())
    } else {
        Err(SfError::LengthMismatch {
            what,
            expected,
            actual: field.len(),
        })
    }
}
