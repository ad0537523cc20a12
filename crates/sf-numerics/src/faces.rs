//! Face-indexed storage and the face ranges each stage touches.

use std::ops::Range;

use sf_core::Field;

use crate::error::{NumericsError, NumericsResult};

/// Reconstructed values on both sides of every face.
///
/// Entries a reconstruction does not reach keep the `0.0` sentinel.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceValues {
    pub left: Field,
    pub right: Field,
}

impl FaceValues {
    pub fn zeros(n_faces: usize) -> Self {
        Self {
            left: Field::zeros(n_faces),
            right: Field::zeros(n_faces),
        }
    }

    pub fn n_faces(&self) -> usize {
        self.left.len()
    }

    pub(crate) fn check(&self, n_faces: usize, what: &'static str) -> NumericsResult<()> {
        for side in [&self.left, &self.right] {
            if side.len() != n_faces {
                return Err(NumericsError::FaceCount {
                    what,
                    expected: n_faces,
                    actual: side.len(),
                });
            }
        }
        Ok(())
    }
}

/// Faces whose left side is reconstructed (from cells `1 ..= n_cells - 2`).
pub fn left_faces(n_cells: usize) -> Range<usize> {
    2..n_cells
}

/// Faces whose right side is reconstructed (from cells `1 ..= n_cells - 2`).
pub fn right_faces(n_cells: usize) -> Range<usize> {
    1..n_cells.saturating_sub(1)
}

/// Faces with both sides reconstructed, the only ones that carry flux.
pub fn flux_faces(n_faces: usize) -> Range<usize> {
    2..n_faces.saturating_sub(2)
}

pub(crate) fn check_cells(values: &Field, n_cells: usize, what: &'static str) -> NumericsResult<()> {
    if values.len() == n_cells {
        Ok(())
    } else {
        Err(NumericsError::CellCount {
            what,
            expected: n_cells,
            actual: values.len(),
        })
    }
}

pub(crate) fn check_faces(values: &Field, n_faces: usize, what: &'static str) -> NumericsResult<()> {
    if values.len() == n_faces {
        Ok(())
    } else {
        Err(NumericsError::FaceCount {
            what,
            expected: n_faces,
            actual: values.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_ranges_for_reference_column() {
        // 104 cells, 105 faces
        assert_eq!(left_faces(104), 2..104);
        assert_eq!(right_faces(104), 1..103);
        assert_eq!(flux_faces(105), 2..103);
    }

    #[test]
    fn flux_faces_are_where_both_sides_exist() {
        let n_cells = 12;
        let both: Vec<usize> = left_faces(n_cells)
            .filter(|f| right_faces(n_cells).contains(f))
            .collect();
        let expected: Vec<usize> = flux_faces(n_cells + 1).collect();
        assert_eq!(both, expected);
    }
}
