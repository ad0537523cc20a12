//! Slope and value limiters.

use std::ops::Range;

use sf_core::{Field, Real};

/// Compression factor applied to the one-sided slopes.
pub const MC_BETA: Real = 0.8;

/// Monotonized-central style limiter on a pair of slope candidates.
///
/// Opposite signs give a flat slope. Otherwise the result is the candidate
/// of least magnitude among `beta * left`, `beta * right` and their plain
/// average, which always carries the sign of the slopes.
pub fn mc_slope(left: Real, right: Real) -> Real {
    if left * right < 0.0 {
        return 0.0;
    }
    let l = MC_BETA * left;
    let r = MC_BETA * right;
    let avg = 0.5 * (left + right);
    if left >= 0.0 && right >= 0.0 {
        l.min(r).min(avg)
    } else {
        l.max(r).max(avg)
    }
}

/// Apply [`mc_slope`] cellwise. The first and last cell have no neighbours
/// on one side and keep `beta * left`.
pub fn limiter_mc(left: &Field, right: &Field) -> Field {
    let n = left.len();
    let mut limited = left * MC_BETA;
    for i in 1..n.saturating_sub(1) {
        limited[i] = mc_slope(left[i], right[i]);
    }
    limited
}

/// Clamp face values on `faces` into the range spanned by the two cells
/// adjacent to each face, so a face never holds a new extremum.
pub fn limiter_value(projected: &Field, values: &Field, faces: Range<usize>) -> Field {
    let mut limited = projected.clone();
    for i in faces {
        let (a, b) = (values[i - 1], values[i]);
        let mini = a.min(b);
        let maxi = a.max(b);
        if limited[i] < mini {
            limited[i] = mini;
        }
        if limited[i] > maxi {
            limited[i] = maxi;
        }
    }
    limited
}
