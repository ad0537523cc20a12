use sf_core::Field;
use sf_numerics::*;

#[test]
fn limiter_mc_keeps_first_and_last_entries_scaled() {
    let left = Field::from_vec(vec![1.0, 2.0, -1.0, 4.0]);
    let right = Field::from_vec(vec![5.0, 2.0, 3.0, 6.0]);
    let g = limiter_mc(&left, &right);
    assert_eq!(g[0], MC_BETA * 1.0);
    assert_eq!(g[1], MC_BETA * 2.0);
    assert_eq!(g[2], 0.0);
    assert_eq!(g[3], MC_BETA * 4.0);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn opposite_signs_give_zero(a in 1e-6f64..1e3, b in 1e-6f64..1e3) {
            prop_assert_eq!(mc_slope(a, -b), 0.0);
            prop_assert_eq!(mc_slope(-a, b), 0.0);
        }

        #[test]
        fn equal_slopes_are_scaled(s in -1e3f64..1e3) {
            let expected = MC_BETA * s;
            prop_assert!((mc_slope(s, s) - expected).abs() <= 1e-12 * s.abs().max(1.0));
        }

        #[test]
        fn slope_never_exceeds_either_side(a in -1e3f64..1e3, b in -1e3f64..1e3) {
            let s = mc_slope(a, b);
            prop_assert!(s.abs() <= a.abs().max(b.abs()) + 1e-12);
            prop_assert!(s == 0.0 || s.signum() == a.signum());
        }

        #[test]
        fn clamp_respects_neighbours(
            values in prop::collection::vec(-10.0f64..10.0, 6..40),
            noise in prop::collection::vec(-20.0f64..20.0, 41),
        ) {
            let n = values.len();
            let v = Field::from_vec(values);
            let projected = Field::from_iterator(n + 1, noise.into_iter().take(n + 1));
            let out = limiter_value(&projected, &v, left_faces(n));
            for f in left_faces(n) {
                let lo = v[f - 1].min(v[f]);
                let hi = v[f - 1].max(v[f]);
                prop_assert!(out[f] >= lo && out[f] <= hi);
            }
            prop_assert_eq!(out[0], projected[0]);
        }
    }
}
