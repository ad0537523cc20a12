use sf_core::*;
use sf_core::constants::{AMU, BOLTZMANN};

#[test]
fn reference_column_numbers() {
    let c = PhysicalConstants::reference();
    let tol = Tolerances::default();
    assert!(nearly_equal(c.mass, 2.672e-26, tol));
    assert!(nearly_equal(c.r0, 2.672e-7, tol));
    assert!(nearly_equal(c.kom(), 1.38e-23 / 2.672e-26, tol));
    assert!(c.gravity < 0.0);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn derived_gravity_reproduces_scale_height(
            t0 in 100.0f64..5000.0,
            amu in 1.0f64..100.0,
            h in 1.0e3f64..1.0e6,
        ) {
            let c = PhysicalConstants::with_scale_height(t0, amu * AMU, 1.0, BOLTZMANN, h).unwrap();
            let tol = Tolerances { abs: 0.0, rel: 1e-12 };
            prop_assert!(nearly_equal(c.scale_height(t0), h, tol));
            prop_assert!(c.sound_speed(t0) > 0.0);
        }

        #[test]
        fn scale_height_is_linear_in_temperature(t in 1.0f64..1.0e4) {
            let c = PhysicalConstants::reference();
            let tol = Tolerances { abs: 0.0, rel: 1e-12 };
            prop_assert!(nearly_equal(
                c.scale_height(2.0 * t),
                2.0 * c.scale_height(t),
                tol
            ));
        }
    }
}
