//! Dataset validation tests

mod common;

use common::*;
use numint_core::{check_strictly_increasing, ComputePrimitives, Dataset, Error, ScalarBackend};
use proptest::prelude::*;

#[test]
fn test_rejected_inputs() {
    for (xs, ys) in rejected_inputs() {
        assert!(
            Dataset::from_xy(&xs, &ys).is_err(),
            "expected rejection for x={xs:?}, y={ys:?}"
        );
    }
}

#[test]
fn test_first_offending_index_reported() {
    let err = check_strictly_increasing(&[0.0, 1.0, 2.0, 2.0, 1.0]).unwrap_err();
    assert!(matches!(err, Error::NonMonotonicInput { index: 3, .. }));
}

#[test]
fn test_from_fn_matches_closure() {
    let ds = Dataset::from_fn(f64::sin, 0.0, std::f64::consts::PI, 6).unwrap();
    for s in ds.samples() {
        assert_relative_eq!(s.y, s.x.sin(), epsilon = EPSILON);
    }
}

proptest! {
    #[test]
    fn prop_valid_grids_accepted(
        origin in -100.0..100.0f64,
        gaps in prop::collection::vec(0.01..10.0f64, 1..50)
    ) {
        let xs = grid_from_gaps(origin, &gaps);
        let ys: Vec<f64> = xs.iter().map(|x| x * 0.5).collect();
        let ds = Dataset::from_xy(&xs, &ys).unwrap();
        prop_assert_eq!(ds.intervals(), gaps.len());
        prop_assert_eq!(ds.spacings().len(), gaps.len());
    }

    #[test]
    fn prop_reversed_grids_rejected(
        gaps in prop::collection::vec(0.01..10.0f64, 1..50)
    ) {
        let mut xs = grid_from_gaps(0.0, &gaps);
        xs.reverse();
        let ys = vec![0.0; xs.len()];
        let is_non_monotonic = matches!(
            Dataset::from_xy(&xs, &ys),
            Err(Error::NonMonotonicInput { index: 1, .. })
        );
        prop_assert!(is_non_monotonic);
    }

    #[test]
    fn prop_max_abs_step_bounds_differences(
        data in prop::collection::vec(-1e3..1e3f64, 2..100)
    ) {
        let p = ScalarBackend::new();
        let bound = p.max_abs_step(&data);
        for d in p.forward_differences(&data, 1) {
            prop_assert!(d.abs() <= bound);
        }
    }
}
