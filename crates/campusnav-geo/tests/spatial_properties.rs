use campusnav_core::models::Coordinate;
use campusnav_geo::{geodesic_distance, within_distance};
use proptest::prelude::*;

fn campus_coordinate() -> impl Strategy<Value = Coordinate> {
    (21.48f64..21.52, 39.22f64..39.27).prop_map(|(lat, lon)| Coordinate::new(lat, lon))
}

proptest! {
    #[test]
    fn distance_is_symmetric_and_non_negative(a in campus_coordinate(), b in campus_coordinate()) {
        let ab = geodesic_distance(a, b);
        let ba = geodesic_distance(b, a);
        prop_assert!(ab >= 0.0);
        prop_assert!((ab - ba).abs() < 1e-6);
    }

    #[test]
    fn within_distance_is_monotonic_in_threshold(
        a in campus_coordinate(),
        b in campus_coordinate(),
        small in 0.0f64..2_000.0,
        extra in 0.0f64..2_000.0,
    ) {
        let large = small + extra;
        if within_distance(a, b, small) {
            prop_assert!(within_distance(a, b, large));
        }
    }
}
