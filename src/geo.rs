use crate::domain::Coordinate;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Returns the great-circle distance between two coordinates in kilometers, using the haversine formula.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const XABIA: Coordinate = Coordinate::new(38.7895, 0.1667);

    #[rstest]
    #[case::same_point(XABIA, XABIA, 0.0)]
    #[case::one_degree_of_latitude(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0), 111.195)]
    #[case::one_degree_of_longitude_at_equator(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0), 111.195)]
    #[case::paris_to_london(Coordinate::new(48.8566, 2.3522), Coordinate::new(51.5074, -0.1278), 343.556)]
    #[case::antipodes(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0), 20015.087)]
    fn distance_between(#[case] a: Coordinate, #[case] b: Coordinate, #[case] expected_km: f64) {
        assert!((distance_km(a, b) - expected_km).abs() < 0.001, "expected {}, got {}", expected_km, distance_km(a, b));
    }

    #[rstest]
    #[case(XABIA, Coordinate::new(38.7897, 0.1669))]
    #[case(Coordinate::new(-33.8688, 151.2093), Coordinate::new(40.7128, -74.0060))]
    #[case(Coordinate::new(89.9, 10.0), Coordinate::new(-89.9, -170.0))]
    fn distance_is_symmetric(#[case] a: Coordinate, #[case] b: Coordinate) {
        assert_eq!(distance_km(a, b), distance_km(b, a));
    }

    #[test]
    fn twenty_meters_north() {
        let north = Coordinate::new(XABIA.lat + 0.02 / 111.195, XABIA.lng);
        assert!((distance_km(XABIA, north) - 0.02).abs() < 1e-6);
    }
}
