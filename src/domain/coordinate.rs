use std::fmt::{Display, Formatter};

/// A position on the earth's surface in degrees.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Coordinate { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        self.has_valid_latitude() && self.has_valid_longitude()
    }

    pub fn has_valid_latitude(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat)
    }

    pub fn has_valid_longitude(&self) -> bool {
        (-180.0..=180.0).contains(&self.lng)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::origin(0.0, 0.0, true)]
    #[case::north_pole(90.0, 0.0, true)]
    #[case::date_line(0.0, -180.0, true)]
    #[case::latitude_too_high(90.1, 0.0, false)]
    #[case::longitude_too_low(0.0, -180.5, false)]
    #[case::not_a_number(f64::NAN, 0.0, false)]
    fn is_valid(#[case] lat: f64, #[case] lng: f64, #[case] expected: bool) {
        assert_eq!(Coordinate::new(lat, lng).is_valid(), expected);
    }

    #[rstest]
    #[case::both_valid(10.0, 20.0, true, true)]
    #[case::latitude_out_of_range(-91.0, 20.0, false, true)]
    #[case::longitude_out_of_range(10.0, 200.0, true, false)]
    fn checks_each_half(#[case] lat: f64, #[case] lng: f64, #[case] latitude: bool, #[case] longitude: bool) {
        let coordinate = Coordinate::new(lat, lng);
        assert_eq!(coordinate.has_valid_latitude(), latitude);
        assert_eq!(coordinate.has_valid_longitude(), longitude);
    }

    #[test]
    fn displays_six_decimals() {
        assert_eq!(Coordinate::new(38.7895, 0.1667).to_string(), "(38.789500, 0.166700)");
    }
}
