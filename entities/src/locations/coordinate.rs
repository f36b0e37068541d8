use super::ValidationError;

/// Mean Earth radius (IUGG), the sphere PostGIS uses for `geography` when
/// `use_spheroid` is false.
pub const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

/// A point on the Earth, always ordered longitude first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    longitude: f64,
    latitude: f64,
}

impl Coordinate {
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, ValidationError> {
        if !longitude.is_finite() {
            return Err(ValidationError::new("longitude must be a finite number"));
        }
        if !latitude.is_finite() {
            return Err(ValidationError::new("latitude must be a finite number"));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ValidationError::new(format!(
                "longitude {longitude} is outside [-180, 180]"
            )));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ValidationError::new(format!(
                "latitude {latitude} is outside [-90, 90]"
            )));
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// GeoJSON position: `[longitude, latitude]`.
    pub fn to_lng_lat(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }

    /// Great-circle distance in meters (haversine).
    pub fn distance_meters(&self, other: &Coordinate) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = (other.latitude - self.latitude).to_radians();
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().min(1.0).asin();

        EARTH_RADIUS_METERS * c
    }
}

/// Maximum search distance in meters. Always finite and positive.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct SearchRadius(f64);

impl SearchRadius {
    pub fn meters(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ValidationError::new(format!(
                "radius must be a positive number of meters, got {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn inner(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    #[rstest]
    #[case(f64::NAN, 12.0)]
    #[case(77.0, f64::NAN)]
    #[case(f64::INFINITY, 12.0)]
    #[case(77.0, f64::NEG_INFINITY)]
    #[case(180.5, 12.0)]
    #[case(77.0, -90.5)]
    fn test_invalid_coordinates_are_rejected(#[case] longitude: f64, #[case] latitude: f64) {
        assert!(Coordinate::new(longitude, latitude).is_err());
    }

    #[rstest]
    #[case(-180.0, -90.0)]
    #[case(180.0, 90.0)]
    #[case(0.0, 0.0)]
    fn test_boundary_coordinates_are_accepted(#[case] longitude: f64, #[case] latitude: f64) {
        assert!(Coordinate::new(longitude, latitude).is_ok());
    }

    #[test]
    fn test_coordinate_keeps_longitude_first() {
        let bengaluru = Coordinate::new(77.5946, 12.9716).unwrap();
        assert_eq!(bengaluru.to_lng_lat(), [77.5946, 12.9716]);
        assert_eq!(bengaluru.longitude(), 77.5946);
        assert_eq!(bengaluru.latitude(), 12.9716);
    }

    #[test]
    fn test_distance_to_same_point_is_zero() {
        let point = Coordinate::new(77.5946, 12.9716).unwrap();
        assert_eq!(point.distance_meters(&point), 0.0);
    }

    #[test]
    fn test_distance_is_geodesic() {
        // London to Paris is approximately 344 km
        let london = Coordinate::new(-0.1278, 51.5074).unwrap();
        let paris = Coordinate::new(2.3522, 48.8566).unwrap();
        let distance = london.distance_meters(&paris);
        assert!(approx_eq(distance, 343_560.0, 5000.0));
        assert!(approx_eq(distance, paris.distance_meters(&london), 1e-6));
    }

    #[test]
    fn test_one_degree_of_longitude_shrinks_away_from_the_equator() {
        let at_equator = Coordinate::new(0.0, 0.0)
            .unwrap()
            .distance_meters(&Coordinate::new(1.0, 0.0).unwrap());
        let at_sixty = Coordinate::new(0.0, 60.0)
            .unwrap()
            .distance_meters(&Coordinate::new(1.0, 60.0).unwrap());
        assert!(approx_eq(at_equator, 111_195.0, 50.0));
        assert!(approx_eq(at_sixty, at_equator / 2.0, 100.0));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-5.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_non_positive_radius_is_rejected(#[case] meters: f64) {
        assert!(SearchRadius::meters(meters).is_err());
    }

    #[test]
    fn test_radius_keeps_its_value() {
        assert_eq!(SearchRadius::meters(5000.0).unwrap().inner(), 5000.0);
    }
}
