use crate::geodesy::GeodesyError;

/// A latitude/longitude pair in degrees.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeodesyError> {
        let coordinate = GeoCoordinate { latitude, longitude };
        coordinate.validate()?;
        Ok(coordinate)
    }

    /// Fails for non-finite values and for values outside [-90, 90] / [-180, 180].
    pub fn validate(&self) -> Result<(), GeodesyError> {
        if !(self.latitude >= -90.0 && self.latitude <= 90.0) {
            return Err(GeodesyError::InvalidInput(format!(
                "invalid latitude: {}, must be between -90 and 90",
                self.latitude
            )));
        }

        if !(self.longitude >= -180.0 && self.longitude <= 180.0) {
            return Err(GeodesyError::InvalidInput(format!(
                "invalid longitude: {}, must be between -180 and 180",
                self.longitude
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(90.0, 180.0)]
    #[case(-90.0, -180.0)]
    #[case(47.4979, 19.0402)]
    fn new_accepts_coordinates_in_range(#[case] latitude: f64, #[case] longitude: f64) {
        assert_eq!(GeoCoordinate::new(latitude, longitude), Ok(GeoCoordinate { latitude, longitude }));
    }

    #[rstest]
    #[case::latitude_too_large(91.0, 0.0, "invalid latitude")]
    #[case::latitude_too_small(-90.5, 0.0, "invalid latitude")]
    #[case::latitude_nan(f64::NAN, 0.0, "invalid latitude")]
    #[case::longitude_too_large(0.0, 180.1, "invalid longitude")]
    #[case::longitude_infinite(0.0, f64::NEG_INFINITY, "invalid longitude")]
    fn new_rejects_invalid_coordinates(#[case] latitude: f64, #[case] longitude: f64, #[case] expected_message: &str) {
        let err = GeoCoordinate::new(latitude, longitude).expect_err("expected an error but got Ok");
        let msg = err.to_string();
        assert!(msg.contains(expected_message), "Expected error message to contain '{expected_message}', but got '{msg}'");
    }

    #[test]
    fn error_message_names_the_offending_value_once() {
        let err = GeoCoordinate::new(91.0, 0.0).expect_err("expected an error but got Ok");
        assert_eq!(err.to_string(), "invalid latitude: 91, must be between -90 and 90");
    }
}
