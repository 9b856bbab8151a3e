use std::fmt::{Display, Formatter};

/// A non-negative great-circle distance.
#[derive(Clone, Copy, Default, Debug, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub(crate) fn from_meters(meters: f64) -> Self {
        Distance(meters.max(0.0))
    }

    pub fn meters(&self) -> f64 {
        self.0
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0 >= 1000.0 {
            write!(f, "{:.2} km", self.0 / 1000.0)
        } else {
            write!(f, "{:.1} m", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, "0.0 m")]
    #[case(111.19, "111.2 m")]
    #[case(111_200.0, "111.20 km")]
    fn display_picks_a_readable_unit(#[case] meters: f64, #[case] expected: &str) {
        assert_eq!(Distance::from_meters(meters).to_string(), expected);
    }

    #[test]
    fn from_meters_never_goes_negative() {
        assert_eq!(Distance::from_meters(-0.0001).meters(), 0.0);
    }
}
