pub(crate) const MINUTES_IN_DEGREE: u8 = 60;
pub(crate) const SECONDS_IN_MINUTE: u8 = 60;

/// Both latitude and longitude are limited by the straight angle
pub(crate) const HALF_TURN_DEG: u8 = 180;

pub(crate) const DEGREE_SIGN: char = '°';
pub(crate) const ARC_MINUTE_SIGN: char = '\'';
pub(crate) const ARC_SECOND_SIGN: char = '"';

// the number of fractional digits in the rendered values
pub(crate) const DECIMAL_FD: u8 = 6;
pub(crate) const ARC_MINUTES_FD: u8 = 4;
pub(crate) const ARC_SECONDS_FD: u8 = 3;

/// Separates the latitude from the longitude in a single-string representation
pub(crate) const PAIR_SEPARATOR: char = ';';

pub(crate) fn max_degrees() -> f64 {
    f64::from(HALF_TURN_DEG)
}

pub(crate) fn seconds_in_degree() -> f64 {
    f64::from(MINUTES_IN_DEGREE) * f64::from(SECONDS_IN_MINUTE)
}
