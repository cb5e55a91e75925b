use std::{error::Error as StdError, fmt};

use crate::{consts::PAIR_SEPARATOR, enum_trivial_from_impl};

/// The reason the raw input was rejected
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InvalidFormatKind {
    /// Neither the decimal nor the degree notation matched both values
    Unrecognized,
    /// The value was written in a valid degree notation,
    /// but it is outside the range [-180, 180]
    DegreesOutOfRange,
}

/// The raw latitude and longitude cannot be reduced to decimal degrees
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFormat {
    kind: InvalidFormatKind,
    latitude: String,
    longitude: String,
}

impl InvalidFormat {
    pub(crate) fn new(kind: InvalidFormatKind, latitude: &str, longitude: &str) -> Self {
        Self {
            kind,
            latitude: latitude.to_owned(),
            longitude: longitude.to_owned(),
        }
    }

    /// Why the input was rejected
    pub fn kind(&self) -> InvalidFormatKind {
        self.kind
    }

    /// The latitude exactly as it was given to the parser
    pub fn latitude(&self) -> &str {
        &self.latitude
    }

    /// The longitude exactly as it was given to the parser
    pub fn longitude(&self) -> &str {
        &self.longitude
    }
}

impl fmt::Display for InvalidFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            InvalidFormatKind::Unrecognized => "Unable to parse GPS coordinates",
            InvalidFormatKind::DegreesOutOfRange => "GPS must be in range <-180,180>",
        };
        write!(
            f,
            "{msg}. Your input: \"{}{PAIR_SEPARATOR}{}\"",
            self.latitude, self.longitude
        )
    }
}

impl StdError for InvalidFormat {}

/// The requested rendering mode is not known
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedOutputFormat {
    requested: String,
}

impl UnsupportedOutputFormat {
    pub(crate) fn new(requested: &str) -> Self {
        Self {
            requested: requested.to_owned(),
        }
    }

    /// The name of the format which was asked for
    pub fn requested(&self) -> &str {
        &self.requested
    }
}

impl fmt::Display for UnsupportedOutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The output format {:?} isn't supported (expected one of: decimal, degrees, noSeconds)",
            self.requested
        )
    }
}

impl StdError for UnsupportedOutputFormat {}

/// The letters of a cardinal alphabet are not pairwise distinct
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InvalidAlphabet {
    repeated: char,
}

impl InvalidAlphabet {
    pub(crate) fn new(repeated: char) -> Self {
        Self { repeated }
    }

    /// The letter used for more than one direction
    pub fn repeated(self) -> char {
        self.repeated
    }
}

impl fmt::Display for InvalidAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cardinal directions should be denoted by distinct letters, but {:?} is repeated",
            self.repeated
        )
    }
}

impl StdError for InvalidAlphabet {}

/// The number cannot be used as a coordinate in decimal degrees
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CoordinateNotInRange {
    value: f64,
}

impl CoordinateNotInRange {
    pub(crate) fn new(value: f64) -> Self {
        Self { value }
    }

    /// The rejected number
    pub fn value(self) -> f64 {
        self.value
    }
}

impl fmt::Display for CoordinateNotInRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Coordinate should be a finite number in range [-180, 180], got {}",
            self.value
        )
    }
}

impl StdError for CoordinateNotInRange {}

/// Any error produced by the crate
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// See [`InvalidFormat`]
    InvalidFormat(InvalidFormat),
    /// See [`UnsupportedOutputFormat`]
    UnsupportedOutputFormat(UnsupportedOutputFormat),
    /// See [`InvalidAlphabet`]
    InvalidAlphabet(InvalidAlphabet),
    /// See [`CoordinateNotInRange`]
    NotInRange(CoordinateNotInRange),
}

enum_trivial_from_impl!(InvalidFormat => Error:InvalidFormat);
enum_trivial_from_impl!(UnsupportedOutputFormat => Error:UnsupportedOutputFormat);
enum_trivial_from_impl!(InvalidAlphabet => Error:InvalidAlphabet);
enum_trivial_from_impl!(CoordinateNotInRange => Error:NotInRange);

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(inner) => write!(f, "{inner}"),
            Self::UnsupportedOutputFormat(inner) => write!(f, "{inner}"),
            Self::InvalidAlphabet(inner) => write!(f, "{inner}"),
            Self::NotInRange(inner) => write!(f, "{inner}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::InvalidFormat(inner) => Some(inner),
            Self::UnsupportedOutputFormat(inner) => Some(inner),
            Self::InvalidAlphabet(inner) => Some(inner),
            Self::NotInRange(inner) => Some(inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_format_keeps_raw_input() {
        let err = InvalidFormat::new(InvalidFormatKind::Unrecognized, "N 49,05 ", "foo");
        assert_eq!(err.latitude(), "N 49,05 ");
        assert_eq!(err.longitude(), "foo");
        assert_eq!(
            err.to_string(),
            "Unable to parse GPS coordinates. Your input: \"N 49,05 ;foo\""
        );
    }

    #[test]
    fn out_of_range_message() {
        let err = InvalidFormat::new(InvalidFormatKind::DegreesOutOfRange, "200°", "14");
        assert_eq!(
            err.to_string(),
            "GPS must be in range <-180,180>. Your input: \"200°;14\""
        );
    }

    #[test]
    fn umbrella_error_wraps_the_source() {
        let err: Error = InvalidAlphabet::new('N').into();
        assert!(err.source().is_some());
        assert_eq!(
            err.to_string(),
            "Cardinal directions should be denoted by distinct letters, but 'N' is repeated"
        );
    }
}
