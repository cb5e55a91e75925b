use std::{convert::TryFrom, fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    cardinal::{Pole, RotationalDirection},
    consts::{max_degrees, DECIMAL_FD, PAIR_SEPARATOR},
    errors::{CoordinateNotInRange, InvalidFormat, InvalidFormatKind},
    parser::Parser,
    utils::{number_format, round_to},
};

pub use self::format::{Formatted, OutputFormat};

mod format;

/// The point on the Earth's surface, represented as the pair of signed
/// decimal degrees (latitude, longitude).
///
/// Both values are kept rounded to 6 fractional digits (roughly 0.1 m)
/// and both are limited by the range [-180, 180].
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(f64, f64)", into = "(f64, f64)"))]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Construct the coordinate from the decimal degrees.
    ///
    /// ```
    /// use gps_parse::Coordinate;
    ///
    /// let prague = Coordinate::new(50.087_654_321, 14.421_234).unwrap();
    /// assert_eq!(prague.lat(), 50.087_654);
    /// assert_eq!(prague.to_decimal().lon, "14.421234");
    /// ```
    ///
    /// # Errors
    /// When either value is not a finite number in the range [-180, 180].
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoordinateNotInRange> {
        Ok(Self {
            lat: Self::canonical(lat)?,
            lon: Self::canonical(lon)?,
        })
    }

    fn canonical(value: f64) -> Result<f64, CoordinateNotInRange> {
        if !value.is_finite() || value.abs() > max_degrees() {
            return Err(CoordinateNotInRange::new(value));
        }

        // adding the positive zero turns the negative zero into the positive one
        Ok(round_to(value, DECIMAL_FD) + 0.0)
    }

    /// The latitude in decimal degrees
    pub fn lat(self) -> f64 {
        self.lat
    }

    /// The longitude in decimal degrees
    pub fn lon(self) -> f64 {
        self.lon
    }

    /// The hemisphere of the latitude (the equator belongs to the northern one)
    pub fn pole(self) -> Pole {
        Pole::from(self.lat >= 0.0)
    }

    /// The hemisphere of the longitude (the prime meridian belongs to the eastern one)
    pub fn rotational_direction(self) -> RotationalDirection {
        RotationalDirection::from(self.lon >= 0.0)
    }

    /// Both values with exactly 6 fractional digits, e.g. `"-23.500000"`
    pub fn to_decimal(self) -> Formatted {
        Formatted {
            lat: number_format(self.lat, DECIMAL_FD),
            lon: number_format(self.lon, DECIMAL_FD),
        }
    }

    /// Both values as hemisphere, degrees and arc minutes,
    /// with or without arc seconds.
    ///
    /// ```
    /// use gps_parse::Coordinate;
    ///
    /// let gps = Coordinate::new(-23.5, 14.25).unwrap();
    ///
    /// let dms = gps.to_degrees(true);
    /// assert_eq!(dms.lat, "S 23° 30' 0.000\"");
    /// assert_eq!(dms.lon, "E 14° 15' 0.000\"");
    ///
    /// let dm = gps.to_degrees(false);
    /// assert_eq!(dm.lat, "S 23° 30.0000'");
    /// ```
    pub fn to_degrees(self, include_seconds: bool) -> Formatted {
        if include_seconds {
            Formatted {
                lat: format::with_seconds(self.lat, self.pole()),
                lon: format::with_seconds(self.lon, self.rotational_direction()),
            }
        } else {
            Formatted {
                lat: format::without_seconds(self.lat, self.pole()),
                lon: format::without_seconds(self.lon, self.rotational_direction()),
            }
        }
    }

    /// Render in the chosen format
    pub fn format(self, format: OutputFormat) -> Formatted {
        match format {
            OutputFormat::Decimal => self.to_decimal(),
            OutputFormat::Degrees => self.to_degrees(true),
            OutputFormat::NoSeconds => self.to_degrees(false),
        }
    }
}

impl TryFrom<(f64, f64)> for Coordinate {
    type Error = CoordinateNotInRange;

    fn try_from(value: (f64, f64)) -> Result<Self, Self::Error> {
        let (lat, lon) = value;
        Self::new(lat, lon)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coord: Coordinate) -> Self {
        (coord.lat, coord.lon)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Formatted { lat, lon } = if f.alternate() {
            self.to_degrees(true)
        } else {
            self.to_decimal()
        };
        write!(f, "{lat}{PAIR_SEPARATOR}{lon}")
    }
}

/// Parse the `"<latitude>;<longitude>"` string with the default [`Parser`].
impl FromStr for Coordinate {
    type Err = InvalidFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(PAIR_SEPARATOR)
            .ok_or_else(|| InvalidFormat::new(InvalidFormatKind::Unrecognized, s, ""))?;
        Parser::default().parse(lat, lon)
    }
}
