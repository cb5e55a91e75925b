use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    consts::{
        ARC_MINUTES_FD, ARC_MINUTE_SIGN, ARC_SECONDS_FD, ARC_SECOND_SIGN, DEGREE_SIGN,
        MINUTES_IN_DEGREE, SECONDS_IN_MINUTE,
    },
    errors::UnsupportedOutputFormat,
    utils::{number_format, ToUnsigned},
};

/// The textual representation of the latitude and the longitude
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Formatted {
    /// Rendered latitude
    pub lat: String,
    /// Rendered longitude
    pub lon: String,
}

impl Formatted {
    /// Construct from the already rendered values
    pub fn new(lat: impl Into<String>, lon: impl Into<String>) -> Self {
        Self {
            lat: lat.into(),
            lon: lon.into(),
        }
    }
}

/// The ways to render a [`Coordinate`](crate::Coordinate)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum OutputFormat {
    /// `49.050000`
    #[default]
    Decimal,
    /// `N 49° 3' 0.000"`
    Degrees,
    /// `N 49° 3.0000'`
    NoSeconds,
}

impl OutputFormat {
    const fn name(self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::Degrees => "degrees",
            Self::NoSeconds => "noSeconds",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = UnsupportedOutputFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Decimal, Self::Degrees, Self::NoSeconds]
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| UnsupportedOutputFormat::new(s))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Whole degrees and the remaining fraction of the degree as arc minutes
fn degrees_and_minutes(value: f64) -> (f64, f64) {
    let (abs, _) = value.unsigned_abs();
    let degrees = abs.floor();
    (degrees, (abs - degrees) * f64::from(MINUTES_IN_DEGREE))
}

/// `<hemisphere> <deg>° <min>' <sec>"`
pub(super) fn with_seconds(value: f64, hemisphere: impl fmt::Display) -> String {
    let (degrees, fract_minutes) = degrees_and_minutes(value);
    let minutes = fract_minutes.floor();
    let seconds = (fract_minutes - minutes) * f64::from(SECONDS_IN_MINUTE);

    format!(
        "{hemisphere} {degrees}{DEGREE_SIGN} {minutes}{ARC_MINUTE_SIGN} {}{ARC_SECOND_SIGN}",
        number_format(seconds, ARC_SECONDS_FD)
    )
}

/// `<hemisphere> <deg>° <min>'` where the minutes have a fractional part
pub(super) fn without_seconds(value: f64, hemisphere: impl fmt::Display) -> String {
    let (degrees, minutes) = degrees_and_minutes(value);

    format!(
        "{hemisphere} {degrees}{DEGREE_SIGN} {}{ARC_MINUTE_SIGN}",
        number_format(minutes, ARC_MINUTES_FD)
    )
}
