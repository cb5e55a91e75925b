//! Canonicalization of the human-entered GPS coordinates

use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    cardinal::CardinalAlphabet,
    coord::{Coordinate, Formatted, OutputFormat},
    errors::{Error, InvalidAlphabet, InvalidFormat, InvalidFormatKind},
};

use self::{grammar::Mismatch, pair::Pair};

mod grammar;
mod pair;

/// Converts the latitude and longitude written in a free form into a [`Coordinate`].
///
/// The recognized input:
/// - decimal degrees: `49.05`, `-23.5`, also with the decimal comma `49,05`;
/// - degree notation: `49° 3' 7.5"`, `49°03.690`, `49 3 7.5`
///   (`'`, `` ` ``, `´`, `′` for arc minutes and `"`, ` `` `, `´´`, `″` for arc seconds);
/// - the hemisphere letters at the beginning or at the end of both values:
///   `S 23.5`, `W 46.6` or `23.5S`, `46.6W`;
/// - the longitude given first if both values have hemisphere letters.
///
/// ```
/// use gps_parse::Parser;
///
/// let parser = Parser::new();
/// let gps = parser.parse("E 14° 25' 12\"", "N 50° 5' 24\"").unwrap();
/// assert_eq!(gps.lat(), 50.09);
/// assert_eq!(gps.lon(), 14.42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Parser {
    check_order: bool,
    alphabets: Vec<CardinalAlphabet>,
}

impl Default for Parser {
    fn default() -> Self {
        Self {
            check_order: true,
            alphabets: vec![CardinalAlphabet::ENGLISH],
        }
    }
}

impl Parser {
    /// The parser recognizing `N`, `S`, `E`, `W` letters and fixing the swapped values
    pub fn new() -> Self {
        Self::default()
    }

    /// Should the parser detect the longitude given before the latitude?
    pub fn check_order(&self) -> bool {
        self.check_order
    }

    /// Turn on or off the detection of the longitude given before the latitude
    pub fn set_check_order(&mut self, check_order: bool) {
        self.check_order = check_order;
    }

    /// Same as [`set_check_order`](Self::set_check_order), but for chaining
    pub fn with_check_order(mut self, check_order: bool) -> Self {
        self.set_check_order(check_order);
        self
    }

    /// All the recognized hemisphere letters in the order they are tried
    pub fn alphabets(&self) -> &[CardinalAlphabet] {
        &self.alphabets
    }

    /// Recognize one more set of hemisphere letters
    pub fn add_alphabet(&mut self, alphabet: CardinalAlphabet) {
        self.alphabets.push(alphabet);
    }

    /// Recognize the hemisphere letters of another language (e.g. `S`, `J`, `V`, `Z` for Czech).
    ///
    /// # Errors
    /// When some letter is used for more than one direction.
    pub fn add_cardinal_directions(
        &mut self,
        north: char,
        south: char,
        east: char,
        west: char,
    ) -> Result<(), InvalidAlphabet> {
        let alphabet = CardinalAlphabet::new(north, south, east, west)?;
        self.add_alphabet(alphabet);
        Ok(())
    }

    /// Same as [`add_cardinal_directions`](Self::add_cardinal_directions), but for chaining
    ///
    /// # Errors
    /// When some letter is used for more than one direction.
    pub fn with_cardinal_directions(
        mut self,
        north: char,
        south: char,
        east: char,
        west: char,
    ) -> Result<Self, InvalidAlphabet> {
        self.add_cardinal_directions(north, south, east, west)?;
        Ok(self)
    }

    /// Reduce the latitude and longitude to the signed decimal degrees.
    ///
    /// # Errors
    /// When either value cannot be recognized or is out of range [-180, 180].
    /// The error keeps both raw values.
    pub fn parse(&self, latitude: &str, longitude: &str) -> Result<Coordinate, InvalidFormat> {
        let invalid = |kind: InvalidFormatKind| {
            debug!("Cannot parse {latitude:?}, {longitude:?}: {kind:?}");
            InvalidFormat::new(kind, latitude, longitude)
        };

        let (lat, lon) = self.canonize(latitude, longitude).map_err(|mismatch| {
            invalid(match mismatch {
                Mismatch::NoMatch => InvalidFormatKind::Unrecognized,
                Mismatch::RangeViolation => InvalidFormatKind::DegreesOutOfRange,
            })
        })?;

        // minutes and seconds can take the degrees beyond the range
        Coordinate::new(lat, lon).map_err(|_| invalid(InvalidFormatKind::DegreesOutOfRange))
    }

    /// Parse and then render the coordinate in the format
    /// named `"decimal"`, `"degrees"` or `"noSeconds"`.
    ///
    /// ```
    /// use gps_parse::Parser;
    ///
    /// let gps = Parser::new().parse_as("49,5", "-14,25", "noSeconds").unwrap();
    /// assert_eq!(gps.lat, "N 49° 30.0000'");
    /// assert_eq!(gps.lon, "W 14° 15.0000'");
    /// ```
    ///
    /// # Errors
    /// - the values cannot be parsed (see [`parse`](Self::parse));
    /// - the format name is unknown.
    pub fn parse_as(
        &self,
        latitude: &str,
        longitude: &str,
        format: &str,
    ) -> Result<Formatted, Error> {
        let coordinate = self.parse(latitude, longitude)?;
        let format: OutputFormat = format.parse()?;
        Ok(coordinate.format(format))
    }

    fn canonize(&self, latitude: &str, longitude: &str) -> Result<(f64, f64), Mismatch> {
        let pair = Pair::normalized(latitude, longitude);
        trace!("Normalized: {pair:?}");

        let pair = if self.check_order {
            pair.in_order(&self.alphabets)
        } else {
            pair
        };

        let pair = self
            .alphabets
            .iter()
            .fold(pair, |pair, &alphabet| pair.without_hemispheres(alphabet));
        trace!("Signed: {pair:?}");

        grammar::decimal_pair(pair.lat(), pair.lon())
    }
}
