//! The letters denoting the hemispheres

use std::{convert::TryFrom, fmt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{bool_enum, errors::InvalidAlphabet, utils::StripChar};

bool_enum!(
    /// The hemisphere of a latitude. The northern one is positive.
    Pole: North and South; display as 'N':'S'
);

bool_enum!(
    /// The hemisphere of a longitude. The eastern one is positive.
    RotationalDirection: East and West; display as 'E':'W'
);

/// The four letters denoting North, South, East and West in some language.
///
/// ```
/// use gps_parse::CardinalAlphabet;
///
/// let czech = CardinalAlphabet::new('S', 'J', 'V', 'Z').unwrap();
/// assert_eq!(czech.to_string(), "SJVZ");
///
/// assert!(CardinalAlphabet::new('N', 'S', 'E', 'N').is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[char; 4]", into = "[char; 4]"))]
pub struct CardinalAlphabet {
    north: char,
    south: char,
    east: char,
    west: char,
}

impl CardinalAlphabet {
    /// The letters `N`, `S`, `E`, `W`
    pub const ENGLISH: Self = Self {
        north: 'N',
        south: 'S',
        east: 'E',
        west: 'W',
    };

    /// Construct an alphabet from the letters for North, South, East and West.
    ///
    /// # Errors
    /// When some letter is used for more than one direction.
    pub fn new(north: char, south: char, east: char, west: char) -> Result<Self, InvalidAlphabet> {
        let letters = [north, south, east, west];
        for (i, letter) in letters.iter().enumerate() {
            if letters[i + 1..].contains(letter) {
                return Err(InvalidAlphabet::new(*letter));
            }
        }

        Ok(Self {
            north,
            south,
            east,
            west,
        })
    }

    /// The letter for North
    pub fn north(self) -> char {
        self.north
    }

    /// The letter for South
    pub fn south(self) -> char {
        self.south
    }

    /// The letter for East
    pub fn east(self) -> char {
        self.east
    }

    /// The letter for West
    pub fn west(self) -> char {
        self.west
    }

    pub(crate) fn pole(self, letter: char) -> Option<Pole> {
        match letter {
            l if l == self.north => Some(Pole::North),
            l if l == self.south => Some(Pole::South),
            _ => None,
        }
    }

    pub(crate) fn rotational_direction(self, letter: char) -> Option<RotationalDirection> {
        match letter {
            l if l == self.east => Some(RotationalDirection::East),
            l if l == self.west => Some(RotationalDirection::West),
            _ => None,
        }
    }

    /// Does the value start or end with the North or South letter?
    pub(crate) fn looks_like_latitude(self, value: &str) -> bool {
        Self::is_anchored(value, |letter| self.pole(letter).is_some())
    }

    /// Does the value start or end with the East or West letter?
    pub(crate) fn looks_like_longitude(self, value: &str) -> bool {
        Self::is_anchored(value, |letter| self.rotational_direction(letter).is_some())
    }

    fn is_anchored(value: &str, is_direction: impl Fn(char) -> bool) -> bool {
        let first = value.split_first().map(|(head, _)| head);
        let last = value.split_last().map(|(_, tail)| tail);
        first.into_iter().chain(last).any(is_direction)
    }
}

impl Default for CardinalAlphabet {
    fn default() -> Self {
        Self::ENGLISH
    }
}

impl TryFrom<[char; 4]> for CardinalAlphabet {
    type Error = InvalidAlphabet;

    fn try_from(value: [char; 4]) -> Result<Self, Self::Error> {
        let [north, south, east, west] = value;
        Self::new(north, south, east, west)
    }
}

impl From<CardinalAlphabet> for [char; 4] {
    fn from(alphabet: CardinalAlphabet) -> Self {
        [alphabet.north, alphabet.south, alphabet.east, alphabet.west]
    }
}

impl fmt::Display for CardinalAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}{}", self.north, self.south, self.east, self.west)
    }
}
