//! The latitude and longitude strings on their way
//! to one of the numeric grammars.

use log::debug;

use crate::{
    cardinal::{CardinalAlphabet, Pole, RotationalDirection},
    utils::StripChar,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Pair {
    lat: String,
    lon: String,
}

impl Pair {
    /// Copy of the raw input with the surrounding whitespaces removed
    /// and the decimal commas replaced with the dots
    pub(super) fn normalized(lat: &str, lon: &str) -> Self {
        Self {
            lat: lat.trim().replace(',', "."),
            lon: lon.trim().replace(',', "."),
        }
    }

    pub(super) fn lat(&self) -> &str {
        &self.lat
    }

    pub(super) fn lon(&self) -> &str {
        &self.lon
    }

    /// Swap the values if the latitude looks like a longitude and vice versa.
    ///
    /// The first alphabet detecting the reversed order wins,
    /// so the pair is swapped at most once.
    pub(super) fn in_order(self, alphabets: &[CardinalAlphabet]) -> Self {
        let reversed_by = alphabets.iter().find(|alphabet| {
            alphabet.looks_like_longitude(&self.lat) && alphabet.looks_like_latitude(&self.lon)
        });

        match reversed_by {
            Some(alphabet) => {
                debug!(
                    "Swapping latitude {:?} and longitude {:?} (detected by {alphabet})",
                    self.lat, self.lon
                );
                Self {
                    lat: self.lon,
                    lon: self.lat,
                }
            }
            None => self,
        }
    }

    /// Replace the hemisphere letters at the beginning
    /// and then at the end of the values with the signs.
    ///
    /// The letters are only recognized when both the latitude and the longitude have them.
    pub(super) fn without_hemispheres(self, alphabet: CardinalAlphabet) -> Self {
        self.without_leading_hemispheres(alphabet)
            .without_trailing_hemispheres(alphabet)
    }

    fn without_leading_hemispheres(self, alphabet: CardinalAlphabet) -> Self {
        let stripped = match (self.lat.split_first(), self.lon.split_first()) {
            (Some((lat_letter, lat)), Some((lon_letter, lon))) => {
                Self::signed(alphabet, (lat_letter, lat), (lon_letter, lon))
            }
            _ => None,
        };
        stripped.unwrap_or(self)
    }

    fn without_trailing_hemispheres(self, alphabet: CardinalAlphabet) -> Self {
        let stripped = match (self.lat.split_last(), self.lon.split_last()) {
            (Some((lat, lat_letter)), Some((lon, lon_letter))) => {
                Self::signed(alphabet, (lat_letter, lat), (lon_letter, lon))
            }
            _ => None,
        };
        stripped.unwrap_or(self)
    }

    fn signed(alphabet: CardinalAlphabet, lat: (char, &str), lon: (char, &str)) -> Option<Self> {
        let (lat_letter, lat) = lat;
        let (lon_letter, lon) = lon;

        let pole = alphabet.pole(lat_letter)?;
        let direction = alphabet.rotational_direction(lon_letter)?;

        Some(Self {
            lat: with_sign(lat, pole == Pole::North),
            lon: with_sign(lon, direction == RotationalDirection::East),
        })
    }
}

fn with_sign(value: &str, is_positive: bool) -> String {
    let value = value.trim();
    if is_positive {
        value.to_owned()
    } else {
        format!("-{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(lat: &str, lon: &str) -> Pair {
        Pair {
            lat: lat.into(),
            lon: lon.into(),
        }
    }

    fn czech() -> CardinalAlphabet {
        CardinalAlphabet::new('S', 'J', 'V', 'Z').unwrap()
    }

    #[test]
    fn decimal_commas() {
        assert_eq!(Pair::normalized(" 49,05", "14,00\t"), pair("49.05", "14.00"));
    }

    #[test]
    fn reversed() {
        let swapped = pair("E14.41", "N50.08").in_order(&[CardinalAlphabet::ENGLISH]);
        assert_eq!(swapped, pair("N50.08", "E14.41"));
    }

    #[test]
    fn reversed_with_trailing_letters() {
        let swapped = pair("14.41 W", "50.08 S").in_order(&[CardinalAlphabet::ENGLISH]);
        assert_eq!(swapped, pair("50.08 S", "14.41 W"));
    }

    #[test]
    fn right_order_is_kept() {
        let kept = pair("N50.08", "E14.41").in_order(&[CardinalAlphabet::ENGLISH]);
        assert_eq!(kept, pair("N50.08", "E14.41"));
    }

    #[test]
    fn only_one_reversed_half_is_kept() {
        let kept = pair("E14.41", "50.08").in_order(&[CardinalAlphabet::ENGLISH]);
        assert_eq!(kept, pair("E14.41", "50.08"));
    }

    #[test]
    fn swapped_once_for_many_alphabets() {
        // both alphabets consider the pair reversed
        let same_letters = CardinalAlphabet::new('N', 'Y', 'E', 'X').unwrap();
        let swapped =
            pair("E14.41", "N50.08").in_order(&[CardinalAlphabet::ENGLISH, same_letters]);
        assert_eq!(swapped, pair("N50.08", "E14.41"));
    }

    #[test]
    fn leading_hemispheres() {
        let alphabet = CardinalAlphabet::ENGLISH;
        assert_eq!(
            pair("S23.5", "W46.6").without_hemispheres(alphabet),
            pair("-23.5", "-46.6")
        );
        assert_eq!(
            pair("S 23.5", "E 46.6").without_hemispheres(alphabet),
            pair("-23.5", "46.6")
        );
        assert_eq!(
            pair("N23.5", "W46.6").without_hemispheres(alphabet),
            pair("23.5", "-46.6")
        );
        assert_eq!(
            pair("N 23.5", "E46.6").without_hemispheres(alphabet),
            pair("23.5", "46.6")
        );
    }

    #[test]
    fn trailing_hemispheres() {
        let alphabet = CardinalAlphabet::ENGLISH;
        assert_eq!(
            pair("23.5S", "46.6 W").without_hemispheres(alphabet),
            pair("-23.5", "-46.6")
        );
        assert_eq!(
            pair("23.5 S", "46.6E").without_hemispheres(alphabet),
            pair("-23.5", "46.6")
        );
        assert_eq!(
            pair("23.5N", "46.6W").without_hemispheres(alphabet),
            pair("23.5", "-46.6")
        );
        assert_eq!(
            pair("23.5 N", "46.6 E").without_hemispheres(alphabet),
            pair("23.5", "46.6")
        );
    }

    #[test]
    fn mixed_positions_are_kept() {
        let kept = pair("N23.5", "46.6E").without_hemispheres(CardinalAlphabet::ENGLISH);
        assert_eq!(kept, pair("N23.5", "46.6E"));
    }

    #[test]
    fn single_hemisphere_is_kept() {
        let kept = pair("S23.5", "46.6").without_hemispheres(CardinalAlphabet::ENGLISH);
        assert_eq!(kept, pair("S23.5", "46.6"));
    }

    #[test]
    fn empty_values() {
        let kept = pair("", "W").without_hemispheres(CardinalAlphabet::ENGLISH);
        assert_eq!(kept, pair("", "W"));
    }

    #[test]
    fn other_alphabet() {
        assert_eq!(
            pair("J 23.5", "Z 46.6").without_hemispheres(czech()),
            pair("-23.5", "-46.6")
        );
        // 'S' stands for the North in Czech
        assert_eq!(
            pair("S 50.08", "V 14.41").without_hemispheres(czech()),
            pair("50.08", "14.41")
        );
    }

    #[test]
    fn foreign_letters_are_kept() {
        let kept = pair("J 23.5", "Z 46.6").without_hemispheres(CardinalAlphabet::ENGLISH);
        assert_eq!(kept, pair("J 23.5", "Z 46.6"));
    }
}
