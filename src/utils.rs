//! Utilities functions which do not linked to domain

use std::ops::Neg;

#[doc(hidden)]
#[macro_export]
/// Implements `From` trait for newtype-like enum variants
macro_rules! enum_trivial_from_impl {
    ($from:ty => $to:ty:$constructor:ident) => {
        impl From<$from> for $to {
            fn from(val: $from) -> Self {
                Self::$constructor(val)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
/// Implements simple two variants enum associated with the boolean type
/// and displayed as a single letter
macro_rules! bool_enum {
    ($(#[$meta:meta])* $name:ident: $truthy:ident and $falsy:ident; display as $true_ch:literal:$false_ch:literal) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum $name {
            #[doc = concat!("Displayed as '", $true_ch, "'")]
            $truthy,
            #[doc = concat!("Displayed as '", $false_ch, "'")]
            $falsy,
        }

        impl $name {
            /// The letter used to render the direction
            pub const fn symbol(self) -> char {
                match self {
                    Self::$truthy => $true_ch,
                    Self::$falsy => $false_ch,
                }
            }
        }

        impl From<bool> for $name {
            fn from(val: bool) -> Self {
                if val {
                    Self::$truthy
                } else {
                    Self::$falsy
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.symbol())
            }
        }
    };
}

/// Allow conversion of a signed value into its unsigned equivalent
/// by dropping the sign away
pub(crate) trait ToUnsigned<U>: Default + Copy + PartialOrd + Neg<Output = Self> {
    /// represent the source (signed) type as target (unsigned) type
    fn as_type(self) -> U;

    /// Converts to unsigned absolute value
    fn unsigned_abs(self) -> (U, bool) {
        if self >= Self::default() {
            (self.as_type(), true)
        } else {
            ((-self).as_type(), false)
        }
    }
}

impl ToUnsigned<f64> for f64 {
    fn as_type(self) -> Self {
        self
    }
}

/// Split a string into its first or last character and the rest
pub(crate) trait StripChar {
    /// Split into the first character and the rest of the string
    fn split_first(&self) -> Option<(char, &str)>;
    /// Split into the last character and the rest of the string
    fn split_last(&self) -> Option<(&str, char)>;
}

impl StripChar for str {
    fn split_first(&self) -> Option<(char, &str)> {
        let mut chars = self.chars();
        let head = chars.next()?;
        Some((head, chars.as_str()))
    }

    fn split_last(&self) -> Option<(&str, char)> {
        let mut chars = self.chars();
        let tail = chars.next_back()?;
        Some((chars.as_str(), tail))
    }
}

/// Round to the given number of fractional digits.
/// The halves are rounded away from zero.
pub(crate) fn round_to(value: f64, decimals: u8) -> f64 {
    let scale = 10_f64.powi(i32::from(decimals));
    (value * scale).round() / scale
}

/// Render the number with exactly `decimals` fractional digits,
/// the dot as a decimal separator and the comma between the groups of thousands.
///
/// The value which rounds to zero is never rendered with the minus sign.
pub(crate) fn number_format(value: f64, decimals: u8) -> String {
    let rounded = round_to(value, decimals);
    let digits = format!("{:.*}", usize::from(decimals), rounded.abs());
    let (integer, fraction) = digits
        .split_once('.')
        .map_or((digits.as_str(), None), |(int, fract)| (int, Some(fract)));

    let mut formatted = String::with_capacity(digits.len() + integer.len() / 3 + 1);
    if rounded < 0.0 {
        formatted.push('-');
    }

    let len = integer.len();
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }

    if let Some(fraction) = fraction {
        formatted.push('.');
        formatted.push_str(fraction);
    }

    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned() {
        assert_eq!(7.5_f64.unsigned_abs(), (7.5, true));
        assert_eq!((-7.5_f64).unsigned_abs(), (7.5, false));
        assert_eq!(0_f64.unsigned_abs(), (0.0, true));
    }

    #[test]
    fn split_head() {
        assert_eq!("Foo".split_first().unwrap(), ('F', "oo"));
    }

    #[test]
    fn split_head_empty() {
        assert!("".split_first().is_none());
    }

    #[test]
    fn split_head_single() {
        assert_eq!("Y".split_first().unwrap(), ('Y', ""));
    }

    #[test]
    fn split_head_multibyte() {
        assert_eq!("Ю 23".split_first().unwrap(), ('Ю', " 23"));
    }

    #[test]
    fn split_tail() {
        assert_eq!("Buzz".split_last().unwrap(), ("Buz", 'z'));
    }

    #[test]
    fn split_tail_empty() {
        assert!("".split_last().is_none());
    }

    #[test]
    fn split_tail_multibyte() {
        assert_eq!("49°".split_last().unwrap(), ("49", '°'));
    }

    #[test]
    fn round_half_away_from_zero() {
        assert_eq!(round_to(0.5, 0), 1.0);
        assert_eq!(round_to(-0.5, 0), -1.0);
        assert_eq!(round_to(14.123_456_7, 6), 14.123_457);
    }

    #[test]
    fn format_fraction_padding() {
        assert_eq!(number_format(49.05, 6), "49.050000");
        assert_eq!(number_format(-23.5, 6), "-23.500000");
        assert_eq!(number_format(0.0, 3), "0.000");
    }

    #[test]
    fn format_thousands() {
        assert_eq!(number_format(1234.5, 1), "1,234.5");
        assert_eq!(number_format(-1_234_567.0, 2), "-1,234,567.00");
        assert_eq!(number_format(123.0, 0), "123");
    }

    #[test]
    fn format_no_negative_zero() {
        assert_eq!(number_format(-0.000_000_1, 6), "0.000000");
        assert_eq!(number_format(-0.0, 4), "0.0000");
    }
}
