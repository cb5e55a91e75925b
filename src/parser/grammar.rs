//! Numeric grammars for a single coordinate value:
//! - plain decimal degrees: `-23.5`;
//! - degree notation: `49° 3' 7.5"`, `49°03.690`, `-49 3 7`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::consts::{max_degrees, seconds_in_degree, MINUTES_IN_DEGREE};

/// Why the value was not accepted by a grammar
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) enum Mismatch {
    /// Some other grammar may accept the value
    NoMatch,
    /// The value is well-formed, but too big, no reason to try anything else
    RangeViolation,
}

lazy_static! {
    static ref RE_DECIMAL: Regex =
        Regex::new(r"^-?\d+(?:\.\d+)?$").expect("Decimal regex is valid");
    static ref RE_DEGREES: Regex = Regex::new(
        r#"(?x)                             # enables verbose mode (to allow these comments)
        ^                                   # match the whole line from the start
        (?P<deg>-?\d+(?:\.\d+)?)                # mandatory (maybe signed) degree VALUE
        [°\x20]{0,2}                            # optional degree sign and/or space
        (?:
            (?P<min>\d+(?:\.\d+)?)                  # minutes VALUE
            ['`´′\x20]{0,2}                         # optional arcminute sign and/or space
            (?:
                (?P<sec>\d+(?:\.\d+)?)                  # seconds VALUE
                ["″]?                                   # optional arcsecond sign
            )?                                      # seconds are optional
        )?                                      # minutes and seconds are optional
        $                                   # match the whole line till the end
        "#
    )
    .expect("Degrees regex is valid");
}

/// Arc second signs written with two characters
const DOUBLE_ARC_SECOND_SIGNS: [&str; 2] = ["``", "´´"];

/// Decimal degrees in the range [-180, 180]
pub(super) fn decimal(value: &str) -> Result<f64, Mismatch> {
    if !RE_DECIMAL.is_match(value) {
        return Err(Mismatch::NoMatch);
    }

    let degrees: f64 = value.parse().map_err(|_| Mismatch::NoMatch)?;
    if degrees.abs() > max_degrees() {
        return Err(Mismatch::NoMatch);
    }

    Ok(degrees)
}

/// Degrees with optional minutes and seconds.
///
/// The degrees component out of range [-180, 180] is a hard failure.
pub(super) fn degrees(value: &str) -> Result<f64, Mismatch> {
    let value = DOUBLE_ARC_SECOND_SIGNS
        .into_iter()
        .fold(value.to_owned(), |value, sign| value.replace(sign, "\""));

    let capture = RE_DEGREES.captures(&value).ok_or(Mismatch::NoMatch)?;
    let deg = capture.name("deg").ok_or(Mismatch::NoMatch)?.as_str();

    let degrees: f64 = deg.parse().map_err(|_| Mismatch::NoMatch)?;
    if degrees.abs() > max_degrees() {
        return Err(Mismatch::RangeViolation);
    }

    let minutes: f64 = capture
        .name("min")
        .map_or("0", |m| m.as_str())
        .parse()
        .map_err(|_| Mismatch::NoMatch)?;
    let seconds: f64 = capture
        .name("sec")
        .map_or("0", |m| m.as_str())
        .parse()
        .map_err(|_| Mismatch::NoMatch)?;

    let abs =
        degrees.abs() + minutes / f64::from(MINUTES_IN_DEGREE) + seconds / seconds_in_degree();
    // the sign is taken from the text to keep it for the `-0°` degrees
    if deg.starts_with('-') {
        Ok(-abs)
    } else {
        Ok(abs)
    }
}

/// Both values are accepted by the decimal grammar,
/// otherwise both are accepted by the degree notation grammar.
pub(super) fn decimal_pair(lat: &str, lon: &str) -> Result<(f64, f64), Mismatch> {
    if let (Ok(lat), Ok(lon)) = (decimal(lat), decimal(lon)) {
        return Ok((lat, lon));
    }

    match (degrees(lat), degrees(lon)) {
        (Ok(lat), Ok(lon)) => Ok((lat, lon)),
        (Err(Mismatch::RangeViolation), _) | (_, Err(Mismatch::RangeViolation)) => {
            Err(Mismatch::RangeViolation)
        }
        _ => Err(Mismatch::NoMatch),
    }
}
