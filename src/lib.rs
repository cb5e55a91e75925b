//! Parse the GPS coordinates entered by humans
//! (decimal degrees, degrees with minutes and seconds, hemisphere letters,
//! swapped latitude and longitude) into the canonical decimal degrees
//! and render them back.
//!
//! ```
//! use gps_parse::{OutputFormat, Parser};
//!
//! let gps = Parser::new().parse("N 49° 3' 0\"", "E 14° 0' 0\"").unwrap();
//! assert_eq!(gps.to_decimal().lat, "49.050000");
//! assert_eq!(gps.format(OutputFormat::NoSeconds).lon, "E 14° 0.0000'");
//! ```

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The following list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
//
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(rustdoc::invalid_html_tags)]
#![warn(rustdoc::private_doc_tests)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// conflicts with the `clippy::redundant_pub_crate`
#![allow(unreachable_pub)]
// !!! NO UNSAFE
#![forbid(unsafe_code)]
#![warn(unstable_features)]
#![warn(unused_crate_dependencies)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
//
// additional recommendations
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
// `use super::*` in tests
#![cfg_attr(test, allow(clippy::wildcard_imports))]
// exact comparison of the rounded values is intended
#![cfg_attr(test, allow(clippy::float_cmp))]

pub use cardinal::{CardinalAlphabet, Pole, RotationalDirection};
pub use coord::{Coordinate, Formatted, OutputFormat};
pub use errors::{
    CoordinateNotInRange, Error, InvalidAlphabet, InvalidFormat, InvalidFormatKind,
    UnsupportedOutputFormat,
};
pub use parser::Parser;

mod cardinal;
mod consts;
mod coord;
mod errors;
mod parser;
mod utils;
