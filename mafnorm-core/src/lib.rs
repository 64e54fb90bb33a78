//! # Core library for `mafnorm`
//!
//! Normalizes directories of MAF-derived, BED-like variant files into a
//! canonical single-alt representation: each input record carrying up to two
//! alternate allele calls is split into zero, one or two single-alt records,
//! shared leading bases are trimmed off the allele strings, coordinates are
//! shifted from 1-based inclusive to 0-based, placeholder tokens are cleared,
//! and repeats of the same normalized variant within one file are dropped.
//! Files that don't match the `.bed` pattern are copied through untouched.
//!
pub mod consts;
pub mod convert;
pub mod errors;
pub mod models;
pub mod transform;
pub mod utils;

// re-export the tool surface
pub use convert::{convert_directory, transform_file};
pub use transform::{transform_line, SeenVariants};
