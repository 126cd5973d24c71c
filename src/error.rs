// File: src/error.rs
//! Error types for loading the mapping table and resolving user-typed letters.
//!
//! Searching never fails; only loading data and parsing typed labels can.

use miette::Diagnostic;
use thiserror::Error;

/// A problem with the glyph/latin mapping table. Fatal at load time.
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum DataError {
    #[error("mapping entry {index} ({latin:?}) has no glyph code")]
    #[diagnostic(
        code(finder::data::missing_code),
        help("Every entry needs a `tlhingan` field holding a hex codepoint, e.g. \"f8d0\".")
    )]
    MissingCode { index: usize, latin: String },

    #[error("mapping entry {index} has invalid hex glyph code {code:?}")]
    #[diagnostic(
        code(finder::data::invalid_hex),
        help("Glyph codes are bare hexadecimal digits without a `0x` or `U+` prefix.")
    )]
    InvalidHex { index: usize, code: String },

    #[error("mapping entry {index}: U+{value:X} is not a Unicode scalar value")]
    #[diagnostic(
        code(finder::data::invalid_scalar),
        help("Surrogates (U+D800..U+DFFF) and values above U+10FFFF cannot be glyphs.")
    )]
    InvalidScalar { index: usize, value: u32 },

    #[error("glyph {glyph:?} is mapped twice (entries {first} and {second})")]
    #[diagnostic(code(finder::data::duplicate_glyph))]
    DuplicateGlyph {
        glyph: char,
        first: usize,
        second: usize,
    },

    #[error("latin label {latin:?} is used twice (entries {first} and {second})")]
    #[diagnostic(
        code(finder::data::duplicate_latin),
        help("Latin labels are the mapping's key and must be unique.")
    )]
    DuplicateLatin {
        latin: String,
        first: usize,
        second: usize,
    },

    #[error("keyboard position ({row}, {column}) holds both {first:?} and {second:?}")]
    #[diagnostic(code(finder::data::duplicate_position))]
    DuplicatePosition {
        row: u32,
        column: u32,
        first: String,
        second: String,
    },
}

/// A letter typed by the user that the mapping cannot resolve.
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum LookupError {
    #[error("unknown latin label {0:?}")]
    #[diagnostic(
        code(finder::lookup::unknown_label),
        help("Use a label from the mapping (run `word_finder keyboard`) or a single character.")
    )]
    UnknownLabel(String),

    #[error("position {position} is outside a word of length {length}")]
    #[diagnostic(code(finder::lookup::position_out_of_range))]
    PositionOutOfRange { position: usize, length: usize },
}

/// Failure reading one of the data files from disk.
#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("failed to read {path}")]
    #[diagnostic(code(finder::load::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse mapping table {path}")]
    #[diagnostic(
        code(finder::load::json),
        help("The mapping is a JSON array of {{\"tlhingan\", \"latin\", \"row\", \"col\"}} records.")
    )]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Data(#[from] DataError),
}
