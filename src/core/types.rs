// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Result cap used when a query does not set one.
pub const DEFAULT_LIMIT: usize = 100;

/// One record of the mapping table as it arrives from the data file.
/// Field names follow the file format: `tlhingan` holds the hex codepoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub tlhingan: String,
    pub latin: String,
    pub row: u32,
    pub col: u32,
}

impl MappingEntry {
    pub fn new(tlhingan: &str, latin: &str, row: u32, col: u32) -> Self {
        Self {
            tlhingan: tlhingan.to_string(),
            latin: latin.to_string(),
            row,
            col,
        }
    }
}

/// A validated mapping entry with its glyph derived from the hex code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Letter {
    pub glyph_code: String,
    pub glyph: char,
    pub latin: String,
    pub row: u32,
    pub column: u32,
}

/// The constraint set a search is evaluated against.
///
/// `known_letters` always holds one slot per position; use [`Query::new`]
/// and [`Query::set_word_length`] to keep it that way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub word_length: usize,
    pub known_letters: Vec<Option<char>>,
    pub include_letters: BTreeSet<char>,
    pub exclude_letters: BTreeSet<char>,
    pub no_repeat: bool,
    pub limit: usize,
}

impl Query {
    pub fn new(word_length: usize) -> Self {
        Self {
            word_length,
            known_letters: vec![None; word_length],
            include_letters: BTreeSet::new(),
            exclude_letters: BTreeSet::new(),
            no_repeat: false,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Changes the word length, keeping known letters that still fit.
    pub fn set_word_length(&mut self, word_length: usize) {
        self.word_length = word_length;
        self.known_letters.resize(word_length, None);
    }

    /// Fixes the glyph at `position`. Positions past the end are ignored.
    pub fn set_known(&mut self, position: usize, glyph: Option<char>) {
        if let Some(slot) = self.known_letters.get_mut(position) {
            *slot = glyph;
        }
    }

    pub fn with_known(mut self, position: usize, glyph: char) -> Self {
        self.set_known(position, Some(glyph));
        self
    }

    /// Every character of `letters` must appear in a match.
    pub fn with_include(mut self, letters: &str) -> Self {
        self.include_letters = letters.chars().collect();
        self
    }

    /// No character of `letters` may appear in a match.
    pub fn with_exclude(mut self, letters: &str) -> Self {
        self.exclude_letters = letters.chars().collect();
        self
    }

    pub fn with_no_repeat(mut self, no_repeat: bool) -> Self {
        self.no_repeat = no_repeat;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Outcome of a search: the first `limit` matches and the untruncated count.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct QueryResult {
    pub matches: Vec<String>,
    pub total_match_count: usize,
}

/// A matched word paired with its per-character transliteration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub word: String,
    pub latin: Vec<String>,
}
