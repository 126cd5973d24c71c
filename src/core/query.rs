// File: src/core/query.rs
//! Word predicates and parsing of user-typed latin letters into glyphs.

use crate::core::charmap::CharacterMap;
use crate::core::types::Query;
use crate::error::LookupError;
use std::collections::HashSet;

/// True if `word` satisfies every constraint of `query`.
/// Cheapest checks run first; the result does not depend on the order.
pub fn matches(query: &Query, word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    chars.len() == query.word_length
        && known_letters_match(query, &chars)
        && query.include_letters.iter().all(|c| chars.contains(c))
        && !chars.iter().any(|c| query.exclude_letters.contains(c))
        && (!query.no_repeat || has_no_repeats(&chars))
}

fn known_letters_match(query: &Query, chars: &[char]) -> bool {
    query
        .known_letters
        .iter()
        .enumerate()
        .all(|(pos, known)| match known {
            Some(glyph) => chars.get(pos) == Some(glyph),
            None => true,
        })
}

/// Literal character comparison; no character is treated as a pattern.
pub fn has_no_repeats(chars: &[char]) -> bool {
    let mut seen = HashSet::with_capacity(chars.len());
    chars.iter().all(|c| seen.insert(*c))
}

/// Resolves whitespace-separated tokens into glyphs. A token is a latin
/// label, or failing that a single literal character.
pub fn parse_letters(map: &CharacterMap, input: &str) -> Result<Vec<char>, LookupError> {
    input
        .split_whitespace()
        .map(|token| resolve_token(map, token))
        .collect()
}

/// Parses a positional pattern such as `"_ a _ a"`; `_` and `.` leave a slot unset.
pub fn parse_pattern(map: &CharacterMap, input: &str) -> Result<Vec<Option<char>>, LookupError> {
    input
        .split_whitespace()
        .map(|token| match token {
            "_" | "." => Ok(None),
            _ => resolve_token(map, token).map(Some),
        })
        .collect()
}

pub fn resolve_token(map: &CharacterMap, token: &str) -> Result<char, LookupError> {
    if let Some(glyph) = map.latin_to_glyph(token) {
        return Ok(glyph);
    }
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(LookupError::UnknownLabel(token.to_string())),
    }
}

/// Converts a 1-based position typed by the user into a slot index.
pub fn position_index(query: &Query, position: usize) -> Result<usize, LookupError> {
    if position == 0 || position > query.word_length {
        return Err(LookupError::PositionOutOfRange {
            position,
            length: query.word_length,
        });
    }
    Ok(position - 1)
}

/// Applies a parsed pattern to `query`, rejecting patterns longer than the word.
pub fn apply_pattern(query: &mut Query, pattern: &[Option<char>]) -> Result<(), LookupError> {
    if pattern.len() > query.word_length {
        return Err(LookupError::PositionOutOfRange {
            position: pattern.len() - 1,
            length: query.word_length,
        });
    }
    for (pos, glyph) in pattern.iter().enumerate() {
        query.set_known(pos, *glyph);
    }
    Ok(())
}
