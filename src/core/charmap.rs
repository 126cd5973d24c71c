// File: src/core/charmap.rs
use crate::core::types::{Letter, MappingEntry};
use crate::error::DataError;
use std::collections::{BTreeMap, HashMap};

/// Bidirectional glyph <-> latin table, built once from the mapping data.
#[derive(Debug, Clone)]
pub struct CharacterMap {
    letters: Vec<Letter>,
    /// glyph -> index into `letters`
    by_glyph: HashMap<char, usize>,
    /// latin label -> index into `letters`
    by_latin: HashMap<String, usize>,
}

impl CharacterMap {
    /// Validates the entries and derives each glyph from its hex code.
    pub fn load(entries: &[MappingEntry]) -> Result<Self, DataError> {
        let mut letters = Vec::with_capacity(entries.len());
        let mut by_glyph = HashMap::with_capacity(entries.len());
        let mut by_latin = HashMap::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            let glyph = parse_glyph(index, entry)?;

            if let Some(&first) = by_glyph.get(&glyph) {
                return Err(DataError::DuplicateGlyph {
                    glyph,
                    first,
                    second: index,
                });
            }
            if let Some(&first) = by_latin.get(&entry.latin) {
                return Err(DataError::DuplicateLatin {
                    latin: entry.latin.clone(),
                    first,
                    second: index,
                });
            }

            by_glyph.insert(glyph, index);
            by_latin.insert(entry.latin.clone(), index);
            letters.push(Letter {
                glyph_code: entry.tlhingan.clone(),
                glyph,
                latin: entry.latin.clone(),
                row: entry.row,
                column: entry.col,
            });
        }

        tracing::info!(letters = letters.len(), "character map loaded");
        Ok(Self {
            letters,
            by_glyph,
            by_latin,
        })
    }

    pub fn glyph_to_latin(&self, c: char) -> Option<&str> {
        self.by_glyph
            .get(&c)
            .map(|&idx| self.letters[idx].latin.as_str())
    }

    pub fn latin_to_glyph(&self, s: &str) -> Option<char> {
        self.by_latin.get(s).map(|&idx| self.letters[idx].glyph)
    }

    /// One entry per character of `word`; unmapped characters pass through.
    pub fn transliterate(&self, word: &str) -> Vec<String> {
        word.chars()
            .map(|c| match self.glyph_to_latin(c) {
                Some(latin) => latin.to_string(),
                None => c.to_string(),
            })
            .collect()
    }

    pub fn transliterate_joined(&self, word: &str) -> String {
        self.transliterate(word).concat()
    }

    /// Letters grouped by row (ascending), each row ordered by column.
    pub fn rows(&self) -> Vec<Vec<&Letter>> {
        let mut grouped: BTreeMap<u32, Vec<&Letter>> = BTreeMap::new();
        for letter in &self.letters {
            grouped.entry(letter.row).or_default().push(letter);
        }
        grouped
            .into_values()
            .map(|mut row| {
                row.sort_by_key(|letter| letter.column);
                row
            })
            .collect()
    }

    /// Keyboard consumers need every `(row, column)` to be distinct.
    pub fn check_layout(&self) -> Result<(), DataError> {
        let mut seen: HashMap<(u32, u32), usize> = HashMap::new();
        for (idx, letter) in self.letters.iter().enumerate() {
            if let Some(&first) = seen.get(&(letter.row, letter.column)) {
                return Err(DataError::DuplicatePosition {
                    row: letter.row,
                    column: letter.column,
                    first: self.letters[first].latin.clone(),
                    second: letter.latin.clone(),
                });
            }
            seen.insert((letter.row, letter.column), idx);
        }
        Ok(())
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

fn parse_glyph(index: usize, entry: &MappingEntry) -> Result<char, DataError> {
    let code = entry.tlhingan.as_str();
    if code.is_empty() {
        return Err(DataError::MissingCode {
            index,
            latin: entry.latin.clone(),
        });
    }
    // bare hex digits only
    if !code.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(DataError::InvalidHex {
            index,
            code: code.to_string(),
        });
    }
    let value = u32::from_str_radix(code, 16).map_err(|_| DataError::InvalidHex {
        index,
        code: code.to_string(),
    })?;
    char::from_u32(value).ok_or(DataError::InvalidScalar { index, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CharacterMap {
        CharacterMap::load(&[
            MappingEntry::new("f8d0", "a", 0, 1),
            MappingEntry::new("f8d1", "b", 0, 0),
            MappingEntry::new("f8e4", "tlh", 1, 0),
        ])
        .unwrap()
    }

    #[test]
    fn derives_glyph_from_hex() {
        let map = CharacterMap::load(&[MappingEntry::new("0066", "f", 0, 0)]).unwrap();
        assert_eq!(map.letters()[0].glyph, 'f');
        assert_eq!(map.glyph_to_latin('f'), Some("f"));
    }

    #[test]
    fn lookups_round_trip() {
        let map = sample();
        for letter in map.letters() {
            let latin = map.glyph_to_latin(letter.glyph).unwrap();
            assert_eq!(map.latin_to_glyph(latin), Some(letter.glyph));
        }
        assert_eq!(map.glyph_to_latin('?'), None);
        assert_eq!(map.latin_to_glyph("zz"), None);
    }

    #[test]
    fn transliterate_passes_unmapped_through() {
        let map = sample();
        let word = "\u{f8e4}\u{f8d0}-\u{f8d1}";
        assert_eq!(map.transliterate(word), vec!["tlh", "a", "-", "b"]);
        assert_eq!(map.transliterate_joined(word), "tlha-b");
        assert!(map.transliterate("").is_empty());
    }

    #[test]
    fn rejects_bad_codes() {
        let err = CharacterMap::load(&[MappingEntry::new("xyz", "a", 0, 0)]).unwrap_err();
        assert!(matches!(err, DataError::InvalidHex { index: 0, .. }));

        let err = CharacterMap::load(&[MappingEntry::new("+66", "a", 0, 0)]).unwrap_err();
        assert!(matches!(err, DataError::InvalidHex { .. }));

        let err = CharacterMap::load(&[MappingEntry::new("", "a", 0, 0)]).unwrap_err();
        assert!(matches!(err, DataError::MissingCode { .. }));

        let err = CharacterMap::load(&[MappingEntry::new("d800", "a", 0, 0)]).unwrap_err();
        assert_eq!(err, DataError::InvalidScalar { index: 0, value: 0xd800 });
    }

    #[test]
    fn rejects_duplicates() {
        let err = CharacterMap::load(&[
            MappingEntry::new("66", "f", 0, 0),
            MappingEntry::new("0066", "g", 0, 1),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            DataError::DuplicateGlyph {
                glyph: 'f',
                first: 0,
                second: 1
            }
        );

        let err = CharacterMap::load(&[
            MappingEntry::new("66", "f", 0, 0),
            MappingEntry::new("67", "f", 0, 1),
        ])
        .unwrap_err();
        assert!(matches!(err, DataError::DuplicateLatin { .. }));
    }

    #[test]
    fn rows_are_grouped_and_ordered() {
        let map = sample();
        let rows: Vec<Vec<&str>> = map
            .rows()
            .iter()
            .map(|row| row.iter().map(|l| l.latin.as_str()).collect())
            .collect();
        assert_eq!(rows, vec![vec!["b", "a"], vec!["tlh"]]);
        assert!(map.check_layout().is_ok());
    }

    #[test]
    fn layout_check_flags_shared_position() {
        let map = CharacterMap::load(&[
            MappingEntry::new("61", "a", 2, 3),
            MappingEntry::new("62", "b", 2, 3),
        ])
        .unwrap();
        assert!(matches!(
            map.check_layout(),
            Err(DataError::DuplicatePosition { row: 2, column: 3, .. })
        ));
    }
}
