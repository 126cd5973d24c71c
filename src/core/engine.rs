use crate::core::charmap::CharacterMap;
use crate::core::query::matches;
use crate::core::types::{DisplayRow, Query, QueryResult};
use std::collections::BTreeMap;

/// The vocabulary and the search over it. Immutable once loaded, so a
/// shared reference can be searched from any number of callers.
#[derive(Debug, Clone, Default)]
pub struct WordQueryEngine {
    words: Vec<String>,
}

impl WordQueryEngine {
    /// Splits newline-delimited text into words, verbatim.
    pub fn load(text: &str) -> Self {
        Self::from_lines(text.split('\n'))
    }

    /// Lines are kept verbatim; only the empty entries left by trailing
    /// line breaks are dropped.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words: Vec<String> = lines.into_iter().map(Into::into).collect();
        while words.last().is_some_and(String::is_empty) {
            words.pop();
        }
        tracing::info!(words = words.len(), "vocabulary loaded");
        Self { words }
    }

    /// Single pass over the vocabulary. `total_match_count` counts every
    /// survivor; `matches` keeps the first `limit` in vocabulary order.
    pub fn search(&self, query: &Query) -> QueryResult {
        let mut result = QueryResult::default();
        if query.word_length == 0 {
            return result;
        }

        for word in &self.words {
            if matches(query, word) {
                if result.matches.len() < query.limit {
                    result.matches.push(word.clone());
                }
                result.total_match_count += 1;
            }
        }

        tracing::debug!(
            word_length = query.word_length,
            total = result.total_match_count,
            returned = result.matches.len(),
            "search complete"
        );
        result
    }

    /// Pairs each match with its transliteration for display.
    pub fn display(&self, result: &QueryResult, map: &CharacterMap) -> Vec<DisplayRow> {
        result
            .matches
            .iter()
            .map(|word| DisplayRow {
                word: word.clone(),
                latin: map.transliterate(word),
            })
            .collect()
    }

    /// Number of words per length in characters.
    pub fn length_histogram(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for word in &self.words {
            *histogram.entry(word.chars().count()).or_insert(0) += 1;
        }
        histogram
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_drops_trailing_empty_line() {
        let engine = WordQueryEngine::load("maqa\nbaqa\n");
        assert_eq!(engine.words(), &["maqa", "baqa"]);
    }

    #[test]
    fn load_keeps_interior_empty_lines() {
        let engine = WordQueryEngine::load("ab\n\ncd\n");
        assert_eq!(engine.words(), &["ab", "", "cd"]);
        assert_eq!(engine.len(), 3);

        let result = engine.search(&Query::new(2));
        assert_eq!(result.matches, vec!["ab", "cd"]);
    }

    #[test]
    fn load_of_blank_text_is_empty() {
        assert!(WordQueryEngine::load("").is_empty());
        assert!(WordQueryEngine::load("\n\n").is_empty());
    }

    #[test]
    fn load_keeps_lines_verbatim() {
        let engine = WordQueryEngine::load(" qa \r\nb");
        assert_eq!(engine.words(), &[" qa \r", "b"]);
    }

    #[test]
    fn zero_length_yields_nothing() {
        let engine = WordQueryEngine::load("a\nbb");
        let result = engine.search(&Query::new(0));
        assert!(result.matches.is_empty());
        assert_eq!(result.total_match_count, 0);
    }

    #[test]
    fn zero_limit_still_counts() {
        let engine = WordQueryEngine::load("ab\ncd\nefg");
        let result = engine.search(&Query::new(2).with_limit(0));
        assert!(result.matches.is_empty());
        assert_eq!(result.total_match_count, 2);
    }

    #[test]
    fn limit_truncates_in_vocabulary_order() {
        let engine = WordQueryEngine::load("zz\naa\nmm\nbb");
        let result = engine.search(&Query::new(2).with_limit(3));
        assert_eq!(result.matches, vec!["zz", "aa", "mm"]);
        assert_eq!(result.total_match_count, 4);
    }

    #[test]
    fn histogram_counts_chars() {
        let engine = WordQueryEngine::load("\u{f8d0}\u{f8d1}\nab\nabc");
        let histogram = engine.length_histogram();
        assert_eq!(histogram.get(&2), Some(&2));
        assert_eq!(histogram.get(&3), Some(&1));
    }
}
