// File: src/config.rs
use std::path::PathBuf;

pub const DEFAULT_MAPPING_PATH: &str = "data/mapping.json";
pub const DEFAULT_WORDS_PATH: &str = "data/klingon.txt";
pub const DEFAULT_WORD_LENGTH: usize = 5;
pub const DEFAULT_MAX_RESULTS: usize = crate::core::types::DEFAULT_LIMIT;

/// Where the data lives and what a fresh query starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderConfig {
    pub mapping_path: PathBuf,
    pub words_path: PathBuf,
    pub word_length: usize,
    pub max_results: usize,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            mapping_path: PathBuf::from(DEFAULT_MAPPING_PATH),
            words_path: PathBuf::from(DEFAULT_WORDS_PATH),
            word_length: DEFAULT_WORD_LENGTH,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl FinderConfig {
    /// The query an interactive session starts with.
    pub fn initial_query(&self) -> crate::core::types::Query {
        crate::core::types::Query::new(self.word_length).with_limit(self.max_results)
    }
}
