// File: src/loader.rs
use crate::config::FinderConfig;
use crate::core::charmap::CharacterMap;
use crate::core::engine::WordQueryEngine;
use crate::core::types::MappingEntry;
use crate::error::LoadError;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn parse_mapping(json: &str) -> Result<Vec<MappingEntry>, serde_json::Error> {
    serde_json::from_str(json)
}

pub fn load_mapping(path: &Path) -> Result<CharacterMap, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let entries: Vec<MappingEntry> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| LoadError::Json {
            path: path.display().to_string(),
            source,
        })?;
    Ok(CharacterMap::load(&entries)?)
}

pub fn load_words(path: &Path) -> Result<WordQueryEngine, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(WordQueryEngine::load(&text))
}

/// Loads both data files named by `config`.
pub fn load_all(config: &FinderConfig) -> Result<(CharacterMap, WordQueryEngine), LoadError> {
    let map = load_mapping(&config.mapping_path)?;
    if let Err(e) = map.check_layout() {
        tracing::warn!(error = %e, "mapping has an inconsistent keyboard layout");
    }
    let engine = load_words(&config.words_path)?;
    Ok((map, engine))
}
