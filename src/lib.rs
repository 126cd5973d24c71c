// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod loader;
pub use crate::core::charmap::CharacterMap;
pub use crate::core::engine::WordQueryEngine;
pub use crate::core::types::{DisplayRow, Letter, MappingEntry, Query, QueryResult};
pub use crate::error::{DataError, LoadError, LookupError};
