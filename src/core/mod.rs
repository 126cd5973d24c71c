// src/core/mod.rs
pub mod charmap;
pub mod engine;
pub mod query;
pub mod types;
