// src/core/mod.rs

pub mod converter;
pub mod engine;
pub mod lexicon;
pub mod ordinal;
pub mod preprocess;
pub mod types;
