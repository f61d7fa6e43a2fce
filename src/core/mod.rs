pub mod converter;
pub mod engine;
pub mod normalizer;
pub mod synonyms;
pub mod types;
pub mod variants;
