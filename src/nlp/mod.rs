// src/nlp/mod.rs
pub mod tagger;

pub use tagger::{EntityLabel, EntityTagger, RuleTagger, TaggedDocument};
