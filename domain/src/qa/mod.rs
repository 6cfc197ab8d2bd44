//! Backend response shapes.
//!
//! - [`value_objects::QaAnswer`]: single-document and knowledge-base answers
//! - [`value_objects::ComparisonReport`]: multi-document comparison
//! - [`value_objects::ArenaAnswers`]: per-model answers from the arena

pub mod value_objects;
