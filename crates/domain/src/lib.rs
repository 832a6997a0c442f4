//! # Sheetsmith Domain
//!
//! Vocabulary types and value objects for the character sheet editor.
//! This is the innermost layer: pure data types with no I/O, no async,
//! and no internal crate dependencies.

pub mod value_objects;

pub use value_objects::{ParseStrengthDamageError, StrengthDamage};
