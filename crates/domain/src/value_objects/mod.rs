//! Value objects - Immutable objects defined by their attributes

mod weapon_damage;

pub use weapon_damage::{ParseStrengthDamageError, StrengthDamage};
