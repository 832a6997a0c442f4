//! Strength-damage kind for weapons.
//!
//! Identifies which strength-based damage formula (if any) a weapon adds to
//! its base damage: thrust or swing, optionally scaled by the weapon's level.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error when strictly parsing a [`StrengthDamage`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown strength damage kind: {0}")]
pub struct ParseStrengthDamageError(pub String);

/// Which strength-based damage formula a weapon adds, if any.
///
/// Serialized with the stable snake_case keys used in sheet data ("none",
/// "thr", "thr_leveled", "sw", "sw_leveled"). Unrecognized keys collapse to
/// `None` so older or hand-edited sheets still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StrengthDamage {
    /// Thrust damage
    #[serde(rename = "thr")]
    Thrust,
    /// Thrust damage scaled by level
    #[serde(rename = "thr_leveled")]
    ThrustLeveled,
    /// Swing damage
    #[serde(rename = "sw")]
    Swing,
    /// Swing damage scaled by level
    #[serde(rename = "sw_leveled")]
    SwingLeveled,
    /// No strength-based damage applies
    #[default]
    #[serde(rename = "none", other)]
    None,
}

impl StrengthDamage {
    /// Returns the short form shown in weapon damage fields (e.g. "thr",
    /// "sw (leveled)"). `None` displays as the empty string.
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Thrust => "thr",
            Self::ThrustLeveled => "thr (leveled)",
            Self::Swing => "sw",
            Self::SwingLeveled => "sw (leveled)",
        }
    }

    /// Returns the stable key used in serialized sheet data.
    pub fn key(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Thrust => "thr",
            Self::ThrustLeveled => "thr_leveled",
            Self::Swing => "sw",
            Self::SwingLeveled => "sw_leveled",
        }
    }

    /// Returns all kinds in declaration order, for editor dropdowns.
    pub fn all() -> [StrengthDamage; 5] {
        [
            Self::None,
            Self::Thrust,
            Self::ThrustLeveled,
            Self::Swing,
            Self::SwingLeveled,
        ]
    }

    /// Check if the formula scales with a level parameter.
    pub fn is_leveled(&self) -> bool {
        matches!(self, Self::ThrustLeveled | Self::SwingLeveled)
    }

    /// Check if any strength-based damage applies at all.
    pub fn adds_strength_damage(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Extract a kind from loosely formatted input.
    ///
    /// Accepts keys and display labels case-insensitively; anything
    /// unrecognized collapses to `None`.
    pub fn extract(s: &str) -> StrengthDamage {
        s.parse().unwrap_or(Self::None)
    }
}

impl fmt::Display for StrengthDamage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for StrengthDamage {
    type Err = ParseStrengthDamageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" => Ok(Self::None),
            "thr" => Ok(Self::Thrust),
            "thr_leveled" | "thr (leveled)" => Ok(Self::ThrustLeveled),
            "sw" => Ok(Self::Swing),
            "sw_leveled" | "sw (leveled)" => Ok(Self::SwingLeveled),
            _ => Err(ParseStrengthDamageError(s.to_string())),
        }
    }
}
