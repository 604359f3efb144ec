//! Wrap configuration

use crate::error::ImmuError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a view reacts to attempted writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Every write fails with `MutationRejected` (default)
    #[default]
    Strict,
    /// Writes are silently ignored
    Relaxed,
}

impl Strictness {
    /// Lowercase name used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            Strictness::Strict => "strict",
            Strictness::Relaxed => "relaxed",
        }
    }
}

impl fmt::Display for Strictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strictness {
    type Err = ImmuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Strictness::Strict),
            "relaxed" => Ok(Strictness::Relaxed),
            _ => Err(ImmuError::InvalidStrictness(s.to_string())),
        }
    }
}

/// Options carried by every view built from one `wrap_with` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapOptions {
    /// Write policy (default: strict)
    pub strictness: Strictness,
}

impl WrapOptions {
    /// Options that reject every write
    pub fn strict() -> Self {
        Self {
            strictness: Strictness::Strict,
        }
    }

    /// Options that ignore writes instead of failing
    pub fn relaxed() -> Self {
        Self {
            strictness: Strictness::Relaxed,
        }
    }

    /// Whether rejected writes surface as errors
    pub fn is_strict(&self) -> bool {
        self.strictness == Strictness::Strict
    }
}
