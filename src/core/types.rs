//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Value of a single vital (hunger, happiness, energy)
pub type Stat = i32;

/// Logical tick counter kept by drivers (the simulation itself is tickless)
pub type Tick = u64;

/// Supported pet species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    #[default]
    Cat,
    Dog,
    Dragon,
}

impl Species {
    pub fn all() -> &'static [Species] {
        &[Species::Cat, Species::Dog, Species::Dragon]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Cat => "cat",
            Species::Dog => "dog",
            Species::Dragon => "dragon",
        }
    }

    /// Parse a species name, falling back to the default for anything unknown
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl FromStr for Species {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cat" => Ok(Species::Cat),
            "dog" => Ok(Species::Dog),
            "dragon" => Ok(Species::Dragon),
            other => Err(format!("unknown species: {}", other)),
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Growth stage. Only ever moves from baby to adult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    #[default]
    Baby,
    Adult,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Baby => "baby",
            Stage::Adult => "adult",
        }
    }

    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "baby" => Ok(Stage::Baby),
            "adult" => Ok(Stage::Adult),
            other => Err(format!("unknown stage: {}", other)),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
