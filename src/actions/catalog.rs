//! Action definitions and catalog

use crate::simulation::pet::PetSimulation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four things a player can do to a pet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetAction {
    Feed,
    Play,
    Sleep,
    Wake,
}

impl PetAction {
    pub fn all() -> &'static [PetAction] {
        &[PetAction::Feed, PetAction::Play, PetAction::Sleep, PetAction::Wake]
    }

    pub fn name(&self) -> &'static str {
        match self {
            PetAction::Feed => "feed",
            PetAction::Play => "play",
            PetAction::Sleep => "sleep",
            PetAction::Wake => "wake",
        }
    }

    /// Keyboard shortcut shown on buttons
    pub fn key(&self) -> char {
        match self {
            PetAction::Feed => 'f',
            PetAction::Play => 'p',
            PetAction::Sleep => 's',
            PetAction::Wake => 'w',
        }
    }

    pub fn from_key(key: char) -> Option<Self> {
        let key = key.to_ascii_lowercase();
        Self::all().iter().copied().find(|a| a.key() == key)
    }

    /// Run the action. Returns whether it had any effect.
    pub fn apply(&self, pet: &mut PetSimulation) -> bool {
        match self {
            PetAction::Feed => pet.feed(),
            PetAction::Play => pet.play(),
            PetAction::Sleep => pet.sleep(),
            PetAction::Wake => pet.wake(),
        }
    }

    /// Whether the action could have an effect right now.
    ///
    /// Coarse availability for enabling buttons: dead disables everything,
    /// asleep leaves only wake.
    pub fn is_available(&self, pet: &PetSimulation) -> bool {
        if pet.is_dead() {
            return false;
        }
        match self {
            PetAction::Wake => pet.is_sleeping(),
            PetAction::Feed | PetAction::Play | PetAction::Sleep => !pet.is_sleeping(),
        }
    }
}

impl FromStr for PetAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "feed" | "f" => Ok(PetAction::Feed),
            "play" | "p" => Ok(PetAction::Play),
            "sleep" | "s" => Ok(PetAction::Sleep),
            "wake" | "w" => Ok(PetAction::Wake),
            other => Err(format!("unknown action: {}", other)),
        }
    }
}

impl fmt::Display for PetAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::PetConfig;
    use crate::core::types::Species;

    #[test]
    fn test_parse_names_and_keys() {
        assert_eq!("feed".parse::<PetAction>(), Ok(PetAction::Feed));
        assert_eq!(" PLAY ".parse::<PetAction>(), Ok(PetAction::Play));
        assert_eq!("w".parse::<PetAction>(), Ok(PetAction::Wake));
        assert!("dance".parse::<PetAction>().is_err());
    }

    #[test]
    fn test_from_key() {
        assert_eq!(PetAction::from_key('S'), Some(PetAction::Sleep));
        assert_eq!(PetAction::from_key('q'), None);
    }

    #[test]
    fn test_apply_dispatches() {
        let mut pet = PetSimulation::new("Tama", Species::Cat, PetConfig::default());
        assert!(PetAction::Sleep.apply(&mut pet));
        assert!(pet.is_sleeping());
        assert!(!PetAction::Feed.apply(&mut pet));
        assert!(PetAction::Wake.apply(&mut pet));
        assert!(PetAction::Feed.apply(&mut pet));
    }

    #[test]
    fn test_availability_follows_sleep() {
        let mut pet = PetSimulation::new("Tama", Species::Cat, PetConfig::default());
        assert!(PetAction::Feed.is_available(&pet));
        assert!(!PetAction::Wake.is_available(&pet));
        pet.sleep();
        assert!(!PetAction::Play.is_available(&pet));
        assert!(PetAction::Wake.is_available(&pet));
    }
}
