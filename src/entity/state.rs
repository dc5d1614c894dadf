//! Derived health state and the visual labels handed to renderers

use crate::core::config::PetConfig;
use crate::entity::vitals::Vitals;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Health state, always derived from vitals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    #[default]
    Alive,
    Hungry,
    Tired,
    Bored,
    Dead,
}

impl HealthState {
    /// Derive the state from vitals. First match wins:
    /// dead, then hungry, then tired, then bored, then alive.
    pub fn derive(vitals: &Vitals, config: &PetConfig) -> Self {
        if vitals.hunger >= config.death_hunger
            || vitals.energy <= config.death_energy
            || vitals.happiness <= config.death_happiness
        {
            HealthState::Dead
        } else if vitals.hunger >= config.hungry_threshold {
            HealthState::Hungry
        } else if vitals.energy <= config.tired_threshold {
            HealthState::Tired
        } else if vitals.happiness <= config.bored_threshold {
            HealthState::Bored
        } else {
            HealthState::Alive
        }
    }

    pub fn is_dead(&self) -> bool {
        matches!(self, HealthState::Dead)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthState::Alive => "alive",
            HealthState::Hungry => "hungry",
            HealthState::Tired => "tired",
            HealthState::Bored => "bored",
            HealthState::Dead => "dead",
        }
    }
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Short-lived display tag set by a successful feed or play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualAction {
    Eat,
    Play,
}

/// A visual action with the ticks it has left on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveAction {
    pub action: VisualAction,
    pub ticks_remaining: u32,
}

impl ActiveAction {
    /// Count one tick down. Returns false once the action has expired.
    pub fn advance(&mut self) -> bool {
        self.ticks_remaining = self.ticks_remaining.saturating_sub(1);
        self.ticks_remaining > 0
    }
}

/// Lookup key for the renderer's frame table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualMode {
    Idle,
    Eat,
    Sleep,
    Play,
    Hungry,
    Tired,
    Bored,
    Dead,
}

impl VisualMode {
    pub fn all() -> &'static [VisualMode] {
        &[
            VisualMode::Idle,
            VisualMode::Eat,
            VisualMode::Sleep,
            VisualMode::Play,
            VisualMode::Hungry,
            VisualMode::Tired,
            VisualMode::Bored,
            VisualMode::Dead,
        ]
    }

    /// Pick the mode to display. Dead beats sleep beats a transient
    /// action beats the need-based state.
    pub fn select(state: HealthState, is_sleeping: bool, action: Option<VisualAction>) -> Self {
        if state.is_dead() {
            return VisualMode::Dead;
        }
        if is_sleeping {
            return VisualMode::Sleep;
        }
        match action {
            Some(VisualAction::Eat) => return VisualMode::Eat,
            Some(VisualAction::Play) => return VisualMode::Play,
            None => {}
        }
        match state {
            HealthState::Hungry => VisualMode::Hungry,
            HealthState::Tired => VisualMode::Tired,
            HealthState::Bored => VisualMode::Bored,
            HealthState::Alive | HealthState::Dead => VisualMode::Idle,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VisualMode::Idle => "idle",
            VisualMode::Eat => "eat",
            VisualMode::Sleep => "sleep",
            VisualMode::Play => "play",
            VisualMode::Hungry => "hungry",
            VisualMode::Tired => "tired",
            VisualMode::Bored => "bored",
            VisualMode::Dead => "dead",
        }
    }
}

impl fmt::Display for VisualMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(hunger: i32, happiness: i32, energy: i32) -> HealthState {
        HealthState::derive(&Vitals::new(hunger, happiness, energy), &PetConfig::default())
    }

    #[test]
    fn test_each_death_condition() {
        assert_eq!(derive(100, 50, 50), HealthState::Dead);
        assert_eq!(derive(20, 0, 50), HealthState::Dead);
        assert_eq!(derive(20, 50, 0), HealthState::Dead);
    }

    #[test]
    fn test_hunger_dominates_tired_dominates_bored() {
        assert_eq!(derive(80, 10, 10), HealthState::Hungry);
        assert_eq!(derive(20, 10, 10), HealthState::Tired);
        assert_eq!(derive(20, 10, 50), HealthState::Bored);
        assert_eq!(derive(20, 50, 50), HealthState::Alive);
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        assert_eq!(derive(70, 50, 50), HealthState::Hungry);
        assert_eq!(derive(69, 50, 50), HealthState::Alive);
        assert_eq!(derive(20, 50, 30), HealthState::Tired);
        assert_eq!(derive(20, 30, 31), HealthState::Bored);
    }

    #[test]
    fn test_visual_mode_precedence() {
        assert_eq!(
            VisualMode::select(HealthState::Dead, true, Some(VisualAction::Eat)),
            VisualMode::Dead
        );
        assert_eq!(
            VisualMode::select(HealthState::Hungry, true, Some(VisualAction::Eat)),
            VisualMode::Sleep
        );
        assert_eq!(
            VisualMode::select(HealthState::Hungry, false, Some(VisualAction::Play)),
            VisualMode::Play
        );
        assert_eq!(VisualMode::select(HealthState::Tired, false, None), VisualMode::Tired);
        assert_eq!(VisualMode::select(HealthState::Alive, false, None), VisualMode::Idle);
    }

    #[test]
    fn test_active_action_expires() {
        let mut active = ActiveAction {
            action: VisualAction::Eat,
            ticks_remaining: 2,
        };
        assert!(active.advance());
        assert!(!active.advance());
        assert_eq!(active.ticks_remaining, 0);
    }
}
