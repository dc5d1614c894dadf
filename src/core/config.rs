//! Pet configuration with documented constants
//!
//! All tuning numbers live here. A simulation takes one `PetConfig` at
//! construction and never mutates it afterwards.

use crate::core::error::{PetError, Result};
use crate::core::types::Stat;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a single pet simulation
///
/// Every field has a default, so a TOML file only needs the values it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PetConfig {
    // === STAT BOUNDS ===
    /// Upper bound for every vital after clamping
    pub max_stat: Stat,
    /// Lower bound for every vital after clamping
    pub min_stat: Stat,

    // === AWAKE TICK DELTAS ===
    /// Hunger added per awake tick
    pub hunger_per_tick: Stat,
    /// Energy change per awake tick (negative drains)
    pub energy_per_tick: Stat,
    /// Happiness change per awake tick (negative drains)
    pub happiness_per_tick: Stat,

    // === SLEEP TICK DELTAS ===
    /// Energy recovered per sleeping tick
    pub sleep_energy_gain_per_tick: Stat,
    /// Hunger added per sleeping tick
    ///
    /// Slower than the awake rate so a long nap does not starve the pet.
    pub sleep_hunger_increase_per_tick: Stat,
    /// Happiness change per sleeping tick
    pub sleep_happiness_change_per_tick: Stat,

    // === ACTION EFFECTS ===
    /// Hunger removed by one feed
    pub feed_amount: Stat,
    /// Happiness gained by one play
    pub play_happiness_gain: Stat,
    /// Energy spent by one play. Play needs strictly more energy than this.
    pub play_energy_cost: Stat,
    /// Ticks before play is available again
    pub play_cooldown_ticks: u32,

    // === NEED THRESHOLDS ===
    /// Hunger at or above this reads as hungry
    pub hungry_threshold: Stat,
    /// Energy at or below this reads as tired
    pub tired_threshold: Stat,
    /// Happiness at or below this reads as bored
    pub bored_threshold: Stat,

    // === DEATH CONDITIONS ===
    pub death_hunger: Stat,
    pub death_energy: Stat,
    pub death_happiness: Stat,

    // === SLEEP CONTROL ===
    /// An awake pet falls asleep once energy drops to this value
    pub auto_sleep_energy_threshold: Stat,
    /// A sleeping pet wakes once energy recovers to this value
    ///
    /// Must be above `auto_sleep_energy_threshold`, otherwise the pet
    /// flips between asleep and awake every tick.
    pub auto_wake_energy_threshold: Stat,

    // === VISUALS ===
    /// How many ticks an "eat"/"play" action stays visible; 0 shows none
    pub action_visual_ticks: u32,

    // === EVOLUTION ===
    /// Total food eaten before a baby becomes an adult
    pub food_to_adult: Stat,
}

impl Default for PetConfig {
    fn default() -> Self {
        Self {
            max_stat: 100,
            min_stat: 0,

            hunger_per_tick: 2,
            energy_per_tick: -1,
            happiness_per_tick: -1,

            sleep_energy_gain_per_tick: 5,
            sleep_hunger_increase_per_tick: 1,
            sleep_happiness_change_per_tick: 0,

            feed_amount: 25,
            play_happiness_gain: 20,
            play_energy_cost: 10,
            play_cooldown_ticks: 2,

            hungry_threshold: 70,
            tired_threshold: 30,
            bored_threshold: 30,

            death_hunger: 100,
            death_energy: 0,
            death_happiness: 0,

            auto_sleep_energy_threshold: 15,
            auto_wake_energy_threshold: 80,

            action_visual_ticks: 3,

            food_to_adult: 100,
        }
    }
}

impl PetConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp a single value into `[min_stat, max_stat]`
    pub fn clamp_stat(&self, value: Stat) -> Stat {
        value.max(self.min_stat).min(self.max_stat)
    }

    /// Validate configuration for internal consistency
    ///
    /// Simulations never call this themselves; a bad config still runs,
    /// it just behaves oddly. Drivers call it and report the problem.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.min_stat >= self.max_stat {
            return Err(format!(
                "min_stat ({}) should be < max_stat ({})",
                self.min_stat, self.max_stat
            ));
        }

        if self.auto_wake_energy_threshold <= self.auto_sleep_energy_threshold {
            return Err(format!(
                "auto_wake_energy_threshold ({}) should be > auto_sleep_energy_threshold ({}) or the pet oscillates every tick",
                self.auto_wake_energy_threshold, self.auto_sleep_energy_threshold
            ));
        }

        if self.feed_amount <= 0 {
            return Err("feed_amount must be positive".into());
        }

        if self.food_to_adult <= 0 {
            return Err("food_to_adult must be positive".into());
        }

        Ok(())
    }

    /// Parse a config from TOML text. Missing fields take their defaults.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Load and validate in one step, turning a validation failure into an error
    pub fn load_validated(path: &Path) -> Result<Self> {
        let config = Self::load_from_toml(path)?;
        config.validate().map_err(PetError::InvalidConfig)?;
        Ok(config)
    }
}
