//! The three vitals every pet carries

use crate::core::config::PetConfig;
use crate::core::types::Stat;
use serde::{Deserialize, Serialize};

/// Pet vitals
///
/// Deltas are applied unclamped (saturating at the `Stat` limits); `clamp`
/// brings every field back into `[min_stat, max_stat]` and is run at the
/// end of each operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vitals {
    /// 0 = full, 100 = starving
    pub hunger: Stat,
    /// 0 = miserable, 100 = delighted
    pub happiness: Stat,
    /// 0 = exhausted, 100 = fully rested
    pub energy: Stat,
}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            hunger: 20,
            happiness: 70,
            energy: 70,
        }
    }
}

impl Vitals {
    pub fn new(hunger: Stat, happiness: Stat, energy: Stat) -> Self {
        Self {
            hunger,
            happiness,
            energy,
        }
    }

    /// Per-tick change while awake
    pub fn apply_awake_tick(&mut self, config: &PetConfig) {
        self.hunger = self.hunger.saturating_add(config.hunger_per_tick);
        self.energy = self.energy.saturating_add(config.energy_per_tick);
        self.happiness = self.happiness.saturating_add(config.happiness_per_tick);
    }

    /// Per-tick change while asleep
    pub fn apply_sleep_tick(&mut self, config: &PetConfig) {
        self.energy = self.energy.saturating_add(config.sleep_energy_gain_per_tick);
        self.hunger = self.hunger.saturating_add(config.sleep_hunger_increase_per_tick);
        self.happiness = self.happiness.saturating_add(config.sleep_happiness_change_per_tick);
    }

    /// Clamp every vital into the configured bounds
    pub fn clamp(&mut self, config: &PetConfig) {
        self.hunger = config.clamp_stat(self.hunger);
        self.happiness = config.clamp_stat(self.happiness);
        self.energy = config.clamp_stat(self.energy);
    }

    /// Whether every vital already lies inside the configured bounds
    pub fn in_bounds(&self, config: &PetConfig) -> bool {
        [self.hunger, self.happiness, self.energy]
            .iter()
            .all(|v| (config.min_stat..=config.max_stat).contains(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_awake_tick_is_unclamped() {
        let config = PetConfig::default();
        let mut vitals = Vitals::new(99, 0, 0);
        vitals.apply_awake_tick(&config);
        assert_eq!(vitals, Vitals::new(101, -1, -1));
        assert!(!vitals.in_bounds(&config));
    }

    #[test]
    fn test_sleep_tick_recovers_energy() {
        let config = PetConfig::default();
        let mut vitals = Vitals::default();
        vitals.apply_sleep_tick(&config);
        assert_eq!(vitals.energy, 75);
        assert_eq!(vitals.hunger, 21);
        assert_eq!(vitals.happiness, 70);
    }

    #[test]
    fn test_ticks_saturate_at_stat_limits() {
        let config = PetConfig::default();
        let mut vitals = Vitals::new(Stat::MAX, Stat::MIN, Stat::MAX);
        vitals.apply_awake_tick(&config);
        assert_eq!(vitals, Vitals::new(Stat::MAX, Stat::MIN, Stat::MAX - 1));

        vitals.apply_sleep_tick(&config);
        assert_eq!(vitals.energy, Stat::MAX);
        assert_eq!(vitals.hunger, Stat::MAX);
    }

    #[test]
    fn test_clamp_restores_bounds() {
        let config = PetConfig::default();
        let mut vitals = Vitals::new(140, -20, 100);
        vitals.clamp(&config);
        assert_eq!(vitals, Vitals::new(100, 0, 100));
        assert!(vitals.in_bounds(&config));
    }
}
