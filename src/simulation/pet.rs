//! The pet simulation state machine
//!
//! A pet is advanced only by `tick()` and the four actions. Every
//! mutation ends by clamping vitals and re-deriving the health state, so
//! the state can never drift from the numbers that justify it.

use crate::core::config::PetConfig;
use crate::core::types::{Species, Stage, Stat};
use crate::entity::state::{ActiveAction, HealthState, VisualAction, VisualMode};
use crate::entity::vitals::Vitals;

/// A single virtual pet
#[derive(Debug, Clone)]
pub struct PetSimulation {
    name: String,
    species: Species,
    stage: Stage,
    vitals: Vitals,
    total_food_eaten: Stat,
    state: HealthState,
    is_sleeping: bool,
    play_cooldown: u32,
    visual_action: Option<ActiveAction>,
    config: PetConfig,
}

impl PetSimulation {
    /// Hatch a new baby pet with default vitals
    pub fn new(name: impl Into<String>, species: Species, config: PetConfig) -> Self {
        Self::with_vitals(name, species, Stage::Baby, Vitals::default(), config)
    }

    /// Construct a pet with explicit vitals
    ///
    /// Vitals are stored exactly as given, even out of range; the first
    /// clamp happens on the next tick or action.
    pub fn with_vitals(
        name: impl Into<String>,
        species: Species,
        stage: Stage,
        vitals: Vitals,
        config: PetConfig,
    ) -> Self {
        let mut pet = Self {
            name: name.into(),
            species,
            stage,
            vitals,
            total_food_eaten: 0,
            state: HealthState::Alive,
            is_sleeping: false,
            play_cooldown: 0,
            visual_action: None,
            config,
        };
        pet.update_state();
        pet
    }

    /// Construct from raw species/stage text, normalizing unknown values
    pub fn from_raw(
        name: impl Into<String>,
        species: &str,
        stage: &str,
        vitals: Vitals,
        config: PetConfig,
    ) -> Self {
        Self::with_vitals(
            name,
            Species::from_name_or_default(species),
            Stage::from_name_or_default(stage),
            vitals,
            config,
        )
    }

    // === QUERIES ===

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn vitals(&self) -> Vitals {
        self.vitals
    }

    pub fn hunger(&self) -> Stat {
        self.vitals.hunger
    }

    pub fn happiness(&self) -> Stat {
        self.vitals.happiness
    }

    pub fn energy(&self) -> Stat {
        self.vitals.energy
    }

    pub fn total_food_eaten(&self) -> Stat {
        self.total_food_eaten
    }

    pub fn state(&self) -> HealthState {
        self.state
    }

    pub fn is_dead(&self) -> bool {
        self.state.is_dead()
    }

    pub fn is_sleeping(&self) -> bool {
        self.is_sleeping
    }

    /// Ticks left before play is allowed again
    pub fn play_cooldown(&self) -> u32 {
        self.play_cooldown
    }

    pub fn visual_action(&self) -> Option<VisualAction> {
        self.visual_action.map(|a| a.action)
    }

    pub fn config(&self) -> &PetConfig {
        &self.config
    }

    /// Mode label for the renderer's (species, stage, mode) lookup
    pub fn visual_mode(&self) -> VisualMode {
        VisualMode::select(self.state, self.is_sleeping, self.visual_action())
    }

    // === CORE LOOP ===

    /// Advance the pet by one logical tick
    pub fn tick(&mut self) {
        if self.is_dead() {
            self.visual_action = None;
            return;
        }

        if self.is_sleeping {
            self.vitals.apply_sleep_tick(&self.config);
        } else {
            self.vitals.apply_awake_tick(&self.config);
        }

        self.play_cooldown = self.play_cooldown.saturating_sub(1);

        if let Some(active) = self.visual_action.as_mut() {
            if !active.advance() {
                self.visual_action = None;
            }
        }

        self.auto_sleep_or_wake();

        self.vitals.clamp(&self.config);
        self.update_state();
    }

    // === ACTIONS ===

    /// Feed the pet. Refused when dead, asleep or already full.
    pub fn feed(&mut self) -> bool {
        if self.is_dead() || self.is_sleeping {
            tracing::trace!(pet = %self.name, "feed refused");
            return false;
        }
        if self.vitals.hunger <= self.config.min_stat {
            tracing::trace!(pet = %self.name, "feed refused: already full");
            return false;
        }

        let before = self.vitals.hunger;
        self.vitals.hunger = before.saturating_sub(self.config.feed_amount);
        self.vitals.clamp(&self.config);

        let eaten = before.saturating_sub(self.vitals.hunger).max(0);
        self.total_food_eaten = self.total_food_eaten.saturating_add(eaten);

        self.check_evolution();
        self.update_state();
        self.set_visual_action(VisualAction::Eat);
        true
    }

    /// Play with the pet. Refused when dead, asleep, too tired or on cooldown.
    pub fn play(&mut self) -> bool {
        if self.is_dead() || self.is_sleeping {
            tracing::trace!(pet = %self.name, "play refused");
            return false;
        }
        if self.vitals.energy <= self.config.play_energy_cost {
            tracing::trace!(pet = %self.name, energy = self.vitals.energy, "play refused: too tired");
            return false;
        }
        if self.play_cooldown > 0 {
            tracing::trace!(pet = %self.name, cooldown = self.play_cooldown, "play refused: cooldown");
            return false;
        }

        self.vitals.happiness = self.vitals.happiness.saturating_add(self.config.play_happiness_gain);
        self.vitals.energy = self.vitals.energy.saturating_sub(self.config.play_energy_cost);
        self.play_cooldown = self.config.play_cooldown_ticks;

        self.vitals.clamp(&self.config);
        self.update_state();
        self.set_visual_action(VisualAction::Play);
        true
    }

    /// Put the pet to bed. Vitals only change on the following ticks.
    pub fn sleep(&mut self) -> bool {
        if self.is_dead() || self.is_sleeping {
            tracing::trace!(pet = %self.name, "sleep refused");
            return false;
        }
        self.is_sleeping = true;
        self.visual_action = None;
        true
    }

    /// Wake a sleeping pet
    pub fn wake(&mut self) -> bool {
        if self.is_dead() || !self.is_sleeping {
            tracing::trace!(pet = %self.name, "wake refused");
            return false;
        }
        self.is_sleeping = false;
        self.update_state();
        true
    }

    // === INTERNAL ===

    /// Used by snapshot restore; re-derives state so a dead pet stays awake
    pub(crate) fn restore_counters(&mut self, is_sleeping: bool, total_food_eaten: Stat) {
        self.is_sleeping = is_sleeping;
        self.total_food_eaten = total_food_eaten;
        self.update_state();
    }

    fn set_visual_action(&mut self, action: VisualAction) {
        let ticks = self.config.action_visual_ticks;
        self.visual_action = (ticks > 0).then_some(ActiveAction {
            action,
            ticks_remaining: ticks,
        });
    }

    fn auto_sleep_or_wake(&mut self) {
        let energy = self.vitals.energy;
        if !self.is_sleeping && energy <= self.config.auto_sleep_energy_threshold {
            tracing::debug!(pet = %self.name, energy, "auto-sleep");
            self.is_sleeping = true;
            self.visual_action = None;
        } else if self.is_sleeping && energy >= self.config.auto_wake_energy_threshold {
            tracing::debug!(pet = %self.name, energy, "auto-wake");
            self.is_sleeping = false;
        }
    }

    fn check_evolution(&mut self) {
        if self.stage == Stage::Baby && self.total_food_eaten >= self.config.food_to_adult {
            tracing::debug!(pet = %self.name, total_food_eaten = self.total_food_eaten, "evolved to adult");
            self.stage = Stage::Adult;
        }
    }

    fn update_state(&mut self) {
        let previous = self.state;
        self.state = HealthState::derive(&self.vitals, &self.config);
        if self.state.is_dead() {
            self.is_sleeping = false;
            if !previous.is_dead() {
                tracing::debug!(
                    pet = %self.name,
                    hunger = self.vitals.hunger,
                    happiness = self.vitals.happiness,
                    energy = self.vitals.energy,
                    "pet died"
                );
            }
        }
    }
}
