//! UI state management for the pet front end

use crate::actions::PetAction;
use crate::core::types::Tick;
use crate::simulation::pet::PetSimulation;
use std::collections::VecDeque;

/// Maximum action log entries to keep
const MAX_LOG_ENTRIES: usize = 50;

pub const HATCHED_TEXT: &str = "Your new pet has hatched!";
pub const DEAD_TEXT: &str = "Your pet has died. Press [Q] to quit.";

/// Game UI state
#[derive(Debug)]
pub struct GameUI {
    /// Line shown under the stat bars
    pub feedback: String,
    /// Action log entries
    pub action_log: VecDeque<LogEntry>,
    /// Logic ticks applied so far
    pub tick_count: Tick,
    /// Animation counter handed to the sprite table
    pub anim_frame: u64,
    /// Set when the player asks to quit
    pub should_quit: bool,
}

/// An entry in the action log
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub tick: Tick,
    pub action: PetAction,
    pub had_effect: bool,
}

impl LogEntry {
    /// e.g. "[12] feed (no effect)"
    pub fn message(&self) -> String {
        format!(
            "[{}] {}{}",
            self.tick,
            self.action,
            if self.had_effect { "" } else { " (no effect)" }
        )
    }
}

impl Default for GameUI {
    fn default() -> Self {
        Self::new()
    }
}

impl GameUI {
    pub fn new() -> Self {
        Self {
            feedback: HATCHED_TEXT.to_string(),
            action_log: VecDeque::with_capacity(MAX_LOG_ENTRIES),
            tick_count: 0,
            anim_frame: 0,
            should_quit: false,
        }
    }

    /// Text shown after an action attempt
    pub fn feedback_text(action: PetAction, had_effect: bool) -> &'static str {
        match (action, had_effect) {
            (PetAction::Feed, true) => "You feed your pet. Crunch crunch.",
            (PetAction::Feed, false) => "Feeding had no effect.",
            (PetAction::Play, true) => "You play with your pet. It looks happier!",
            (PetAction::Play, false) => "Your pet is too tired or on cooldown.",
            (PetAction::Sleep, true) => "Your pet curls up and falls asleep.",
            (PetAction::Sleep, false) => "Your pet cannot sleep right now.",
            (PetAction::Wake, true) => "You gently wake your pet.",
            (PetAction::Wake, false) => "Your pet refuses to wake.",
        }
    }

    /// Run an action chosen by the player and record the outcome.
    ///
    /// Ignored entirely once the pet is dead.
    pub fn perform(&mut self, pet: &mut PetSimulation, action: PetAction) -> bool {
        if pet.is_dead() {
            return false;
        }
        let had_effect = action.apply(pet);
        self.feedback = Self::feedback_text(action, had_effect).to_string();
        self.log(action, had_effect);
        self.sync(pet);
        had_effect
    }

    /// Advance the pet one logic tick. Dead pets are no longer ticked.
    pub fn game_tick(&mut self, pet: &mut PetSimulation) {
        if pet.is_dead() {
            return;
        }
        pet.tick();
        self.tick_count += 1;
        self.sync(pet);
    }

    pub fn animation_tick(&mut self) {
        self.anim_frame = self.anim_frame.wrapping_add(1);
    }

    /// Line describing state, e.g. "TIRED (SLEEPING)"
    pub fn state_text(pet: &PetSimulation) -> String {
        let mut text = pet.state().as_str().to_uppercase();
        if pet.is_sleeping() && !pet.is_dead() {
            text.push_str(" (SLEEPING)");
        }
        text
    }

    /// Most recent log entries, newest first
    pub fn recent_log(&self, count: usize) -> impl Iterator<Item = &LogEntry> {
        self.action_log.iter().rev().take(count)
    }

    fn sync(&mut self, pet: &PetSimulation) {
        if pet.is_dead() {
            self.feedback = DEAD_TEXT.to_string();
        }
    }

    /// Add an entry to the action log
    fn log(&mut self, action: PetAction, had_effect: bool) {
        if self.action_log.len() >= MAX_LOG_ENTRIES {
            self.action_log.pop_front();
        }
        self.action_log.push_back(LogEntry {
            tick: self.tick_count,
            action,
            had_effect,
        });
    }
}
