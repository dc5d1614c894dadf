//! Color definitions for species and visual states

use crate::core::types::Species;
use crate::entity::state::HealthState;
use ratatui::style::Color;

/// Bar fill, as in the classic handheld
pub const BAR_FILL: Color = Color::Rgb(0x4c, 0xaf, 0x50);

/// Muted text for the feedback line
pub const FEEDBACK: Color = Color::Rgb(0x55, 0x55, 0x55);

/// Get the sprite color for a species
pub fn species_color(species: Species) -> Color {
    match species {
        Species::Cat => Color::Yellow,
        Species::Dog => Color::Rgb(0xc0, 0x8a, 0x50), // Tan
        Species::Dragon => Color::LightRed,
    }
}

/// Color of the state label
pub fn state_color(state: HealthState) -> Color {
    match state {
        HealthState::Alive => Color::Green,
        HealthState::Hungry => Color::Yellow,
        HealthState::Tired => Color::Blue,
        HealthState::Bored => Color::Magenta,
        HealthState::Dead => Color::DarkGray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dead_is_grey() {
        assert_eq!(state_color(HealthState::Dead), Color::DarkGray);
    }

    #[test]
    fn test_species_colors_distinct() {
        assert_ne!(species_color(Species::Cat), species_color(Species::Dog));
        assert_ne!(species_color(Species::Dog), species_color(Species::Dragon));
    }
}
