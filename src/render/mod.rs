//! Rendering side of the pet
//!
//! Reads simulation state, never modifies it. The simulation does not
//! depend on anything in here.

pub mod colors;
pub mod sprites;

use crate::simulation::pet::PetSimulation;

/// Current ASCII frame for a pet, cycled by the caller's animation counter
pub fn pet_frame(pet: &PetSimulation, counter: u64) -> &'static str {
    sprites::frame(pet.species(), pet.stage(), pet.visual_mode(), counter)
}

/// Bar fill ratio for a stat in `[min_stat, max_stat]`
///
/// Inverted bars show "fullness" for stats where high is bad (hunger).
pub fn bar_ratio(value: i32, min: i32, max: i32, invert: bool) -> f64 {
    if max <= min {
        return 0.0;
    }
    let value = value.clamp(min, max);
    let ratio = (f64::from(value) - f64::from(min)) / (f64::from(max) - f64::from(min));
    if invert {
        1.0 - ratio
    } else {
        ratio
    }
}
