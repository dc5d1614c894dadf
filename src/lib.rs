//! Tamagotchi - tick-driven virtual pet simulation
//!
//! `simulation::PetSimulation` is the whole model: vitals that drift every
//! logical tick, four player actions, a derived health state, and a
//! visual mode label for renderers. `render` and `ui` sit on top of it.

pub mod actions;
pub mod core;
pub mod entity;
pub mod render;
pub mod simulation;
pub mod ui;

pub use crate::actions::PetAction;
pub use crate::core::{PetConfig, PetError, Species, Stage};
pub use crate::entity::{HealthState, VisualMode, Vitals};
pub use crate::simulation::{PetSimulation, PetSnapshot};
