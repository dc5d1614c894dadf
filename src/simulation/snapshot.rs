//! Snapshot shape for persisting a pet
//!
//! Only `name` is required. The `state` field is written for anyone
//! inspecting a save file and ignored on restore. Cooldown and the
//! transient visual action are never persisted.

use crate::core::config::PetConfig;
use crate::core::error::Result;
use crate::core::types::Stat;
use crate::entity::vitals::Vitals;
use crate::simulation::pet::PetSimulation;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Persisted attributes of a pet, in save-file order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetSnapshot {
    pub name: String,
    #[serde(default = "default_species")]
    pub species: String,
    #[serde(default = "default_stage")]
    pub stage: String,
    #[serde(default = "default_hunger")]
    pub hunger: Stat,
    #[serde(default = "default_happiness")]
    pub happiness: Stat,
    #[serde(default = "default_energy")]
    pub energy: Stat,
    /// Informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default)]
    pub is_sleeping: bool,
    #[serde(default)]
    pub total_food_eaten: Stat,
}

fn default_species() -> String {
    "cat".to_string()
}

fn default_stage() -> String {
    "baby".to_string()
}

fn default_hunger() -> Stat {
    Vitals::default().hunger
}

fn default_happiness() -> Stat {
    Vitals::default().happiness
}

fn default_energy() -> Stat {
    Vitals::default().energy
}

impl PetSnapshot {
    /// Minimal snapshot: a name and defaults for everything else
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            species: default_species(),
            stage: default_stage(),
            hunger: default_hunger(),
            happiness: default_happiness(),
            energy: default_energy(),
            state: None,
            is_sleeping: false,
            total_food_eaten: 0,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl PetSimulation {
    /// Capture the persistable attributes of this pet
    pub fn snapshot(&self) -> PetSnapshot {
        let vitals = self.vitals();
        PetSnapshot {
            name: self.name().to_string(),
            species: self.species().as_str().to_string(),
            stage: self.stage().as_str().to_string(),
            hunger: vitals.hunger,
            happiness: vitals.happiness,
            energy: vitals.energy,
            state: Some(self.state().as_str().to_string()),
            is_sleeping: self.is_sleeping(),
            total_food_eaten: self.total_food_eaten(),
        }
    }

    /// Rebuild a pet from a snapshot
    ///
    /// Health state is re-derived from the vitals. Out-of-range vitals are
    /// accepted and corrected by the next clamp.
    pub fn restore(snapshot: &PetSnapshot, config: PetConfig) -> Self {
        let vitals = Vitals::new(snapshot.hunger, snapshot.happiness, snapshot.energy);
        let mut pet = PetSimulation::from_raw(
            snapshot.name.clone(),
            &snapshot.species,
            &snapshot.stage,
            vitals,
            config,
        );
        pet.restore_counters(snapshot.is_sleeping, snapshot.total_food_eaten);
        pet
    }

    /// Write the snapshot as pretty JSON
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = self.snapshot().to_json()?;
        std::fs::write(path, json)?;
        tracing::info!(pet = %self.name(), path = %path.display(), "saved pet");
        Ok(())
    }

    /// Read a JSON snapshot and restore it with the given config
    pub fn load_from_file(path: &Path, config: PetConfig) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let snapshot = PetSnapshot::from_json(&content)?;
        let pet = Self::restore(&snapshot, config);
        tracing::info!(pet = %pet.name(), state = %pet.state(), "loaded pet");
        Ok(pet)
    }
}
