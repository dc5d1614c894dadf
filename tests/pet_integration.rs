//! Integration tests for the pet simulation
//!
//! These tests run whole scenarios through the public API:
//! - Vitals drift per tick and clamp
//! - Feeding, evolution, play cooldown
//! - Automatic sleep and wake
//! - Death and its terminal behavior

use tamagotchi::core::{PetConfig, Species, Stage};
use tamagotchi::entity::{HealthState, VisualMode, Vitals};
use tamagotchi::simulation::PetSimulation;
use tamagotchi::PetAction;

fn default_pet() -> PetSimulation {
    PetSimulation::new("Tama", Species::Cat, PetConfig::default())
}

fn pet_with(vitals: Vitals, config: PetConfig) -> PetSimulation {
    PetSimulation::with_vitals("Test", Species::Cat, Stage::Baby, vitals, config)
}

// ============================================================================
// Tick and Feed
// ============================================================================

#[test]
fn test_first_tick_then_feed() {
    let mut pet = default_pet();

    pet.tick();
    assert_eq!(pet.hunger(), 22);
    assert_eq!(pet.energy(), 69);
    assert_eq!(pet.happiness(), 69);
    assert_eq!(pet.state(), HealthState::Alive);

    assert!(pet.feed());
    assert_eq!(pet.hunger(), 0);
    assert_eq!(pet.total_food_eaten(), 22);
    assert_eq!(pet.state(), HealthState::Alive);
    assert_eq!(pet.visual_mode(), VisualMode::Eat);
}

#[test]
fn test_feed_when_full_changes_nothing() {
    let mut pet = pet_with(Vitals::new(0, 50, 50), PetConfig::default());
    let before = pet.vitals();
    assert!(!pet.feed());
    assert_eq!(pet.vitals(), before);
    assert_eq!(pet.total_food_eaten(), 0);
}

#[test]
fn test_hunger_becomes_hungry_state() {
    let mut pet = default_pet();
    // 20 + 2 * 25 = 70 reaches the hungry threshold
    for _ in 0..25 {
        pet.tick();
    }
    assert_eq!(pet.hunger(), 70);
    assert_eq!(pet.state(), HealthState::Hungry);
    assert_eq!(pet.visual_mode(), VisualMode::Hungry);
}

// ============================================================================
// Play Cooldown
// ============================================================================

#[test]
fn test_play_tick_play_is_refused() {
    let mut pet = default_pet();
    assert!(pet.play());
    pet.tick();
    assert!(!pet.play());
}

#[test]
fn test_play_tick_tick_play_succeeds() {
    let mut pet = default_pet();
    assert!(pet.play());
    pet.tick();
    pet.tick();
    assert_eq!(pet.play_cooldown(), 0);
    assert!(pet.play());
}

// ============================================================================
// Evolution
// ============================================================================

#[test]
fn test_evolves_once_and_stays_adult() {
    let mut pet = default_pet();
    let mut evolutions = 0;
    let mut last_stage = pet.stage();

    for _ in 0..400 {
        pet.tick();
        if pet.hunger() >= 40 {
            pet.feed();
        }
        if pet.stage() != last_stage {
            evolutions += 1;
            assert_eq!(last_stage, Stage::Baby);
            assert_eq!(pet.stage(), Stage::Adult);
            assert!(pet.total_food_eaten() >= pet.config().food_to_adult);
            last_stage = pet.stage();
        }
        if pet.is_dead() {
            break;
        }
    }

    assert_eq!(evolutions, 1);
    assert_eq!(pet.stage(), Stage::Adult);
}

#[test]
fn test_adult_never_reverts_even_with_low_food() {
    let mut pet = PetSimulation::with_vitals(
        "Big",
        Species::Dragon,
        Stage::Adult,
        Vitals::default(),
        PetConfig::default(),
    );
    assert_eq!(pet.total_food_eaten(), 0);
    pet.feed();
    pet.tick();
    assert_eq!(pet.stage(), Stage::Adult);
}

// ============================================================================
// Automatic Sleep and Wake
// ============================================================================

#[test]
fn test_auto_sleep_then_auto_wake() {
    let mut pet = default_pet();
    let config = pet.config().clone();

    let mut fell_asleep = false;
    for _ in 0..200 {
        pet.tick();
        if pet.is_sleeping() {
            fell_asleep = true;
            break;
        }
        if pet.hunger() >= 50 {
            assert!(pet.feed());
        }
    }
    assert!(fell_asleep, "pet never fell asleep on its own");
    assert!(pet.energy() <= config.auto_sleep_energy_threshold);
    assert!(!pet.is_dead());
    assert_eq!(pet.visual_mode(), VisualMode::Sleep);
    assert_eq!(pet.visual_action(), None);

    let mut woke = false;
    for _ in 0..200 {
        let energy_before = pet.energy();
        pet.tick();
        if !pet.is_sleeping() {
            woke = true;
            break;
        }
        assert_eq!(pet.energy(), energy_before + config.sleep_energy_gain_per_tick);
    }
    assert!(woke, "pet never woke on its own");
    assert!(pet.energy() >= config.auto_wake_energy_threshold);
    assert!(!pet.is_dead());
}

#[test]
fn test_manual_sleep_recovers_until_auto_wake() {
    let mut pet = pet_with(Vitals::new(10, 60, 50), PetConfig::default());
    assert!(pet.sleep());
    // 50 + 5 * 6 = 80
    for _ in 0..5 {
        pet.tick();
        assert!(pet.is_sleeping());
    }
    pet.tick();
    assert_eq!(pet.energy(), 80);
    assert!(!pet.is_sleeping());
}

// ============================================================================
// Death
// ============================================================================

#[test]
fn test_unhappiness_kills() {
    let mut pet = pet_with(Vitals::new(20, 1, 70), PetConfig::default());
    pet.tick();
    assert_eq!(pet.happiness(), 0);
    assert_eq!(pet.state(), HealthState::Dead);
    assert_eq!(pet.visual_mode(), VisualMode::Dead);
}

#[test]
fn test_death_while_asleep_forces_awake() {
    let config = PetConfig {
        sleep_happiness_change_per_tick: -5,
        ..PetConfig::default()
    };
    let mut pet = pet_with(Vitals::new(20, 4, 70), config);
    assert!(pet.sleep());
    pet.tick();
    assert!(pet.is_dead());
    assert!(!pet.is_sleeping());
}

#[test]
fn test_starving_in_sleep_forces_awake() {
    let mut pet = pet_with(Vitals::new(99, 60, 50), PetConfig::default());
    assert!(pet.sleep());
    pet.tick();
    assert_eq!(pet.hunger(), 100);
    assert!(pet.is_dead());
    assert!(!pet.is_sleeping());
}

#[test]
fn test_neglected_pet_dies_and_stays_dead() {
    let mut pet = default_pet();
    let mut ticks = 0;
    while !pet.is_dead() && ticks < 1000 {
        pet.tick();
        ticks += 1;
    }
    assert!(pet.is_dead());
    // Hunger is the first to run out: (100 - 20) / 2 = 40 ticks
    assert_eq!(ticks, 40);

    let frozen = (pet.vitals(), pet.stage(), pet.is_sleeping());
    for _ in 0..10 {
        pet.tick();
        for action in PetAction::all() {
            assert!(!action.apply(&mut pet));
        }
    }
    assert_eq!((pet.vitals(), pet.stage(), pet.is_sleeping()), frozen);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_from_toml_changes_behavior() {
    let config = PetConfig::parse_toml("hunger_per_tick = 10\nfeed_amount = 5\n").unwrap();
    let mut pet = PetSimulation::new("Fast", Species::Dog, config);
    pet.tick();
    assert_eq!(pet.hunger(), 30);
    assert!(pet.feed());
    assert_eq!(pet.hunger(), 25);
    assert_eq!(pet.total_food_eaten(), 5);
}

#[test]
fn test_identical_vitals_identical_state() {
    let mut a = default_pet();
    for _ in 0..30 {
        a.tick();
    }
    a.play();
    a.feed();
    let b = pet_with(a.vitals(), PetConfig::default());
    assert_eq!(a.state(), b.state());
}
