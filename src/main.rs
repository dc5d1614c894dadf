//! Tamagotchi - Entry Point
//!
//! Hatches a pet (or loads one from a save file), runs the terminal front
//! end until the player quits, then saves the pet back.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use tamagotchi::core::error::Result;
use tamagotchi::core::{PetConfig, Species};
use tamagotchi::simulation::PetSimulation;
use tamagotchi::ui::terminal::{self, TerminalOptions};

/// Tamagotchi - look after a virtual pet in your terminal
#[derive(Parser, Debug)]
#[command(name = "tamagotchi")]
#[command(about = "Feed, play with and put a virtual pet to bed")]
struct Args {
    /// Name for a newly hatched pet
    #[arg(long, default_value = "Tama")]
    name: String,

    /// Species for a newly hatched pet (cat, dog, dragon)
    #[arg(long, default_value = "cat")]
    species: String,

    /// TOML file overriding config values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Save file; loaded on start if it exists, written on quit
    #[arg(long)]
    save: Option<PathBuf>,

    /// Milliseconds per logic tick
    #[arg(long, default_value_t = 1000)]
    tick_ms: u64,

    /// Milliseconds per animation frame
    #[arg(long, default_value_t = 333)]
    anim_ms: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Only log when asked: the alternate screen owns stdout
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let config = match &args.config {
        Some(path) => PetConfig::load_from_toml(path)?,
        None => PetConfig::default(),
    };
    if let Err(problem) = config.validate() {
        tracing::warn!("Config looks inconsistent: {}", problem);
    }

    let mut pet = match &args.save {
        Some(path) if path.exists() => PetSimulation::load_from_file(path, config)?,
        _ => hatch(&args, config),
    };

    let options = TerminalOptions {
        tick_interval: Duration::from_millis(args.tick_ms.max(1)),
        anim_interval: Duration::from_millis(args.anim_ms.max(1)),
    };
    let ui = terminal::run(&mut pet, options)?;

    if let Some(path) = &args.save {
        pet.save_to_file(path)?;
    }

    println!(
        "Goodbye! {} the {} {} is {} after {} ticks.",
        pet.name(),
        pet.stage(),
        pet.species(),
        pet.state(),
        ui.tick_count
    );
    Ok(())
}

fn hatch(args: &Args, config: PetConfig) -> PetSimulation {
    let name = match args.name.trim() {
        "" => "Tama",
        name => name,
    };
    let species = Species::from_name_or_default(&args.species);
    if species.as_str() != args.species {
        tracing::warn!("Unknown species {:?}, hatching a {}", args.species, species);
    }
    tracing::info!("Hatching {} the {}", name, species);
    PetSimulation::new(name, species, config)
}
