//! Headless pet simulation
//!
//! Runs a scripted sequence of ticks and actions without a terminal UI and
//! prints the pet after each step, then the final snapshot as JSON.
//!
//! Script steps are comma separated: `tick`, `tick*N`, `feed`, `play`,
//! `sleep`, `wake`.

use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

use tamagotchi::actions::PetAction;
use tamagotchi::core::error::Result;
use tamagotchi::core::{PetConfig, Species};
use tamagotchi::simulation::PetSimulation;

/// Pet Sim - run a pet through a script of ticks and actions
#[derive(Parser, Debug)]
#[command(name = "pet_sim")]
#[command(about = "Run a virtual pet headlessly from a script")]
struct Args {
    /// Name for a new pet
    #[arg(long, default_value = "Tama")]
    name: String,

    /// Species for a new pet
    #[arg(long, default_value = "cat")]
    species: String,

    /// TOML file overriding config values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start from this JSON snapshot instead of hatching
    #[arg(long)]
    load: Option<PathBuf>,

    /// Write the final snapshot here
    #[arg(long)]
    save: Option<PathBuf>,

    /// Steps to run, e.g. "tick*5,feed,play,tick"
    #[arg(long, default_value = "")]
    script: String,

    /// Extra ticks to run after the script
    #[arg(long, default_value_t = 0)]
    ticks: u64,

    /// Only print the final snapshot
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Tick(u64),
    Action(PetAction),
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s == "tick" {
            return Ok(Step::Tick(1));
        }
        if let Some(count) = s.strip_prefix("tick*") {
            return count
                .parse()
                .map(Step::Tick)
                .map_err(|_| format!("bad tick count in {:?}", s));
        }
        s.parse().map(Step::Action)
    }
}

fn parse_script(script: &str) -> std::result::Result<Vec<Step>, String> {
    script
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(str::parse)
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tamagotchi=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Scripted runs refuse inconsistent configs outright
    let config = match &args.config {
        Some(path) => PetConfig::load_validated(path)?,
        None => PetConfig::default(),
    };

    let mut steps = match parse_script(&args.script) {
        Ok(steps) => steps,
        Err(e) => {
            eprintln!("Invalid script: {}", e);
            std::process::exit(2);
        }
    };
    if args.ticks > 0 {
        steps.push(Step::Tick(args.ticks));
    }

    let mut pet = match &args.load {
        Some(path) => PetSimulation::load_from_file(path, config)?,
        None => PetSimulation::new(
            args.name.clone(),
            Species::from_name_or_default(&args.species),
            config,
        ),
    };

    let mut tick: u64 = 0;
    if !args.quiet {
        print_status(tick, "start", &pet);
    }

    for step in steps {
        match step {
            Step::Tick(n) => {
                for _ in 0..n {
                    pet.tick();
                    tick += 1;
                    if !args.quiet {
                        print_status(tick, "tick", &pet);
                    }
                }
            }
            Step::Action(action) => {
                let had_effect = action.apply(&mut pet);
                if !args.quiet {
                    let label = format!("{}{}", action, if had_effect { "" } else { " (no effect)" });
                    print_status(tick, &label, &pet);
                }
            }
        }
    }

    println!("{}", pet.snapshot().to_json()?);

    if let Some(path) = &args.save {
        pet.save_to_file(path)?;
    }
    Ok(())
}

fn print_status(tick: u64, label: &str, pet: &PetSimulation) {
    println!(
        "[{:>4}] {:<18} hunger {:>3}  happiness {:>3}  energy {:>3}  {:<6} {}{}",
        tick,
        label,
        pet.hunger(),
        pet.happiness(),
        pet.energy(),
        pet.state(),
        pet.visual_mode(),
        if pet.is_sleeping() { " zz" } else { "" }
    );
}
