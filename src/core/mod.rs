pub mod config;
pub mod error;
pub mod types;

pub use config::PetConfig;
pub use error::{PetError, Result};
pub use types::{Species, Stage, Stat, Tick};
