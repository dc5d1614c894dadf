use thiserror::Error;

/// Errors raised at the crate's I/O edges (config files, save files).
///
/// Simulation operations never return these; refused actions are plain `false`.
#[derive(Error, Debug)]
pub enum PetError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, PetError>;
