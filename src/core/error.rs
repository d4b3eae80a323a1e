use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("Catalog fetch failed: {0}")]
    CatalogFetch(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ArenaError>;
