use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetgenError {
    #[error("Cannot read {}: {source}", path.display())]
    DataLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot parse {}: {source}", path.display())]
    DataParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Table has no entry for index {0}")]
    MissingEntry(u32),

    #[error("Invalid color value: {0}")]
    InvalidColor(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(#[from] minijinja::Error),

    #[error("Cannot write {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, AssetgenError>;
