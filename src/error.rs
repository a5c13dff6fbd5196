use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// A caller-built key/value tag list did not come in pairs.
    #[error("Tag pair list must have an even number of entries, got {0}")]
    TagPairArity(usize),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
