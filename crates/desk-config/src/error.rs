use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `DESKHUB_*` variable could not be merged or extracted.
    #[error("failed to load deskhub config: {0}")]
    Figment(#[from] figment::Error),

    #[error("bad value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
