#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("{0} must be set in environment variables")]
    Missing(&'static str),

    #[error("Invalid program id: {0}")]
    InvalidProgramId(String),

    #[error("Failed to read IDL {path}: {reason}")]
    Idl { path: String, reason: String },
}
