use autogoal_core::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid goal plan: {0}")]
    Plan(serde_json::Error),

    #[error("Invalid tool parameters: {0}")]
    Params(serde_json::Error),

    #[error("Failed to render output: {0}")]
    Output(serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Unknown tool '{0}'")]
    UnknownTool(String),
}
