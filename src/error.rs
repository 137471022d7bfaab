use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Funcss(#[from] funcss::FuncssError),

    #[error("cannot read globals from {}: {source}", .path.display())]
    Globals {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot create {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Output error: {0}")]
    IO(#[from] std::io::Error),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, CliError>;
