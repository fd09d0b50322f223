use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read directory '{}': {source}", path.display())]
    ReadDir {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
