use thiserror::Error;

#[derive(Error, Debug)]
pub enum ErtError {
    #[error("snapshot file '{0}' not found")]
    SnapshotNotFound(String),

    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("unknown tab '{0}' (expected send, read or deny)")]
    InvalidTab(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("watcher error: {0}")]
    WatcherError(String),

    #[error("TUI error: {0}")]
    Tui(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ErtError>;
