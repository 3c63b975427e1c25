#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to (de)serialize stored value: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
