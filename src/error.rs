use thiserror::Error;

#[derive(Debug, Error)]
pub enum LendSyncError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("bus error: {0}")]
    Bus(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("runtime error: {0}")]
    Runtime(String),
}

pub type Result<T> = std::result::Result<T, LendSyncError>;
