use setlist_core::ports::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
  #[error("connection error: {0}")]
  Connection(#[from] diesel::ConnectionError),

  #[error("pool error: {0}")]
  Pool(#[from] diesel::r2d2::PoolError),

  #[error("database error: {0}")]
  Database(#[from] diesel::result::Error),

  #[error("migration error: {0}")]
  Migration(String),

  #[error("serialization error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("unknown journal mode: {0:?}")]
  JournalMode(String),

  #[error("corrupt row: {0}")]
  Corrupt(String),

  #[error("config error: {0}")]
  Config(#[from] setlist_config::ConfigError),

  #[error("blocking task failed: {0}")]
  Join(#[from] tokio::task::JoinError),
}

impl From<StorageError> for StoreError {
  fn from(e: StorageError) -> Self {
    StoreError::Fault(e.to_string())
  }
}
