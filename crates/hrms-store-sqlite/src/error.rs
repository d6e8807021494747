//! Error type for `hrms-store-sqlite`.

use hrms_core::{Classify, ErrorKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A categorised domain failure (validation, not found, conflict).
  #[error(transparent)]
  Core(#[from] hrms_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  /// A stored column could not be decoded back into its domain type.
  #[error("decode error: {0}")]
  Decode(String),
}

impl Classify for Error {
  fn kind(&self) -> ErrorKind {
    match self {
      Error::Core(e) => e.kind(),
      Error::Database(_) | Error::Uuid(_) | Error::Decode(_) => {
        ErrorKind::Storage
      }
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
