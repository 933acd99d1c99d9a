//! Error type for `tend-store-json`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The backing file exists but cannot be interpreted as a habit
  /// collection. Never auto-repaired; the load that hit it fails outright.
  #[error("corrupt habit file {}: {source}", .path.display())]
  Corrupt {
    path:   PathBuf,
    source: serde_json::Error,
  },

  /// Attempted to update or log a completion against an unknown id.
  #[error("habit not found: {0}")]
  HabitNotFound(uuid::Uuid),

  /// Underlying storage failure during load or save; propagated unchanged,
  /// never retried.
  #[error("i/o error: {0}")]
  Io(#[from] std::io::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
