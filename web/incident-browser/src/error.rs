//! Structured error types for the incident browser.

use thiserror::Error;

/// Loading `incidents.json` failed. The only failure the browser has: toggling,
/// filtering and rendering work on in-memory data and cannot fail.
#[derive(Debug, Error)]
pub enum LoadError {
  #[error("source: {0}")]
  Source(String),

  #[error("read {path}: {source}")]
  Io {
    path: String,
    #[source]
    source: std::io::Error,
  },

  #[error("fetch: {0}")]
  Http(#[from] reqwest::Error),

  #[error("fetch {url}: HTTP {status}")]
  Status { url: String, status: u16 },

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}

impl LoadError {
  pub fn unresolvable(msg: impl Into<String>) -> Self {
    Self::Source(msg.into())
  }
}

/// An override from the environment or command line is unusable.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("config: {field}: {reason}")]
  Invalid { field: String, reason: String },
}

impl ConfigError {
  pub fn invalid(field: &str, reason: &str) -> Self {
    Self::Invalid {
      field: field.to_string(),
      reason: reason.to_string(),
    }
  }
}
