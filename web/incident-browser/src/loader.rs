//! Locate and fetch the incidents document.
//!
//! The page fetches `incidents.json` relative to its serving origin. Here the same
//! reference resolves against `Config::base_url` when one is set, and otherwise names
//! a local file.

use std::path::PathBuf;

use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::error::LoadError;
use crate::types::IncidentRecord;

/// A resolved location of the incidents document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
  File(PathBuf),
  Url(Url),
}

impl Source {
  /// Resolve `config.source` into a concrete location.
  pub fn resolve(config: &Config) -> Result<Self, LoadError> {
    let raw = config.source.trim();
    if raw.is_empty() {
      return Err(LoadError::unresolvable("empty incidents source"));
    }

    if let Ok(url) = Url::parse(raw) {
      match url.scheme() {
        "http" | "https" => return Ok(Self::Url(url)),
        "file" => {
          return url
            .to_file_path()
            .map(Self::File)
            .map_err(|_| LoadError::unresolvable(format!("not a local file URL: {}", raw)));
        }
        // Anything else ("c:" drive prefixes, "data:") is treated as a relative reference.
        _ => {}
      }
    }

    match &config.base_url {
      Some(base) => base
        .join(raw)
        .map(Self::Url)
        .map_err(|e| LoadError::unresolvable(format!("cannot join {} to {}: {}", raw, base, e))),
      None => Ok(Self::File(PathBuf::from(raw))),
    }
  }
}

impl std::fmt::Display for Source {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::File(path) => write!(f, "{}", path.display()),
      Self::Url(url) => write!(f, "{}", url),
    }
  }
}

/// Fetch and parse the document. One attempt, no retry, no timeout.
pub async fn fetch(source: &Source) -> Result<Vec<IncidentRecord>, LoadError> {
  let body = match source {
    Source::File(path) => tokio::fs::read(path).await.map_err(|e| LoadError::Io {
      path: path.display().to_string(),
      source: e,
    })?,
    Source::Url(url) => fetch_url(url).await?,
  };
  debug!(source = %source, bytes = body.len(), "incidents document fetched");
  parse_incidents(&body)
}

async fn fetch_url(url: &Url) -> Result<Vec<u8>, LoadError> {
  let response = reqwest::get(url.clone()).await?;
  let status = response.status();
  if !status.is_success() {
    return Err(LoadError::Status {
      url: url.to_string(),
      status: status.as_u16(),
    });
  }
  Ok(response.bytes().await?.to_vec())
}

/// Parse the JSON array of incident records.
pub fn parse_incidents(body: &[u8]) -> Result<Vec<IncidentRecord>, LoadError> {
  Ok(serde_json::from_slice(body)?)
}
