//! Browser configuration with sane defaults.

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_SOURCE: &str = "incidents.json";
pub const DEFAULT_REPO_TREE_URL: &str = "https://github.com/khbarkar/openRam/tree/main";
pub const DEFAULT_PAGE_TITLE: &str = "Ram Ops - Incident Training Scenarios";
pub const DEFAULT_SITE_URL: &str = "https://github.com/khbarkar/openRam";

/// Where to load incidents from and how to render them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// File path or URL of the incidents document. Relative references resolve against `base_url`.
  pub source: String,
  /// Serving origin of the page. When unset, a relative `source` is a local file.
  pub base_url: Option<Url>,
  /// Prefix for card links; the record path is appended after a `/`.
  pub repo_tree_url: String,
  /// `<title>` of the serialized page.
  pub page_title: String,
  /// Repository link in the page header.
  pub site_url: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      source: DEFAULT_SOURCE.to_string(),
      base_url: None,
      repo_tree_url: DEFAULT_REPO_TREE_URL.to_string(),
      page_title: DEFAULT_PAGE_TITLE.to_string(),
      site_url: DEFAULT_SITE_URL.to_string(),
    }
  }
}

impl Config {
  /// Defaults overlaid with `INCIDENTS_*` environment variables.
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Same as `from_env`, reading variables through `lookup`.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let mut config = Self::default();
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(source) = get("INCIDENTS_SOURCE") {
      config.source = source;
    }
    if let Some(base) = get("INCIDENTS_BASE_URL") {
      config.base_url = Some(parse_base_url(&base)?);
    }
    if let Some(repo) = get("INCIDENTS_REPO_URL") {
      config.repo_tree_url = repo;
    }
    if let Some(title) = get("INCIDENTS_PAGE_TITLE") {
      config.page_title = title;
    }
    if let Some(site) = get("INCIDENTS_SITE_URL") {
      config.site_url = site;
    }
    Ok(config)
  }

  /// Card link for a record path. The path is appended verbatim.
  pub fn scenario_url(&self, path: &str) -> String {
    format!("{}/{}", self.repo_tree_url.trim_end_matches('/'), path)
  }
}

/// Parse a serving origin. Only http(s) origins can serve the page.
pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
  let url = Url::parse(raw.trim())
    .map_err(|e| ConfigError::invalid("base_url", &format!("invalid URL: {}", e)))?;
  match url.scheme() {
    "http" | "https" => Ok(url),
    other => Err(ConfigError::invalid(
      "base_url",
      &format!("unsupported scheme {}", other),
    )),
  }
}
