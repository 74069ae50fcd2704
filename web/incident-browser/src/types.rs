//! Core types for the incident browser (JSON contracts + view models).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::display::Region;

// ---------------------------------------------------------------------------
// Inbound types (JSON contract: incidents.json)
// ---------------------------------------------------------------------------

/// One entry of `incidents.json`. Unknown fields (e.g. `id`) are silently ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentRecord {
  pub path: String,
  pub title: String,
  pub description: String,
  pub difficulty: String,
  #[serde(default)]
  pub technologies: Vec<String>,
  #[serde(default)]
  pub skills: Vec<String>,
}

// ---------------------------------------------------------------------------
// Facet attributes
// ---------------------------------------------------------------------------

/// Difficulty pills always show these four levels, in this order, whatever the data holds.
pub const DIFFICULTY_LEVELS: [&str; 4] = ["Beginner", "Intermediate", "Advanced", "Not Rated"];

/// A filterable attribute of an incident record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
  #[serde(alias = "technology", alias = "tech")]
  Technologies,
  #[serde(alias = "difficulty")]
  Difficulties,
  #[serde(alias = "skill")]
  Skills,
}

impl Attribute {
  pub const ALL: [Attribute; 3] = [Self::Technologies, Self::Difficulties, Self::Skills];

  /// Wire name, also used as the pill's `data-type`.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Technologies => "technologies",
      Self::Difficulties => "difficulties",
      Self::Skills => "skills",
    }
  }

  pub fn from_str_loose(s: &str) -> Option<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "technologies" | "technology" | "tech" => Some(Self::Technologies),
      "difficulties" | "difficulty" => Some(Self::Difficulties),
      "skills" | "skill" => Some(Self::Skills),
      _ => None,
    }
  }

  /// Section heading shown above the pills.
  pub fn heading(self) -> &'static str {
    match self {
      Self::Technologies => "Technology",
      Self::Difficulties => "Difficulty",
      Self::Skills => "Skills",
    }
  }

  /// Container the pills for this attribute are rendered into.
  pub fn region(self) -> Region {
    match self {
      Self::Technologies => Region::TechFilters,
      Self::Difficulties => Region::DifficultyFilters,
      Self::Skills => Region::SkillFilters,
    }
  }
}

impl fmt::Display for Attribute {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// One toggle control bound to an `(attribute, value)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetPill {
  pub attribute: Attribute,
  pub value: String,
  pub active: bool,
}

// ---------------------------------------------------------------------------
// Commands (intent dispatch)
// ---------------------------------------------------------------------------

/// A user intent handled by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
  /// Flip membership of `value` in the active set for `attribute`.
  Toggle { attribute: Attribute, value: String },
  /// Empty one active set, or all of them when `attribute` is absent.
  Clear {
    #[serde(default)]
    attribute: Option<Attribute>,
  },
}

impl Command {
  pub fn toggle(attribute: Attribute, value: impl Into<String>) -> Self {
    Self::Toggle {
      attribute,
      value: value.into(),
    }
  }

  /// Parse the `ATTR=VALUE` shorthand used on the command line.
  /// The value is taken verbatim, surrounding whitespace included.
  pub fn parse_toggle(spec: &str) -> Option<Self> {
    let (attr, value) = spec.split_once('=')?;
    let attribute = Attribute::from_str_loose(attr)?;
    if value.is_empty() {
      return None;
    }
    Some(Self::toggle(attribute, value))
  }
}

// ---------------------------------------------------------------------------
// Output types (JSON contract: session mode)
// ---------------------------------------------------------------------------

/// Active values per attribute, sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActiveFilters {
  pub technologies: Vec<String>,
  pub difficulties: Vec<String>,
  pub skills: Vec<String>,
}

/// Snapshot of what the page currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewSummary {
  pub loaded: bool,
  pub showing: usize,
  pub total: usize,
  pub results_text: String,
  pub titles: Vec<String>,
  pub active: ActiveFilters,
}

/// Structured error output for invalid session lines.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}
