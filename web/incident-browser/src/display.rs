//! Rendering capability the controller draws into.
//!
//! The hosting page provides six elements; `Region` names them and a `DisplayPort`
//! implementation maps each to whatever backs it (a DOM, an in-memory document, a test
//! recorder).

/// One of the page elements the browser writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
  TechFilters,
  DifficultyFilters,
  SkillFilters,
  IncidentsGrid,
  NoResults,
  ResultsCount,
}

impl Region {
  pub const ALL: [Region; 6] = [
    Self::TechFilters,
    Self::DifficultyFilters,
    Self::SkillFilters,
    Self::IncidentsGrid,
    Self::NoResults,
    Self::ResultsCount,
  ];

  /// Element id in the hosting page.
  pub fn element_id(self) -> &'static str {
    match self {
      Self::TechFilters => "tech-filters",
      Self::DifficultyFilters => "difficulty-filters",
      Self::SkillFilters => "skill-filters",
      Self::IncidentsGrid => "incidents-grid",
      Self::NoResults => "no-results",
      Self::ResultsCount => "results-count",
    }
  }
}

/// Write access to the page regions.
///
/// `set_html` receives markup that is already escaped; `set_text` receives plain text
/// that the implementation must treat as text, never as markup.
pub trait DisplayPort {
  fn set_html(&mut self, region: Region, html: &str);
  fn set_text(&mut self, region: Region, text: &str);
  fn set_visible(&mut self, region: Region, visible: bool);
}
