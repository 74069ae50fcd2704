//! Derive filter facets from the loaded records.

use std::collections::BTreeSet;

use crate::filter::FilterState;
use crate::types::{Attribute, FacetPill, IncidentRecord, DIFFICULTY_LEVELS};

/// Distinct values offered as pills, per attribute, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
  pub technologies: Vec<String>,
  pub difficulties: Vec<String>,
  pub skills: Vec<String>,
}

impl Facets {
  /// Technologies and skills: sorted union across all records.
  /// Difficulties: the fixed four levels, regardless of what records carry.
  pub fn derive(records: &[IncidentRecord]) -> Self {
    let mut technologies = BTreeSet::new();
    let mut skills = BTreeSet::new();
    for record in records {
      technologies.extend(record.technologies.iter().cloned());
      skills.extend(record.skills.iter().cloned());
    }

    Self {
      technologies: technologies.into_iter().collect(),
      difficulties: DIFFICULTY_LEVELS.iter().map(|d| d.to_string()).collect(),
      skills: skills.into_iter().collect(),
    }
  }

  pub fn values(&self, attribute: Attribute) -> &[String] {
    match attribute {
      Attribute::Technologies => &self.technologies,
      Attribute::Difficulties => &self.difficulties,
      Attribute::Skills => &self.skills,
    }
  }

  /// One pill per value, marked active when the value is selected.
  pub fn pills(&self, attribute: Attribute, filters: &FilterState) -> Vec<FacetPill> {
    self
      .values(attribute)
      .iter()
      .map(|value| FacetPill {
        attribute,
        value: value.clone(),
        active: filters.is_active(attribute, value),
      })
      .collect()
  }
}
