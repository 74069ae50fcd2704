//! Active filter state and the visible-set computation.
//!
//! A record is visible iff every attribute with at least one active value matches:
//! technologies and skills match on any overlap (OR within the attribute), difficulty
//! matches on exact membership. Attributes combine with AND.

use std::collections::BTreeSet;

use crate::types::{ActiveFilters, Attribute, IncidentRecord};

/// Currently selected values per attribute. An empty set means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
  technologies: BTreeSet<String>,
  difficulties: BTreeSet<String>,
  skills: BTreeSet<String>,
}

impl FilterState {
  pub fn active(&self, attribute: Attribute) -> &BTreeSet<String> {
    match attribute {
      Attribute::Technologies => &self.technologies,
      Attribute::Difficulties => &self.difficulties,
      Attribute::Skills => &self.skills,
    }
  }

  fn active_mut(&mut self, attribute: Attribute) -> &mut BTreeSet<String> {
    match attribute {
      Attribute::Technologies => &mut self.technologies,
      Attribute::Difficulties => &mut self.difficulties,
      Attribute::Skills => &mut self.skills,
    }
  }

  /// Flip membership of `value`. Returns whether it is active afterwards.
  pub fn toggle(&mut self, attribute: Attribute, value: &str) -> bool {
    let set = self.active_mut(attribute);
    if set.remove(value) {
      false
    } else {
      set.insert(value.to_string());
      true
    }
  }

  pub fn clear(&mut self, attribute: Attribute) {
    self.active_mut(attribute).clear();
  }

  pub fn clear_all(&mut self) {
    for attribute in Attribute::ALL {
      self.clear(attribute);
    }
  }

  pub fn is_active(&self, attribute: Attribute, value: &str) -> bool {
    self.active(attribute).contains(value)
  }

  /// True when no attribute has an active value.
  pub fn is_empty(&self) -> bool {
    Attribute::ALL.iter().all(|a| self.active(*a).is_empty())
  }

  pub fn matches(&self, record: &IncidentRecord) -> bool {
    any_active(&self.technologies, &record.technologies)
      && (self.difficulties.is_empty() || self.difficulties.contains(&record.difficulty))
      && any_active(&self.skills, &record.skills)
  }

  pub fn snapshot(&self) -> ActiveFilters {
    ActiveFilters {
      technologies: self.technologies.iter().cloned().collect(),
      difficulties: self.difficulties.iter().cloned().collect(),
      skills: self.skills.iter().cloned().collect(),
    }
  }
}

fn any_active(active: &BTreeSet<String>, values: &[String]) -> bool {
  active.is_empty() || values.iter().any(|v| active.contains(v))
}

/// Records passing `filters`, in their original order.
pub fn visible<'a>(records: &'a [IncidentRecord], filters: &FilterState) -> Vec<&'a IncidentRecord> {
  records.iter().filter(|r| filters.matches(r)).collect()
}
