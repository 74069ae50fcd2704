//! Controller: owns the records and filter state, handles commands, drives the display.

use tracing::{debug, error, info};

use crate::config::Config;
use crate::display::{DisplayPort, Region};
use crate::facets::Facets;
use crate::filter::{self, FilterState};
use crate::loader::{self, Source};
use crate::render;
use crate::types::*;

/// The incident browser. Everything it shows is a function of `records` and `filters`.
pub struct Browser<D: DisplayPort> {
  config: Config,
  display: D,
  records: Vec<IncidentRecord>,
  facets: Option<Facets>,
  filters: FilterState,
}

impl<D: DisplayPort> Browser<D> {
  pub fn new(config: Config, display: D) -> Self {
    Self {
      config,
      display,
      records: Vec::new(),
      facets: None,
      filters: FilterState::default(),
    }
  }

  pub fn with_defaults(display: D) -> Self {
    Self::new(Config::default(), display)
  }

  /// Fetch the incidents document once and load it.
  ///
  /// A failure is logged and leaves the display as it was. Returns whether loading succeeded.
  pub async fn start(&mut self, source: &Source) -> bool {
    match loader::fetch(source).await {
      Ok(records) => {
        self.load(records);
        true
      }
      Err(e) => {
        error!(source = %source, error = %e, "error loading incidents");
        false
      }
    }
  }

  /// Install the full record set, build the facet pills and render the first view.
  pub fn load(&mut self, records: Vec<IncidentRecord>) {
    let facets = Facets::derive(&records);
    info!(
      incidents = records.len(),
      technologies = facets.technologies.len(),
      skills = facets.skills.len(),
      "incidents loaded"
    );
    self.records = records;
    self.facets = Some(facets);
    for attribute in Attribute::ALL {
      self.render_pills(attribute);
    }
    self.render();
  }

  pub fn is_loaded(&self) -> bool {
    self.facets.is_some()
  }

  /// Handle one user intent. Ignored until records are loaded, since no pills exist yet.
  pub fn dispatch(&mut self, command: Command) {
    if !self.is_loaded() {
      debug!(?command, "ignoring command before load");
      return;
    }

    match command {
      Command::Toggle { attribute, value } => {
        let active = self.filters.toggle(attribute, &value);
        debug!(%attribute, %value, active, "filter toggled");
        self.render_pills(attribute);
      }
      Command::Clear { attribute: Some(attribute) } => {
        self.filters.clear(attribute);
        debug!(%attribute, "filter cleared");
        self.render_pills(attribute);
      }
      Command::Clear { attribute: None } => {
        self.filters.clear_all();
        debug!("all filters cleared");
        for attribute in Attribute::ALL {
          self.render_pills(attribute);
        }
      }
    }
    self.render();
  }

  pub fn toggle(&mut self, attribute: Attribute, value: &str) {
    self.dispatch(Command::toggle(attribute, value));
  }

  /// Records passing the current filters, in load order.
  pub fn visible(&self) -> Vec<&IncidentRecord> {
    filter::visible(&self.records, &self.filters)
  }

  pub fn filters(&self) -> &FilterState {
    &self.filters
  }

  pub fn facets(&self) -> Option<&Facets> {
    self.facets.as_ref()
  }

  pub fn display(&self) -> &D {
    &self.display
  }

  pub fn summary(&self) -> ViewSummary {
    let visible = self.visible();
    ViewSummary {
      loaded: self.is_loaded(),
      showing: visible.len(),
      total: self.records.len(),
      results_text: render::results_count_text(visible.len(), self.records.len()),
      titles: visible.iter().map(|r| r.title.clone()).collect(),
      active: self.filters.snapshot(),
    }
  }

  fn render_pills(&mut self, attribute: Attribute) {
    let Some(facets) = &self.facets else {
      return;
    };
    let pills = facets.pills(attribute, &self.filters);
    self
      .display
      .set_html(attribute.region(), &render::render_pills(&pills));
  }

  /// Recompute the visible set and redraw the count, grid and placeholder.
  fn render(&mut self) {
    let visible = filter::visible(&self.records, &self.filters);
    let total = self.records.len();
    debug!(visible = visible.len(), total, "rendering incidents");

    self.display.set_text(
      Region::ResultsCount,
      &render::results_count_text(visible.len(), total),
    );

    if visible.is_empty() {
      self.display.set_visible(Region::IncidentsGrid, false);
      self.display.set_visible(Region::NoResults, true);
      return;
    }

    self.display.set_visible(Region::IncidentsGrid, true);
    self.display.set_visible(Region::NoResults, false);
    let grid = render::render_grid(&visible, &self.config);
    self.display.set_html(Region::IncidentsGrid, &grid);
  }
}
