//! Markup for pills, cards and the results count.
//!
//! Every record-derived string goes through `escape_html` before it lands in markup,
//! except the record path inside a card's `href`, which is appended verbatim.

use crate::config::Config;
use crate::types::{FacetPill, IncidentRecord};

pub const NO_RESULTS_TEXT: &str = "No incidents match your filters";
pub const VIEW_LINK_TEXT: &str = "View Scenario →";

/// Escape the five markup-significant characters.
pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      _ => out.push(c),
    }
  }
  out
}

pub fn results_count_text(visible: usize, total: usize) -> String {
  format!("Showing {} of {} incidents", visible, total)
}

pub fn render_pill(pill: &FacetPill) -> String {
  let class = if pill.active {
    "filter-pill active"
  } else {
    "filter-pill"
  };
  let value = escape_html(&pill.value);
  format!(
    "<button class=\"{}\" data-type=\"{}\" data-value=\"{}\">{}</button>",
    class,
    pill.attribute.as_str(),
    value,
    value
  )
}

pub fn render_pills(pills: &[FacetPill]) -> String {
  pills.iter().map(render_pill).collect()
}

pub fn render_card(record: &IncidentRecord, config: &Config) -> String {
  let mut tags = format!(
    "<span class=\"tag difficulty\">{}</span>",
    escape_html(&record.difficulty)
  );
  for tag in record.technologies.iter().chain(record.skills.iter()) {
    tags.push_str(&format!("<span class=\"tag\">{}</span>", escape_html(tag)));
  }

  format!(
    concat!(
      "<a href=\"{href}\" class=\"incident-card fade-in\" target=\"_blank\">\n",
      "  <h2>{title}</h2>\n",
      "  <p class=\"description\">{description}</p>\n",
      "  <div class=\"tags\">{tags}</div>\n",
      "  <span class=\"view-link\">{view}</span>\n",
      "</a>\n"
    ),
    href = config.scenario_url(&record.path),
    title = escape_html(&record.title),
    description = escape_html(&record.description),
    tags = tags,
    view = VIEW_LINK_TEXT,
  )
}

pub fn render_grid(records: &[&IncidentRecord], config: &Config) -> String {
  records.iter().map(|r| render_card(r, config)).collect()
}
