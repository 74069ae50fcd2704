//! In-memory page that implements `DisplayPort` and serializes to static HTML.

use std::collections::BTreeMap;

use crate::config::{Config, DEFAULT_SITE_URL};
use crate::display::{DisplayPort, Region};
use crate::render::{escape_html, NO_RESULTS_TEXT};
use crate::types::Attribute;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Content {
  Html(String),
  Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Element {
  content: Content,
  visible: bool,
}

impl Element {
  fn markup(&self) -> String {
    match &self.content {
      Content::Html(html) => html.clone(),
      Content::Text(text) => escape_html(text),
    }
  }
}

/// The hosting page: six addressable regions inside a fixed shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDocument {
  title: String,
  site_url: String,
  elements: BTreeMap<Region, Element>,
}

impl HtmlDocument {
  /// Fresh page: every region empty and visible, except `no-results`, which starts
  /// hidden and holds its placeholder text.
  pub fn new(title: impl Into<String>) -> Self {
    let elements = Region::ALL
      .iter()
      .map(|&region| {
        let element = match region {
          Region::NoResults => Element {
            content: Content::Text(NO_RESULTS_TEXT.to_string()),
            visible: false,
          },
          _ => Element {
            content: Content::Html(String::new()),
            visible: true,
          },
        };
        (region, element)
      })
      .collect();
    Self {
      title: title.into(),
      site_url: DEFAULT_SITE_URL.to_string(),
      elements,
    }
  }

  /// Fresh page titled and linked from `config`.
  pub fn from_config(config: &Config) -> Self {
    Self::new(config.page_title.clone()).with_site_url(config.site_url.clone())
  }

  pub fn with_site_url(mut self, site_url: impl Into<String>) -> Self {
    self.site_url = site_url.into();
    self
  }

  fn element(&self, region: Region) -> &Element {
    // Every region is inserted by `new`.
    &self.elements[&region]
  }

  fn element_mut(&mut self, region: Region) -> &mut Element {
    self
      .elements
      .entry(region)
      .or_insert_with(|| Element {
        content: Content::Html(String::new()),
        visible: true,
      })
  }

  /// Inner markup of a region, as a browser would report `innerHTML`.
  pub fn inner_html(&self, region: Region) -> String {
    self.element(region).markup()
  }

  pub fn is_visible(&self, region: Region) -> bool {
    self.element(region).visible
  }

  /// Serialize the whole page as a static snapshot of the current view.
  ///
  /// No script is attached: pills in the written page carry their `data-type`,
  /// `data-value` and `active` state but do nothing when clicked. Filtering happens
  /// through `Browser::dispatch` before serializing.
  pub fn to_html(&self) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str(
      "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html.push_str(&format!("    <title>{}</title>\n", escape_html(&self.title)));
    html.push_str("    <link rel=\"stylesheet\" href=\"styles.css\">\n");
    html.push_str("</head>\n<body>\n");

    html.push_str("    <header>\n        <div class=\"container\">\n");
    html.push_str("            <div class=\"header-content\">\n");
    html.push_str("                <img src=\"img/logo.png\" alt=\"Ram Ops\" class=\"logo\">\n");
    html.push_str(&format!(
      "                <a href=\"{}\" class=\"github-link\" target=\"_blank\">GitHub</a>\n",
      escape_html(&self.site_url)
    ));
    html.push_str("            </div>\n        </div>\n    </header>\n");

    html.push_str("    <main class=\"container\">\n");

    html.push_str("        <div class=\"filters\">\n");
    for attribute in Attribute::ALL {
      html.push_str("            <div class=\"filter-section\">\n");
      html.push_str(&format!("                <h3>{}</h3>\n", attribute.heading()));
      html.push_str(&format!(
        "                {}\n",
        self.region_tag(attribute.region(), "filter-pills")
      ));
      html.push_str("            </div>\n");
    }
    html.push_str("        </div>\n");

    for (region, class) in [
      (Region::ResultsCount, "results-count"),
      (Region::IncidentsGrid, "incidents-grid"),
      (Region::NoResults, "no-results"),
    ] {
      html.push_str(&format!("        {}\n", self.region_tag(region, class)));
    }

    html.push_str("    </main>\n</body>\n</html>\n");
    html
  }

  fn region_tag(&self, region: Region, class: &str) -> String {
    let element = self.element(region);
    let style = if element.visible {
      ""
    } else {
      " style=\"display: none;\""
    };
    format!(
      "<div id=\"{}\" class=\"{}\"{}>{}</div>",
      region.element_id(),
      class,
      style,
      element.markup()
    )
  }
}

impl DisplayPort for HtmlDocument {
  fn set_html(&mut self, region: Region, html: &str) {
    self.element_mut(region).content = Content::Html(html.to_string());
  }

  fn set_text(&mut self, region: Region, text: &str) {
    self.element_mut(region).content = Content::Text(text.to_string());
  }

  fn set_visible(&mut self, region: Region, visible: bool) {
    self.element_mut(region).visible = visible;
  }
}
