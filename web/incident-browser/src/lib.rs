//! Ram Ops Incident Browser: faceted filtering over the incident scenario catalogue.
//!
//! Loads `incidents.json` once, derives technology / difficulty / skill facets,
//! and re-renders the card grid whenever a facet value is toggled. Rendering goes
//! through a `DisplayPort`, so everything except the fetch runs without a browser.

pub mod browser;
pub mod config;
pub mod display;
pub mod document;
pub mod error;
pub mod facets;
pub mod filter;
pub mod loader;
pub mod render;
pub mod types;

pub use browser::Browser;
pub use config::Config;
pub use display::{DisplayPort, Region};
pub use document::HtmlDocument;
pub use error::{ConfigError, LoadError};
pub use loader::Source;
pub use types::{Attribute, Command, IncidentRecord, ViewSummary};
