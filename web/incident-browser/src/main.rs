//! Binary entrypoint: load incidents, apply filters, write the page or run a session.
//!
//! Page mode (default): writes the serialized page after applying every `--toggle`.
//!
//! Session mode (`--session`): each stdin line is a JSON command, e.g.
//! `{"command":"toggle","attribute":"skills","value":"debug"}`. Each line produces one
//! output line, either a ViewSummary or an ErrorOutput. One summary is written right
//! after load, before any input is read.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use incident_browser::types::ErrorOutput;
use incident_browser::{config, Browser, Command, Config, HtmlDocument, Source};

/// Faceted browser over the incident scenario catalogue
#[derive(Parser, Debug)]
#[command(name = "incident-browser", version, about, long_about = None)]
struct Cli {
  /// Incidents document: file path or URL (default: incidents.json)
  #[arg(short, long)]
  source: Option<String>,

  /// Serving origin that a relative source resolves against
  #[arg(long)]
  base_url: Option<String>,

  /// Prefix for scenario links on cards
  #[arg(long)]
  repo_url: Option<String>,

  /// Page title
  #[arg(long)]
  title: Option<String>,

  /// Repository link in the page header
  #[arg(long)]
  site_url: Option<String>,

  /// Toggle a filter after load, as ATTR=VALUE (repeatable; VALUE is matched verbatim,
  /// whitespace included)
  #[arg(short, long = "toggle", value_name = "ATTR=VALUE")]
  toggles: Vec<String>,

  /// Write the page here instead of stdout
  #[arg(short, long)]
  output: Option<PathBuf>,

  /// Read JSON commands from stdin and emit one JSON view summary per line
  #[arg(long)]
  session: bool,

  /// Increase verbosity (-v, -vv)
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,

  /// Only log errors
  #[arg(short, long)]
  quiet: bool,
}

impl Cli {
  fn config(&self) -> anyhow::Result<Config> {
    let mut config = Config::from_env()?;
    if let Some(source) = &self.source {
      config.source = source.clone();
    }
    if let Some(base) = &self.base_url {
      config.base_url = Some(config::parse_base_url(base)?);
    }
    if let Some(repo) = &self.repo_url {
      config.repo_tree_url = repo.clone();
    }
    if let Some(title) = &self.title {
      config.page_title = title.clone();
    }
    if let Some(site) = &self.site_url {
      config.site_url = site.clone();
    }
    Ok(config)
  }
}

fn init_tracing(verbose: u8, quiet: bool) {
  let level = match verbose {
    0 if quiet => "error",
    0 => "info",
    1 => "debug",
    _ => "trace",
  };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(false)
    .with_writer(io::stderr)
    .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  init_tracing(cli.verbose, cli.quiet);

  let config = cli.config()?;
  let document = HtmlDocument::from_config(&config);
  let mut browser = Browser::new(config.clone(), document);

  // An unresolvable source is a load failure like any other: logged, page left empty.
  match Source::resolve(&config) {
    Ok(source) => {
      browser.start(&source).await;
    }
    Err(e) => tracing::error!(error = %e, "error loading incidents"),
  }

  for spec in &cli.toggles {
    match Command::parse_toggle(spec) {
      Some(command) => browser.dispatch(command),
      None => warn!(toggle = %spec, "ignoring malformed toggle, expected ATTR=VALUE"),
    }
  }

  if cli.session {
    let stdout = io::stdout();
    return run_session(&mut browser, io::stdin().lock(), io::BufWriter::new(stdout.lock()));
  }

  let page = browser.display().to_html();
  match &cli.output {
    Some(path) => std::fs::write(path, page)
      .with_context(|| format!("writing {}", path.display()))?,
    None => io::stdout().lock().write_all(page.as_bytes())?,
  }
  Ok(())
}

fn run_session<R: BufRead, W: Write>(
  browser: &mut Browser<HtmlDocument>,
  input: R,
  mut out: W,
) -> anyhow::Result<()> {
  serde_json::to_writer(&mut out, &browser.summary())?;
  writeln!(out)?;
  out.flush()?;

  for line in input.lines() {
    let line = line.context("reading session input")?;

    // Skip blank lines.
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    match serde_json::from_str::<Command>(trimmed) {
      Ok(command) => {
        browser.dispatch(command);
        serde_json::to_writer(&mut out, &browser.summary())?;
      }
      Err(e) => {
        let err = ErrorOutput::new(format!("json parse: {}", e)).with_field("command");
        serde_json::to_writer(&mut out, &err)?;
      }
    }
    writeln!(out)?;
    out.flush()?;
  }

  Ok(())
}
