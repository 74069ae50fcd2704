//! Integration tests for the incident browser.

use incident_browser::loader;
use incident_browser::{
  Attribute, Browser, Command, Config, HtmlDocument, IncidentRecord, LoadError, Region, Source,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const FIXTURE: &str = r#"[
  {"id": "a", "path": "a", "title": "T1", "description": "first", "difficulty": "Beginner",
   "technologies": ["Go"], "skills": ["debug"]},
  {"id": "b", "path": "b", "title": "T2", "description": "second", "difficulty": "Advanced",
   "technologies": ["Rust"], "skills": ["debug"]}
]"#;

fn fixture_records() -> Vec<IncidentRecord> {
  serde_json::from_str(FIXTURE).unwrap()
}

fn loaded_browser() -> Browser<HtmlDocument> {
  let mut browser = Browser::with_defaults(HtmlDocument::new("Ram Ops"));
  browser.load(fixture_records());
  browser
}

fn visible_titles(browser: &Browser<HtmlDocument>) -> Vec<String> {
  browser.visible().iter().map(|r| r.title.clone()).collect()
}

/// Serve `body` once over HTTP/1.1 on a loopback port and return the base URL.
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  tokio::spawn(async move {
    let (mut socket, _) = listener.accept().await.unwrap();
    let mut buf = vec![0u8; 4096];
    let mut request = Vec::new();
    loop {
      let n = socket.read(&mut buf).await.unwrap();
      if n == 0 {
        break;
      }
      request.extend_from_slice(&buf[..n]);
      if request.windows(4).any(|w| w == b"\r\n\r\n") {
        break;
      }
    }
    let response = format!(
      "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
      status_line,
      body.len(),
      body
    );
    socket.write_all(response.as_bytes()).await.unwrap();
    let _ = socket.shutdown().await;
  });
  format!("http://{}/docs/", addr)
}

#[test]
fn end_to_end_filter_combinations() {
  let mut browser = loaded_browser();

  browser.toggle(Attribute::Technologies, "Go");
  assert_eq!(visible_titles(&browser), vec!["T1"]);
  browser.toggle(Attribute::Technologies, "Go");

  browser.toggle(Attribute::Skills, "debug");
  assert_eq!(visible_titles(&browser), vec!["T1", "T2"]);

  browser.toggle(Attribute::Difficulties, "Advanced");
  assert_eq!(visible_titles(&browser), vec!["T2"]);
}

#[test]
fn page_reflects_filter_state() {
  let mut browser = loaded_browser();
  browser.dispatch(Command::toggle(Attribute::Technologies, "Rust"));

  let doc = browser.display();
  assert_eq!(doc.inner_html(Region::ResultsCount), "Showing 1 of 2 incidents");
  assert!(doc.is_visible(Region::IncidentsGrid));
  assert!(!doc.is_visible(Region::NoResults));

  let html = doc.to_html();
  assert!(html.contains("href=\"https://github.com/khbarkar/openRam/tree/main/b\""));
  assert!(!html.contains("tree/main/a\""));
  assert!(html.contains("data-type=\"technologies\" data-value=\"Rust\">Rust</button>"));
  assert!(html.contains("<button class=\"filter-pill\" data-type=\"difficulties\" data-value=\"Not Rated\">Not Rated</button>"));
}

#[test]
fn no_match_shows_placeholder_only() {
  let mut browser = loaded_browser();
  browser.toggle(Attribute::Technologies, "Go");
  browser.toggle(Attribute::Difficulties, "Advanced");

  let doc = browser.display();
  assert!(!doc.is_visible(Region::IncidentsGrid));
  assert!(doc.is_visible(Region::NoResults));
  assert!(doc
    .to_html()
    .contains("<div id=\"no-results\" class=\"no-results\">No incidents match your filters</div>"));
}

#[test]
fn injected_markup_is_rendered_as_text() {
  let records: Vec<IncidentRecord> = serde_json::from_str(
    r#"[{"path": "x", "title": "<img src=x onerror=alert(1)>", "description": "a & b",
         "difficulty": "Beginner", "technologies": ["<b>"], "skills": []}]"#,
  )
  .unwrap();
  let mut browser = Browser::with_defaults(HtmlDocument::new("t"));
  browser.load(records);

  let doc = browser.display();
  let html = [Region::IncidentsGrid, Region::TechFilters]
    .iter()
    .map(|r| doc.inner_html(*r))
    .collect::<String>();
  assert!(!html.contains("<img"));
  assert!(!html.contains("<b>"));
  assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
  assert!(html.contains("a &amp; b"));
}

#[test]
fn custom_repo_url_is_used_for_card_links() {
  let config = Config {
    repo_tree_url: "https://git.example.org/ops/tree/dev/".into(),
    ..Config::default()
  };
  let mut browser = Browser::new(config, HtmlDocument::new("t"));
  browser.load(fixture_records());
  assert!(browser
    .display()
    .inner_html(Region::IncidentsGrid)
    .contains("href=\"https://git.example.org/ops/tree/dev/a\""));
}

#[tokio::test]
async fn start_from_file_source() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("incidents.json");
  std::fs::write(&path, FIXTURE).unwrap();

  let mut browser = Browser::with_defaults(HtmlDocument::new("t"));
  assert!(browser.start(&Source::File(path)).await);
  assert_eq!(browser.summary().total, 2);
  assert_eq!(browser.facets().unwrap().technologies, vec!["Go", "Rust"]);
}

#[tokio::test]
async fn malformed_file_leaves_page_empty() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("incidents.json");
  std::fs::write(&path, "{ not json").unwrap();

  let mut browser = Browser::with_defaults(HtmlDocument::new("t"));
  let pristine = browser.display().clone();
  assert!(!browser.start(&Source::File(path)).await);
  assert_eq!(browser.display(), &pristine);

  // Commands after a failed load are ignored.
  browser.toggle(Attribute::Skills, "debug");
  assert!(browser.filters().is_empty());
}

#[tokio::test]
async fn fetch_relative_source_over_http() {
  let base = serve_once("HTTP/1.1 200 OK", FIXTURE).await;
  let config = Config {
    base_url: Some(base.parse().unwrap()),
    ..Config::default()
  };
  let source = Source::resolve(&config).unwrap();
  assert!(source.to_string().ends_with("/docs/incidents.json"));

  let records = loader::fetch(&source).await.unwrap();
  assert_eq!(records, fixture_records());
}

#[tokio::test]
async fn http_error_status_is_a_load_failure() {
  let base = serve_once("HTTP/1.1 404 Not Found", "missing").await;
  let config = Config {
    base_url: Some(base.parse().unwrap()),
    ..Config::default()
  };
  let source = Source::resolve(&config).unwrap();
  let err = loader::fetch(&source).await.unwrap_err();
  assert!(matches!(err, LoadError::Status { status: 404, .. }), "{}", err);
}

#[test]
fn json_commands_drive_the_controller() {
  let lines = [
    r#"{"command":"toggle","attribute":"technology","value":"Go"}"#,
    r#"{"command":"clear","attribute":"technologies"}"#,
  ];
  let mut browser = loaded_browser();
  let mut showing = Vec::new();
  for line in lines {
    let command: Command = serde_json::from_str(line).unwrap();
    browser.dispatch(command);
    showing.push(browser.summary().showing);
  }
  assert_eq!(showing, vec![1, 2]);

  let json = serde_json::to_value(browser.summary()).unwrap();
  assert_eq!(json["results_text"], "Showing 2 of 2 incidents");
  assert_eq!(json["active"]["technologies"], serde_json::json!([]));
}
