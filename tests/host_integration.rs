//! End-to-end host tests: config file → command line → engine → rendered text.
//!
//! A canned transport replaces the network, so these run offline.

use searchtruth::cli::{self, Command};
use searchtruth::{AppConfig, AppError};
use searchtruth_engine::{Engine, FetchRequest, SearchError, Transport};
use std::collections::HashMap;

struct SiteStub {
    pages: HashMap<&'static str, &'static str>,
}

impl SiteStub {
    fn new(pages: &[(&'static str, &'static str)]) -> Self {
        Self {
            pages: pages.iter().copied().collect(),
        }
    }
}

impl Transport for SiteStub {
    async fn get(&self, request: &FetchRequest) -> Result<String, SearchError> {
        self.pages
            .get(request.path)
            .map(|body| (*body).to_owned())
            .ok_or_else(|| SearchError::Http("HTTP status 404 Not Found".into()))
    }
}

const HADITH_PAGE: &str = r#"<html><body>
<table border="0"><tr><td>Narrated Abu Huraira: The Prophet said, "Fasting is a shield."</td></tr></table>
<table border="0"><tr><td>Narrated Sahl: Those who observe fasting enter through Ar-Raiyan.</td></tr></table>
</body></html>"#;

fn args(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_owned).collect()
}

#[tokio::test]
async fn configured_limit_caps_rendered_results() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[limits]\nhadith_results = 1\n").expect("write");

    let invocation = cli::parse_args(args(&format!(
        "--config {} hadith fasting --collection 2",
        path.display()
    )))
    .expect("parse");
    let config = AppConfig::load(invocation.config_path.as_deref()).expect("config");
    let engine = Engine::new(SiteStub::new(&[("/searchHadith.php", HADITH_PAGE)]));

    let text = cli::execute(&engine, &invocation, &config)
        .await
        .expect("execute");

    assert!(text.contains("Collection: Sahih Muslim"));
    assert!(text.contains("1. Narrated Abu Huraira"));
    assert!(!text.contains("2. "));
    assert!(text.ends_with("Showing 1 results"));
}

#[tokio::test]
async fn unreachable_source_prints_sentinel_not_error() {
    let invocation = cli::parse_args(args("dictionary book")).expect("parse");
    let engine = Engine::new(SiteStub::new(&[]));
    let text = cli::execute(&engine, &invocation, &AppConfig::default())
        .await
        .expect("execute");
    assert_eq!(
        text,
        "Unable to access dictionary at the moment. Please try again later."
    );
}

#[tokio::test]
async fn not_found_prints_suggestions() {
    let invocation = cli::parse_args(args("hadith zzzznotfound")).expect("parse");
    let engine = Engine::new(SiteStub::new(&[("/searchHadith.php", HADITH_PAGE)]));
    let text = cli::execute(&engine, &invocation, &AppConfig::default())
        .await
        .expect("execute");
    assert!(text.starts_with("No hadith found for 'zzzznotfound' in Sahih Bukhari"));
    assert!(text.contains("Suggestions:"));
}

#[test]
fn missing_explicit_config_is_io_error() {
    let invocation = cli::parse_args(args("--config /nonexistent/st.toml countries")).expect("parse");
    assert_eq!(invocation.command, Command::Countries);
    assert!(matches!(
        AppConfig::load(invocation.config_path.as_deref()),
        Err(AppError::Io(_))
    ));
}
