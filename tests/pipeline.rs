// tests/pipeline.rs
// Driver-level behavior: clean early exits write nothing, successful runs
// write both dated artifacts.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use daily_digest::config::{DigestConfig, SiteDescriptor};
use daily_digest::pipeline::{run_digest, RunOutcome};
use daily_digest::types::PostRecord;
use daily_digest::SiteScraper;

struct CannedScraper {
    rows: HashMap<String, Vec<PostRecord>>,
}

#[async_trait]
impl SiteScraper for CannedScraper {
    async fn scrape_site(&self, site: &SiteDescriptor) -> Result<Vec<PostRecord>> {
        Ok(self.rows.get(&site.name).cloned().unwrap_or_default())
    }
}

fn site(name: &str) -> SiteDescriptor {
    SiteDescriptor {
        name: name.to_string(),
        url: format!("https://example.test/{name}"),
        posts_to_scrape: 10,
    }
}

fn post(title: &str, score: u64, source: &str) -> PostRecord {
    PostRecord {
        title: title.to_string(),
        url: format!("https://example.test/p/{title}"),
        score,
        content: String::new(),
        source: source.to_string(),
    }
}

fn config_with(sites: Vec<SiteDescriptor>, output_dir: std::path::PathBuf) -> DigestConfig {
    DigestConfig {
        sites,
        output_dir,
        ..DigestConfig::default()
    }
}

#[tokio::test]
async fn empty_site_list_is_a_clean_no_op() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("out");
    let scraper = CannedScraper {
        rows: HashMap::new(),
    };

    let outcome = run_digest(&scraper, &config_with(vec![], out.clone()), "2025-09-30")
        .await
        .unwrap();

    assert_eq!(outcome, RunOutcome::NothingToDo);
    // Nothing is written; the output directory is not even created.
    assert!(!out.exists());
}

#[tokio::test]
async fn all_empty_scrape_writes_no_files() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("out");
    let scraper = CannedScraper {
        rows: HashMap::new(),
    };

    let outcome = run_digest(
        &scraper,
        &config_with(vec![site("a"), site("b")], out.clone()),
        "2025-09-30",
    )
    .await
    .unwrap();

    assert_eq!(outcome, RunOutcome::NothingToDo);
    let entries: Vec<_> = std::fs::read_dir(&out).unwrap().collect();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn successful_run_writes_dated_artifacts() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("out");
    let mut rows = HashMap::new();
    rows.insert(
        "a".to_string(),
        vec![post("x", 9, "a"), post("y", 4, "a")],
    );
    let scraper = CannedScraper { rows };

    let outcome = run_digest(
        &scraper,
        &config_with(vec![site("a")], out.clone()),
        "2025-09-30",
    )
    .await
    .unwrap();

    let RunOutcome::Wrote {
        csv_path,
        html_path,
        rows,
    } = outcome
    else {
        panic!("expected artifacts to be written");
    };
    assert_eq!(rows, 2);
    assert_eq!(csv_path, out.join("2025-09-30.csv"));
    assert_eq!(html_path, out.join("2025-09-30.html"));

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv.lines().count(), 3); // header + 2 rows

    let html = std::fs::read_to_string(&html_path).unwrap();
    assert!(html.contains("Total posts: <strong>2</strong>"));
}
