// src/pipeline.rs
//! One end-to-end digest run, separated from the binary so the early-exit
//! and output decisions are testable without a process boundary.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::DigestConfig;
use crate::export;
use crate::report::render_report;
use crate::scrape::{scrape_all_sites, SiteScraper};

/// What a run produced. `NothingToDo` covers both clean early exits: an
/// empty configured site list and an all-empty scrape. Neither writes files.
#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    NothingToDo,
    Wrote {
        csv_path: PathBuf,
        html_path: PathBuf,
        rows: usize,
    },
}

pub async fn run_digest<S: SiteScraper + ?Sized>(
    scraper: &S,
    config: &DigestConfig,
    date_label: &str,
) -> Result<RunOutcome> {
    if config.sites.is_empty() {
        tracing::info!("no sites configured; nothing to do");
        return Ok(RunOutcome::NothingToDo);
    }

    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("creating output directory {}", config.output_dir.display())
    })?;

    let table = scrape_all_sites(scraper, &config.sites).await;
    if table.is_empty() {
        tracing::info!("no posts scraped from any site; skipping output");
        return Ok(RunOutcome::NothingToDo);
    }

    let csv_path = config.output_dir.join(format!("{date_label}.csv"));
    let html_path = config.output_dir.join(format!("{date_label}.html"));

    export::write_csv(&table, &csv_path)?;
    tracing::info!(path = %csv_path.display(), rows = table.len(), "csv export written");

    let html = render_report(&table, date_label);
    std::fs::write(&html_path, html)
        .with_context(|| format!("writing report to {}", html_path.display()))?;
    tracing::info!(path = %html_path.display(), "html report written");

    Ok(RunOutcome::Wrote {
        csv_path,
        html_path,
        rows: table.len(),
    })
}
