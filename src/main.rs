//! Daily Digest — binary entrypoint.
//! One end-to-end run: load config, scrape every configured site in order,
//! write the dated CSV export and HTML report.
//!
//! Exit codes: 0 on success or a clean "nothing to do" early exit; 1 on
//! configuration errors or pipeline failures; 130 on interrupt.

use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use daily_digest::config::DigestConfig;
use daily_digest::pipeline;
use daily_digest::scrape::site::WebDriverScraper;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("daily_digest=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

/// Config path from argv if given, else env var + `config/` fallbacks.
fn load_config() -> anyhow::Result<DigestConfig> {
    match std::env::args().nth(1) {
        Some(p) => DigestConfig::load(&PathBuf::from(p)),
        None => DigestConfig::load_default(),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = match load_config() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = ?e, "failed to load configuration");
            return ExitCode::from(1);
        }
    };

    let scraper = WebDriverScraper::new(config.webdriver.clone(), config.selectors.clone());
    let date = chrono::Local::now().format("%Y-%m-%d").to_string();

    tokio::select! {
        res = pipeline::run_digest(&scraper, &config, &date) => match res {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!(error = ?e, "digest run failed");
                ExitCode::from(1)
            }
        },
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!("interrupted; exiting");
            ExitCode::from(130)
        }
    }
}
