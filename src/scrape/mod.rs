// src/scrape/mod.rs
pub mod site;

use crate::config::SiteDescriptor;
use crate::types::{DigestTable, PostRecord};
use anyhow::Result;

/// Seam between the aggregation pipeline and the browser-driving scraper,
/// so the pipeline (and its tests) can run without a live WebDriver.
#[async_trait::async_trait]
pub trait SiteScraper {
    /// Scrape one site. An empty Vec means "nothing usable on the page";
    /// an Err means the scrape itself could not run (e.g. no session).
    /// Either way the caller treats the site as contributing nothing.
    async fn scrape_site(&self, site: &SiteDescriptor) -> Result<Vec<PostRecord>>;
}

/// Scrape every configured site strictly in order and fold the results into
/// one table, most popular first.
///
/// Partial-failure tolerant: a site that errors or yields nothing is logged
/// and skipped, never aborting the run. If every site comes back empty the
/// returned table is empty, which the caller must treat as "no output to
/// produce".
pub async fn scrape_all_sites<S: SiteScraper + ?Sized>(
    scraper: &S,
    sites: &[SiteDescriptor],
) -> DigestTable {
    let mut all_posts: Vec<PostRecord> = Vec::new();

    for site in sites {
        tracing::info!(site = %site.name, url = %site.url, "scraping site");
        match scraper.scrape_site(site).await {
            Ok(posts) if posts.is_empty() => {
                tracing::info!(site = %site.name, "no posts scraped");
            }
            Ok(mut posts) => {
                tracing::info!(site = %site.name, count = posts.len(), "site scraped");
                all_posts.append(&mut posts);
            }
            Err(e) => {
                tracing::warn!(error = ?e, site = %site.name, "site scrape failed; continuing");
            }
        }
    }

    let mut table = DigestTable::from_posts(all_posts);
    table.sort_by_score_desc();
    table
}
