// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod config;
pub mod export;
pub mod pipeline;
pub mod report;
pub mod score;
pub mod scrape;
pub mod types;

// ---- Re-exports for stable public API ----
pub use crate::config::{DigestConfig, SelectorProfile, SiteDescriptor, WebDriverSettings};
pub use crate::pipeline::{run_digest, RunOutcome};
pub use crate::scrape::{scrape_all_sites, SiteScraper};
pub use crate::types::{DigestTable, Extracted, PostRecord};
