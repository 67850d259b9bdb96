// src/scrape/site.rs
//! WebDriver-backed single-site scraper.
//!
//! Drives one fresh headless Chrome session per site, waits for post
//! containers to materialize, and extracts fields through the configured
//! fallback-selector chains. Everything here is best-effort: a page that
//! never renders, a container with no title, or a missing score node all
//! degrade locally instead of failing the run.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use thirtyfour::prelude::*;

use crate::config::{SelectorProfile, SiteDescriptor, WebDriverSettings};
use crate::score::parse_score;
use crate::scrape::SiteScraper;
use crate::types::{Extracted, PostRecord};

/// Run after connecting; hides the automation marker some layouts key on.
/// Best-effort evasion, not a security boundary.
const HIDE_WEBDRIVER_JS: &str =
    "Object.defineProperty(navigator, 'webdriver', { get: () => undefined })";

/// Upper bound on the configured container wait; also keeps the deadline
/// arithmetic safe for absurd configured values.
const MAX_WAIT_SECS: u64 = 300;

fn wait_budget(secs: u64) -> Duration {
    Duration::from_secs(secs.min(MAX_WAIT_SECS))
}

pub struct WebDriverScraper {
    settings: WebDriverSettings,
    selectors: SelectorProfile,
}

impl WebDriverScraper {
    pub fn new(settings: WebDriverSettings, selectors: SelectorProfile) -> Self {
        Self {
            settings,
            selectors,
        }
    }

    /// Fresh isolated session per invocation; options are values here,
    /// never shared process-wide state.
    async fn new_session(&self) -> Result<WebDriver> {
        let mut caps = DesiredCapabilities::chrome();
        caps.add_arg("--headless=new")?;
        caps.add_arg("--no-sandbox")?;
        caps.add_arg("--disable-dev-shm-usage")?;
        caps.add_arg("--disable-gpu")?;
        caps.add_arg(&format!("--window-size={}", self.settings.window_size))?;
        caps.add_arg(&format!("user-agent={}", self.settings.user_agent))?;
        caps.add_arg("--disable-blink-features=AutomationControlled")?;
        caps.add_experimental_option("excludeSwitches", ["enable-automation"])?;
        caps.add_experimental_option("useAutomationExtension", false)?;

        let driver = WebDriver::new(&self.settings.endpoint, caps)
            .await
            .with_context(|| {
                format!("starting webdriver session at {}", self.settings.endpoint)
            })?;

        if let Err(e) = driver.execute(HIDE_WEBDRIVER_JS, Vec::new()).await {
            tracing::debug!(error = ?e, "could not hide navigator.webdriver");
        }
        Ok(driver)
    }

    /// Poll each container selector in turn, each bounded by the configured
    /// wait. Exhausting the chain yields an empty Vec, not an error.
    async fn wait_for_posts(&self, driver: &WebDriver) -> Result<Vec<WebElement>> {
        let timeout = wait_budget(self.settings.wait_timeout_secs);
        let poll = Duration::from_millis(self.settings.poll_interval_ms.max(1));

        for sel in &self.selectors.post_containers {
            let deadline = Instant::now() + timeout;
            loop {
                let found = driver.find_all(By::Css(sel.as_str())).await?;
                if !found.is_empty() {
                    tracing::debug!(selector = %sel, count = found.len(), "post containers located");
                    return Ok(found);
                }
                if Instant::now() >= deadline {
                    tracing::debug!(selector = %sel, "no containers before timeout");
                    break;
                }
                tokio::time::sleep(poll).await;
            }
        }
        Ok(Vec::new())
    }

    /// Extract one post. `None` means no title element matched at all and
    /// the caller skips the post. Score and content failures degrade to
    /// their defaults independently of each other.
    async fn extract_post(&self, container: &WebElement, source: &str) -> Option<PostRecord> {
        let link = first_match(container, &self.selectors.title_link).await?;
        let title = match link.text().await {
            Ok(t) => t.trim().to_string(),
            Err(e) => {
                tracing::debug!(error = ?e, "title element matched but text read failed");
                String::new()
            }
        };
        let url = link.attr("href").await.ok().flatten().unwrap_or_default();

        let score_text = text_via_chain(container, &self.selectors.score).await;
        let score = parse_score(Some(score_text.into_value().as_str()));

        let content = text_via_chain(container, &self.selectors.content)
            .await
            .into_value();

        Some(PostRecord {
            title,
            url,
            score,
            content,
            source: source.to_string(),
        })
    }

    async fn scrape_with(
        &self,
        driver: &WebDriver,
        site: &SiteDescriptor,
    ) -> Result<Vec<PostRecord>> {
        if let Err(e) = driver.goto(&site.url).await {
            tracing::warn!(error = ?e, site = %site.name, url = %site.url, "failed to load page");
            return Ok(Vec::new());
        }

        let containers = self.wait_for_posts(driver).await?;
        if containers.is_empty() {
            tracing::warn!(site = %site.name, "no post containers matched any selector");
            return Ok(Vec::new());
        }

        // On-page order is preserved; a post without a title is skipped
        // without aborting the site.
        let mut posts = Vec::new();
        for (idx, container) in containers.iter().take(site.posts_to_scrape).enumerate() {
            match self.extract_post(container, &site.name).await {
                Some(post) => posts.push(post),
                None => {
                    tracing::warn!(site = %site.name, index = idx, "no title element matched; skipping post");
                }
            }
        }
        Ok(posts)
    }
}

#[async_trait::async_trait]
impl SiteScraper for WebDriverScraper {
    async fn scrape_site(&self, site: &SiteDescriptor) -> Result<Vec<PostRecord>> {
        let driver = self.new_session().await?;
        // quit() must run regardless of the scrape outcome.
        let result = self.scrape_with(&driver, site).await;
        if let Err(e) = driver.quit().await {
            tracing::warn!(error = ?e, site = %site.name, "browser session teardown failed");
        }
        result
    }
}

/// Walk a fallback-selector chain and return the first matching element.
async fn first_match(root: &WebElement, chain: &[String]) -> Option<WebElement> {
    for sel in chain {
        if let Ok(el) = root.find(By::Css(sel.as_str())).await {
            return Some(el);
        }
    }
    None
}

/// Chain lookup plus text read, with the documented empty-string default.
async fn text_via_chain(root: &WebElement, chain: &[String]) -> Extracted<String> {
    match first_match(root, chain).await {
        Some(el) => match el.text().await {
            Ok(t) => Extracted::Found(t.trim().to_string()),
            Err(e) => {
                tracing::debug!(error = ?e, "element matched but text read failed");
                Extracted::Defaulted(String::new())
            }
        },
        None => Extracted::Defaulted(String::new()),
    }
}
