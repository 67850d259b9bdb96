// src/config.rs
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const ENV_PATH: &str = "DIGEST_CONFIG_PATH";

/// One source to scrape: label, fetch target, and a cap on records taken.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteDescriptor {
    pub name: String,
    pub url: String,
    #[serde(default = "default_posts_to_scrape")]
    pub posts_to_scrape: usize,
}

fn default_posts_to_scrape() -> usize {
    10
}

/// Browser-session knobs. Defaults reproduce a plain desktop Chrome profile
/// so scraped pages serve their regular markup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebDriverSettings {
    /// chromedriver endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// `WIDTH,HEIGHT` as passed to `--window-size`.
    #[serde(default = "default_window_size")]
    pub window_size: String,
    /// Bounded wait for post containers to appear, per selector.
    #[serde(default = "default_wait_timeout_secs")]
    pub wait_timeout_secs: u64,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_endpoint() -> String {
    "http://localhost:9515".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36"
        .to_string()
}

fn default_window_size() -> String {
    "1920,1080".to_string()
}

fn default_wait_timeout_secs() -> u64 {
    8
}

fn default_poll_interval_ms() -> u64 {
    250
}

impl Default for WebDriverSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            user_agent: default_user_agent(),
            window_size: default_window_size(),
            wait_timeout_secs: default_wait_timeout_secs(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

/// Fallback-selector chains, tried in order until one matches.
///
/// These are configuration rather than constants: markup drift is the most
/// likely breakage, and re-pointing a chain must not require a rebuild.
/// Defaults cover the old-layout markup first with the new-layout variant
/// as fallback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectorProfile {
    #[serde(default = "default_post_containers")]
    pub post_containers: Vec<String>,
    #[serde(default = "default_title_link")]
    pub title_link: Vec<String>,
    #[serde(default = "default_score")]
    pub score: Vec<String>,
    #[serde(default = "default_content")]
    pub content: Vec<String>,
}

fn default_post_containers() -> Vec<String> {
    vec![
        "div.thing".to_string(),
        "div[data-testid='post-container']".to_string(),
    ]
}

fn default_title_link() -> Vec<String> {
    vec![
        "a.title".to_string(),
        "a[data-click-id='body']".to_string(),
    ]
}

fn default_score() -> Vec<String> {
    vec![
        "div.score".to_string(),
        "div[data-click-id='score']".to_string(),
    ]
}

fn default_content() -> Vec<String> {
    vec![
        "div.expando, div.md, div.usertext-body".to_string(),
        "div[data-click-id='text']".to_string(),
    ]
}

impl Default for SelectorProfile {
    fn default() -> Self {
        Self {
            post_containers: default_post_containers(),
            title_link: default_title_link(),
            score: default_score(),
            content: default_content(),
        }
    }
}

/// Root configuration record for one digest run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DigestConfig {
    #[serde(default)]
    pub sites: Vec<SiteDescriptor>,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub webdriver: WebDriverSettings,
    #[serde(default)]
    pub selectors: SelectorProfile,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("data")
}

impl DigestConfig {
    /// Load from an explicit path. Supports JSON or TOML formats.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        parse_config(&content, ext.as_str())
            .with_context(|| format!("parsing config {}", path.display()))
    }

    /// Load using env var + fallbacks:
    /// 1) $DIGEST_CONFIG_PATH
    /// 2) config/digest.json
    /// 3) config/digest.toml
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_PATH) {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self::load(&pb);
            } else {
                return Err(anyhow!("DIGEST_CONFIG_PATH points to non-existent path"));
            }
        }
        let json_p = PathBuf::from("config/digest.json");
        if json_p.exists() {
            return Self::load(&json_p);
        }
        let toml_p = PathBuf::from("config/digest.toml");
        if toml_p.exists() {
            return Self::load(&toml_p);
        }
        Err(anyhow!(
            "no config found: set {ENV_PATH}, pass a path, or create config/digest.json"
        ))
    }
}

fn parse_config(s: &str, hint_ext: &str) -> Result<DigestConfig> {
    // Try JSON first if hinted or content looks like it.
    let try_json = hint_ext == "json" || s.trim_start().starts_with('{');
    if try_json {
        if let Ok(v) = serde_json::from_str(s) {
            return validate(v);
        }
    }
    if let Ok(v) = toml::from_str(s) {
        return validate(v);
    }
    // Fallback: also try JSON if not attempted.
    if !try_json {
        if let Ok(v) = serde_json::from_str(s) {
            return validate(v);
        }
    }
    Err(anyhow!("config is neither valid JSON nor valid TOML"))
}

/// `posts_to_scrape` is a positive cap; 0 would silently make a site
/// contribute nothing.
fn validate(cfg: DigestConfig) -> Result<DigestConfig> {
    for site in &cfg.sites {
        if site.posts_to_scrape == 0 {
            return Err(anyhow!(
                "site '{}': posts_to_scrape must be a positive integer",
                site.name
            ));
        }
    }
    Ok(cfg)
}
