// src/types.rs
use std::collections::BTreeSet;

/// One scraped item of content, normalized across site layouts.
/// Field order doubles as the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PostRecord {
    pub title: String,
    pub url: String,   // absolute link; empty when the anchor had no href
    pub score: u64,    // 0 when the score text was missing or unparseable
    pub content: String,
    pub source: String, // copied from the owning SiteDescriptor's name
}

/// Outcome of a fallback-selector chain for one field.
///
/// `Found` means some selector in the chain matched and produced the value;
/// `Defaulted` means the chain was exhausted and the field's documented
/// default was applied. Callers that only care about the value use
/// [`Extracted::into_value`]; tests assert on provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extracted<T> {
    Found(T),
    Defaulted(T),
}

impl<T> Extracted<T> {
    pub fn into_value(self) -> T {
        match self {
            Extracted::Found(v) | Extracted::Defaulted(v) => v,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Extracted::Found(_))
    }
}

/// The full ordered collection of posts for one run.
///
/// Built entirely in memory before any output is produced. After
/// [`DigestTable::sort_by_score_desc`] the rows are ordered by descending
/// score; ties keep their insertion order (stable sort).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigestTable {
    posts: Vec<PostRecord>,
}

impl DigestTable {
    pub fn from_posts(posts: Vec<PostRecord>) -> Self {
        Self { posts }
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn posts(&self) -> &[PostRecord] {
        &self.posts
    }

    /// Distinct source labels, alphabetically ordered.
    pub fn sources(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.posts.iter().map(|p| p.source.as_str()).collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// Most popular first. Stable, so equal scores keep insertion order.
    pub fn sort_by_score_desc(&mut self) {
        self.posts.sort_by(|a, b| b.score.cmp(&a.score));
    }
}
