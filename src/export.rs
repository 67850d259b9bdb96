// src/export.rs
//! Delimited export of the aggregated table. Header row plus one record per
//! post; column order is the `PostRecord` field order
//! (`title,url,score,content,source`).

use std::path::Path;

use anyhow::{Context, Result};

use crate::types::DigestTable;

pub fn write_csv(table: &DigestTable, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("creating csv export at {}", path.display()))?;
    for post in table.posts() {
        wtr.serialize(post).context("serializing post record")?;
    }
    wtr.flush()
        .with_context(|| format!("flushing csv export at {}", path.display()))?;
    Ok(())
}

/// In-memory rendition of the same export, for inspection and tests.
pub fn to_csv_string(table: &DigestTable) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for post in table.posts() {
        wtr.serialize(post).context("serializing post record")?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow::anyhow!("finishing csv export: {e}"))?;
    String::from_utf8(bytes).context("csv export was not valid utf-8")
}
