// src/report.rs
//! Self-contained HTML report: inline styling, no external assets, one card
//! per post. Every scraped field is escaped before embedding; the input
//! originates from untrusted pages, so this is injection prevention, not
//! styling.

use std::borrow::Cow;

use crate::types::DigestTable;

const STYLES: &str = r#"
    <style>
      body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial; margin: 24px; color: #111;}
      .container { max-width: 1100px; margin: 0 auto; }
      h1 { font-size: 24px; margin-bottom: 6px; }
      .meta { color: #444; margin-bottom: 18px; }
      .post { border-radius: 8px; padding: 12px; margin-bottom: 12px; box-shadow: 0 1px 3px rgba(0,0,0,0.06); background: #fff; }
      .post .title { font-weight: 600; font-size: 16px; margin-bottom: 6px; }
      .post .meta { color: #666; font-size: 13px; margin-bottom: 8px; }
      .post .content { white-space: pre-wrap; color: #222; }
      .link { color: #1a0dab; text-decoration: none; }
      .small { font-size: 13px; color: #666; }
      .no-data { padding: 24px; background:#fff3cd; border-radius:8px; }
    </style>
"#;

fn esc(s: &str) -> Cow<'_, str> {
    html_escape::encode_text(s)
}

fn esc_attr(s: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(s)
}

/// Render the digest for one run. An empty table produces a minimal
/// "no data" document carrying only the header and date.
pub fn render_report(table: &DigestTable, date_label: &str) -> String {
    let header = format!("Daily Digest — {}", esc(date_label));

    let body = if table.is_empty() {
        format!(
            r#"<div class="container">
  <h1>{header}</h1>
  <div class="no-data">
    <p>No posts were scraped for this date.</p>
  </div>
</div>"#
        )
    } else {
        // Defensive re-sort; idempotent given the aggregator's invariant.
        let mut sorted = table.clone();
        sorted.sort_by_score_desc();

        let mut summary = format!(
            "<p>Total posts: <strong>{}</strong></p>",
            sorted.len()
        );
        let sources = sorted.sources();
        if !sources.is_empty() {
            let joined = sources
                .iter()
                .map(|s| format!("<strong>{}</strong>", esc(s)))
                .collect::<Vec<_>>()
                .join(", ");
            summary.push_str(&format!("<p>Sources: {joined}</p>"));
        }

        let mut cards = String::new();
        for post in sorted.posts() {
            let title = esc(&post.title);
            let title_html = if post.url.is_empty() {
                title.into_owned()
            } else {
                format!(
                    r#"<a class="link" href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                    esc_attr(&post.url),
                    title
                )
            };
            cards.push_str(&format!(
                r#"<div class="post">
  <div class="title">{title_html}</div>
  <div class="meta small">Score: <strong>{}</strong> &nbsp;|&nbsp; Source: <strong>{}</strong></div>
  <div class="content">{}</div>
</div>
"#,
                post.score,
                esc(&post.source),
                esc(&post.content)
            ));
        }

        format!(
            r#"<div class="container">
  <h1>{header}</h1>
  <div class="meta">{summary}</div>
  {cards}
</div>"#
        )
    };

    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>{header}</title>{STYLES}</head><body>{body}</body></html>"
    )
}
