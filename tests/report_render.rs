// tests/report_render.rs
use daily_digest::report::render_report;
use daily_digest::types::{DigestTable, PostRecord};

fn post(title: &str, url: &str, score: u64, content: &str, source: &str) -> PostRecord {
    PostRecord {
        title: title.to_string(),
        url: url.to_string(),
        score,
        content: content.to_string(),
        source: source.to_string(),
    }
}

#[test]
fn scraped_text_is_escaped() {
    let table = DigestTable::from_posts(vec![post(
        "<script>alert(1)</script>",
        "https://example.test/p/1",
        5,
        "a & b <i>c</i>",
        "evil<source>",
    )]);
    let html = render_report(&table, "2025-09-30");

    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("a &amp; b &lt;i&gt;c&lt;/i&gt;"));
    assert!(html.contains("evil&lt;source&gt;"));
}

#[test]
fn empty_table_renders_no_data_document() {
    let html = render_report(&DigestTable::default(), "2025-09-30");

    assert!(html.contains("No posts were scraped for this date."));
    assert!(html.contains("2025-09-30"));
    assert!(!html.contains(r#"<div class="post">"#));
}

#[test]
fn summary_counts_and_alphabetical_sources() {
    let table = DigestTable::from_posts(vec![
        post("one", "", 10, "", "zeta"),
        post("two", "", 7, "", "alpha"),
        post("three", "", 5, "", "zeta"),
    ]);
    let html = render_report(&table, "2025-09-30");

    assert!(html.contains("Total posts: <strong>3</strong>"));
    assert!(html.contains("Sources: <strong>alpha</strong>, <strong>zeta</strong>"));
}

#[test]
fn title_is_linked_only_when_url_present() {
    let table = DigestTable::from_posts(vec![
        post("linked", "https://example.test/p/1", 2, "", "a"),
        post("plain", "", 1, "", "a"),
    ]);
    let html = render_report(&table, "2025-09-30");

    assert!(html.contains(r#"href="https://example.test/p/1""#));
    assert!(html.contains(r#"<div class="title">plain</div>"#));
}

#[test]
fn unsorted_input_is_rendered_most_popular_first() {
    let table = DigestTable::from_posts(vec![
        post("low", "", 1, "", "a"),
        post("high", "", 9, "", "a"),
    ]);
    let html = render_report(&table, "2025-09-30");

    let high_at = html.find("high").expect("high rendered");
    let low_at = html.find("low").expect("low rendered");
    assert!(high_at < low_at);
}

#[test]
fn hostile_url_is_attribute_escaped() {
    let table = DigestTable::from_posts(vec![post(
        "t",
        r#"https://example.test/"><script>alert(1)</script>"#,
        1,
        "",
        "a",
    )]);
    let html = render_report(&table, "2025-09-30");

    assert!(!html.contains(r#""><script>"#));
}
