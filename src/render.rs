//! HTML digest rendering.
//!
//! The document is assembled from fixed template fragments. Every value that
//! originates from the registry goes through [`html_escape`] before it is
//! interpolated, whether it lands in element text or in an attribute.

use chrono::NaiveDate;

use hubdigest_types::{Category, Digest, ItemSummary};

/// Maximum number of items rendered per category.
pub const TOP_N: usize = 10;

/// Title shared by the subject line and the page heading.
const TITLE: &str = "Hugging Face Daily Updates";

const HEADER: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
  body { font-family: Arial, sans-serif; }
  .container { padding: 20px; }
  .item { border-bottom: 1px solid #eee; padding: 10px 0; }
  .title { font-size: 18px; font-weight: bold; color: #333; }
  .meta { font-size: 12px; color: #666; }
  a { color: #007bff; text-decoration: none; }
</style>
</head>
<body>
<div class="container">
"#;

const FOOTER: &str = "</div>\n</body>\n</html>\n";

/// Subject line for the digest sent on `date`.
pub fn subject(date: NaiveDate) -> String {
    format!("{} - {}", TITLE, date.format("%Y-%m-%d"))
}

/// Render the digest for one run.
///
/// `date` is the local calendar date embedded in the subject. A section is
/// left out when its list is empty; deciding whether an all-empty digest is
/// worth sending is up to the caller.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use hubdigest::render::render;
///
/// let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// let digest = render(&[], &[], date);
/// assert_eq!(digest.subject, "Hugging Face Daily Updates - 2024-05-01");
/// ```
pub fn render(models: &[ItemSummary], datasets: &[ItemSummary], date: NaiveDate) -> Digest {
    let mut html = String::from(HEADER);
    html.push_str(&format!("<h2>{}</h2>\n", TITLE));

    render_section(&mut html, Category::Model, models);
    render_section(&mut html, Category::Dataset, datasets);

    html.push_str(FOOTER);

    Digest::new(subject(date), html)
}

fn render_section(html: &mut String, category: Category, items: &[ItemSummary]) {
    if items.is_empty() {
        return;
    }

    html.push_str(&format!("<h3>{}</h3>\n", category.heading()));
    for item in items.iter().take(TOP_N) {
        render_item(html, item);
    }
}

fn render_item(html: &mut String, item: &ItemSummary) {
    html.push_str("<div class=\"item\">\n");
    html.push_str(&format!(
        "  <div class=\"title\"><a href=\"{}\">{}</a></div>\n",
        html_escape(&item.url),
        html_escape(&item.id)
    ));
    html.push_str(&format!(
        "  <div class=\"meta\">Likes: {} | Downloads: {} | Created: {}</div>\n",
        item.likes,
        item.downloads,
        item.created_at.format("%Y-%m-%d %H:%M")
    ));
    html.push_str("</div>\n");
}

/// Escape text for safe use in HTML element content and quoted attributes.
pub fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
