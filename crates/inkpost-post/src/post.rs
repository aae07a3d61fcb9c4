//! Post construction from raw documents.

use chrono::NaiveDate;
use inkpost_markdown::markdown_to_html;

use crate::date::{display_date, parse_date};
use crate::front_matter::{FrontMatter, split_front_matter};
use crate::PostError;

/// A fully parsed and rendered post.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Post {
    /// Output name without extension (`slug` key or the file stem).
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
    /// Human readable date, e.g. `March 5, 2024`.
    pub display_date: String,
    /// `summary` key or the first non-blank body line (raw markdown text).
    pub summary: String,
    /// Rendered body fragment.
    pub content_html: String,
}

/// Parse a raw post document.
///
/// `file_stem` is the document's base filename without extension and is used
/// as the slug when the header does not set one.
///
/// # Errors
///
/// Returns a [`PostError`] if the front matter is missing or malformed, a
/// required field is absent, or the date is invalid.
///
/// # Examples
///
/// ```
/// use inkpost_post::parse_post;
///
/// let post = parse_post("---\ntitle: A\ndate: 2024-03-05\n---\nHello *there*", "hello").unwrap();
/// assert_eq!(post.slug, "hello");
/// assert_eq!(post.summary, "Hello *there*");
/// assert_eq!(post.display_date, "March 5, 2024");
/// assert_eq!(post.content_html, "<p>Hello <em>there</em></p>");
/// ```
pub fn parse_post(raw: &str, file_stem: &str) -> Result<Post, PostError> {
    let (header, body) = split_front_matter(raw)?;
    let meta = FrontMatter::parse(header)?;

    let title = meta.require("title")?;
    let date_value = meta.require("date")?;

    let slug = meta.get_non_empty("slug").unwrap_or(file_stem);
    let summary = meta
        .get_non_empty("summary")
        .map_or_else(|| first_line(body), str::to_owned);

    let date = parse_date(date_value)?;
    let content_html = markdown_to_html(body);

    tracing::debug!(slug, %date, "Parsed post");

    Ok(Post {
        slug: slug.to_owned(),
        title: title.to_owned(),
        date,
        display_date: display_date(date),
        summary,
        content_html,
    })
}

/// First non-blank line of the body, trimmed (empty for an empty body).
fn first_line(body: &str) -> String {
    body.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .to_owned()
}
