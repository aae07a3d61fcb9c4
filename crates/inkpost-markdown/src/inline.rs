//! Inline formatting for a single line of text.
//!
//! Rendering runs as a fixed sequence of stages:
//!
//! 1. Links `[label](url)` are rendered (label recursively) and replaced by tokens
//! 2. The remaining text is HTML-escaped
//! 3. Code spans are rendered and replaced by tokens
//! 4. Bold `**text**`
//! 5. Italic `*text*`
//! 6. Tokens are restored
//!
//! Tokens come from a [`PlaceholderTable`] owned by the render call, so markup
//! produced by an early stage is never escaped or re-formatted by a later one.
//! Link labels go through the same stages and share the table.

use std::sync::LazyLock;

use regex::Regex;

use crate::escape::escape_html;
use crate::html;
use crate::placeholder::{PlaceholderTable, protect_token_chars};

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").unwrap());
static CODE_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());

/// Render one line of markdown text as HTML.
///
/// The input must not contain newlines. Unbalanced markers are kept as
/// literal characters. The private-use characters U+E000 and U+E001 delimit
/// internal tokens, so occurrences in the input are emitted as the character
/// references `&#xE000;` and `&#xE001;`.
///
/// # Examples
///
/// ```
/// use inkpost_markdown::render_inline;
///
/// assert_eq!(
///     render_inline("**[docs](https://x.test)** & more"),
///     r#"<strong><a href="https://x.test" target="_blank" rel="noopener">docs</a></strong> &amp; more"#
/// );
/// ```
pub fn render_inline(text: &str) -> String {
    let mut table = PlaceholderTable::new();
    let text = protect_token_chars(text, &mut table);
    let mut html = render_stages(&text, &mut table);
    table.restore(&mut html);
    html
}

/// Run the formatting stages, leaving tokens in place.
fn render_stages(text: &str, table: &mut PlaceholderTable) -> String {
    let text = extract_links(text, table);
    let text = escape_html(&text);
    let text = render_code_spans(&text, table);
    let text = render_bold(&text);
    render_italic(&text)
}

/// Replace `[label](url)` spans with tokens for fully rendered anchors.
fn extract_links(text: &str, table: &mut PlaceholderTable) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in LINK_RE.captures_iter(text) {
        let full_match = caps.get(0).unwrap();
        let label = caps.get(1).unwrap().as_str();
        let url = caps.get(2).unwrap().as_str();

        let label_html = render_stages(label, table);
        let mut anchor = String::new();
        html::external_link(url, &label_html, &mut anchor);

        out.push_str(&text[last..full_match.start()]);
        out.push_str(&table.insert(anchor));
        last = full_match.end();
    }
    out.push_str(&text[last..]);
    out
}

/// Replace `` `code` `` spans with tokens for `<code>` elements.
///
/// The input is already escaped, so span content is used as is.
fn render_code_spans(text: &str, table: &mut PlaceholderTable) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in CODE_SPAN_RE.captures_iter(text) {
        let full_match = caps.get(0).unwrap();
        let content = caps.get(1).unwrap().as_str();

        out.push_str(&text[last..full_match.start()]);
        out.push_str(&table.insert(format!("<code>{content}</code>")));
        last = full_match.end();
    }
    out.push_str(&text[last..]);
    out
}

fn render_bold(text: &str) -> String {
    BOLD_RE
        .replace_all(text, "<strong>${1}</strong>")
        .into_owned()
}

/// Render `*text*` as `<em>`.
///
/// A span opens at a `*` not preceded by `*`, runs to the next `*`, and only
/// matches if that closing `*` is not followed by another `*` and the content
/// is non-empty. Neighbour checks look at the text as it was before this
/// stage. Scanning resumes right after each match.
fn render_italic(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'*'
            && (i == 0 || bytes[i - 1] != b'*')
            && let Some(offset) = text[i + 1..].find('*')
        {
            let close = i + 1 + offset;
            let followed_by_star = bytes.get(close + 1) == Some(&b'*');
            if offset > 0 && !followed_by_star {
                out.push_str(&text[copied..i]);
                out.push_str("<em>");
                out.push_str(&text[i + 1..close]);
                out.push_str("</em>");
                i = close + 1;
                copied = i;
                continue;
            }
        }
        i += 1;
    }

    out.push_str(&text[copied..]);
    out
}
