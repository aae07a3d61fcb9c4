//! HTML fragment writers used by the block parser.

use std::fmt::Write;

use crate::escape::escape_html;

/// Write a fenced code block.
///
/// The whole block is escaped as one unit. The `language-*` class is only
/// emitted when a language tag is present.
pub(crate) fn code_block(lang: &str, content: &str, out: &mut String) {
    if lang.is_empty() {
        let _ = write!(out, "<pre><code>{}</code></pre>", escape_html(content));
    } else {
        let _ = write!(
            out,
            r#"<pre><code class="language-{}">{}</code></pre>"#,
            escape_html(lang),
            escape_html(content)
        );
    }
}

/// Write a heading element (`level` is 1 to 3).
pub(crate) fn heading(level: u8, inner_html: &str, out: &mut String) {
    let _ = write!(out, "<h{level}>{inner_html}</h{level}>");
}

/// Write an anchor that opens in a new browsing context.
pub(crate) fn external_link(href: &str, label_html: &str, out: &mut String) {
    let _ = write!(
        out,
        r#"<a href="{}" target="_blank" rel="noopener">{label_html}</a>"#,
        escape_html(href)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_block_with_language() {
        let mut out = String::new();
        code_block("rust", "fn main() {}", &mut out);
        assert_eq!(
            out,
            r#"<pre><code class="language-rust">fn main() {}</code></pre>"#
        );
    }

    #[test]
    fn test_code_block_without_language() {
        let mut out = String::new();
        code_block("", "plain code", &mut out);
        assert_eq!(out, "<pre><code>plain code</code></pre>");
    }

    #[test]
    fn test_code_block_escapes_content_and_language() {
        let mut out = String::new();
        code_block("c\"x", "a < b && c", &mut out);
        assert_eq!(
            out,
            r#"<pre><code class="language-c&quot;x">a &lt; b &amp;&amp; c</code></pre>"#
        );
    }

    #[test]
    fn test_heading() {
        let mut out = String::new();
        heading(2, "Title", &mut out);
        assert_eq!(out, "<h2>Title</h2>");
    }

    #[test]
    fn test_external_link_escapes_href() {
        let mut out = String::new();
        external_link("https://x.test/?a=1&b=\"2\"", "label", &mut out);
        assert_eq!(
            out,
            r#"<a href="https://x.test/?a=1&amp;b=&quot;2&quot;" target="_blank" rel="noopener">label</a>"#
        );
    }
}
