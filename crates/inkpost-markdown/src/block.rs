//! Block-level parsing.
//!
//! [`BlockParser`] is a small state machine fed one source line at a time.
//! Each call to [`BlockParser::step`] performs exactly one transition, and
//! [`BlockParser::finish`] closes whatever is still open and joins the output.

use crate::html;
use crate::inline::render_inline;

const FENCE: &str = "```";

/// Convert a markdown body to an HTML fragment.
///
/// The body is trimmed, then parsed line by line.
///
/// # Examples
///
/// ```
/// use inkpost_markdown::markdown_to_html;
///
/// let html = markdown_to_html("- one\n- two");
/// assert_eq!(html, "<ul>\n<li>one</li>\n<li>two</li>\n</ul>");
/// ```
pub fn markdown_to_html(body: &str) -> String {
    let mut parser = BlockParser::new();
    for line in body.trim().lines() {
        parser.step(line);
    }
    parser.finish()
}

/// Current block context.
#[derive(Debug, Default)]
enum BlockState {
    #[default]
    Default,
    InList,
    InCodeBlock {
        language: String,
        lines: Vec<String>,
    },
}

/// One emitted output line.
#[derive(Debug, PartialEq, Eq)]
enum Fragment {
    Html(String),
    Blank,
}

/// Line-driven block parser.
///
/// Tracks whether a list or fenced code block is open and accumulates HTML
/// fragments. Scoped to a single document.
///
/// # Example
///
/// ```
/// use inkpost_markdown::BlockParser;
///
/// let mut parser = BlockParser::new();
/// parser.step("```rust");
/// assert!(parser.in_code_block());
/// parser.step("let x = 1;");
///
/// // Unterminated fences are closed by `finish`.
/// assert_eq!(
///     parser.finish(),
///     r#"<pre><code class="language-rust">let x = 1;</code></pre>"#
/// );
/// ```
#[derive(Debug, Default)]
pub struct BlockParser {
    state: BlockState,
    output: Vec<Fragment>,
}

impl BlockParser {
    /// Create a parser in the default state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a bullet list is currently open.
    #[must_use]
    pub fn in_list(&self) -> bool {
        matches!(self.state, BlockState::InList)
    }

    /// Check if a fenced code block is currently open.
    #[must_use]
    pub fn in_code_block(&self) -> bool {
        matches!(self.state, BlockState::InCodeBlock { .. })
    }

    /// Feed one source line (without its line terminator).
    pub fn step(&mut self, raw_line: &str) {
        let trimmed = raw_line.trim();

        if let Some(rest) = trimmed.strip_prefix(FENCE) {
            if self.in_code_block() {
                self.close_code_block();
            } else {
                self.close_list();
                self.state = BlockState::InCodeBlock {
                    language: rest.trim().to_owned(),
                    lines: Vec::new(),
                };
            }
            return;
        }

        // Code block content is kept verbatim
        if let BlockState::InCodeBlock { lines, .. } = &mut self.state {
            lines.push(raw_line.to_owned());
            return;
        }

        if trimmed.is_empty() {
            self.close_list();
            self.output.push(Fragment::Blank);
        } else if let Some((level, text)) = parse_heading(trimmed) {
            self.close_list();
            let mut out = String::new();
            html::heading(level, &render_inline(text), &mut out);
            self.output.push(Fragment::Html(out));
        } else if let Some(item) = trimmed.strip_prefix("- ") {
            self.open_list();
            self.output.push(Fragment::Html(format!(
                "<li>{}</li>",
                render_inline(item.trim())
            )));
        } else {
            self.close_list();
            self.output
                .push(Fragment::Html(format!("<p>{}</p>", render_inline(trimmed))));
        }
    }

    /// Close open blocks and return the HTML fragment.
    ///
    /// Leading blank lines are dropped and runs of blank lines collapse to one.
    pub fn finish(mut self) -> String {
        self.close_list();
        self.close_code_block();

        let mut lines: Vec<&str> = Vec::with_capacity(self.output.len());
        let mut previous_blank = true;
        for fragment in &self.output {
            match fragment {
                Fragment::Blank if previous_blank => {}
                Fragment::Blank => {
                    previous_blank = true;
                    lines.push("");
                }
                Fragment::Html(html) => {
                    previous_blank = false;
                    lines.push(html);
                }
            }
        }
        lines.join("\n")
    }

    fn open_list(&mut self) {
        if !self.in_list() {
            self.output.push(Fragment::Html("<ul>".to_owned()));
            self.state = BlockState::InList;
        }
    }

    fn close_list(&mut self) {
        if self.in_list() {
            self.output.push(Fragment::Html("</ul>".to_owned()));
            self.state = BlockState::Default;
        }
    }

    fn close_code_block(&mut self) {
        if let BlockState::InCodeBlock { language, lines } = &self.state {
            let mut out = String::new();
            html::code_block(language, &lines.join("\n"), &mut out);
            self.output.push(Fragment::Html(out));
            self.state = BlockState::Default;
        }
    }
}

/// Match a level 1 to 3 heading, longest marker first.
fn parse_heading(trimmed: &str) -> Option<(u8, &str)> {
    [(3, "### "), (2, "## "), (1, "# ")]
        .into_iter()
        .find_map(|(level, marker)| trimmed.strip_prefix(marker).map(|text| (level, text)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(lines: &[&str]) -> String {
        let mut parser = BlockParser::new();
        for line in lines {
            parser.step(line);
        }
        parser.finish()
    }

    #[test]
    fn test_end_to_end_document() {
        let body = "# Hello\nThis is **bold** and `code`.\n- one\n- two";
        assert_eq!(
            markdown_to_html(body),
            "<h1>Hello</h1>\n\
             <p>This is <strong>bold</strong> and <code>code</code>.</p>\n\
             <ul>\n\
             <li>one</li>\n\
             <li>two</li>\n\
             </ul>"
        );
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(markdown_to_html(""), "");
        assert_eq!(markdown_to_html("\n\n  \n"), "");
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(render(&["# One"]), "<h1>One</h1>");
        assert_eq!(render(&["## Two"]), "<h2>Two</h2>");
        assert_eq!(render(&["### Three"]), "<h3>Three</h3>");
    }

    #[test]
    fn test_heading_precedence() {
        assert_eq!(parse_heading("### Title"), Some((3, "Title")));
        assert_eq!(parse_heading("## Title"), Some((2, "Title")));
        assert_eq!(parse_heading("# Title"), Some((1, "Title")));
    }

    #[test]
    fn test_heading_requires_space() {
        assert_eq!(render(&["#nospace"]), "<p>#nospace</p>");
        assert_eq!(render(&["#### Four"]), "<p>#### Four</p>");
    }

    #[test]
    fn test_heading_text_is_formatted() {
        assert_eq!(render(&["## A *b* <c>"]), "<h2>A <em>b</em> &lt;c&gt;</h2>");
    }

    #[test]
    fn test_indented_heading() {
        assert_eq!(render(&["   # Indented"]), "<h1>Indented</h1>");
    }

    #[test]
    fn test_paragraph_per_line() {
        assert_eq!(render(&["first", "second"]), "<p>first</p>\n<p>second</p>");
    }

    #[test]
    fn test_paragraph_is_trimmed() {
        assert_eq!(render(&["   padded text   "]), "<p>padded text</p>");
    }

    #[test]
    fn test_list_opens_once() {
        let mut parser = BlockParser::new();
        parser.step("- a");
        assert!(parser.in_list());
        parser.step("- b");
        assert!(parser.in_list());
        assert_eq!(parser.finish(), "<ul>\n<li>a</li>\n<li>b</li>\n</ul>");
    }

    #[test]
    fn test_list_item_is_trimmed_and_formatted() {
        assert_eq!(
            render(&["-    **x**  "]),
            "<ul>\n<li><strong>x</strong></li>\n</ul>"
        );
    }

    #[test]
    fn test_paragraph_closes_list() {
        let mut parser = BlockParser::new();
        parser.step("- a");
        parser.step("after");
        assert!(!parser.in_list());
        assert_eq!(parser.finish(), "<ul>\n<li>a</li>\n</ul>\n<p>after</p>");
    }

    #[test]
    fn test_heading_closes_list() {
        assert_eq!(
            render(&["- a", "## H"]),
            "<ul>\n<li>a</li>\n</ul>\n<h2>H</h2>"
        );
    }

    #[test]
    fn test_blank_line_splits_lists() {
        assert_eq!(
            render(&["- a", "", "- b"]),
            "<ul>\n<li>a</li>\n</ul>\n\n<ul>\n<li>b</li>\n</ul>"
        );
    }

    #[test]
    fn test_dash_without_space_is_paragraph() {
        assert_eq!(render(&["-"]), "<p>-</p>");
        assert_eq!(render(&["-x"]), "<p>-x</p>");
    }

    #[test]
    fn test_blank_runs_collapse() {
        for n in 1..5 {
            let mut lines = vec!["a"];
            lines.extend(std::iter::repeat_n("", n));
            lines.push("b");
            assert_eq!(render(&lines), "<p>a</p>\n\n<p>b</p>", "{n} blank lines");
        }
    }

    #[test]
    fn test_whitespace_only_lines_are_blank() {
        assert_eq!(render(&["a", "   ", "\t", "b"]), "<p>a</p>\n\n<p>b</p>");
    }

    #[test]
    fn test_leading_blank_dropped() {
        assert_eq!(render(&["", "", "a"]), "<p>a</p>");
    }

    #[test]
    fn test_code_block_with_language() {
        assert_eq!(
            render(&["```rust", "fn main() {}", "```"]),
            r#"<pre><code class="language-rust">fn main() {}</code></pre>"#
        );
    }

    #[test]
    fn test_code_block_without_language() {
        assert_eq!(render(&["```", "x", "```"]), "<pre><code>x</code></pre>");
    }

    #[test]
    fn test_code_block_language_trimmed() {
        assert_eq!(
            render(&["  ```   py  ", "x", "```"]),
            r#"<pre><code class="language-py">x</code></pre>"#
        );
    }

    #[test]
    fn test_code_block_is_verbatim() {
        assert_eq!(
            render(&["```", "# not a heading", "- not a list", "", "  **raw** <b>", "```"]),
            "<pre><code># not a heading\n- not a list\n\n  **raw** &lt;b&gt;</code></pre>"
        );
    }

    #[test]
    fn test_code_block_preserves_surrounding_whitespace() {
        assert_eq!(
            render(&["```", "    indented   ", "```"]),
            "<pre><code>    indented   </code></pre>"
        );
        assert_eq!(
            markdown_to_html("```\nline with trailing   \n\tx\t\n```"),
            "<pre><code>line with trailing   \n\tx\t</code></pre>"
        );
    }

    #[test]
    fn test_fence_closes_list() {
        let mut parser = BlockParser::new();
        parser.step("- a");
        parser.step("```");
        assert!(!parser.in_list());
        assert!(parser.in_code_block());
        parser.step("code");
        parser.step("```");
        assert!(!parser.in_code_block());
        assert_eq!(
            parser.finish(),
            "<ul>\n<li>a</li>\n</ul>\n<pre><code>code</code></pre>"
        );
    }

    #[test]
    fn test_unterminated_fence_is_closed() {
        assert_eq!(
            markdown_to_html("text\n```sh\necho hi"),
            "<p>text</p>\n<pre><code class=\"language-sh\">echo hi</code></pre>"
        );
    }

    #[test]
    fn test_empty_unterminated_fence() {
        assert_eq!(render(&["```"]), "<pre><code></code></pre>");
    }

    #[test]
    fn test_unclosed_list_is_closed() {
        assert_eq!(render(&["- only"]), "<ul>\n<li>only</li>\n</ul>");
    }

    #[test]
    fn test_body_is_trimmed() {
        assert_eq!(markdown_to_html("\n\n# T\n\n"), "<h1>T</h1>");
    }

    #[test]
    fn test_crlf_lines() {
        assert_eq!(markdown_to_html("# A\r\nb\r\n"), "<h1>A</h1>\n<p>b</p>");
    }
}
