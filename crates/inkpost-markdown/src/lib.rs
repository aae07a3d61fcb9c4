//! Line-oriented markdown to HTML conversion.
//!
//! Supports a deliberately small subset of markdown:
//! - ATX headings up to level 3 (`#`, `##`, `###`)
//! - Flat bullet lists (`- item`)
//! - Fenced code blocks with an optional language tag
//! - Paragraphs (one per source line)
//! - Inline links, code spans, bold and italic
//!
//! Rendering never fails. Malformed syntax degrades to literal text.
//!
//! # Example
//!
//! ```
//! use inkpost_markdown::markdown_to_html;
//!
//! let html = markdown_to_html("# Hello\n\nSome **bold** text");
//! assert_eq!(html, "<h1>Hello</h1>\n\n<p>Some <strong>bold</strong> text</p>");
//! ```

mod block;
mod escape;
mod html;
mod inline;
mod placeholder;

pub use block::{BlockParser, markdown_to_html};
pub use escape::escape_html;
pub use inline::render_inline;
pub use placeholder::PlaceholderTable;
