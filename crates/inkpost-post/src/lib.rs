//! Front matter parsing and post construction for inkpost.
//!
//! A post is a markdown document that starts with a flat `key: value` header
//! between two `---` lines:
//!
//! ```text
//! ---
//! title: Hello
//! date: 2024-03-05
//! ---
//! # Body in markdown
//! ```
//!
//! [`parse_post`] splits the header from the body, validates the required
//! fields and renders the body with [`inkpost_markdown::markdown_to_html`].

mod date;
mod error;
mod front_matter;
mod post;

pub use date::{DATE_FORMAT, display_date, parse_date};
pub use error::PostError;
pub use front_matter::{FrontMatter, split_front_matter};
pub use post::{Post, parse_post};
