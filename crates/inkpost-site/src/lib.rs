//! Static blog site generation for inkpost.
//!
//! [`SiteBuilder`] discovers `*.md` posts, parses them in parallel, sorts them
//! newest first and writes one HTML page per post plus an `index.html`
//! listing, using [`Templates`] for the page shells.

mod builder;
mod scanner;
mod template;

pub use builder::{BuildConfig, BuildError, Page, RenderedSite, SiteBuilder};
pub use template::{INDEX_TEMPLATE_FILE, POST_TEMPLATE_FILE, Templates};
