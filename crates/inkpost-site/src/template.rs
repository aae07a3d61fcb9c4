//! HTML page shells with `{{ name }}` placeholders.
//!
//! Placeholders are substituted in a single pass, so values inserted into a
//! page (a post body mentioning `{{ title }}`, say) are never substituted
//! again. Unknown placeholders are left as written.

use std::fmt::Write;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

use inkpost_markdown::escape_html;
use inkpost_post::Post;
use regex::{Captures, Regex};

use crate::BuildError;

/// File name of the per-post template.
pub const POST_TEMPLATE_FILE: &str = "post_template.html";
/// File name of the index template.
pub const INDEX_TEMPLATE_FILE: &str = "index_template.html";

const DEFAULT_POST_TEMPLATE: &str = include_str!("../templates/post_template.html");
const DEFAULT_INDEX_TEMPLATE: &str = include_str!("../templates/index_template.html");

/// Markup used in place of cards when there are no posts.
const EMPTY_INDEX: &str = "      <p>No posts yet. Check back soon!</p>";

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{ (\w+) \}\}").unwrap());

/// Post and index page templates.
#[derive(Debug, Clone)]
pub struct Templates {
    post: String,
    index: String,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            post: DEFAULT_POST_TEMPLATE.to_owned(),
            index: DEFAULT_INDEX_TEMPLATE.to_owned(),
        }
    }
}

impl Templates {
    /// Create templates from strings.
    #[must_use]
    pub fn new(post: impl Into<String>, index: impl Into<String>) -> Self {
        Self {
            post: post.into(),
            index: index.into(),
        }
    }

    /// Load templates from a directory.
    ///
    /// Each file that does not exist falls back to the built-in default.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Template`] if a template exists but cannot be read.
    pub fn load(dir: &Path) -> Result<Self, BuildError> {
        Ok(Self {
            post: load_or_default(&dir.join(POST_TEMPLATE_FILE), DEFAULT_POST_TEMPLATE)?,
            index: load_or_default(&dir.join(INDEX_TEMPLATE_FILE), DEFAULT_INDEX_TEMPLATE)?,
        })
    }

    /// Render a complete post page.
    ///
    /// Supports `{{ title }}` and `{{ summary }}` (escaped),
    /// `{{ display_date }}` and `{{ content }}` (inserted as is).
    pub fn render_post(&self, post: &Post) -> String {
        let title = escape_html(&post.title);
        let summary = escape_html(&post.summary);
        substitute(
            &self.post,
            &[
                ("title", &title),
                ("summary", &summary),
                ("display_date", &post.display_date),
                ("content", &post.content_html),
            ],
        )
    }

    /// Render the index page listing `posts` in the given order.
    ///
    /// Supports `{{ posts }}` (one card per post) and `{{ site_title }}`
    /// (escaped).
    pub fn render_index(&self, posts: &[Post], site_title: &str) -> String {
        let cards = if posts.is_empty() {
            EMPTY_INDEX.to_owned()
        } else {
            posts.iter().map(post_card).collect::<Vec<_>>().join("\n")
        };
        let site_title = escape_html(site_title);
        substitute(
            &self.index,
            &[("posts", &cards), ("site_title", &site_title)],
        )
    }
}

/// Render one index card linking to a post page.
fn post_card(post: &Post) -> String {
    let mut html = String::with_capacity(256);
    let _ = writeln!(
        html,
        "      <a class=\"card post-card\" href=\"{}.html\">",
        escape_html(&post.slug)
    );
    let _ = writeln!(html, "        <h3>{}</h3>", escape_html(&post.title));
    let _ = writeln!(html, "        <p>{}</p>", escape_html(&post.summary));
    let _ = writeln!(
        html,
        "        <p class=\"post-meta\">Published {}</p>",
        post.display_date
    );
    html.push_str("      </a>");
    html
}

/// Replace known `{{ name }}` placeholders in one pass.
fn substitute(template: &str, values: &[(&str, &str)]) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures| {
            let full_match = caps.get(0).unwrap().as_str();
            let name = caps.get(1).unwrap().as_str();
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map_or(full_match, |(_, value)| *value)
                .to_owned()
        })
        .into_owned()
}

fn load_or_default(path: &Path, default: &str) -> Result<String, BuildError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Template not found, using built-in default");
            Ok(default.to_owned())
        }
        Err(source) => Err(BuildError::Template {
            path: path.to_path_buf(),
            source,
        }),
    }
}
