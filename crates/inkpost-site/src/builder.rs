//! Static site builder.

use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use inkpost_post::{Post, PostError, parse_post};
use rayon::prelude::*;

use crate::scanner::{PostSource, scan_posts};
use crate::template::Templates;

/// Slug reserved for the listing page.
const INDEX_SLUG: &str = "index";

/// Configuration for static site building.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory containing `*.md` posts.
    pub posts_dir: PathBuf,
    /// Directory the pages are written to (created if missing).
    pub output_dir: PathBuf,
    /// Directory containing page templates.
    pub templates_dir: PathBuf,
    /// Site title for the index page.
    pub site_title: String,
}

/// Error returned by the static site builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("{}: {source}", path.display())]
    Post { path: PathBuf, source: PostError },

    #[error("Failed to read template {}: {source}", path.display())]
    Template { path: PathBuf, source: io::Error },

    #[error("Duplicate slug '{slug}' in {} and {}", first.display(), second.display())]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("Slug '{slug}' in {} is reserved for the index page", path.display())]
    ReservedSlug { slug: String, path: PathBuf },

    #[error("Slug '{slug}' in {} must be a plain file name", path.display())]
    InvalidSlug { slug: String, path: PathBuf },
}

/// A rendered output page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// File name relative to the output directory.
    pub file_name: String,
    pub html: String,
}

/// All pages of a site, rendered but not yet written.
#[derive(Debug, Clone)]
pub struct RenderedSite {
    pub post_count: usize,
    pub pages: Vec<Page>,
}

/// Builds a static blog from a directory of markdown posts.
pub struct SiteBuilder {
    config: BuildConfig,
}

impl SiteBuilder {
    /// Create a new builder with the given configuration.
    #[must_use]
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Discover, parse and sort all posts, newest first.
    ///
    /// Posts are parsed in parallel. Posts sharing a date keep their file
    /// name order.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing post (in file name order),
    /// or a slug conflict.
    pub fn load_posts(&self) -> Result<Vec<Post>, BuildError> {
        let sources = scan_posts(&self.config.posts_dir)?;
        tracing::debug!(
            posts_dir = %self.config.posts_dir.display(),
            count = sources.len(),
            "Discovered posts"
        );

        let results: Vec<Result<Post, BuildError>> = sources.par_iter().map(load_post).collect();
        let mut posts = results.into_iter().collect::<Result<Vec<_>, _>>()?;

        check_slugs(&sources, &posts)?;

        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(posts)
    }

    /// Parse every post and render all pages in memory.
    ///
    /// Pages are returned newest post first, followed by the index page.
    ///
    /// # Errors
    ///
    /// Returns an error if a post fails to parse or templates cannot be read.
    pub fn render(&self) -> Result<RenderedSite, BuildError> {
        let posts = self.load_posts()?;
        let templates = Templates::load(&self.config.templates_dir)?;

        let mut pages: Vec<Page> = posts
            .iter()
            .map(|post| Page {
                file_name: format!("{}.html", post.slug),
                html: templates.render_post(post),
            })
            .collect();
        pages.push(Page {
            file_name: format!("{INDEX_SLUG}.html"),
            html: templates.render_index(&posts, &self.config.site_title),
        });

        Ok(RenderedSite {
            post_count: posts.len(),
            pages,
        })
    }

    /// Build the site.
    ///
    /// Every post is parsed and rendered before the first file is written, so
    /// a bad post leaves the output directory untouched. Each page is written
    /// to a temporary file and renamed into place.
    ///
    /// Returns the number of posts written.
    ///
    /// # Errors
    ///
    /// Returns an error if a post fails to parse, templates cannot be read,
    /// or output cannot be written.
    pub fn build(&self) -> Result<usize, BuildError> {
        let site = self.render()?;
        let output_dir = &self.config.output_dir;

        fs::create_dir_all(output_dir)?;
        for page in &site.pages {
            let path = output_dir.join(&page.file_name);
            write_atomic(&path, &page.html)?;
            tracing::debug!(path = %path.display(), "Wrote page");
        }

        tracing::info!(
            post_count = site.post_count,
            output_dir = %output_dir.display(),
            "Site built"
        );
        Ok(site.post_count)
    }
}

fn load_post(source: &PostSource) -> Result<Post, BuildError> {
    let raw = fs::read_to_string(&source.path).map_err(|e| BuildError::Read {
        path: source.path.clone(),
        source: e,
    })?;
    parse_post(&raw, &source.stem).map_err(|source_err| BuildError::Post {
        path: source.path.clone(),
        source: source_err,
    })
}

/// Reject slugs that would make two pages share an output file.
///
/// `posts` must be in the same order as `sources`.
fn check_slugs(sources: &[PostSource], posts: &[Post]) -> Result<(), BuildError> {
    let mut seen: HashMap<&str, &Path> = HashMap::with_capacity(posts.len());
    for (source, post) in sources.iter().zip(posts) {
        if !is_plain_slug(&post.slug) {
            return Err(BuildError::InvalidSlug {
                slug: post.slug.clone(),
                path: source.path.clone(),
            });
        }
        if post.slug == INDEX_SLUG {
            return Err(BuildError::ReservedSlug {
                slug: post.slug.clone(),
                path: source.path.clone(),
            });
        }
        if let Some(first) = seen.insert(&post.slug, &source.path) {
            return Err(BuildError::DuplicateSlug {
                slug: post.slug.clone(),
                first: first.to_path_buf(),
                second: source.path.clone(),
            });
        }
    }
    Ok(())
}

/// A slug must name a file directly inside the output directory.
fn is_plain_slug(slug: &str) -> bool {
    !slug.contains(['/', '\\']) && slug != "." && slug != ".."
}

/// Write `content` to `path` via a temporary file in the same directory.
///
/// An existing page keeps its permissions. New pages get [`new_page_permissions`].
fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(content.as_bytes())?;

    let permissions = fs::metadata(path)
        .map(|meta| meta.permissions())
        .ok()
        .or_else(new_page_permissions);
    if let Some(permissions) = permissions {
        file.as_file().set_permissions(permissions)?;
    }

    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Permissions for newly created pages (`rw-r--r--`).
#[cfg(unix)]
fn new_page_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;

    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_page_permissions() -> Option<fs::Permissions> {
    None
}
