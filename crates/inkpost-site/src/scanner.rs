//! Post discovery by filesystem listing.
//!
//! Discovery only identifies candidate files. Reading and parsing happen in
//! the builder.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Reference to a post source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PostSource {
    /// File name without the `.md` extension, the default slug.
    pub stem: String,
    /// Path to the markdown file.
    pub path: PathBuf,
}

/// List `*.md` files directly inside `dir`, sorted by path.
///
/// Hidden files and subdirectories are skipped. Returns an empty Vec if the
/// directory doesn't exist.
pub(crate) fn scan_posts(dir: &Path) -> io::Result<Vec<PostSource>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut sources = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }

        let path = entry.path();
        if !path.is_file() || path.extension().is_none_or(|ext| ext != "md") {
            continue;
        }

        let Some(stem) = path.file_stem().and_then(OsStr::to_str) else {
            tracing::warn!(path = %path.display(), "Skipping post with non-UTF-8 file name");
            continue;
        };
        sources.push(PostSource {
            stem: stem.to_owned(),
            path,
        });
    }

    sources.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(sources)
}
