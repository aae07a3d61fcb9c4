//! CLI command implementations.

mod build;
mod check;

use std::path::PathBuf;

use clap::Args;
use inkpost_config::{CliSettings, Config};
use inkpost_site::BuildConfig;

use crate::error::CliError;
use crate::output::Output;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;

/// Site arguments shared by `build` and `check`.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover inkpost.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown posts directory (overrides config).
    #[arg(short, long)]
    posts_dir: Option<PathBuf>,

    /// Output directory for the generated pages (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Directory containing page templates (overrides config).
    #[arg(short, long)]
    templates_dir: Option<PathBuf>,

    /// Site title shown on the index page (overrides config).
    #[arg(long, env = "INKPOST_TITLE")]
    title: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl SiteArgs {
    /// Load configuration, apply overrides and report the resolved paths.
    fn build_config(self, output: &Output) -> Result<BuildConfig, CliError> {
        let cli_settings = CliSettings {
            title: self.title,
            posts_dir: self.posts_dir,
            output_dir: self.output_dir,
            templates_dir: self.templates_dir,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded config");
        }

        let site = config.site_resolved;
        output.info(&format!("Posts: {}", site.posts_dir.display()));
        output.info(&format!("Output: {}", site.output_dir.display()));

        Ok(BuildConfig {
            posts_dir: site.posts_dir,
            output_dir: site.output_dir,
            templates_dir: site.templates_dir,
            site_title: site.title,
        })
    }
}

/// Summary line for `count` posts.
fn posts_message(verb: &str, count: usize) -> String {
    format!("{verb} {count} post(s).")
}
