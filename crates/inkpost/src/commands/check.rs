//! `inkpost check` command implementation.

use clap::Args;
use inkpost_site::SiteBuilder;

use super::{SiteArgs, posts_message};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub site: SiteArgs,
}

impl CheckArgs {
    /// Parse and render every post without touching the output directory.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or any post is invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let build_config = self.site.build_config(&output)?;

        let site = SiteBuilder::new(build_config).render()?;
        tracing::info!(pages = site.pages.len(), "Rendered pages");

        output.success(&posts_message("Checked", site.post_count));
        Ok(())
    }
}
