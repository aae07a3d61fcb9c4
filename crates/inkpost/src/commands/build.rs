//! `inkpost build` command implementation.

use clap::Args;
use inkpost_site::SiteBuilder;

use super::{SiteArgs, posts_message};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    pub site: SiteArgs,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or any post cannot be built.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let build_config = self.site.build_config(&output)?;

        let count = SiteBuilder::new(build_config).build()?;

        output.success(&posts_message("Built", count));
        Ok(())
    }
}
