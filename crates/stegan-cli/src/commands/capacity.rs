use std::path::PathBuf;

use clap::Args;
use stegan_core::CodecOptions;

use crate::CliResult;

/// Shows how much data an image can hide
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Carrier image (PNG or BMP)
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,
}

impl CapacityArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let capacity = stegan_core::api::capacity::prepare()
            .with_image(&self.media)
            .with_options(options)
            .execute()?;

        println!("{}: {capacity}", self.media.display());

        Ok(())
    }
}
