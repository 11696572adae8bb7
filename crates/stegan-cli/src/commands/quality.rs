use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Compares an image with its stego version, prints MSE and PSNR
#[derive(Args, Debug)]
pub struct QualityArgs {
    /// The reference image, usually the carrier
    #[arg(short, long, value_name = "reference image", required = true)]
    pub reference: PathBuf,

    /// The image to compare against the reference
    #[arg(short, long, value_name = "candidate image", required = true)]
    pub candidate: PathBuf,
}

impl QualityArgs {
    pub fn run(self) -> CliResult<()> {
        let quality = stegan_core::api::quality::prepare()
            .with_reference(&self.reference)
            .with_candidate(&self.candidate)
            .execute()?;

        println!("MSE {:.4}, PSNR {}", quality.mse, quality.psnr);

        Ok(())
    }
}
