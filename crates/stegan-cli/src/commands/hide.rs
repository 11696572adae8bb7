use std::path::PathBuf;

use clap::{ArgGroup, Args};
use stegan_core::CodecOptions;

use crate::cli::resolve_password;
use crate::CliResult;

/// Hides a file or a text message in a PNG or BMP image
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("payload").required(true).args(["data_file", "message"])))]
pub struct HideArgs {
    /// Password used to encrypt the data, asked for when missing
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Do not ask for a password, hide without encryption
    #[arg(long, conflicts_with = "password")]
    pub no_password: bool,

    /// Carrier image (PNG or BMP), used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as file, BMP for `.bmp` (color images only) and PNG otherwise
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// File to hide in the image
    #[arg(short = 'd', long = "data", value_name = "data file")]
    pub data_file: Option<PathBuf>,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message")]
    pub message: Option<String>,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let password = resolve_password(self.password, self.no_password, true)?;

        let quality = stegan_core::api::hide::prepare()
            .with_image(&self.media)
            .use_file(self.data_file)
            .use_message(self.message)
            .using_password(password)
            .with_options(options)
            .with_output(&self.write_to_file)
            .execute()?;

        println!(
            "Hidden in {}, PSNR {} (MSE {:.4})",
            self.write_to_file.display(),
            quality.psnr,
            quality.mse
        );

        Ok(())
    }
}
