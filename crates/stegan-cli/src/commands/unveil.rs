use std::path::PathBuf;

use clap::Args;
use stegan_core::{CodecOptions, SteganoError};

use crate::cli::resolve_password;
use crate::CliResult;

/// Unveils a hidden file from a PNG or BMP image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Password used to encrypt the data, asked for when missing
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// The data was hidden without a password
    #[arg(long, conflicts_with = "password")]
    pub no_password: bool,

    /// Source image that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Final data will be stored in that folder
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output folder",
        required = true
    )]
    pub output_folder: PathBuf,
}

impl UnveilArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let password = resolve_password(self.password, self.no_password, false)?;

        let unveiled = stegan_core::api::unveil::prepare()
            .from_secret_file(&self.media)
            .using_password(password)
            .with_options(options)
            .into_output_folder(&self.output_folder)
            .execute()?
            .ok_or(SteganoError::NoSecretData)?;

        println!("Unveiled {}", unveiled.display());

        Ok(())
    }
}
