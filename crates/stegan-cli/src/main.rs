mod cli;
mod commands;

use clap::Parser;
use log::debug;
use stegan_core::{BitDepth, CodecOptions, SteganoError};

use crate::cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, SteganoError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    debug!("{args:?}");
    let options: CodecOptions = BitDepth::new(args.bits)?.into();

    let result = match args.command {
        Commands::Hide(hide) => hide.run(options),
        Commands::Unveil(unveil) => unveil.run(options),
        Commands::Capacity(capacity) => capacity.run(options),
        Commands::Quality(quality) => quality.run(),
    };

    match result {
        Err(SteganoError::NoSecretData) => {
            eprintln!("No secret data found, is the password or bit depth wrong?");
            std::process::exit(1);
        }
        other => other,
    }
}
