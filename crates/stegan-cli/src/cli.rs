use std::io;

use clap::{Parser, Subcommand};
use dialoguer::Password;
use stegan_core::SteganoError;

use crate::commands::*;
use crate::CliResult;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Least significant bits used per color channel, hide and unveil must agree
    #[arg(
        long,
        global = true,
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(1..=4)
    )]
    pub bits: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    Capacity(capacity::CapacityArgs),
    Quality(quality::QualityArgs),
}

/// Password given on the command line, or asked for interactively.
///
/// An empty password is fine, it only means no encryption.
pub fn resolve_password(
    password: Option<String>,
    no_password: bool,
    confirm: bool,
) -> CliResult<Option<String>> {
    if no_password {
        return Ok(None);
    }
    match password {
        Some(password) => Ok(Some(password)),
        None => ask_for_password(confirm).map(Some),
    }
}

pub fn ask_for_password(confirm: bool) -> CliResult<String> {
    let mut prompt = Password::new()
        .with_prompt("Password")
        .allow_empty_password(true);
    if confirm {
        prompt = prompt.with_confirmation("Repeat password", "Error: the passwords don't match.");
    }

    prompt.interact().map_err(|e| SteganoError::ReadError {
        source: io::Error::new(io::ErrorKind::Other, e),
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn should_parse_hide_with_bits_anywhere() {
        let args = CliArgs::try_parse_from([
            "stegan", "hide", "-i", "in.png", "-o", "out.png", "-m", "hi", "--bits", "3",
        ])
        .unwrap();

        assert_eq!(args.bits, 3);
        let Commands::Hide(hide) = args.command else {
            panic!("expected the hide command");
        };
        assert_eq!(hide.media, PathBuf::from("in.png"));
        assert_eq!(hide.message.as_deref(), Some("hi"));
        assert_eq!(hide.data_file, None);
    }

    #[test]
    fn should_default_to_one_bit() {
        let args = CliArgs::try_parse_from(["stegan", "capacity", "-i", "in.png"]).unwrap();

        assert_eq!(args.bits, 1);
    }

    #[test]
    fn should_reject_bit_depths_out_of_range() {
        for bits in ["0", "5"] {
            assert!(
                CliArgs::try_parse_from(["stegan", "--bits", bits, "capacity", "-i", "a.png"])
                    .is_err()
            );
        }
    }

    #[test]
    fn should_require_exactly_one_payload_for_hide() {
        assert!(CliArgs::try_parse_from(["stegan", "hide", "-i", "a.png", "-o", "b.png"]).is_err());
        assert!(CliArgs::try_parse_from([
            "stegan", "hide", "-i", "a.png", "-o", "b.png", "-m", "hi", "-d", "Cargo.toml",
        ])
        .is_err());
    }

    #[test]
    fn should_not_prompt_when_password_is_given_or_disabled() {
        assert_eq!(
            resolve_password(Some("pw".into()), false, true).unwrap(),
            Some("pw".to_string())
        );
        assert_eq!(resolve_password(None, true, true).unwrap(), None);
        assert_eq!(resolve_password(Some("pw".into()), true, false).unwrap(), None);
    }
}
