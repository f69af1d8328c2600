use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::types::SVG_EXTENSION;

/// Number of entries in a valid argument vector, program name included.
pub const EXPECTED_ARGC: usize = 3;

#[derive(Parser, Debug)]
#[command(
    name = "qrsvg",
    about = "Encode TEXT as a QR code and write it to STEM.svg",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct CliArgs {
    /// Text to encode, taken as raw bytes
    pub text: OsString,

    /// Output path without the `.svg` suffix
    pub stem: PathBuf,
}

impl CliArgs {
    /// Parses the two operands of a full argument vector.
    ///
    /// The operands are passed after an injected `--`, so values such as
    /// `-x` or `--` are taken literally instead of being read as options.
    pub fn try_from_operands(
        program: OsString,
        text: OsString,
        stem: OsString,
    ) -> Result<Self, clap::Error> {
        Self::try_parse_from([program, OsString::from("--"), text, stem])
    }

    /// The stem with `.svg` appended (never substituted for an existing extension).
    pub fn output_path(&self) -> PathBuf {
        let mut path = self.stem.clone().into_os_string();
        path.push(".");
        path.push(SVG_EXTENSION);
        PathBuf::from(path)
    }

    pub fn usage() -> String {
        Self::command().render_usage().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str, stem: &str) -> CliArgs {
        CliArgs::try_from_operands("qrsvg".into(), text.into(), stem.into()).unwrap()
    }

    #[test]
    fn test_output_path_appends_suffix() {
        assert_eq!(parse("HELLO", "out").output_path(), PathBuf::from("out.svg"));
        assert_eq!(
            parse("HELLO", "codes/out.v1").output_path(),
            PathBuf::from("codes/out.v1.svg")
        );
    }

    #[test]
    fn test_hyphenated_operands_are_values() {
        let args = parse("--help", "-o");
        assert_eq!(args.text, "--help");
        assert_eq!(args.stem, PathBuf::from("-o"));

        let args = parse("--", "out");
        assert_eq!(args.text, "--");
    }

    #[test]
    fn test_empty_text_is_accepted() {
        assert_eq!(parse("", "out").text, "");
    }

    #[test]
    fn test_usage_names_both_operands() {
        let usage = CliArgs::usage();
        assert!(usage.contains("<TEXT>"));
        assert!(usage.contains("<STEM>"));
    }
}
