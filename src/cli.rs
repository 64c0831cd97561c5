/*
 * CLI argument definitions using clap's derive API, plus the mapping from
 * run outcomes to process exit codes. This is the thin replaceable
 * front-end: it supplies the two run inputs (source directory, output
 * file) and chooses how the progress stream is rendered.
 */
use crate::core::{CollectorError, DEFAULT_EXTENSION};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub const EXIT_INVALID_INPUT: u8 = 1;
pub const EXIT_IO_FAILURE: u8 = 2;

#[derive(Debug, Parser)]
#[command(
    name = "codecollector",
    about = "Concatenates matching source files from a directory tree into one output file",
    version
)]
pub struct Arguments {
    /// Root directory to scan recursively
    #[arg(short, long)]
    pub source: PathBuf,

    /// File to create or overwrite with the concatenated output
    #[arg(short, long)]
    pub output: PathBuf,

    /// File-name suffix selecting which files are collected (case-sensitive)
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub ext: String,

    /// How progress updates are rendered on stderr
    #[arg(long, value_enum, default_value = "plain")]
    pub progress: ProgressFormat,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProgressFormat {
    /// Human-readable percentage lines
    Plain,
    /// One JSON object per progress snapshot
    Json,
}

/*
 * Maps a failed run to the documented exit codes: rejected inputs exit
 * with 1, anything that failed during traversal or writing exits with 2.
 */
pub fn exit_code_for_error(error: &CollectorError) -> u8 {
    match error {
        CollectorError::InvalidRequest(_) => EXIT_INVALID_INPUT,
        _ => EXIT_IO_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::file_system::FileSystemError;
    use std::path::Path;

    #[test]
    fn test_arguments_parse_with_defaults() {
        let args =
            Arguments::try_parse_from(["codecollector", "--source", "proj", "--output", "out.txt"])
                .expect("minimal invocation should parse");
        assert_eq!(args.source, PathBuf::from("proj"));
        assert_eq!(args.output, PathBuf::from("out.txt"));
        assert_eq!(args.ext, ".java");
        assert_eq!(args.progress, ProgressFormat::Plain);
        assert!(!args.verbose);
    }

    #[test]
    fn test_arguments_accept_overrides() {
        let args = Arguments::try_parse_from([
            "codecollector",
            "--source",
            "proj",
            "--output",
            "out.txt",
            "--ext",
            ".rs",
            "--progress",
            "json",
            "--verbose",
        ])
        .expect("full invocation should parse");
        assert_eq!(args.ext, ".rs");
        assert_eq!(args.progress, ProgressFormat::Json);
        assert!(args.verbose);
    }

    #[test]
    fn test_arguments_require_source_and_output() {
        assert!(Arguments::try_parse_from(["codecollector"]).is_err());
        assert!(Arguments::try_parse_from(["codecollector", "--source", "proj"]).is_err());
        assert!(Arguments::try_parse_from(["codecollector", "--output", "out.txt"]).is_err());
    }

    #[test]
    fn test_exit_codes_distinguish_rejection_from_io_failure() {
        let rejected = CollectorError::InvalidRequest("bad".to_string());
        assert_eq!(exit_code_for_error(&rejected), EXIT_INVALID_INPUT);

        let scan_failed = CollectorError::Scan(FileSystemError::InvalidPath(
            Path::new("gone").to_path_buf(),
        ));
        assert_eq!(exit_code_for_error(&scan_failed), EXIT_IO_FAILURE);

        let write_failed = CollectorError::Write(std::io::Error::other("disk full"));
        assert_eq!(exit_code_for_error(&write_failed), EXIT_IO_FAILURE);
    }
}
