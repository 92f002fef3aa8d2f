//! Command-line argument definitions for the plumbing catalog converter
//!
//! This module defines the CLI interface using the clap derive API. The
//! positional path contract is checked by [`Args::validate`] rather than by
//! clap so a wrong count produces the usage text and a usage error.

use crate::app::models::Category;
use crate::app::services::source_loader::InputSpec;
use crate::{Error, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

/// CLI arguments for the plumbing catalog converter
///
/// Converts the pipe materials, valves, fixtures and mixing valves reference
/// tables from CSV into one JSON catalog printed on standard output.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "plumbing-catalog",
    version,
    about = "Convert plumbing reference tables from CSV into a single JSON catalog",
    long_about = "Reads the pipe materials, valves, fixtures and mixing valves tables and prints \
                  one JSON catalog keyed by derived identifiers. Pass a directory containing \
                  PipeMaterials.csv, Valves.csv, Fixtures.csv and MixingValves.csv, or the four \
                  files explicitly in that order."
)]
pub struct Args {
    /// One directory, or four files: pipe materials, valves, fixtures, mixing valves
    ///
    /// With --category, zero paths (read standard input) or one file.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Parse a single category and print only its mapping
    #[arg(
        long = "category",
        value_name = "CATEGORY",
        help = "Parse one category only (pipes, valves, fixtures, mixing-valves)"
    )]
    pub category: Option<Category>,

    /// Write the JSON to a file instead of standard output
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Write the catalog to FILE instead of standard output"
    )]
    pub output_path: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// <config dir>/plumbing-catalog/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Spaces per JSON indentation level (0 for compact output)
    #[arg(long = "indent", value_name = "N", help = "JSON indentation width")]
    pub indent: Option<usize>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress everything on stderr except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// What a validated invocation asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Assemble the full catalog
    Catalog(InputSpec),
    /// Parse one category from a file, or standard input when `None`
    Single {
        category: Category,
        path: Option<PathBuf>,
    },
}

impl Args {
    /// Check the positional path contract and describe the requested work
    pub fn validate(&self) -> Result<Invocation> {
        match self.category {
            Some(category) => match self.paths.as_slice() {
                [] => Ok(Invocation::Single {
                    category,
                    path: None,
                }),
                [path] => Ok(Invocation::Single {
                    category,
                    path: Some(path.clone()),
                }),
                _ => Err(Error::usage(format!(
                    "--category takes at most 1 file, got {}",
                    self.paths.len()
                ))),
            },
            None => InputSpec::from_paths(&self.paths).map(Invocation::Catalog),
        }
    }

    /// Output file, if any
    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if the completion summary should be printed (not in quiet mode)
    pub fn show_summary(&self) -> bool {
        !self.quiet
    }
}

/// Usage text printed for argument errors
pub fn usage_text(program: &str) -> String {
    format!(
        "usage:\n    \
         {program} [OPTIONS] <DIRECTORY>\n    \
         {program} [OPTIONS] <PipeMaterials.csv> <Valves.csv> <Fixtures.csv> <MixingValves.csv>\n    \
         {program} [OPTIONS] --category <CATEGORY> [<FILE>]\n\n\
         Run '{program} --help' for all options."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("plumbing-catalog").chain(argv.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_directory_invocation() {
        let args = parse(&["tables"]);
        assert_eq!(
            args.validate().unwrap(),
            Invocation::Catalog(InputSpec::Directory(PathBuf::from("tables")))
        );
    }

    #[test]
    fn test_four_file_invocation() {
        let args = parse(&["p.csv", "v.csv", "f.csv", "m.csv"]);
        match args.validate().unwrap() {
            Invocation::Catalog(InputSpec::Files(paths)) => {
                assert_eq!(paths.pipe_materials, PathBuf::from("p.csv"));
                assert_eq!(paths.valves, PathBuf::from("v.csv"));
                assert_eq!(paths.fixtures, PathBuf::from("f.csv"));
                assert_eq!(paths.mixing_valves, PathBuf::from("m.csv"));
            }
            other => panic!("unexpected invocation: {:?}", other),
        }
    }

    #[test]
    fn test_wrong_path_count_is_usage_error() {
        let cases: [&[&str]; 4] = [&[], &["a", "b"], &["a", "b", "c"], &["a", "b", "c", "d", "e"]];
        for argv in cases {
            let error = parse(argv).validate().unwrap_err();
            assert!(error.is_usage(), "{:?} should be a usage error", argv);
        }
    }

    #[test]
    fn test_single_category_invocation() {
        let args = parse(&["--category", "fixtures"]);
        assert_eq!(
            args.validate().unwrap(),
            Invocation::Single {
                category: Category::Fixtures,
                path: None
            }
        );

        let args = parse(&["--category", "mixing-valves", "MixingValves.csv"]);
        assert_eq!(
            args.validate().unwrap(),
            Invocation::Single {
                category: Category::MixingValves,
                path: Some(PathBuf::from("MixingValves.csv"))
            }
        );

        let args = parse(&["--category", "valves", "a.csv", "b.csv"]);
        assert!(args.validate().unwrap_err().is_usage());
    }

    #[test]
    fn test_unknown_category_rejected_by_clap() {
        let result = Args::try_parse_from(["plumbing-catalog", "--category", "boilers"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = parse(&["tables"]);

        // Default level
        assert_eq!(args.get_log_level(), "warn");

        // Verbose levels
        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        // Quiet mode
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
        assert!(!args.show_summary());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Args::try_parse_from(["plumbing-catalog", "-q", "-v", "tables"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_usage_text_mentions_both_forms() {
        let text = usage_text("plumbing-catalog");
        assert!(text.starts_with("usage:"));
        assert!(text.contains("<DIRECTORY>"));
        assert!(text.contains("<MixingValves.csv>"));
    }
}
