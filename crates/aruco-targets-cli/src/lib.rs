//! Shared argument handling for the `aruco-a4` and `aruco-marker` binaries.

use aruco_targets_dict::{DictionaryError, DictionaryName};
use aruco_targets_print::{write_reports_json, GenerationReport, MarkerRequest};
use clap::{Args, ValueEnum};
use log::LevelFilter;
use std::{ops::RangeInclusive, path::PathBuf, process::ExitCode};

pub type CliError = Box<dyn std::error::Error>;
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// clap value parser for dictionary names; the error lists the valid names.
pub fn parse_dictionary(raw: &str) -> Result<DictionaryName, String> {
    raw.parse()
        .map_err(|err: DictionaryError| err.to_string())
}

/// Options shared by both generators.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// ArUco dictionary, e.g. DICT_4X4_50, 4x4-50 or "4x4-50 class".
    #[arg(long, value_parser = parse_dictionary, default_value = "DICT_4X4_50")]
    pub dict: DictionaryName,

    /// Marker id; with --batch, the last id generated.
    #[arg(long, default_value_t = 0)]
    pub id: u32,

    /// Generate every id from 0 to --id.
    #[arg(long)]
    pub batch: bool,

    /// Width of the black marker border in cells.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=8))]
    pub border_bits: u8,

    /// Read each rendered marker back and fail if it does not decode as its id.
    #[arg(long)]
    pub verify: bool,

    /// Write a JSON summary of the generated files.
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Print the supported dictionaries and exit.
    #[arg(long)]
    pub list_dicts: bool,

    /// Diagnostic log level (stderr).
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

impl CommonArgs {
    /// Install the stderr logger at the requested level.
    ///
    /// With the `tracing` feature a `tracing` subscriber filtered by `RUST_LOG`
    /// is installed instead.
    pub fn init_logging(&self) -> CliResult<()> {
        #[cfg(feature = "tracing")]
        aruco_targets_core::init_tracing(false);
        #[cfg(not(feature = "tracing"))]
        aruco_targets_core::init_with_level(self.log_level.into())?;
        Ok(())
    }

    /// Ids to generate, checked against the dictionary capacity up front.
    pub fn ids(&self) -> CliResult<RangeInclusive<u32>> {
        let capacity = self.dict.capacity();
        if self.id as usize >= capacity {
            return Err(format!(
                "marker id {} is out of range for {} (ids 0..{capacity})",
                self.id, self.dict
            )
            .into());
        }
        let first = if self.batch { 0 } else { self.id };
        Ok(first..=self.id)
    }

    pub fn request(&self, id: u32) -> MarkerRequest {
        MarkerRequest {
            dictionary: self.dict,
            id,
            border_bits: usize::from(self.border_bits),
            verify: self.verify,
        }
    }

    /// Write the JSON report when `--report` was given.
    pub fn write_report(&self, reports: &[GenerationReport]) -> CliResult<()> {
        if let Some(path) = &self.report {
            write_reports_json(path, reports)?;
            log::info!("report written to {}", path.display());
        }
        Ok(())
    }
}

/// Print the supported dictionaries as a table.
pub fn print_dictionaries() {
    println!(
        "{:<14} {:<8} {:>5} {:>8} {:>11}",
        "name", "slug", "bits", "markers", "correction"
    );
    for name in DictionaryName::ALL {
        let n = name.marker_size();
        println!(
            "{:<14} {:<8} {:>5} {:>8} {:>11}",
            name.canonical(),
            name.slug(),
            format!("{n}x{n}"),
            name.capacity(),
            name.dictionary().max_correction_bits
        );
    }
}

/// Map a run result to the process exit status.
pub fn exit_status(result: CliResult<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        common: CommonArgs,
    }

    fn parse(args: &[&str]) -> Result<CommonArgs, clap::Error> {
        TestCli::try_parse_from(std::iter::once("test").chain(args.iter().copied()))
            .map(|cli| cli.common)
    }

    #[test]
    fn defaults_match_the_single_marker_case() {
        let args = parse(&[]).expect("parse");
        assert_eq!(args.dict, DictionaryName::Dict4x4_50);
        assert_eq!(args.ids().expect("ids"), 0..=0);
        assert_eq!(args.log_level, LogLevel::Warn);
        assert_eq!(args.request(0).border_bits, 1);
    }

    #[test]
    fn batch_covers_zero_through_id() {
        let args = parse(&["--id", "3", "--batch", "--dict", "4x4-100"]).expect("parse");
        assert_eq!(args.ids().expect("ids"), 0..=3);
        assert_eq!(args.dict, DictionaryName::Dict4x4_100);
    }

    #[test]
    fn id_beyond_capacity_is_rejected() {
        let args = parse(&["--id", "50"]).expect("parse");
        let err = args.ids().unwrap_err().to_string();
        assert!(err.contains("DICT_4X4_50"), "{err}");
    }

    #[test]
    fn unknown_dictionary_lists_valid_names() {
        let err = parse(&["--dict", "DICT_9X9_1"]).err().expect("error");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        let msg = err.to_string();
        assert!(msg.contains("DICT_4X4_50"), "{msg}");
        assert!(msg.contains("DICT_4X4_100"), "{msg}");
    }

    #[test]
    fn dictionary_accepts_class_suffix() {
        let args = parse(&["--dict", "4x4-50 class"]).expect("parse");
        assert_eq!(args.dict, DictionaryName::Dict4x4_50);
    }

    #[test]
    fn larger_opencv_dictionaries_are_not_bundled() {
        let err = parse(&["--dict", "DICT_6X6_50"]).err().expect("error");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        let msg = err.to_string();
        assert!(msg.contains("not bundled"), "{msg}");
        assert!(msg.contains("DICT_4X4_100"), "{msg}");
    }

    #[test]
    fn negative_ids_are_rejected_by_the_parser() {
        assert!(parse(&["--id", "-1"]).is_err());
    }
}
