//! aruco-marker: render ArUco markers with a white margin and an id caption.

use aruco_targets_cli::{exit_status, print_dictionaries, CliResult, CommonArgs};
use aruco_targets_print::{generate_marker, BorderedLayout};
use clap::Parser;
use std::{path::PathBuf, process::ExitCode};

#[derive(Parser)]
#[command(name = "aruco-marker")]
#[command(about = "Generate ArUco marker images with a 10% white margin")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Marker side in pixels, without the margin.
    #[arg(long, default_value_t = 200, value_parser = clap::value_parser!(u32).range(1..))]
    size: u32,

    /// Output directory (created if missing).
    #[arg(long, default_value = ".")]
    output: PathBuf,

    /// Omit the `ID: n` caption.
    #[arg(long)]
    no_label: bool,
}

fn run(cli: &Cli) -> CliResult<()> {
    let common = &cli.common;
    common.init_logging()?;
    if common.list_dicts {
        print_dictionaries();
        return Ok(());
    }

    let layout = BorderedLayout {
        label: !cli.no_label,
        ..BorderedLayout::default()
    };

    let mut reports = Vec::new();
    for id in common.ids()? {
        let report = generate_marker(&common.request(id), cli.size, &layout, &cli.output)?;
        println!("Marker saved to: {}", report.path.display());
        reports.push(report);
    }
    common.write_report(&reports)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    exit_status(run(&cli))
}
