//! aruco-a4: render ArUco markers centered on A4 pages for printing.

use aruco_targets_cli::{exit_status, print_dictionaries, CliResult, CommonArgs};
use aruco_targets_core::mm_to_px;
use aruco_targets_print::{generate_a4, A4Layout};
use clap::Parser;
use std::{path::PathBuf, process::ExitCode};

const PRINT_TIPS: &str = "Print tips:
1. Use a laser printer or a high-quality inkjet printer
2. Print at 'Actual size' / 100% scale
3. Use white A4 paper for good contrast
4. Check that the printed marker is sharp and complete";

#[derive(Parser)]
#[command(name = "aruco-a4")]
#[command(about = "Generate A4 print pages with one ArUco marker, title, footer and corner crosshairs")]
#[command(version, after_help = PRINT_TIPS)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Print resolution in dots per inch.
    #[arg(long, default_value_t = 300, value_parser = clap::value_parser!(u32).range(1..))]
    dpi: u32,

    /// Output directory (created if missing).
    #[arg(long, default_value = "aruco_a4")]
    output: PathBuf,

    /// Physical marker side in millimetres (overrides the layout file).
    #[arg(long)]
    marker_mm: Option<f64>,

    /// JSON page layout (paper size, marker size, text and crosshair settings).
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Write the effective layout as JSON to this file and exit.
    #[arg(long, value_name = "FILE")]
    write_layout: Option<PathBuf>,
}

fn load_layout(cli: &Cli) -> CliResult<A4Layout> {
    let mut layout = match &cli.layout {
        Some(path) => A4Layout::load_json(path)?,
        None => A4Layout::default(),
    };
    if let Some(mm) = cli.marker_mm {
        layout.marker_mm = mm;
    }
    layout.validate()?;
    Ok(layout)
}

fn run(cli: &Cli) -> CliResult<()> {
    let common = &cli.common;
    common.init_logging()?;
    if common.list_dicts {
        print_dictionaries();
        return Ok(());
    }

    let layout = load_layout(cli)?;
    if let Some(path) = &cli.write_layout {
        layout.write_json(path)?;
        println!("Layout written to: {}", path.display());
        return Ok(());
    }
    let ids = common.ids()?;
    let (width, height) = layout.paper.pixels(cli.dpi);
    let marker_px = mm_to_px(layout.marker_mm, cli.dpi);

    println!("=== ArUco A4 Print Generator ===");
    println!("Output directory: {}", cli.output.display());
    println!("Print DPI: {}", cli.dpi);
    println!();
    if common.batch {
        println!("Generating markers ID 0 to {}...", common.id);
    } else {
        println!("Generating single marker ID {}...", common.id);
    }

    let mut reports = Vec::new();
    for id in ids {
        println!("Generating marker ID {id}:");
        println!("  Page size: {width} x {height} pixels");
        println!(
            "  Marker size: {marker_px} x {marker_px} pixels ({}mm)",
            layout.marker_mm
        );
        println!("  Print DPI: {}", cli.dpi);

        let report = generate_a4(&common.request(id), cli.dpi, &layout, &cli.output)?;
        println!("  Saved: {}", report.path.display());
        println!("  File size: {:.1} MB", report.file_mb());
        println!();
        reports.push(report);
    }
    common.write_report(&reports)?;

    println!("Done!");
    println!();
    println!("{PRINT_TIPS}");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    exit_status(run(&cli))
}
