//! Hexpaint library crate
//!
//! This crate provides the core functionality for the `hexpaint` CLI, which
//! reads hex color codes one per line and writes a solid-color PNG for each.
//! It is organized into small modules: `size` (the `<width>x<height>` type),
//! `color` (hex parsing and normalization), `input` (file or piped stdin
//! source), and `generate` (raster fill, PNG output and the per-line loop).
//! The binary `src/main.rs` calls `hexpaint::run()` to execute the CLI.
//!
//! Public API
//!
//! - `run()`: CLI entrypoint used by the binary.
//!
//! See each module for detailed documentation on functions and behavior.

pub mod color;
pub mod generate;
pub mod input;
pub mod size;

use std::io;
use std::path::{Path, PathBuf};

use clap::{ArgAction, CommandFactory, Parser};
use log::LevelFilter;

use crate::generate::{Summary, generate_images};
use crate::input::open_input;
use crate::size::Size;

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The output image size, as <width>x<height>
    #[arg(short = 's', long = "size", default_value = "800x600")]
    size: Size,

    /// Input file, one hex color per line (reads piped stdin when omitted)
    #[arg(short = 'f', long = "file")]
    file: Option<PathBuf>,

    /// Log progress notes in addition to warnings
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    verbose: bool,
}

/// Run the Hexpaint CLI.
///
/// Parses CLI arguments, opens the input source and writes one PNG per valid
/// line into the current directory. Invalid lines and per-image write
/// failures are logged and skipped; the run still exits 0.
///
/// Exits non-zero when:
/// - `--size` is malformed (clap prints the usage, exit code 2);
/// - the input file cannot be opened, or stdin is a terminal or empty
///   (exit code 1, usage printed);
/// - reading the input fails part way through with an I/O error (exit
///   code 1). Lines that are not UTF-8 are skipped, not fatal.
///
/// Example:
///
/// ```no_run
/// hexpaint::run(); // called from src/main.rs
/// ```
pub fn run() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let input = open_input(cli.file.as_deref()).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        eprintln!("{}", Cli::command().render_usage());
        std::process::exit(1);
    });

    println!("Width: {}px", cli.size.width);
    println!("Height: {}px", cli.size.height);

    match generate_images(input, cli.size, Path::new("."), io::stdout().lock()) {
        Ok(summary) => println!("{}", summary_line(&summary)),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    pretty_env_logger::formatted_builder()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn summary_line(summary: &Summary) -> String {
    let plural = |n: usize, word: &str| {
        if n == 1 {
            format!("{} {}", n, word)
        } else {
            format!("{} {}s", n, word)
        }
    };
    format!(
        "Generated {} ({} skipped)",
        plural(summary.generated, "image"),
        plural(summary.skipped, "line")
    )
}
