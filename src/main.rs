use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pathpreview::{init_logging, run, RunOptions};

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

/// Traces the dimensions of a G-code job's cutting paths and writes a
/// G-code program to check that the workpiece fits.
#[derive(Parser, Debug)]
#[command(name = "pathpreview", version, long_version = LONG_VERSION, about)]
struct Cli {
    /// G-code file to analyze
    file: PathBuf,

    /// Safety Z height at which the machine approaches the extreme coordinates
    #[arg(short = 'z', long = "zsafety", allow_negative_numbers = true)]
    zsafety: Option<f64>,

    /// Where to write the preview program (default: PathPreview_<FILE> next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (.toml or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging() {
        eprintln!("Warning: {e:#}");
    }

    let options = RunOptions {
        input: cli.file,
        output: cli.output,
        safety_height: cli.zsafety,
        config: cli.config,
    };

    match run(&options) {
        Ok(report) => {
            for diagnostic in &report.diagnostics {
                eprintln!("Warning: {diagnostic}");
            }
            println!("{}", report.output_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
