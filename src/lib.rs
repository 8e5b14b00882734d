//! # PathPreview
//!
//! Traces the true three-dimensional envelope of a G-code toolpath,
//! including the extremes of circular arcs, and writes a verification
//! program that drives the machine to each extreme at a safe height.
//!
//! ## Architecture
//!
//! PathPreview is organized as a workspace with multiple crates:
//!
//! 1. **pathpreview-core** - Point and shift models, error types
//! 2. **pathpreview-analyzer** - Line classification, position tracking, arc extremes, bounds
//! 3. **pathpreview-camtools** - Preview plan generation and G-code output
//! 4. **pathpreview-settings** - Configuration and safety height handling
//! 5. **pathpreview** - Main binary that integrates all crates

pub mod types;

pub use pathpreview_analyzer::{
    AnalyzerState, ArcDirection, ArcSpec, Bounds, CommandKind, MoveStatistics, PathAnalysis,
    PathAnalyzer, PointSequence, SourceProgram,
};
pub use pathpreview_camtools::{
    CamToolError, ExtremeTarget, PreviewPlan, PreviewProgramGenerator, PreviewProgramWriter,
    PreviewStep,
};
pub use pathpreview_core::{Axis, GcodeError, PartialPoint, Point3D, Result, ShiftVector};
pub use pathpreview_settings::{Config, ConfigDiagnostic, PreviewSettings, SafetyHeight};
pub use types::{RunOptions, RunReport};

use std::path::Path;

use anyhow::{bail, Context};
use tracing::info;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, leaving stdout for results
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install logging subscriber")?;

    Ok(())
}

/// Analyze a G-code file and write its preview program
///
/// # Errors
/// Fails on unreadable input, malformed axis words, a path without motion,
/// an invalid config file, an output path naming the input file, or when
/// the output cannot be written.
pub fn run(options: &RunOptions) -> anyhow::Result<RunReport> {
    let config = Config::load_or_default(options.config.as_deref())?;
    let mut diagnostics = Vec::new();

    let requested_height = options
        .safety_height
        .unwrap_or(config.preview.safety_height);
    let safety_height = SafetyHeight::sanitize(requested_height);
    diagnostics.extend(safety_height.diagnostic);

    let source = SourceProgram::read(&options.input)?;
    let analysis = source.analyze(&PathAnalyzer::new())?;
    let bounds = analysis.require_bounds()?;
    info!(
        "Job size: X{:.3} Y{:.3} Z{:.3}",
        bounds.size(Axis::X),
        bounds.size(Axis::Y),
        bounds.size(Axis::Z)
    );

    let plan = PreviewProgramGenerator::new(safety_height.value)?.generate(&bounds);

    let output_path = options
        .output
        .clone()
        .unwrap_or_else(|| config.preview.output_path_for(&options.input));
    if is_same_file(&output_path, &options.input) {
        bail!(
            "Refusing to overwrite the source program {} with its preview",
            options.input.display()
        );
    }
    let project_name = output_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.name.clone());

    PreviewProgramWriter::new(config.preview.decimal_places).write(
        &plan,
        &project_name,
        &output_path,
    )?;
    info!("Preview program written to {}", output_path.display());

    Ok(RunReport {
        output_path,
        source_lines: source.line_count(),
        bounds,
        statistics: analysis.statistics,
        plan,
        diagnostics,
    })
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
