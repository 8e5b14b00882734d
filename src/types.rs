use std::path::PathBuf;

use pathpreview_analyzer::{Bounds, MoveStatistics};
use pathpreview_camtools::PreviewPlan;
use pathpreview_settings::ConfigDiagnostic;

/// Application-level types for the root crate
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// G-code source file
    pub input: PathBuf,
    /// Destination for the preview program; derived from `input` when unset
    pub output: Option<PathBuf>,
    /// Safety height overriding the configured one
    pub safety_height: Option<f64>,
    /// Explicit config file
    pub config: Option<PathBuf>,
}

/// What a run produced
#[derive(Debug, Clone)]
pub struct RunReport {
    pub output_path: PathBuf,
    /// Lines read from the source program
    pub source_lines: usize,
    pub bounds: Bounds,
    pub statistics: MoveStatistics,
    pub plan: PreviewPlan,
    /// Settings that had to be replaced by defaults
    pub diagnostics: Vec<ConfigDiagnostic>,
}
