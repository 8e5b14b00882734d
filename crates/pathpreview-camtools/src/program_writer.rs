//! Preview program rendering and output

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{CamToolError, CamToolResult};
use crate::preview_program::{PreviewPlan, PreviewStep};
use pathpreview_core::Point3D;

/// Default number of decimals for output coordinates
pub const DEFAULT_DECIMAL_PLACES: usize = 3;

/// Renders a [`PreviewPlan`] as G-code
#[derive(Debug, Clone)]
pub struct PreviewProgramWriter {
    decimal_places: usize,
}

impl Default for PreviewProgramWriter {
    fn default() -> Self {
        Self::new(DEFAULT_DECIMAL_PLACES)
    }
}

impl PreviewProgramWriter {
    pub fn new(decimal_places: usize) -> Self {
        Self { decimal_places }
    }

    fn number(&self, value: f64) -> String {
        // Avoid "-0.000" for values that round to zero
        let formatted = format!("{:.*}", self.decimal_places, value);
        if formatted.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
            formatted.trim_start_matches('-').to_string()
        } else {
            formatted
        }
    }

    fn coordinates(&self, p: &Point3D) -> String {
        format!(
            "X{} Y{} Z{}",
            self.number(p.x),
            self.number(p.y),
            self.number(p.z)
        )
    }

    fn header(&self, project_name: &str) -> String {
        format!(
            "(CNCPathPreview)\n\
             (Release: {})\n\
             (File output is supplied without liability.)\n\
             (Output paths must be checked for correctness before usage.)\n\n\
             (Project: {})\n\n\
             G90\n\n",
            env!("CARGO_PKG_VERSION"),
            project_name
        )
    }

    /// Render the full program text
    pub fn render(&self, plan: &PreviewPlan, project_name: &str) -> String {
        let mut gcode = self.header(project_name);

        for step in &plan.steps {
            match step {
                PreviewStep::ZminAdvisory { z_min } => {
                    gcode.push_str(&format!("MSG \"Zmin of this job: {}\"\n", self.number(*z_min)));
                }
                PreviewStep::Origin { position } => {
                    gcode.push_str(&format!("G00 {}\n", self.coordinates(position)));
                }
                PreviewStep::Extreme { target, position } => {
                    let coordinates = self.coordinates(position);
                    gcode.push_str(&format!(
                        "MSG \"PathPreview: Hit START to go to {}: {}\"\n",
                        target, coordinates
                    ));
                    gcode.push_str("M00\n");
                    gcode.push_str(&format!("G00 {}\n", coordinates));
                }
            }
        }

        gcode.push_str("M30\n");
        gcode
    }

    /// Render the program and write it to `path`
    ///
    /// The text goes to a temporary file next to the destination first and
    /// is moved into place only once fully written, so a failure never
    /// leaves a partial program behind.
    pub fn write(&self, plan: &PreviewPlan, project_name: &str, path: &Path) -> CamToolResult<()> {
        let gcode = self.render(plan, project_name);
        let write_failed = |source: std::io::Error| CamToolError::WriteFailed {
            path: path.to_path_buf(),
            source,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir).map_err(write_failed)?;
        file.write_all(gcode.as_bytes()).map_err(write_failed)?;
        file.flush().map_err(write_failed)?;
        file.persist(path).map_err(|e| write_failed(e.error))?;

        debug!("Wrote {} bytes to {}", gcode.len(), path.display());
        Ok(())
    }
}
