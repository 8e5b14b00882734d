//! Loading G-code source programs

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::debug;

use crate::analyzer::{PathAnalysis, PathAnalyzer};

/// G-code program read into memory, one entry per source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceProgram {
    /// File name without directories
    pub name: String,
    pub lines: Vec<String>,
    /// Bytes of line content plus one newline per line
    pub bytes_read: u64,
}

impl SourceProgram {
    /// Read a program from disk
    ///
    /// # Errors
    /// Fails when the path is not a readable file or is not valid UTF-8
    pub fn read(path: &Path) -> Result<Self> {
        if !path.is_file() {
            bail!("G-code file not found: {}", path.display());
        }

        let file =
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;

        let mut lines = Vec::new();
        let mut bytes_read = 0u64;
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line
                .with_context(|| format!("Failed to read {} at line {}", path.display(), index + 1))?;
            bytes_read += line.len() as u64 + 1;
            lines.push(line);
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!("Read {} lines ({} bytes) from {}", lines.len(), bytes_read, name);

        Ok(Self {
            name,
            lines,
            bytes_read,
        })
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Run an analyzer over every line
    ///
    /// # Errors
    /// Fails on the first malformed axis word, naming the file
    pub fn analyze(&self, analyzer: &PathAnalyzer) -> Result<PathAnalysis> {
        analyzer
            .analyze(&self.lines)
            .with_context(|| format!("Failed to analyze {}", self.name))
    }
}
