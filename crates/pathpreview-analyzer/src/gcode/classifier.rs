//! Command line classification
//!
//! Each line is classified on its own; no modal motion state carries over
//! from one line to the next.

use serde::{Deserialize, Serialize};

/// Kind of command found on a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandKind {
    /// Rapid or feed linear move (G0, G00, G1, G01)
    LinearMove,
    /// Clockwise arc (G2, G02)
    ArcCw,
    /// Counter-clockwise arc (G3, G03)
    ArcCcw,
    /// Coordinate system shift (G92)
    CoordinateShift,
    /// Anything else; ignored by the analysis
    Other,
}

impl CommandKind {
    /// Classify a (comment-free) command line
    ///
    /// Matches whole whitespace-delimited tokens only, so `G01` inside
    /// `G010` or `XG0` does not count. The first motion token on the line wins.
    pub fn classify(line: &str) -> Self {
        line.split_whitespace()
            .find_map(Self::from_token)
            .unwrap_or(CommandKind::Other)
    }

    fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "G0" | "G00" | "G1" | "G01" => Some(CommandKind::LinearMove),
            "G2" | "G02" => Some(CommandKind::ArcCw),
            "G3" | "G03" => Some(CommandKind::ArcCcw),
            "G92" => Some(CommandKind::CoordinateShift),
            _ => None,
        }
    }

    /// True for either arc direction
    pub fn is_arc(&self) -> bool {
        matches!(self, CommandKind::ArcCw | CommandKind::ArcCcw)
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LinearMove => write!(f, "linear move"),
            Self::ArcCw => write!(f, "clockwise arc"),
            Self::ArcCcw => write!(f, "counter-clockwise arc"),
            Self::CoordinateShift => write!(f, "coordinate shift"),
            Self::Other => write!(f, "other"),
        }
    }
}
