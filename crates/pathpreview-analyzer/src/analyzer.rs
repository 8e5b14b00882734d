//! Sequential path analysis
//!
//! Every line depends on the position and shift left behind by the line
//! before it, so analysis is a left-to-right fold over an explicit
//! [`AnalyzerState`] rather than a map over lines.

use pathpreview_core::{GcodeError, Point3D, Result, ShiftVector};
use serde::{Deserialize, Serialize};
use tracing::{info, trace, warn};

use crate::gcode::{parse_axes, remove_comments, CommandKind};
use crate::geometry::{apply_shift, resolve_arc, resolve_point, ArcDirection, Bounds, PointSequence};

/// Position and shift carried from one line to the next
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerState {
    /// Last resolved end point; always fully specified
    pub position: Point3D,
    /// Running `G92` shift
    pub shift: ShiftVector,
}

/// Result of analyzing a single line
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub kind: CommandKind,
    pub state: AnalyzerState,
    /// Points of interest emitted by the line, end point last
    pub points: PointSequence,
}

/// Command counts collected during analysis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveStatistics {
    pub linear_moves: u64,
    pub cw_arcs: u64,
    pub ccw_arcs: u64,
    pub coordinate_shifts: u64,
    /// Arcs skipped because their radius was not positive
    pub degenerate_arcs: u64,
    /// Lines classified as anything else
    pub ignored_lines: u64,
}

impl MoveStatistics {
    /// Total motion commands seen
    pub fn total_moves(&self) -> u64 {
        self.linear_moves + self.cw_arcs + self.ccw_arcs
    }

    fn record(&mut self, kind: CommandKind) {
        match kind {
            CommandKind::LinearMove => self.linear_moves += 1,
            CommandKind::ArcCw => self.cw_arcs += 1,
            CommandKind::ArcCcw => self.ccw_arcs += 1,
            CommandKind::CoordinateShift => self.coordinate_shifts += 1,
            CommandKind::Other => self.ignored_lines += 1,
        }
    }
}

/// Outcome of analyzing a whole program
#[derive(Debug, Clone, PartialEq)]
pub struct PathAnalysis {
    /// All points of interest in program order
    pub points: PointSequence,
    /// State after the last line
    pub final_state: AnalyzerState,
    pub statistics: MoveStatistics,
}

impl PathAnalysis {
    /// Bounding envelope of all points; `None` when no move produced a point
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::fold(self.points.iter().copied())
    }

    /// Bounding envelope, failing when the path is empty
    pub fn require_bounds(&self) -> Result<Bounds> {
        self.bounds().ok_or(GcodeError::EmptyPath)
    }
}

/// Folds G-code lines into a point sequence
#[derive(Debug, Clone, Default)]
pub struct PathAnalyzer {
    initial: AnalyzerState,
}

impl PathAnalyzer {
    /// Analyzer starting at the origin with no shift
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer starting from a given state
    pub fn with_initial_state(initial: AnalyzerState) -> Self {
        Self { initial }
    }

    /// Analyze one line against the incoming state
    ///
    /// `line_number` is 1-based and only used for diagnostics. Lines that are
    /// not motion or shift commands leave the state untouched and emit
    /// nothing. A degenerate arc emits nothing and keeps the position.
    pub fn step(state: AnalyzerState, line_number: usize, line: &str) -> Result<StepOutcome> {
        let command = remove_comments(line);
        let kind = CommandKind::classify(&command);
        trace!("Line {}: {} ({})", line_number, kind, command);

        let unchanged = |kind| StepOutcome {
            kind,
            state,
            points: PointSequence::new(),
        };

        let direction = match kind {
            CommandKind::Other => return Ok(unchanged(kind)),
            CommandKind::CoordinateShift => {
                let partial = parse_axes(&command, line_number)?;
                let shift = apply_shift(&partial, state.shift);
                info!("Found coordinate shift: {}", shift);
                return Ok(StepOutcome {
                    kind,
                    state: AnalyzerState { shift, ..state },
                    points: PointSequence::new(),
                });
            }
            CommandKind::LinearMove => {
                let partial = parse_axes(&command, line_number)?;
                let end = resolve_point(&partial, state.position, state.shift);
                return Ok(StepOutcome {
                    kind,
                    state: AnalyzerState {
                        position: end,
                        ..state
                    },
                    points: vec![end],
                });
            }
            CommandKind::ArcCw => ArcDirection::Clockwise,
            CommandKind::ArcCcw => ArcDirection::CounterClockwise,
        };

        let partial = parse_axes(&command, line_number)?;
        let points = resolve_arc(&partial, direction, state.position, state.shift);
        let Some(&end) = points.last() else {
            warn!(
                "Line {}: arc has no usable radius, skipping ({})",
                line_number, command
            );
            return Ok(unchanged(kind));
        };

        Ok(StepOutcome {
            kind,
            state: AnalyzerState {
                position: end,
                ..state
            },
            points,
        })
    }

    /// Analyze a full program
    ///
    /// Stops at the first malformed axis word.
    pub fn analyze<I, S>(&self, lines: I) -> Result<PathAnalysis>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = self.initial;
        let mut points = PointSequence::new();
        let mut statistics = MoveStatistics::default();
        let mut line_count = 0usize;

        for (index, line) in lines.into_iter().enumerate() {
            line_count += 1;
            let outcome = Self::step(state, index + 1, line.as_ref())?;
            statistics.record(outcome.kind);
            if outcome.kind.is_arc() && outcome.points.is_empty() {
                statistics.degenerate_arcs += 1;
            }
            state = outcome.state;
            points.extend(outcome.points);
        }

        info!(
            "Analysis complete: lines={}, moves={}, G0/G1={}, G2={}, G3={}, G92={}, points={}",
            line_count,
            statistics.total_moves(),
            statistics.linear_moves,
            statistics.cw_arcs,
            statistics.ccw_arcs,
            statistics.coordinate_shifts,
            points.len()
        );

        Ok(PathAnalysis {
            points,
            final_state: state,
            statistics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_linear_move() {
        let outcome = PathAnalyzer::step(AnalyzerState::default(), 1, "G01 X10 Y20 Z5").unwrap();
        assert_eq!(outcome.kind, CommandKind::LinearMove);
        assert_eq!(outcome.points, vec![Point3D::new(10.0, 20.0, 5.0)]);
        assert_eq!(outcome.state.position, Point3D::new(10.0, 20.0, 5.0));
    }

    #[test]
    fn test_step_other_keeps_state() {
        let state = AnalyzerState {
            position: Point3D::new(1.0, 2.0, 3.0),
            shift: ShiftVector::new(4.0, 5.0, 6.0),
        };
        let outcome = PathAnalyzer::step(state, 1, "X99 Y99").unwrap();
        assert_eq!(outcome.kind, CommandKind::Other);
        assert_eq!(outcome.state, state);
        assert!(outcome.points.is_empty());
    }

    #[test]
    fn test_step_other_ignores_malformed_words() {
        let outcome = PathAnalyzer::step(AnalyzerState::default(), 1, "M03 Xjunk").unwrap();
        assert_eq!(outcome.kind, CommandKind::Other);
    }

    #[test]
    fn test_step_shift_updates_shift_only() {
        let state = AnalyzerState {
            position: Point3D::new(3.0, 0.0, 0.0),
            shift: ShiftVector::zero(),
        };
        let outcome = PathAnalyzer::step(state, 1, "G92 X5").unwrap();
        assert_eq!(outcome.state.shift, ShiftVector::new(-5.0, 0.0, 0.0));
        assert_eq!(outcome.state.position, Point3D::new(3.0, 0.0, 0.0));
        assert!(outcome.points.is_empty());
    }

    #[test]
    fn test_step_degenerate_arc_keeps_position() {
        let state = AnalyzerState {
            position: Point3D::new(1.0, 1.0, 0.0),
            shift: ShiftVector::zero(),
        };
        let outcome = PathAnalyzer::step(state, 4, "G02 X5 Y5 I0 J0").unwrap();
        assert_eq!(outcome.kind, CommandKind::ArcCw);
        assert!(outcome.points.is_empty());
        assert_eq!(outcome.state, state);
    }

    #[test]
    fn test_step_reports_malformed_line() {
        let err = PathAnalyzer::step(AnalyzerState::default(), 9, "G01 X1O").unwrap_err();
        match err {
            GcodeError::InvalidParameter {
                line_number, param, ..
            } => {
                assert_eq!(line_number, 9);
                assert_eq!(param, "X1O");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_step_strips_comments() {
        let outcome =
            PathAnalyzer::step(AnalyzerState::default(), 1, "G00 X1 (go to X start)").unwrap();
        assert_eq!(outcome.points, vec![Point3D::new(1.0, 0.0, 0.0)]);
    }

    #[test]
    fn test_analyze_counts_commands() {
        let program = "G21\nG90\nG00 Z5\nG01 X10\nG02 X0 Y10 I-10 J0\nG03 X-10 Y0 I0 J-10\nG92 X0\nG02 X1 I0 J0\nM30";
        let analysis = PathAnalyzer::new().analyze(program.lines()).unwrap();
        let stats = analysis.statistics;
        assert_eq!(stats.linear_moves, 2);
        assert_eq!(stats.cw_arcs, 2);
        assert_eq!(stats.ccw_arcs, 1);
        assert_eq!(stats.coordinate_shifts, 1);
        assert_eq!(stats.degenerate_arcs, 1);
        assert_eq!(stats.ignored_lines, 3);
        assert_eq!(stats.total_moves(), 5);
    }

    #[test]
    fn test_empty_program_has_no_bounds() {
        let analysis = PathAnalyzer::new().analyze(["G21", "M30"]).unwrap();
        assert!(analysis.points.is_empty());
        assert!(analysis.bounds().is_none());
        assert!(analysis.require_bounds().is_err());
    }

    #[test]
    fn test_custom_initial_state() {
        let analyzer = PathAnalyzer::with_initial_state(AnalyzerState {
            position: Point3D::new(10.0, 0.0, 0.0),
            shift: ShiftVector::zero(),
        });
        let analysis = analyzer.analyze(["G02 X10 Y0 I-10 J0"]).unwrap();
        assert_eq!(analysis.points.len(), 5);
    }
}
