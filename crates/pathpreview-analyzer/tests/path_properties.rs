//! Property tests over generated move programs

use pathpreview_analyzer::PathAnalyzer;
use pathpreview_core::Axis;
use proptest::prelude::*;

fn coordinate() -> impl Strategy<Value = f64> {
    (-5000i32..5000).prop_map(|v| v as f64 / 10.0)
}

fn command_line() -> impl Strategy<Value = String> {
    prop_oneof![
        (coordinate(), coordinate(), coordinate())
            .prop_map(|(x, y, z)| format!("G01 X{x} Y{y} Z{z}")),
        (coordinate(), coordinate()).prop_map(|(x, y)| format!("G00 X{x} Y{y}")),
        (coordinate(), coordinate(), coordinate(), coordinate())
            .prop_map(|(x, y, i, j)| format!("G02 X{x} Y{y} I{i} J{j}")),
        (coordinate(), coordinate(), coordinate(), coordinate())
            .prop_map(|(x, y, i, j)| format!("G03 X{x} Y{y} I{i} J{j}")),
        coordinate().prop_map(|x| format!("G92 X{x}")),
        Just("G21".to_string()),
    ]
}

proptest! {
    #[test]
    fn analysis_is_deterministic(lines in prop::collection::vec(command_line(), 0..40)) {
        let first = PathAnalyzer::new().analyze(&lines).unwrap();
        let second = PathAnalyzer::new().analyze(&lines).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.bounds(), second.bounds());
    }

    #[test]
    fn bounds_extremes_are_emitted_points(lines in prop::collection::vec(command_line(), 1..40)) {
        let analysis = PathAnalyzer::new().analyze(&lines).unwrap();
        if let Some(bounds) = analysis.bounds() {
            for axis in Axis::ALL {
                let extent = bounds.extent(axis);
                prop_assert!(analysis.points.contains(&extent.min));
                prop_assert!(analysis.points.contains(&extent.max));
                for point in &analysis.points {
                    prop_assert!(point.get(axis) >= bounds.min_value(axis));
                    prop_assert!(point.get(axis) <= bounds.max_value(axis));
                }
            }
        }
    }

    #[test]
    fn position_follows_last_emitted_point(lines in prop::collection::vec(command_line(), 1..40)) {
        let analysis = PathAnalyzer::new().analyze(&lines).unwrap();
        if let Some(last) = analysis.points.last() {
            prop_assert_eq!(&analysis.final_state.position, last);
        }
    }
}
