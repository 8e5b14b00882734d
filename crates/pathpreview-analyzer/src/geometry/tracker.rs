//! Position tracking across coordinate shifts
//!
//! Turns the partial axis words of a line into a fully specified point and
//! keeps the `G92` shift up to date. Both operations are pure; the caller
//! threads position and shift from line to line.

use pathpreview_core::{Axis, PartialPoint, Point3D, ShiftVector};

/// Fill missing axes from the previous point and apply the shift
///
/// A given axis becomes `value + shift`. An omitted axis holds the previous
/// value as-is, since the shift was already folded in when it was resolved.
pub fn resolve_point(partial: &PartialPoint, previous: Point3D, shift: ShiftVector) -> Point3D {
    Axis::ALL.iter().fold(previous, |point, &axis| match partial.get(axis) {
        Some(value) => point.with(axis, value + shift.get(axis)),
        None => point,
    })
}

/// Update the running shift from a `G92` line
///
/// `G92` renames the current physical position, so each named axis moves the
/// shift by the negative of the stated value. Axes not named keep their shift.
pub fn apply_shift(partial: &PartialPoint, shift: ShiftVector) -> ShiftVector {
    Axis::ALL.iter().fold(shift, |acc, &axis| match partial.get(axis) {
        Some(value) => acc.with(axis, acc.get(axis) - value),
        None => acc,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_fills_from_previous() {
        let previous = Point3D::new(1.0, 2.0, 3.0);
        let partial = PartialPoint::new().with(Axis::X, 10.0);
        let p = resolve_point(&partial, previous, ShiftVector::zero());
        assert_eq!(p, Point3D::new(10.0, 2.0, 3.0));
    }

    #[test]
    fn test_resolve_full_line() {
        let partial = PartialPoint::new()
            .with(Axis::X, 10.0)
            .with(Axis::Y, 20.0)
            .with(Axis::Z, 5.0);
        let p = resolve_point(&partial, Point3D::origin(), ShiftVector::zero());
        assert_eq!(p, Point3D::new(10.0, 20.0, 5.0));
    }

    #[test]
    fn test_shift_applies_only_to_given_axes() {
        let previous = Point3D::new(-5.0, 7.0, 0.0);
        let shift = ShiftVector::new(-5.0, 3.0, 1.0);
        let partial = PartialPoint::new().with(Axis::X, 10.0);
        let p = resolve_point(&partial, previous, shift);
        // X is shifted, Y and Z are held without re-applying the shift
        assert_eq!(p, Point3D::new(5.0, 7.0, 0.0));
    }

    #[test]
    fn test_center_offsets_do_not_affect_resolution() {
        let partial = PartialPoint::new()
            .with(Axis::X, 1.0)
            .with_center_offset(4.0, 4.0);
        let p = resolve_point(&partial, Point3D::origin(), ShiftVector::new(1.0, 1.0, 1.0));
        assert_eq!(p, Point3D::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_apply_shift_negates_stated_value() {
        let partial = PartialPoint::new().with(Axis::X, 5.0);
        let shift = apply_shift(&partial, ShiftVector::zero());
        assert_eq!(shift, ShiftVector::new(-5.0, 0.0, 0.0));
    }

    #[test]
    fn test_apply_shift_accumulates() {
        let partial = PartialPoint::new().with(Axis::X, 2.0).with(Axis::Z, -1.0);
        let shift = apply_shift(&partial, ShiftVector::new(-5.0, 4.0, 0.0));
        assert_eq!(shift, ShiftVector::new(-7.0, 4.0, 1.0));
    }

    #[test]
    fn test_apply_shift_with_zero_keeps_shift() {
        let partial = PartialPoint::new().with(Axis::Y, 0.0);
        let shift = apply_shift(&partial, ShiftVector::new(1.0, 2.0, 3.0));
        assert_eq!(shift, ShiftVector::new(1.0, 2.0, 3.0));
    }
}
