//! Geometric predicates for planar triangulation.
//!
//! This module contains the two predicates the divide-and-conquer
//! construction is built on: the orientation test and the in-circle test.
//! Both are pure functions of point coordinates, evaluated in ordinary
//! floating-point arithmetic — there is no exact or adaptive-precision
//! fallback. See [`in_circle`] for the consequences.

use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::CoordinateScalar;

/// Represents the orientation of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// The triple winds clockwise (negative cross product).
    Clockwise,
    /// The triple is collinear (zero cross product).
    Degenerate,
    /// The triple winds counterclockwise (positive cross product).
    Counterclockwise,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clockwise => write!(f, "CLOCKWISE"),
            Self::Degenerate => write!(f, "DEGENERATE"),
            Self::Counterclockwise => write!(f, "COUNTERCLOCKWISE"),
        }
    }
}

/// Determines the orientation of the point triple `(a, b, c)`.
///
/// Computed as the sign of the 2D cross product `(b − a) × (c − a)`.
///
/// # Examples
///
/// ```rust
/// use quadedge::geometry::predicates::{Orientation, orientation};
/// use quadedge::point;
///
/// let a = point!(0.0, 0.0);
/// let b = point!(1.0, 0.0);
/// assert_eq!(orientation(a, b, point!(0.0, 1.0)), Orientation::Counterclockwise);
/// assert_eq!(orientation(a, b, point!(0.0, -1.0)), Orientation::Clockwise);
/// assert_eq!(orientation(a, b, point!(2.0, 0.0)), Orientation::Degenerate);
/// ```
#[inline]
#[must_use]
pub fn orientation<T>(a: Point<T>, b: Point<T>, c: Point<T>) -> Orientation
where
    T: CoordinateScalar,
{
    let det = (b.x() - a.x()) * (c.y() - a.y()) - (b.y() - a.y()) * (c.x() - a.x());
    if det > T::zero() {
        Orientation::Counterclockwise
    } else if det < T::zero() {
        Orientation::Clockwise
    } else {
        Orientation::Degenerate
    }
}

/// Returns `true` iff `c` lies strictly to the left of the directed line
/// `a → b`.
///
/// Collinear and clockwise configurations return `false`.
#[inline]
#[must_use]
pub fn ccw<T>(a: Point<T>, b: Point<T>, c: Point<T>) -> bool
where
    T: CoordinateScalar,
{
    orientation(a, b, c) == Orientation::Counterclockwise
}

/// Returns `true` iff `d` lies strictly inside the circle through `a`, `b`,
/// and `c`, where `(a, b, c)` is assumed counterclockwise.
///
/// Returns `false` immediately when `d` coincides exactly with any of the
/// three circle points. Otherwise evaluates the standard lifted-paraboloid
/// determinant expansion.
///
/// # Numerical caveat
///
/// The determinant sign is tested against a fixed threshold of one rather
/// than zero, as a crude guard against floating-point noise near cocircular
/// configurations. The guard band is *absolute*: the determinant scales with
/// the fourth power of the coordinate magnitude, so for coordinates well
/// below one the guard swallows legitimate positive results, while for large
/// coordinates it is negligible. Near-cocircular point sets can therefore be
/// misclassified, silently yielding a plausible but non-Delaunay edge. This
/// is a deliberate, documented weak spot of the floating-point predicate;
/// changing the threshold changes which triangulations are produced.
///
/// # Examples
///
/// ```rust
/// use quadedge::geometry::predicates::in_circle;
/// use quadedge::point;
///
/// let a = point!(0.0, 0.0);
/// let b = point!(10.0, 0.0);
/// let c = point!(0.0, 10.0);
/// assert!(in_circle(a, b, c, point!(5.0, 5.0)));
/// assert!(!in_circle(a, b, c, point!(20.0, 20.0)));
/// // Exactly cocircular: not strictly inside.
/// assert!(!in_circle(a, b, c, point!(10.0, 10.0)));
/// ```
#[must_use]
pub fn in_circle<T>(a: Point<T>, b: Point<T>, c: Point<T>, d: Point<T>) -> bool
where
    T: CoordinateScalar,
{
    if a == d || b == d || c == d {
        return false;
    }

    let sa = a.x() * a.x() + a.y() * a.y();
    let sb = b.x() * b.x() + b.y() * b.y();
    let sc = c.x() * c.x() + c.y() * c.y();
    let sd = d.x() * d.x() + d.y() * d.y();

    let d1 = sc - sd;
    let d2 = c.y() - d.y();
    let d3 = c.y() * sd - sc * d.y();
    let d4 = c.x() - d.x();
    let d5 = c.x() * sd - sc * d.x();
    let d6 = c.x() * d.y() - c.y() * d.x();

    let det = a.x() * (b.y() * d1 - sb * d2 + d3) - a.y() * (b.x() * d1 - sb * d4 + d5)
        + sa * (b.x() * d2 - b.y() * d4 + d6)
        - b.x() * d3
        + b.y() * d5
        - sb * d6;

    // Fixed positive guard band instead of a strict zero test.
    det > T::one()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point;

    #[test]
    fn orientation_detects_all_three_cases() {
        let a = point!(0.0, 0.0);
        let b = point!(2.0, 0.0);
        assert_eq!(
            orientation(a, b, point!(1.0, 1.0)),
            Orientation::Counterclockwise
        );
        assert_eq!(orientation(a, b, point!(1.0, -1.0)), Orientation::Clockwise);
        assert_eq!(orientation(a, b, point!(4.0, 0.0)), Orientation::Degenerate);
    }

    #[test]
    fn orientation_flips_under_transposition() {
        let a = point!(0.0, 0.0);
        let b = point!(3.0, 1.0);
        let c = point!(1.0, 2.0);
        assert_eq!(orientation(a, b, c), Orientation::Counterclockwise);
        assert_eq!(orientation(a, c, b), Orientation::Clockwise);
        assert_eq!(orientation(b, a, c), Orientation::Clockwise);
    }

    #[test]
    fn ccw_is_strict() {
        let a = point!(0.0, 0.0);
        let b = point!(1.0, 0.0);
        assert!(ccw(a, b, point!(0.5, 0.5)));
        assert!(!ccw(a, b, point!(0.5, -0.5)));
        assert!(!ccw(a, b, point!(2.0, 0.0)));
    }

    #[test]
    fn in_circle_basic_containment() {
        let a = point!(0.0, 0.0);
        let b = point!(10.0, 0.0);
        let c = point!(0.0, 10.0);
        // Circumcenter of the right triangle.
        assert!(in_circle(a, b, c, point!(5.0, 5.0)));
        // Far outside.
        assert!(!in_circle(a, b, c, point!(100.0, 100.0)));
        // On the circle.
        assert!(!in_circle(a, b, c, point!(10.0, 10.0)));
    }

    #[test]
    fn in_circle_rejects_coincident_query_point() {
        let a = point!(0.0, 0.0);
        let b = point!(10.0, 0.0);
        let c = point!(0.0, 10.0);
        assert!(!in_circle(a, b, c, a));
        assert!(!in_circle(a, b, c, b));
        assert!(!in_circle(a, b, c, c));
    }

    #[test]
    fn in_circle_guard_band_swallows_sub_unit_determinants() {
        // At unit scale the determinant for the circumcenter is 0.5, below
        // the fixed guard band of one, so the point is not reported inside.
        // The same configuration scaled by ten yields 5000 and is reported.
        let a = point!(0.0, 0.0);
        let b = point!(1.0, 0.0);
        let c = point!(0.0, 1.0);
        assert!(!in_circle(a, b, c, point!(0.5, 0.5)));
        assert!(in_circle(
            point!(0.0, 0.0),
            point!(10.0, 0.0),
            point!(0.0, 10.0),
            point!(5.0, 5.0)
        ));
    }

    #[test]
    fn orientation_display() {
        assert_eq!(Orientation::Counterclockwise.to_string(), "COUNTERCLOCKWISE");
        assert_eq!(Orientation::Clockwise.to_string(), "CLOCKWISE");
        assert_eq!(Orientation::Degenerate.to_string(), "DEGENERATE");
    }
}
