//! Data and operations on planar points.
//!
//! [`Point`] is the only geometric value type in the crate: the quad-edge
//! records store points by value, and the triangulation output is a sequence
//! of points. Equality is exact value equality on both coordinates, which is
//! what deduplication and the degeneracy checks in the predicates rely on.
//! The derived ordering is lexicographic by `x`, then `y` — the order the
//! divide-and-conquer construction requires.

use crate::geometry::traits::coordinate::{CoordinateScalar, CoordinateValidationError};
use serde::{Deserialize, Serialize};

/// Convenience macro for constructing a [`Point`] from two coordinates or a
/// two-element array.
///
/// # Examples
///
/// ```rust
/// use quadedge::point;
///
/// let p = point!(1.0, 2.0);
/// let q = point!([1.0, 2.0]);
/// assert_eq!(p, q);
/// ```
#[macro_export]
macro_rules! point {
    ([$x:expr, $y:expr]) => {
        $crate::geometry::point::Point::new($x, $y)
    };
    ($x:expr, $y:expr) => {
        $crate::geometry::point::Point::new($x, $y)
    };
}

// Re-export the macro at this path for convenience.
pub use crate::point;

// =============================================================================
// POINT STRUCT DEFINITION
// =============================================================================

/// A point in the Euclidean plane with coordinates of scalar type `T`.
///
/// Points are immutable once created and are freely copied; the quad-edge
/// structure stores them by value rather than by index.
///
/// # Ordering
///
/// `PartialOrd` is derived field-by-field, which yields the lexicographic
/// `(x, then y)` order used to sort input sites before triangulation.
///
/// # Examples
///
/// ```rust
/// use quadedge::geometry::point::Point;
///
/// let p = Point::new(1.0, 2.0);
/// assert_eq!(p.x(), 1.0);
/// assert_eq!(p.y(), 2.0);
/// assert!(Point::new(0.0, 9.0) < Point::new(1.0, 0.0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(bound = "T: CoordinateScalar")]
pub struct Point<T>
where
    T: CoordinateScalar,
{
    /// Abscissa.
    x: T,
    /// Ordinate.
    y: T,
}

impl<T> Point<T>
where
    T: CoordinateScalar,
{
    /// Creates a new point from its two coordinates.
    #[inline]
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Returns the x coordinate.
    #[inline]
    #[must_use]
    pub const fn x(&self) -> T {
        self.x
    }

    /// Returns the y coordinate.
    #[inline]
    #[must_use]
    pub const fn y(&self) -> T {
        self.y
    }

    /// Returns both coordinates as an array.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quadedge::geometry::point::Point;
    ///
    /// let p = Point::new(3.0, 4.0);
    /// assert_eq!(p.coords(), [3.0, 4.0]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn coords(&self) -> [T; 2] {
        [self.x, self.y]
    }

    /// Checks that both coordinates are finite.
    ///
    /// Triangulation itself never validates its input; non-finite
    /// coordinates silently degrade the predicates. This check is offered
    /// for callers that want to reject such input at the boundary.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateValidationError::InvalidCoordinate`] naming the
    /// first NaN or infinite coordinate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quadedge::geometry::point::Point;
    ///
    /// assert!(Point::new(1.0, 2.0).validate().is_ok());
    /// assert!(Point::new(f64::NAN, 2.0).validate().is_err());
    /// assert!(Point::new(0.0, f64::INFINITY).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), CoordinateValidationError> {
        for (coordinate_index, value) in self.coords().into_iter().enumerate() {
            if !value.is_finite() {
                return Err(CoordinateValidationError::InvalidCoordinate {
                    coordinate_index,
                    coordinate_value: format!("{value:?}"),
                });
            }
        }
        Ok(())
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl<T> From<[T; 2]> for Point<T>
where
    T: CoordinateScalar,
{
    #[inline]
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<(T, T)> for Point<T>
where
    T: CoordinateScalar,
{
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<Point<T>> for [T; 2]
where
    T: CoordinateScalar,
{
    #[inline]
    fn from(point: Point<T>) -> Self {
        point.coords()
    }
}
