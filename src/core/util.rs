//! Validation utilities for triangulation output.
//!
//! These helpers brute-force the empty-circumcircle property of a face
//! list against the full site set. They are quadratic and intended for
//! tests and debugging, not for production paths. Note that they use the
//! same floating-point [`in_circle`] predicate as the construction, so a
//! configuration the builder misclassifies is misclassified consistently
//! here too.

use thiserror::Error;
use tracing::debug;

use crate::core::delaunay_triangulation::Face;
use crate::geometry::point::Point;
use crate::geometry::predicates::{ccw, in_circle};
use crate::geometry::traits::coordinate::CoordinateScalar;

/// Errors reported by [`validate_delaunay`].
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DelaunayValidationError<T>
where
    T: CoordinateScalar,
{
    /// A site lies strictly inside the circumcircle of an internal face.
    #[error("site {site:?} lies strictly inside the circumcircle of face {face_index}")]
    CircumcircleViolation {
        /// Index of the offending face in the face list.
        face_index: usize,
        /// The site found inside the circumcircle.
        site: Point<T>,
    },
}

/// Finds the first internal face whose circumcircle strictly contains some
/// site, if any.
///
/// Only counterclockwise triangles are checked: those are the internal
/// faces of the triangulation. The clockwise outer face and any degenerate
/// boundary walk are skipped.
#[must_use]
pub fn find_delaunay_violation<T>(
    faces: &[Face<T>],
    sites: &[Point<T>],
) -> Option<(usize, Point<T>)>
where
    T: CoordinateScalar,
{
    for (face_index, face) in faces.iter().enumerate() {
        if !face.is_triangle() {
            continue;
        }
        let [a, b, c] = [face.vertices()[0], face.vertices()[1], face.vertices()[2]];
        if !ccw(a, b, c) {
            // The outer face winds clockwise; it has no circumcircle claim.
            continue;
        }
        for &site in sites {
            if in_circle(a, b, c, site) {
                debug!(face_index, ?site, "circumcircle violation");
                return Some((face_index, site));
            }
        }
    }
    None
}

/// Checks the empty-circumcircle property of every internal face against
/// every site.
///
/// # Errors
///
/// Returns [`DelaunayValidationError::CircumcircleViolation`] for the first
/// face whose circumcircle strictly contains a site.
///
/// # Examples
///
/// ```rust
/// use quadedge::core::delaunay_triangulation::Delaunay;
/// use quadedge::core::util::validate_delaunay;
/// use quadedge::point;
///
/// let mut delaunay = Delaunay::new([
///     point!(0.0, 0.0),
///     point!(10.0, 0.0),
///     point!(0.0, 10.0),
/// ]);
/// let faces = delaunay.triangulate_faces();
/// assert!(validate_delaunay(&faces, delaunay.points()).is_ok());
/// ```
pub fn validate_delaunay<T>(
    faces: &[Face<T>],
    sites: &[Point<T>],
) -> Result<(), DelaunayValidationError<T>>
where
    T: CoordinateScalar,
{
    match find_delaunay_violation(faces, sites) {
        Some((face_index, site)) => {
            Err(DelaunayValidationError::CircumcircleViolation { face_index, site })
        }
        None => Ok(()),
    }
}
