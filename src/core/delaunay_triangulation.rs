//! Delaunay triangulation of a planar point set.
//!
//! [`Delaunay`] owns the input sites and orchestrates a triangulation run:
//! it sorts and deduplicates the held sequence in place, hands the sorted
//! slice to the divide-and-conquer construction, and then walks every face
//! of the resulting subdivision — including the single unbounded outer face
//! — collecting face boundaries. The quad-edge arena built during a run is
//! transient: it is allocated fresh for the call and dropped before the
//! call returns, so nothing topological persists between runs.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::algorithms::divide_conquer::triangulate_sorted;
use crate::core::quad_edge::{EdgeKey, Subdivision};
use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::CoordinateScalar;

// =============================================================================
// FACE
// =============================================================================

/// The boundary vertices of one face of the triangulated subdivision, in
/// the order the face walk visits them.
///
/// Internal faces of a non-degenerate triangulation are triangles and wind
/// counterclockwise; the one unbounded outer face has as many vertices as
/// there are hull edges and winds clockwise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: CoordinateScalar")]
pub struct Face<T>
where
    T: CoordinateScalar,
{
    vertices: SmallVec<[Point<T>; 3]>,
}

impl<T> Face<T>
where
    T: CoordinateScalar,
{
    /// The face's boundary vertices.
    #[inline]
    #[must_use]
    pub fn vertices(&self) -> &[Point<T>] {
        &self.vertices
    }

    /// Number of boundary vertices.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` for a face with no vertices. Never produced by
    /// triangulation; present for container completeness.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` iff the face is a triangle.
    #[inline]
    #[must_use]
    pub fn is_triangle(&self) -> bool {
        self.vertices.len() == 3
    }
}

impl<T> IntoIterator for Face<T>
where
    T: CoordinateScalar,
{
    type Item = Point<T>;
    type IntoIter = smallvec::IntoIter<[Point<T>; 3]>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}

// =============================================================================
// DELAUNAY TRIANGULATION
// =============================================================================

/// Planar Delaunay triangulation of a set of sites.
///
/// The container owns its point sequence. Triangulating sorts the sequence
/// lexicographically by `(x, then y)` and removes exact coordinate
/// duplicates **in place** — an observable mutation of the held sequence,
/// reflected in the `&mut self` signature and visible through
/// [`points`](Self::points) afterwards.
///
/// # Examples
///
/// ```rust
/// use quadedge::core::delaunay_triangulation::Delaunay;
/// use quadedge::point;
///
/// let mut delaunay = Delaunay::new([
///     point!(0.0, 0.0),
///     point!(10.0, 0.0),
///     point!(10.0, 10.0),
///     point!(0.0, 10.0),
/// ]);
///
/// // Two internal triangles plus the unbounded outer face.
/// let faces = delaunay.triangulate_faces();
/// assert_eq!(faces.len(), 3);
/// assert_eq!(faces.iter().filter(|f| f.is_triangle()).count(), 2);
/// ```
///
/// Degenerate inputs produce empty output rather than errors:
///
/// ```rust
/// use quadedge::core::delaunay_triangulation::Delaunay;
/// use quadedge::point;
///
/// let mut lone = Delaunay::new([point!(0.0, 0.0)]);
/// assert!(lone.triangulate().is_empty());
///
/// let mut dupes = Delaunay::new([point!(0.0, 0.0), point!(0.0, 0.0)]);
/// assert!(dupes.triangulate().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: CoordinateScalar")]
pub struct Delaunay<T>
where
    T: CoordinateScalar,
{
    points: Vec<Point<T>>,
}

impl<T> Delaunay<T>
where
    T: CoordinateScalar,
{
    /// Creates a triangulation container holding the given sites.
    #[must_use]
    pub fn new(points: impl IntoIterator<Item = Point<T>>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// The held site sequence.
    ///
    /// After a triangulation run this is sorted and duplicate-free.
    #[inline]
    #[must_use]
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// Number of held sites (counting duplicates until a run removes them).
    #[inline]
    #[must_use]
    pub fn number_of_points(&self) -> usize {
        self.points.len()
    }

    /// Triangulates the held sites and returns the flat face-vertex
    /// sequence: the concatenation of every face's boundary vertices in
    /// face-discovery order, with no delimiters between faces.
    ///
    /// Internal faces contribute three consecutive points each; the one
    /// unbounded outer face contributes as many points as there are hull
    /// edges. A consumer that needs the face structure itself should call
    /// [`triangulate_faces`](Self::triangulate_faces) instead, which
    /// returns the same faces explicitly delimited.
    ///
    /// Fewer than two distinct sites yield an empty result. Fully collinear
    /// input degenerates to an open edge chain whose face walk is not a
    /// meaningful polygon; the output for such input is unspecified beyond
    /// terminating.
    pub fn triangulate(&mut self) -> Vec<Point<T>> {
        self.triangulate_faces()
            .into_iter()
            .flatten()
            .collect()
    }

    /// Triangulates the held sites and returns every face of the resulting
    /// subdivision — internal triangles and the unbounded outer face — in
    /// breadth-first discovery order.
    pub fn triangulate_faces(&mut self) -> Vec<Face<T>> {
        match self.build() {
            Some((mut sub, start)) => extract_faces(&mut sub, start),
            None => Vec::new(),
        }
    }

    /// Triangulates the held sites and returns the convex hull vertices in
    /// counterclockwise order.
    ///
    /// Fewer than two distinct sites yield an empty result; fully collinear
    /// input yields the degenerate outer walk of the edge chain.
    pub fn convex_hull(&mut self) -> Vec<Point<T>> {
        let Some((sub, start)) = self.build() else {
            return Vec::new();
        };

        // The normalized edge has the unbounded face on its left, so the
        // left-face walk visits the hull clockwise; reverse for ccw.
        let mut hull = Vec::new();
        let mut curr = start;
        loop {
            hull.push(sub.org(curr));
            curr = sub.lnext(curr);
            if curr == start {
                break;
            }
        }
        hull.reverse();
        hull
    }

    /// Sorts and deduplicates the held sites, runs the divide-and-conquer
    /// construction, and returns the arena together with the normalized
    /// hull-boundary starting edge. `None` when fewer than two distinct
    /// sites remain.
    fn build(&mut self) -> Option<(Subdivision<T>, EdgeKey)> {
        self.points
            .sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        self.points.dedup();

        if self.points.len() < 2 {
            return None;
        }

        let mut sub = Subdivision::new();
        let hull = triangulate_sorted(&mut sub, &self.points);
        debug!(
            sites = self.points.len(),
            edges = sub.number_of_edges(),
            "triangulation built"
        );

        let start = normalize_hull_edge(&sub, hull.left);
        Some((sub, start))
    }
}

impl<T> FromIterator<Point<T>> for Delaunay<T>
where
    T: CoordinateScalar,
{
    fn from_iter<I: IntoIterator<Item = Point<T>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

// =============================================================================
// FACE EXTRACTION
// =============================================================================

/// Advances along the starting edge's origin ring while the next point on
/// the ring is still strictly left of the current edge, yielding a
/// canonical hull-boundary edge regardless of which edge the recursion
/// returned. The canonical edge has the unbounded face on its left.
fn normalize_hull_edge<T>(sub: &Subdivision<T>, mut e: EdgeKey) -> EdgeKey
where
    T: CoordinateScalar,
{
    loop {
        let next = sub.onext(e);
        if sub.left_of(sub.dst(next), e) {
            e = next;
        } else {
            return e;
        }
    }
}

/// Breadth-first walk over every face of the subdivision.
///
/// The queue is seeded with the reverse of the starting edge. Each edge
/// popped unvisited has its left-face boundary walked via `lnext`: every
/// boundary edge is marked, its origin appended to the face, and its
/// reverse enqueued unless already marked.
fn extract_faces<T>(sub: &mut Subdivision<T>, start: EdgeKey) -> Vec<Face<T>>
where
    T: CoordinateScalar,
{
    let mut faces = Vec::new();
    let mut queue = VecDeque::from([sub.sym(start)]);

    while let Some(edge) = queue.pop_front() {
        if sub.is_marked(edge) {
            continue;
        }

        let mut vertices = SmallVec::new();
        let mut curr = edge;
        loop {
            vertices.push(sub.org(curr));
            let curr_sym = sub.sym(curr);
            if !sub.is_marked(curr_sym) {
                queue.push_back(curr_sym);
            }
            sub.set_mark(curr);
            curr = sub.lnext(curr);
            if curr == edge {
                break;
            }
        }
        faces.push(Face { vertices });
    }

    faces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point;

    #[test]
    fn empty_and_sub_minimal_inputs_yield_nothing() {
        let mut empty: Delaunay<f64> = Delaunay::default();
        assert!(empty.triangulate().is_empty());

        let mut single = Delaunay::new([point!(1.0, 1.0)]);
        assert!(single.triangulate().is_empty());
        assert!(single.triangulate_faces().is_empty());
        assert!(single.convex_hull().is_empty());
    }

    #[test]
    fn two_points_form_one_degenerate_face() {
        let mut delaunay = Delaunay::new([point!(1.0, 0.0), point!(0.0, 0.0)]);
        let faces = delaunay.triangulate_faces();

        assert_eq!(faces.len(), 1);
        assert_eq!(faces[0].len(), 2);
        let mut got = faces[0].vertices().to_vec();
        got.sort_unstable_by(|a, b| a.partial_cmp(b).expect("finite"));
        assert_eq!(got, vec![point!(0.0, 0.0), point!(1.0, 0.0)]);
    }

    #[test]
    fn triangulation_sorts_and_dedups_in_place() {
        let mut delaunay = Delaunay::new([
            point!(5.0, 5.0),
            point!(0.0, 0.0),
            point!(5.0, 5.0),
            point!(0.0, 1.0),
        ]);
        assert_eq!(delaunay.number_of_points(), 4);

        delaunay.triangulate();

        assert_eq!(
            delaunay.points(),
            &[point!(0.0, 0.0), point!(0.0, 1.0), point!(5.0, 5.0)]
        );
    }

    #[test]
    fn flat_output_is_the_concatenation_of_faces() {
        let sites = [
            point!(0.0, 0.0),
            point!(10.0, 0.0),
            point!(10.0, 10.0),
            point!(0.0, 10.0),
            point!(5.0, 5.0),
        ];
        let flat = Delaunay::new(sites).triangulate();
        let faces = Delaunay::new(sites).triangulate_faces();

        let concatenated: Vec<_> = faces.into_iter().flatten().collect();
        assert_eq!(flat, concatenated);
    }

    #[test]
    fn collinear_input_terminates() {
        let mut delaunay = Delaunay::new([
            point!(0.0, 0.0),
            point!(1.0, 0.0),
            point!(2.0, 0.0),
            point!(3.0, 0.0),
            point!(4.0, 0.0),
        ]);
        // Output shape for fully collinear input is unspecified; the walk
        // must still terminate.
        let _ = delaunay.triangulate();
    }

    #[test]
    fn convex_hull_of_a_square_with_interior_point() {
        let mut delaunay = Delaunay::new([
            point!(5.0, 5.0),
            point!(0.0, 0.0),
            point!(10.0, 0.0),
            point!(10.0, 10.0),
            point!(0.0, 10.0),
        ]);
        let hull = delaunay.convex_hull();

        assert_eq!(hull.len(), 4);
        assert!(!hull.contains(&point!(5.0, 5.0)));
        // Counterclockwise winding.
        for i in 0..hull.len() {
            let a = hull[i];
            let b = hull[(i + 1) % hull.len()];
            let c = hull[(i + 2) % hull.len()];
            assert!(crate::geometry::predicates::ccw(a, b, c));
        }
    }
}
