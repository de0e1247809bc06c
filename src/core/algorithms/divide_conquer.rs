//! Divide-and-conquer construction of the Delaunay triangulation.
//!
//! Recursively triangulates a sorted point sequence and merges the two
//! halves across a rising sequence of cross edges, starting at the lower
//! common tangent of the two sub-hulls and finishing when the upper common
//! tangent is reached. Candidate edges that would violate the empty-
//! circumcircle property are deleted as the merge frontier advances.
//!
//! The caller is responsible for the preconditions: the input must be
//! sorted lexicographically by `(x, then y)`, strictly duplicate-free, and
//! at least two points long. Collinear triples produce an open edge chain
//! instead of a closed face, which lets merges above them proceed
//! correctly.

use crate::core::quad_edge::{EdgeKey, Subdivision};
use crate::geometry::point::Point;
use crate::geometry::predicates::{ccw, in_circle};
use crate::geometry::traits::coordinate::CoordinateScalar;
use tracing::trace;

/// The pair of boundary edges the construction hands back for a point set:
/// the counterclockwise hull edge out of the leftmost vertex and the
/// clockwise hull edge out of the rightmost vertex.
#[derive(Clone, Copy, Debug)]
pub struct HullEdges {
    /// Counterclockwise convex-hull edge whose origin is the leftmost site.
    pub left: EdgeKey,
    /// Clockwise convex-hull edge whose origin is the rightmost site.
    pub right: EdgeKey,
}

/// Returns `true` iff `e`'s destination lies strictly right of the current
/// base cross edge, i.e. `e` is still an admissible tangent candidate.
#[inline]
fn valid<T>(sub: &Subdivision<T>, e: EdgeKey, basel: EdgeKey) -> bool
where
    T: CoordinateScalar,
{
    sub.right_of(sub.dst(e), basel)
}

/// Triangulates a sorted, duplicate-free slice of at least two points,
/// building into `sub`, and returns the hull edge pair.
pub fn triangulate_sorted<T>(sub: &mut Subdivision<T>, points: &[Point<T>]) -> HullEdges
where
    T: CoordinateScalar,
{
    debug_assert!(points.len() >= 2, "need at least two distinct points");

    if points.len() == 2 {
        let a = sub.make_edge(points[0], points[1]);
        return HullEdges {
            left: a,
            right: sub.sym(a),
        };
    }

    if points.len() == 3 {
        let (s0, s1, s2) = (points[0], points[1], points[2]);
        let a = sub.make_edge(s0, s1);
        let b = sub.make_edge(s1, s2);
        let a_sym = sub.sym(a);
        sub.splice(a_sym, b);

        return if ccw(s0, s1, s2) {
            sub.connect(b, a);
            HullEdges {
                left: a,
                right: sub.sym(b),
            }
        } else if ccw(s0, s2, s1) {
            let c = sub.connect(b, a);
            HullEdges {
                left: sub.sym(c),
                right: c,
            }
        } else {
            // All three points are collinear: leave the open two-edge chain.
            HullEdges {
                left: a,
                right: sub.sym(b),
            }
        };
    }

    // Four or more points: split, recurse, and merge. The left half takes
    // the extra point on odd lengths.
    let mid = points.len().div_ceil(2);
    trace!(
        left = mid,
        right = points.len() - mid,
        "splitting point set"
    );
    let left_hull = triangulate_sorted(sub, &points[..mid]);
    let right_hull = triangulate_sorted(sub, &points[mid..]);

    let mut ldo = left_hull.left;
    let mut ldi = left_hull.right;
    let mut rdi = right_hull.left;
    let mut rdo = right_hull.right;

    // Walk down both hulls to the lower common tangent.
    loop {
        if sub.left_of(sub.org(rdi), ldi) {
            ldi = sub.lnext(ldi);
        } else if sub.right_of(sub.org(ldi), rdi) {
            rdi = sub.rprev(rdi);
        } else {
            break;
        }
    }

    let rdi_sym = sub.sym(rdi);
    let mut basel = sub.connect(rdi_sym, ldi);
    if sub.org(ldi) == sub.org(ldo) {
        ldo = sub.sym(basel);
    }
    if sub.org(rdi) == sub.org(rdo) {
        rdo = basel;
    }
    trace!("lower common tangent connected");

    // The merge loop: advance the cross-edge frontier upward until basel
    // becomes the upper common tangent.
    loop {
        // Locate the first left-side point the rising frontier meets, and
        // delete left edges out of basel's destination that fail the circle
        // test against it.
        let mut lcand = sub.onext(sub.sym(basel));
        if valid(sub, lcand, basel) {
            while in_circle(
                sub.dst(basel),
                sub.org(basel),
                sub.dst(lcand),
                sub.dst(sub.onext(lcand)),
            ) {
                let next = sub.onext(lcand);
                sub.delete_edge(lcand);
                lcand = next;
            }
        }

        // Symmetrically for the right side.
        let mut rcand = sub.oprev(basel);
        if valid(sub, rcand, basel) {
            while in_circle(
                sub.dst(basel),
                sub.org(basel),
                sub.dst(rcand),
                sub.dst(sub.oprev(rcand)),
            ) {
                let next = sub.oprev(rcand);
                sub.delete_edge(rcand);
                rcand = next;
            }
        }

        let lvalid = valid(sub, lcand, basel);
        let rvalid = valid(sub, rcand, basel);

        // If neither candidate remains, basel is the upper common tangent.
        if !lvalid && !rvalid {
            break;
        }

        // Choose the cross edge to add: the right candidate wins when the
        // left one is gone, or when its would-be triangle's circumcircle
        // excludes the left candidate's far endpoint.
        if !lvalid
            || (rvalid
                && in_circle(
                    sub.dst(lcand),
                    sub.org(lcand),
                    sub.org(rcand),
                    sub.dst(rcand),
                ))
        {
            let basel_sym = sub.sym(basel);
            basel = sub.connect(rcand, basel_sym);
        } else {
            let basel_sym = sub.sym(basel);
            let lcand_sym = sub.sym(lcand);
            basel = sub.connect(basel_sym, lcand_sym);
        }
    }

    HullEdges {
        left: ldo,
        right: rdo,
    }
}
