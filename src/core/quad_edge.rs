//! The quad-edge structure: an arena of directed-edge records.
//!
//! An undirected edge of a planar subdivision is represented by a *bundle*
//! of four records — the edge in both directions plus its two quarter-turn
//! rotations into the dual (face) graph. Each record stores only two links,
//! `onext` (next edge counterclockwise around its origin) and `rot` (the
//! quarter-turn), plus an origin point on the two primal records. Everything
//! else — `sym`, destination, the previous/next relations around origins and
//! faces — is derived on demand from those two links, so the stored links
//! remain the single source of truth.
//!
//! Records live in a [`SlotMap`] arena addressed by stable [`EdgeKey`]
//! handles; all links are stored as keys rather than references, which
//! sidesteps the cyclic-ownership problem the rings would otherwise pose. A
//! fresh arena is allocated per triangulation call and dropped wholesale
//! afterwards, so the transient traversal marks always start out cleared.
//!
//! # Invariants
//!
//! - `rot` is a 4-cycle: applying it four times returns to the same record.
//! - `sym` (two rotations) is the same undirected edge traversed in the
//!   opposite direction; the destination of an edge is the origin of its
//!   `sym` and is never stored.
//! - The two dual records of a bundle carry no origin point.
//! - The four records of one bundle are created together by
//!   [`make_edge`](Subdivision::make_edge) and reclaimed together by
//!   [`delete_edge`](Subdivision::delete_edge).

use crate::geometry::point::Point;
use crate::geometry::predicates::ccw;
use crate::geometry::traits::coordinate::CoordinateScalar;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Stable handle to one directed-edge record in a [`Subdivision`] arena.
    pub struct EdgeKey;
}

/// One of the four interlinked records representing an undirected edge.
#[derive(Clone, Copy, Debug)]
pub(crate) struct QuadEdgeRecord<T>
where
    T: CoordinateScalar,
{
    /// Next edge counterclockwise around this record's origin.
    pub(crate) onext: EdgeKey,
    /// Quarter-turn into the dual; four applications cycle back here.
    pub(crate) rot: EdgeKey,
    /// Origin point; `None` on the two dual records of a bundle.
    pub(crate) origin: Option<Point<T>>,
    /// Transient traversal mark, cleared by virtue of arenas being
    /// allocated fresh per triangulation call.
    pub(crate) mark: bool,
}

/// A planar subdivision held as a web of quad-edge records.
///
/// The subdivision exists only as the `onext`/`rot` links among live
/// bundles; there is no separate face or triangle list until a traversal
/// derives one.
///
/// # Examples
///
/// ```rust
/// use quadedge::core::quad_edge::Subdivision;
/// use quadedge::point;
///
/// let mut sub = Subdivision::new();
/// let e = sub.make_edge(point!(0.0, 0.0), point!(1.0, 0.0));
///
/// // rot is a 4-cycle and sym reverses the edge.
/// assert_eq!(sub.rot(sub.rot(sub.rot(sub.rot(e)))), e);
/// assert_eq!(sub.origin(sub.sym(e)), Some(point!(1.0, 0.0)));
/// assert_eq!(sub.destination(e), Some(point!(1.0, 0.0)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Subdivision<T>
where
    T: CoordinateScalar,
{
    pub(crate) records: SlotMap<EdgeKey, QuadEdgeRecord<T>>,
}

impl<T> Subdivision<T>
where
    T: CoordinateScalar,
{
    /// Creates an empty subdivision.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: SlotMap::with_key(),
        }
    }

    /// Number of live undirected edges (bundles of four records).
    #[must_use]
    pub fn number_of_edges(&self) -> usize {
        self.records.len() / 4
    }

    /// Returns `true` if the subdivision holds no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // =========================================================================
    // STORED LINKS
    // =========================================================================

    /// Next edge counterclockwise around `e`'s origin.
    #[inline]
    #[must_use]
    pub fn onext(&self, e: EdgeKey) -> EdgeKey {
        self.records[e].onext
    }

    /// Quarter-turn rotation of `e` into the dual graph.
    #[inline]
    #[must_use]
    pub fn rot(&self, e: EdgeKey) -> EdgeKey {
        self.records[e].rot
    }

    /// Origin point of `e`, or `None` on a dual record.
    #[inline]
    #[must_use]
    pub fn origin(&self, e: EdgeKey) -> Option<Point<T>> {
        self.records[e].origin
    }

    // =========================================================================
    // DERIVED RELATIONS
    // =========================================================================
    //
    // Pure functions of the stored rot/onext links, never cached.

    /// The same undirected edge as `e`, traversed in the opposite direction.
    #[inline]
    #[must_use]
    pub fn sym(&self, e: EdgeKey) -> EdgeKey {
        self.rot(self.rot(e))
    }

    /// Quarter-turn rotation of `sym(e)`.
    #[inline]
    #[must_use]
    pub fn rot_sym(&self, e: EdgeKey) -> EdgeKey {
        self.rot(self.sym(e))
    }

    /// Destination point of `e`: the origin of its `sym`.
    #[inline]
    #[must_use]
    pub fn destination(&self, e: EdgeKey) -> Option<Point<T>> {
        self.origin(self.sym(e))
    }

    /// Previous edge clockwise around `e`'s origin.
    #[inline]
    #[must_use]
    pub fn oprev(&self, e: EdgeKey) -> EdgeKey {
        self.rot(self.onext(self.rot(e)))
    }

    /// Previous edge around `e`'s destination.
    #[inline]
    #[must_use]
    pub fn dprev(&self, e: EdgeKey) -> EdgeKey {
        self.rot_sym(self.onext(self.rot_sym(e)))
    }

    /// Next edge counterclockwise around `e`'s left face.
    #[inline]
    #[must_use]
    pub fn lnext(&self, e: EdgeKey) -> EdgeKey {
        self.rot(self.onext(self.rot_sym(e)))
    }

    /// Previous edge around `e`'s left face.
    #[inline]
    #[must_use]
    pub fn lprev(&self, e: EdgeKey) -> EdgeKey {
        self.sym(self.onext(e))
    }

    /// Previous edge around `e`'s right face.
    #[inline]
    #[must_use]
    pub fn rprev(&self, e: EdgeKey) -> EdgeKey {
        self.onext(self.sym(e))
    }

    // =========================================================================
    // EDGE-RELATIVE PREDICATES
    // =========================================================================

    /// Returns `true` iff `p` lies strictly left of the directed edge `e`.
    #[inline]
    #[must_use]
    pub fn left_of(&self, p: Point<T>, e: EdgeKey) -> bool {
        ccw(p, self.org(e), self.dst(e))
    }

    /// Returns `true` iff `p` lies strictly right of the directed edge `e`.
    #[inline]
    #[must_use]
    pub fn right_of(&self, p: Point<T>, e: EdgeKey) -> bool {
        ccw(p, self.dst(e), self.org(e))
    }

    // =========================================================================
    // CRATE-INTERNAL ACCESS
    // =========================================================================

    /// Origin of a primal record.
    ///
    /// Panics if `e` is a dual record; the construction and traversal code
    /// only ever hands primal keys to this accessor.
    #[inline]
    pub(crate) fn org(&self, e: EdgeKey) -> Point<T> {
        self.records[e]
            .origin
            .expect("primal quad-edge record carries an origin")
    }

    /// Destination of a primal record.
    #[inline]
    pub(crate) fn dst(&self, e: EdgeKey) -> Point<T> {
        self.org(self.sym(e))
    }

    #[inline]
    pub(crate) fn is_marked(&self, e: EdgeKey) -> bool {
        self.records[e].mark
    }

    #[inline]
    pub(crate) fn set_mark(&mut self, e: EdgeKey) {
        self.records[e].mark = true;
    }
}
