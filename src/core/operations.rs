//! Topological operations of the edge algebra.
//!
//! Exactly four operations mutate a [`Subdivision`]: [`make_edge`]
//! allocates an isolated edge, [`splice`] rearranges rings, [`connect`]
//! composes the two to add a bounding edge, and [`delete_edge`] splices an
//! edge out and reclaims its bundle. Origins are assigned once at
//! allocation; connectivity changes only ever go through `splice`.
//!
//! [`make_edge`]: Subdivision::make_edge
//! [`splice`]: Subdivision::splice
//! [`connect`]: Subdivision::connect
//! [`delete_edge`]: Subdivision::delete_edge

use crate::core::quad_edge::{EdgeKey, QuadEdgeRecord, Subdivision};
use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::CoordinateScalar;
use slotmap::Key;

impl<T> Subdivision<T>
where
    T: CoordinateScalar,
{
    /// Allocates a new bundle of four records forming one topologically
    /// isolated edge from `origin` to `dest`.
    ///
    /// The two primal records carry the endpoints; the two dual records
    /// carry none. The new edge's origin rings are self-loops and its dual
    /// pair reference each other. Returns the primal record directed
    /// `origin → dest`.
    pub fn make_edge(&mut self, origin: Point<T>, dest: Point<T>) -> EdgeKey {
        let q0 = self.insert_unlinked(Some(origin));
        let q1 = self.insert_unlinked(None);
        let q2 = self.insert_unlinked(Some(dest));
        let q3 = self.insert_unlinked(None);

        // Lonely edge: the primal records ring only with themselves, while
        // the two dual records form a two-cycle.
        self.records[q0].onext = q0;
        self.records[q2].onext = q2;
        self.records[q1].onext = q3;
        self.records[q3].onext = q1;

        // The quarter-turn 4-cycle over the bundle.
        self.records[q0].rot = q1;
        self.records[q1].rot = q2;
        self.records[q2].rot = q3;
        self.records[q3].rot = q0;

        q0
    }

    /// Exchanges the origin-ring membership of `a` and `b`, and through the
    /// `rot` relation, of their left-duals.
    ///
    /// If `a` and `b` were in distinct rings the rings merge; if they were
    /// in the same ring it splits. The operation is its own inverse:
    /// applying it twice with the same arguments restores the prior
    /// connectivity. All four touched records keep the `rot` 4-cycle
    /// intact, since only `onext` links move.
    pub fn splice(&mut self, a: EdgeKey, b: EdgeKey) {
        let alpha = self.rot(self.onext(a));
        let beta = self.rot(self.onext(b));

        let a_next = self.onext(a);
        let b_next = self.onext(b);
        let alpha_next = self.onext(alpha);
        let beta_next = self.onext(beta);

        self.records[a].onext = b_next;
        self.records[b].onext = a_next;
        self.records[alpha].onext = beta_next;
        self.records[beta].onext = alpha_next;
    }

    /// Creates a new edge from `a`'s destination to `b`'s origin and
    /// splices it in so that it bounds the same left face as both `a` and
    /// `b`. Returns the new primal edge.
    pub fn connect(&mut self, a: EdgeKey, b: EdgeKey) -> EdgeKey {
        let q = self.make_edge(self.dst(a), self.org(b));
        let a_lnext = self.lnext(a);
        self.splice(q, a_lnext);
        let q_sym = self.sym(q);
        self.splice(q_sym, b);
        q
    }

    /// Removes `e` from the subdivision by splicing it out of the rings at
    /// both endpoints, then reclaims its bundle's four arena slots.
    pub fn delete_edge(&mut self, e: EdgeKey) {
        let e_oprev = self.oprev(e);
        self.splice(e, e_oprev);
        let e_sym = self.sym(e);
        let e_sym_oprev = self.oprev(e_sym);
        self.splice(e_sym, e_sym_oprev);

        // The bundle is now orphaned; drop all four records together.
        let r1 = self.rot(e);
        let r2 = self.sym(e);
        let r3 = self.rot_sym(e);
        self.records.remove(e);
        self.records.remove(r1);
        self.records.remove(r2);
        self.records.remove(r3);
    }

    fn insert_unlinked(&mut self, origin: Option<Point<T>>) -> EdgeKey {
        self.records.insert(QuadEdgeRecord {
            onext: EdgeKey::null(),
            rot: EdgeKey::null(),
            origin,
            mark: false,
        })
    }
}
