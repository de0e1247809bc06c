//! # quadedge
//!
//! Planar Delaunay triangulation built on the Guibas–Stolfi quad-edge
//! algebra, constructed with the classical divide-and-conquer merge.
//!
//! Given a finite set of sites in the plane, the library produces the set
//! of triangular faces whose circumcircles contain no other site, plus the
//! single unbounded outer face. The topology is held in a quad-edge
//! subdivision: every undirected edge is a bundle of four records linked by
//! an `onext` ring around each origin and a quarter-turn `rot` cycle into
//! the dual graph, and all richer relations (`sym`, `lnext`, `oprev`, …)
//! are derived from those two links on demand.
//!
//! # Basic Usage
//!
//! ```rust
//! use quadedge::prelude::*;
//!
//! let mut delaunay = Delaunay::new([
//!     point!(0.0, 0.0),
//!     point!(10.0, 0.0),
//!     point!(10.0, 10.0),
//!     point!(0.0, 10.0),
//! ]);
//!
//! // Explicit per-face output: two internal triangles and the outer face.
//! let faces = delaunay.triangulate_faces();
//! assert_eq!(faces.len(), 3);
//!
//! // The held sites are now sorted and duplicate-free.
//! assert_eq!(delaunay.points().len(), 4);
//!
//! // The flat output is the concatenation of the same faces.
//! assert_eq!(delaunay.triangulate().len(), 3 + 3 + 4);
//! ```
//!
//! # Construction
//!
//! The divide-and-conquer engine sorts the sites lexicographically,
//! recursively triangulates the two halves, and merges them across a rising
//! sequence of cross edges bounded below by the halves' lower common
//! tangent and above by their upper common tangent. Edges that would
//! violate the empty-circumcircle property are deleted during the merge.
//! The whole build is `O(n log n)` with `O(log n)` recursion depth, fully
//! synchronous and single-threaded; the quad-edge arena lives only for the
//! duration of one triangulation call.
//!
//! # Degeneracies and Numerics
//!
//! Degenerate inputs are handled structurally rather than reported: fewer
//! than two distinct sites yield empty output, and fully collinear input
//! degenerates to an open edge chain whose face walk is unspecified beyond
//! terminating. The predicates are plain floating-point evaluations — see
//! [`geometry::predicates::in_circle`] for the fixed guard band and its
//! consequences near cocircular configurations. Exact or adaptive
//! arithmetic is out of scope.
//!
//! # References
//!
//! Leonidas Guibas and Jorge Stolfi, *Primitives for the Manipulation of
//! General Subdivisions and the Computation of Voronoi Diagrams*, ACM
//! Transactions on Graphics 4(2), 1985.

#![forbid(unsafe_code)]

/// Quad-edge topology, edge-algebra operations, the divide-and-conquer
/// construction, and the triangulation container.
pub mod core {
    /// Triangulation construction algorithms.
    pub mod algorithms {
        pub mod divide_conquer;
    }
    pub mod delaunay_triangulation;
    pub mod operations;
    pub mod quad_edge;
    pub mod util;

    pub use delaunay_triangulation::*;
    pub use quad_edge::*;
    pub use util::*;
}

/// Point type, coordinate scalar bounds, and geometric predicates.
pub mod geometry {
    pub mod point;
    pub mod predicates;

    /// Traits for coordinate scalars.
    pub mod traits {
        pub mod coordinate;
        pub use coordinate::*;
    }

    pub use point::*;
    pub use predicates::*;
    pub use traits::*;
}

/// Convenient access to the commonly used types and macros.
pub mod prelude {
    pub use crate::core::algorithms::divide_conquer::{HullEdges, triangulate_sorted};
    pub use crate::core::delaunay_triangulation::{Delaunay, Face};
    pub use crate::core::quad_edge::{EdgeKey, Subdivision};
    pub use crate::core::util::{DelaunayValidationError, find_delaunay_violation, validate_delaunay};
    pub use crate::geometry::point::Point;
    pub use crate::geometry::predicates::{Orientation, ccw, in_circle, orientation};
    pub use crate::geometry::traits::coordinate::{CoordinateScalar, CoordinateValidationError};

    pub use crate::point;
}
