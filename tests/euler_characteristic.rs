//! Integration tests for the Euler characteristic of triangulation output.
//!
//! For any planar subdivision extracted by the face walk, V − E + F = 2
//! must hold, where F counts the unbounded outer face and E is derived
//! from the face boundaries (every edge borders exactly two faces).

use quadedge::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Computes V − E + F from the face list and the deduplicated site set.
fn euler_characteristic(faces: &[Face<f64>], sites: &[Point<f64>]) -> i64 {
    let vertices = sites.len() as i64;
    let boundary_total: usize = faces.iter().map(Face::len).sum();
    assert_eq!(
        boundary_total % 2,
        0,
        "every edge must border exactly two faces"
    );
    let edges = (boundary_total / 2) as i64;
    let face_count = faces.len() as i64;
    vertices - edges + face_count
}

#[test]
fn triangle_satisfies_euler_formula() {
    let mut delaunay = Delaunay::new([point!(0.0, 0.0), point!(10.0, 0.0), point!(0.0, 10.0)]);
    let faces = delaunay.triangulate_faces();
    // V=3, E=3, F=2 (one triangle plus the outer face).
    assert_eq!(euler_characteristic(&faces, delaunay.points()), 2);
}

#[test]
fn square_satisfies_euler_formula() {
    let mut delaunay = Delaunay::new([
        point!(0.0, 0.0),
        point!(10.0, 0.0),
        point!(10.0, 10.0),
        point!(0.0, 10.0),
    ]);
    let faces = delaunay.triangulate_faces();
    // V=4, E=5, F=3.
    assert_eq!(euler_characteristic(&faces, delaunay.points()), 2);
}

#[test]
fn square_with_interior_site_satisfies_euler_formula() {
    let mut delaunay = Delaunay::new([
        point!(0.0, 0.0),
        point!(10.0, 0.0),
        point!(10.0, 10.0),
        point!(0.0, 10.0),
        point!(5.0, 5.0),
    ]);
    let faces = delaunay.triangulate_faces();
    // V=5, E=8, F=5.
    assert_eq!(faces.len(), 5);
    assert_eq!(euler_characteristic(&faces, delaunay.points()), 2);
}

#[test]
fn degenerate_chain_satisfies_euler_formula() {
    // An open chain of collinear sites: V=n, E=n-1, and the single
    // unbounded face walk visits both sides of every edge.
    let mut delaunay = Delaunay::new((0..7).map(|i| point!(f64::from(i), 0.0)));
    let faces = delaunay.triangulate_faces();
    assert_eq!(euler_characteristic(&faces, delaunay.points()), 2);
}

#[test]
fn random_clouds_satisfy_euler_formula() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for round in 0..8 {
        let n = 10 + round * 25;
        let sites: Vec<Point<f64>> = (0..n)
            .map(|_| {
                point!(
                    rng.random_range(-100.0..100.0),
                    rng.random_range(-100.0..100.0)
                )
            })
            .collect();

        let mut delaunay = Delaunay::new(sites);
        let faces = delaunay.triangulate_faces();

        assert_eq!(
            euler_characteristic(&faces, delaunay.points()),
            2,
            "Euler formula failed for a cloud of {n} sites"
        );
        assert!(validate_delaunay(&faces, delaunay.points()).is_ok());
    }
}

#[test]
fn internal_faces_dominate_for_large_clouds() {
    let mut rng = StdRng::seed_from_u64(42);
    let sites: Vec<Point<f64>> = (0..200)
        .map(|_| {
            point!(
                rng.random_range(-1000.0..1000.0),
                rng.random_range(-1000.0..1000.0)
            )
        })
        .collect();

    let mut delaunay = Delaunay::new(sites);
    let faces = delaunay.triangulate_faces();

    // Exactly one face is the clockwise outer walk; every other face is a
    // counterclockwise triangle.
    let mut outer = 0;
    for face in &faces {
        let v = face.vertices();
        if face.is_triangle() && ccw(v[0], v[1], v[2]) {
            continue;
        }
        outer += 1;
    }
    assert_eq!(outer, 1);
    assert_eq!(euler_characteristic(&faces, delaunay.points()), 2);
}
