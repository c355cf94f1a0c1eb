//! # Boolean Operations (CSG)
//!
//! Constructive Solid Geometry subtraction using BSP trees.
//!
//! ## Algorithm
//!
//! Based on the csg.js algorithm by Evan Wallace:
//! `A - B = ~(~A | B)`
//!
//! ```text
//! a.invert(); a.clip_to(b); b.clip_to(a);
//! b.invert(); b.clip_to(a); b.invert();
//! a.build(b.polygons); a.invert();
//! ```

mod bsp;
mod plane;
mod polygon;

use crate::Mesh;
use bsp::BspNode;
use polygon::Polygon;

/// Computes the difference of two meshes (A - B).
///
/// Returns a mesh containing the volume of `a` that is not in `b`.
/// An empty `a` yields an empty mesh; an empty `b` yields `a` unchanged.
///
/// # Example
///
/// ```rust
/// use part_mesh::ops::boolean::difference;
/// use part_mesh::primitives::{create_cube, create_cylinder};
/// use glam::DVec3;
///
/// let block = create_cube(DVec3::splat(10.0)).unwrap();
/// let hole = create_cylinder(2.0, 12.0, 32).unwrap();
/// let result = difference(&block, &hole);
/// assert!(result.volume() < block.volume());
/// ```
pub fn difference(a: &Mesh, b: &Mesh) -> Mesh {
    let polys_a = mesh_to_polygons(a);
    let polys_b = mesh_to_polygons(b);

    if polys_a.is_empty() {
        return Mesh::new();
    }
    if polys_b.is_empty() {
        return a.clone();
    }

    let mut bsp_a = BspNode::new(polys_a);
    let mut bsp_b = BspNode::new(polys_b);

    bsp_a.invert();
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_a.build(bsp_b.into_polygons());
    bsp_a.invert();

    polygons_to_mesh(&bsp_a.into_polygons())
}

// =============================================================================
// CONVERSION HELPERS
// =============================================================================

/// Converts each non-degenerate triangle into a polygon.
fn mesh_to_polygons(mesh: &Mesh) -> Vec<Polygon> {
    mesh.triangle_corners()
        .filter_map(|corners| Polygon::from_vertices(corners.to_vec()))
        .collect()
}

/// Fan-triangulates convex polygons back into a mesh.
fn polygons_to_mesh(polygons: &[Polygon]) -> Mesh {
    let triangle_count = polygons.iter().map(|p| p.vertices().len() - 2).sum();
    let vertex_count = polygons.iter().map(|p| p.vertices().len()).sum();
    let mut mesh = Mesh::with_capacity(vertex_count, triangle_count);

    for poly in polygons {
        let base = mesh.vertex_count() as u32;
        for v in poly.vertices() {
            mesh.add_vertex(*v);
        }
        for i in 1..poly.vertices().len() as u32 - 1 {
            mesh.add_triangle(base, base + i, base + i + 1);
        }
    }

    mesh
}
