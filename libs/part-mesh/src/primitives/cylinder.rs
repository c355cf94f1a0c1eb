//! # Cylinder Primitive
//!
//! Generates mesh for right cylinders centered at the origin along Z.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;
use std::f64::consts::TAU;

/// Creates a cylinder mesh centered at the origin with its axis along Z.
///
/// # Arguments
///
/// * `radius` - Radius of both caps; positive and finite
/// * `height` - Length along Z; positive and finite
/// * `segments` - Number of segments around circumference (>= 3)
///
/// # Returns
///
/// A closed mesh spanning `z ∈ [-height/2, height/2]`.
///
/// # Example
///
/// ```rust
/// use part_mesh::primitives::create_cylinder;
///
/// let mesh = create_cylinder(5.0, 10.0, 32).unwrap();
/// assert_eq!(mesh.vertex_count(), 64);
/// ```
pub fn create_cylinder(radius: f64, height: f64, segments: u32) -> Result<Mesh, MeshError> {
    if !height.is_finite() || height <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Cylinder height must be positive: {height}"
        )));
    }

    if !radius.is_finite() || radius <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Cylinder radius must be positive: {radius}"
        )));
    }

    if segments < 3 {
        return Err(MeshError::degenerate(format!(
            "Cylinder segments must be at least 3: {segments}"
        )));
    }

    let n = segments as usize;
    let mut mesh = Mesh::with_capacity(2 * n, 4 * n - 4);
    let z_bottom = -height / 2.0;
    let z_top = height / 2.0;

    let mut ring = |z: f64| -> Vec<u32> {
        (0..segments)
            .map(|j| {
                let theta = TAU * j as f64 / segments as f64;
                mesh.add_vertex(DVec3::new(radius * theta.cos(), radius * theta.sin(), z))
            })
            .collect()
    };
    let bottom = ring(z_bottom);
    let top = ring(z_top);

    // Side quads
    for j in 0..n {
        let next = (j + 1) % n;
        mesh.add_triangle(bottom[j], bottom[next], top[next]);
        mesh.add_triangle(bottom[j], top[next], top[j]);
    }

    // Caps (fan), bottom faces -Z and top faces +Z
    for j in 1..n - 1 {
        mesh.add_triangle(bottom[0], bottom[j + 1], bottom[j]);
        mesh.add_triangle(top[0], top[j], top[j + 1]);
    }

    Ok(mesh)
}
