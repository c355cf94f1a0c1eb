//! # Solid
//!
//! Opaque, immutable volume handed between the kernel and its callers.
//! Every operation returns a new `Solid`; none mutate their inputs.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ops::boolean;
use crate::primitives::{create_cube, create_cylinder};
use glam::DVec3;
use tracing::trace;

/// A closed volume backed by a triangle mesh.
///
/// # Example
///
/// ```rust
/// use part_mesh::Solid;
/// use glam::DVec3;
///
/// let block = Solid::cube(10.0).unwrap();
/// let hole = Solid::cylinder(2.0, 12.0, 32).unwrap().translate(DVec3::new(1.0, 1.0, 0.0));
/// let part = block.difference(&hole);
/// assert!(part.volume() < block.volume());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    mesh: Mesh,
}

impl Solid {
    /// Cube with edge `edge`, centered at the origin on all axes.
    pub fn cube(edge: f64) -> Result<Self, MeshError> {
        create_cube(DVec3::splat(edge)).map(Self::from_mesh)
    }

    /// Right cylinder along Z, centered at the origin.
    pub fn cylinder(radius: f64, height: f64, segments: u32) -> Result<Self, MeshError> {
        create_cylinder(radius, height, segments).map(Self::from_mesh)
    }

    /// Wraps geometry built elsewhere.
    pub fn from_mesh(mesh: Mesh) -> Self {
        Self { mesh }
    }

    /// Rigid translation.
    pub fn translate(&self, offset: DVec3) -> Self {
        let mut mesh = self.mesh.clone();
        mesh.translate(offset);
        Self { mesh }
    }

    /// Boolean difference `self - other`.
    pub fn difference(&self, other: &Solid) -> Self {
        let mesh = boolean::difference(&self.mesh, &other.mesh);
        trace!(
            left = self.mesh.triangle_count(),
            right = other.mesh.triangle_count(),
            result = mesh.triangle_count(),
            "bsp difference"
        );
        Self { mesh }
    }

    /// Borrow the underlying mesh.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn is_empty(&self) -> bool {
        self.mesh.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.mesh.triangle_count()
    }

    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        self.mesh.bounding_box()
    }

    pub fn volume(&self) -> f64 {
        self.mesh.volume()
    }
}
