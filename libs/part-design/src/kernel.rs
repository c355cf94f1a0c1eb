//! # Geometry Kernel Seam
//!
//! The builder only needs four operations from a solid-modelling library.
//! [`MeshKernel`] provides them over [`part_mesh::Solid`].

use config::constants::KernelConfig;
use glam::DVec3;
use part_mesh::{MeshError, Solid};

/// Operations the parametric builder consumes.
///
/// Solids are opaque to the builder: it only constructs, translates and
/// subtracts them.
pub trait GeometryKernel {
    type Solid;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Cube with edge `edge`, centered at the origin on all three axes.
    fn cube(&self, edge: f64) -> Result<Self::Solid, Self::Error>;

    /// Right cylinder along Z, centered at the origin.
    fn cylinder(&self, radius: f64, height: f64) -> Result<Self::Solid, Self::Error>;

    fn translate(&self, offset: DVec3, solid: &Self::Solid) -> Self::Solid;

    /// Boolean difference `a - b`.
    fn subtract(&self, a: &Self::Solid, b: &Self::Solid) -> Result<Self::Solid, Self::Error>;
}

/// Production kernel backed by triangle meshes and BSP CSG.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeshKernel {
    config: KernelConfig,
}

impl MeshKernel {
    pub fn new(config: KernelConfig) -> Self {
        Self { config }
    }
}

impl GeometryKernel for MeshKernel {
    type Solid = Solid;
    type Error = MeshError;

    fn cube(&self, edge: f64) -> Result<Solid, MeshError> {
        Solid::cube(edge)
    }

    fn cylinder(&self, radius: f64, height: f64) -> Result<Solid, MeshError> {
        Solid::cylinder(radius, height, self.config.segments)
    }

    fn translate(&self, offset: DVec3, solid: &Solid) -> Solid {
        solid.translate(offset)
    }

    fn subtract(&self, a: &Solid, b: &Solid) -> Result<Solid, MeshError> {
        Ok(a.difference(b))
    }
}
