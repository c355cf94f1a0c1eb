//! # Parametric Builder
//!
//! Composes the two-hole block from a partial parameter set:
//!
//! ```text
//! cube(size)
//!   - translate(x1, y1, 0) cylinder(r1, height + 1)
//!   - translate(x2, y2, 0) cylinder(r2, height + 1)
//! then translate(0, 0, height / 2)
//! ```

use crate::error::DesignError;
use crate::kernel::{GeometryKernel, MeshKernel};
use crate::params::PartialDesignParameters;
use config::constants::CUTOUT_OVERSHOOT;
use glam::DVec3;
use tracing::{debug, debug_span};

/// Builds the design with `kernel`.
///
/// Parameters are defaulted, validated and clamped before the first kernel
/// call, so an [`DesignError::InvalidParameter`] never touches geometry.
/// Kernel failures are wrapped unchanged in
/// [`DesignError::GeometryConstructionFailed`].
///
/// # Example
///
/// ```rust
/// use part_design::{build, MeshKernel, PartialDesignParameters};
///
/// let solid = build(&MeshKernel::default(), &PartialDesignParameters::default()).unwrap();
/// let (min, max) = solid.bounding_box().unwrap();
/// assert!((min.z + 2.5).abs() < 1e-9);
/// assert!((max.z - 7.5).abs() < 1e-9);
/// ```
pub fn build<K: GeometryKernel>(
    kernel: &K,
    params: &PartialDesignParameters,
) -> Result<K::Solid, DesignError> {
    let span = debug_span!("build_design");
    let _enter = span.enter();

    let clamped = params.resolve().clamped()?;
    debug!(
        size = clamped.size,
        height = clamped.height,
        "parameters resolved"
    );

    let cube = kernel.cube(clamped.size).map_err(DesignError::geometry)?;
    let cutout_height = clamped.height + CUTOUT_OVERSHOOT;
    let cutouts = clamped
        .holes
        .iter()
        .map(|hole| -> Result<K::Solid, K::Error> {
            let cylinder = kernel.cylinder(hole.radius, cutout_height)?;
            Ok(kernel.translate(DVec3::new(hole.x, hole.y, 0.0), &cylinder))
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(DesignError::geometry)?;

    let mut solid = cube;
    for (index, cutout) in cutouts.iter().enumerate() {
        solid = kernel
            .subtract(&solid, cutout)
            .map_err(DesignError::geometry)?;
        debug!(hole = index + 1, "cutout subtracted");
    }

    Ok(kernel.translate(DVec3::new(0.0, 0.0, clamped.height / 2.0), &solid))
}

/// [`build`] with the default [`MeshKernel`].
pub fn build_solid(params: &PartialDesignParameters) -> Result<part_mesh::Solid, DesignError> {
    build(&MeshKernel::default(), params)
}

#[cfg(test)]
mod tests;
