//! # Design Errors
//!
//! Failures surfaced by the parametric builder. There is no partial result:
//! a failed build yields no solid.

use thiserror::Error;

/// Boxed error coming from a geometry kernel.
pub type KernelError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by [`crate::build`].
#[derive(Debug, Error)]
pub enum DesignError {
    /// A numeric parameter is `NaN` or infinite after defaulting.
    ///
    /// Raised before any geometry is constructed.
    #[error("Invalid parameter {name}: {value} is not a finite number")]
    InvalidParameter { name: &'static str, value: f64 },

    /// The geometry kernel rejected the clamped parameters.
    #[error("Geometry construction failed: {0}")]
    GeometryConstructionFailed(#[source] KernelError),
}

impl DesignError {
    /// Wraps a kernel error without altering it.
    pub fn geometry(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::GeometryConstructionFailed(Box::new(err))
    }
}
