//! # Part Design
//!
//! Bounded-parameter builder for a cube with two cylindrical cutouts.
//!
//! ## Pipeline
//!
//! ```text
//! JSON / form fields → PartialDesignParameters → DesignParameters
//!     → ClampedParameters → GeometryKernel → Solid
//! ```
//!
//! Callers may supply any subset of parameters. Missing fields take their
//! defaults, non-finite values are rejected, and hole radii and positions
//! are clamped so every request produces a well-formed request to the
//! kernel.
//!
//! ## Example
//!
//! ```rust
//! use part_design::{build_solid, PartialDesignParameters};
//!
//! let params: PartialDesignParameters = serde_json::from_str(r#"{"size": 4, "holeX1": 100}"#).unwrap();
//! let solid = build_solid(&params).unwrap();
//! assert!(!solid.is_empty());
//! ```

pub mod builder;
pub mod error;
pub mod kernel;
pub mod params;

pub use builder::{build, build_solid};
pub use error::DesignError;
pub use kernel::{GeometryKernel, MeshKernel};
pub use params::{ClampedParameters, DesignParameters, Hole, PartialDesignParameters};
