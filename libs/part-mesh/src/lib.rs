//! # Part Mesh
//!
//! Browser-safe geometry kernel for the parametric part pipeline.
//!
//! ## Architecture
//!
//! ```text
//! primitives (cube, cylinder) → Solid → translate / difference → Mesh buffers
//! ```
//!
//! ## Algorithms
//!
//! All algorithms are browser-safe (pure Rust, no native dependencies):
//! - **Boolean Operations**: BSP trees (csg.js algorithm)
//! - **Primitives**: Centered cube and cylinder generation
//!
//! ## Usage
//!
//! ```rust
//! use part_mesh::Solid;
//! use glam::DVec3;
//!
//! let block = Solid::cube(10.0).unwrap();
//! let hole = Solid::cylinder(1.0, 11.0, 32).unwrap();
//! let part = block.difference(&hole).translate(DVec3::new(0.0, 0.0, 5.0));
//! assert!(!part.is_empty());
//! ```

pub mod error;
pub mod mesh;
pub mod ops;
pub mod primitives;
pub mod solid;

pub use error::MeshError;
pub use mesh::Mesh;
pub use solid::Solid;
