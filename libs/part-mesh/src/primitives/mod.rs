//! # Primitives
//!
//! Mesh generation for the centered primitives the builder consumes.
//!
//! Every primitive is centered at the origin on all axes. Callers position
//! them with [`crate::Solid::translate`].

pub mod cube;
pub mod cylinder;

pub use cube::create_cube;
pub use cylinder::create_cylinder;
