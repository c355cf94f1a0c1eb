//! # Mesh Operations
//!
//! Boolean operations (CSG) on meshes.

pub mod boolean;

pub use boolean::difference;
