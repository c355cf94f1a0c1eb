//! # Config Crate
//!
//! Centralized configuration constants for the parametric part pipeline.
//! Design defaults, clamping bounds, tessellation resolution and CSG
//! tolerances are defined here so the kernel, the builder and the browser
//! layer agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_SIZE, MIN_HOLE_RADIUS};
//!
//! let max_radius = DEFAULT_SIZE / 2.0;
//! assert!(MIN_HOLE_RADIUS < max_radius);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
