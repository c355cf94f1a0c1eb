//! Centralized configuration values shared across the parametric part
//! pipeline.
//!
//! ## Categories
//!
//! - **Design defaults**: Values used when a parameter is absent
//! - **Clamping**: Bounds applied to hole parameters
//! - **Resolution**: Tessellation of circular primitives
//! - **Precision**: Tolerances for BSP classification and mesh checks

use std::fmt;

// =============================================================================
// DESIGN DEFAULTS
// =============================================================================

/// Default edge length of the base cube.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SIZE;
/// assert_eq!(DEFAULT_SIZE, 10.0);
/// ```
pub const DEFAULT_SIZE: f64 = 10.0;

/// Default extrusion height, used for centering and cutout depth.
pub const DEFAULT_HEIGHT: f64 = 5.0;

/// Default radius of the first cutout.
pub const DEFAULT_HOLE_RADIUS_1: f64 = 2.0;

/// Default planar position `[x, y]` of the first cutout.
pub const DEFAULT_HOLE_POSITION_1: [f64; 2] = [0.0, 0.0];

/// Default radius of the second cutout.
pub const DEFAULT_HOLE_RADIUS_2: f64 = 1.0;

/// Default planar position `[x, y]` of the second cutout.
pub const DEFAULT_HOLE_POSITION_2: [f64; 2] = [2.0, 2.0];

// =============================================================================
// CLAMPING
// =============================================================================

/// Nominal floor for cutout radii.
///
/// The upper bound (`size / 2`) is applied after this floor, so a cube
/// smaller than `2 * MIN_HOLE_RADIUS` yields radii below it.
///
/// # Examples
/// ```
/// use config::constants::MIN_HOLE_RADIUS;
/// let size = 0.1_f64;
/// let radius = 5.0_f64.max(MIN_HOLE_RADIUS).min(size / 2.0);
/// assert_eq!(radius, 0.05);
/// ```
pub const MIN_HOLE_RADIUS: f64 = 0.1;

/// Extra cylinder length added to `height` so cutouts penetrate along Z.
pub const CUTOUT_OVERSHOOT: f64 = 1.0;

// =============================================================================
// RESOLUTION
// =============================================================================

/// Default tessellation segment count for cylinders.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SEGMENTS;
/// assert!(DEFAULT_SEGMENTS >= 12);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 32;

/// Smallest segment count that still forms a closed polygon.
pub const MIN_SEGMENTS: u32 = 3;

/// Upper bound on segment count to keep BSP trees tractable in the browser.
pub const MAX_SEGMENTS: u32 = 1024;

// =============================================================================
// PRECISION
// =============================================================================

/// Plane thickness used when classifying points against BSP planes.
///
/// Matches the tolerance of the csg.js algorithm the boolean kernel follows.
///
/// # Examples
/// ```
/// use config::constants::BSP_EPSILON;
/// assert!(BSP_EPSILON < 1.0e-3);
/// ```
pub const BSP_EPSILON: f64 = 1.0e-5;

/// Minimum triangle area considered non-degenerate by mesh validation.
pub const DEGENERATE_AREA_EPSILON: f64 = 1.0e-12;

// =============================================================================
// KERNEL CONFIG
// =============================================================================

/// Immutable snapshot of the geometry kernel settings.
///
/// # Examples
/// ```
/// use config::constants::KernelConfig;
/// let config = KernelConfig::default();
/// assert_eq!(config.segments, config::constants::DEFAULT_SEGMENTS);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelConfig {
    /// Segment count used for every cylinder the kernel builds.
    pub segments: u32,
}

impl KernelConfig {
    /// Builds a configuration, rejecting segment counts outside
    /// `MIN_SEGMENTS..=MAX_SEGMENTS`.
    ///
    /// # Examples
    /// ```
    /// use config::constants::KernelConfig;
    /// let cfg = KernelConfig::new(24).expect("valid config");
    /// assert_eq!(cfg.segments, 24);
    /// assert!(KernelConfig::new(2).is_err());
    /// ```
    pub fn new(segments: u32) -> Result<Self, ConfigError> {
        if !(MIN_SEGMENTS..=MAX_SEGMENTS).contains(&segments) {
            return Err(ConfigError::InvalidSegments(segments));
        }
        Ok(Self { segments })
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the segment count cannot form a polygon or is too large.
    InvalidSegments(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSegments(value) => write!(
                f,
                "segments must be within {MIN_SEGMENTS}..={MAX_SEGMENTS}: {value}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
