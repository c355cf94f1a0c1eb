//! # Design Parameters
//!
//! Three stages of the same flat parameter set:
//!
//! 1. [`PartialDesignParameters`]: what the caller supplied, every field optional.
//! 2. [`DesignParameters`]: missing fields filled from the defaults table.
//! 3. [`ClampedParameters`]: finite, bounded values fed to the kernel.

use crate::error::DesignError;
use config::constants::{
    DEFAULT_HEIGHT, DEFAULT_HOLE_POSITION_1, DEFAULT_HOLE_POSITION_2, DEFAULT_HOLE_RADIUS_1,
    DEFAULT_HOLE_RADIUS_2, DEFAULT_SIZE, MIN_HOLE_RADIUS,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parameters as supplied by a caller.
///
/// Deserializes from camelCase JSON; absent and `null` fields stay `None`.
/// A `null` therefore takes the default on [`resolve`](Self::resolve) rather
/// than being coerced to zero.
///
/// ```rust
/// use part_design::PartialDesignParameters;
///
/// let params: PartialDesignParameters =
///     serde_json::from_str(r#"{"size": 4, "holeRadius1": 10}"#).unwrap();
/// assert_eq!(params.size, Some(4.0));
/// assert_eq!(params.hole_x1, None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PartialDesignParameters {
    pub size: Option<f64>,
    pub height: Option<f64>,
    pub hole_radius1: Option<f64>,
    pub hole_x1: Option<f64>,
    pub hole_y1: Option<f64>,
    pub hole_radius2: Option<f64>,
    pub hole_x2: Option<f64>,
    pub hole_y2: Option<f64>,
}

impl PartialDesignParameters {
    /// Camel-case field names, in form order.
    pub const FIELD_NAMES: [&'static str; 8] = [
        "size",
        "height",
        "holeRadius1",
        "holeX1",
        "holeY1",
        "holeRadius2",
        "holeX2",
        "holeY2",
    ];

    /// Fills every absent field from [`DesignParameters::default`].
    pub fn resolve(&self) -> DesignParameters {
        let defaults = DesignParameters::default();
        DesignParameters {
            size: self.size.unwrap_or(defaults.size),
            height: self.height.unwrap_or(defaults.height),
            hole_radius1: self.hole_radius1.unwrap_or(defaults.hole_radius1),
            hole_x1: self.hole_x1.unwrap_or(defaults.hole_x1),
            hole_y1: self.hole_y1.unwrap_or(defaults.hole_y1),
            hole_radius2: self.hole_radius2.unwrap_or(defaults.hole_radius2),
            hole_x2: self.hole_x2.unwrap_or(defaults.hole_x2),
            hole_y2: self.hole_y2.unwrap_or(defaults.hole_y2),
        }
    }

    /// Sets a single field by its camel-case name.
    ///
    /// Returns `false` and leaves the set untouched when `name` is unknown.
    pub fn set(&mut self, name: &str, value: f64) -> bool {
        let slot = match name {
            "size" => &mut self.size,
            "height" => &mut self.height,
            "holeRadius1" => &mut self.hole_radius1,
            "holeX1" => &mut self.hole_x1,
            "holeY1" => &mut self.hole_y1,
            "holeRadius2" => &mut self.hole_radius2,
            "holeX2" => &mut self.hole_x2,
            "holeY2" => &mut self.hole_y2,
            _ => return false,
        };
        *slot = Some(value);
        true
    }
}

/// Fully populated parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignParameters {
    /// Edge length of the base cube.
    pub size: f64,
    /// Extrusion height: sets cutout depth and the final Z shift.
    pub height: f64,
    pub hole_radius1: f64,
    pub hole_x1: f64,
    pub hole_y1: f64,
    pub hole_radius2: f64,
    pub hole_x2: f64,
    pub hole_y2: f64,
}

impl Default for DesignParameters {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            height: DEFAULT_HEIGHT,
            hole_radius1: DEFAULT_HOLE_RADIUS_1,
            hole_x1: DEFAULT_HOLE_POSITION_1[0],
            hole_y1: DEFAULT_HOLE_POSITION_1[1],
            hole_radius2: DEFAULT_HOLE_RADIUS_2,
            hole_x2: DEFAULT_HOLE_POSITION_2[0],
            hole_y2: DEFAULT_HOLE_POSITION_2[1],
        }
    }
}

impl DesignParameters {
    fn named_values(&self) -> [(&'static str, f64); 8] {
        let [size, height, r1, x1, y1, r2, x2, y2] = PartialDesignParameters::FIELD_NAMES;
        [
            (size, self.size),
            (height, self.height),
            (r1, self.hole_radius1),
            (x1, self.hole_x1),
            (y1, self.hole_y1),
            (r2, self.hole_radius2),
            (x2, self.hole_x2),
            (y2, self.hole_y2),
        ]
    }

    /// Rejects `NaN` and infinite fields, reporting the first in form order.
    pub fn validate(&self) -> Result<(), DesignError> {
        match self
            .named_values()
            .into_iter()
            .find(|(_, value)| !value.is_finite())
        {
            Some((name, value)) => Err(DesignError::InvalidParameter { name, value }),
            None => Ok(()),
        }
    }

    /// Validates, then bounds hole radii to `[0.1, size/2]` and hole
    /// positions to `[-size/2, size/2]`.
    ///
    /// The upper bound wins when `size < 0.2`.
    ///
    /// ```rust
    /// use part_design::DesignParameters;
    ///
    /// let params = DesignParameters { size: 4.0, hole_radius1: 10.0, ..Default::default() };
    /// assert_eq!(params.clamped().unwrap().holes[0].radius, 2.0);
    /// ```
    pub fn clamped(&self) -> Result<ClampedParameters, DesignError> {
        self.validate()?;

        let half = self.size / 2.0;
        let hole = |index: usize, radius: f64, x: f64, y: f64| Hole {
            radius: clamp_logged(("holeRadius", index), radius, MIN_HOLE_RADIUS, half),
            x: clamp_logged(("holeX", index), x, -half, half),
            y: clamp_logged(("holeY", index), y, -half, half),
        };

        Ok(ClampedParameters {
            size: self.size,
            height: self.height,
            holes: [
                hole(1, self.hole_radius1, self.hole_x1, self.hole_y1),
                hole(2, self.hole_radius2, self.hole_x2, self.hole_y2),
            ],
        })
    }

    /// Human-readable summary, one line per group, values to one decimal.
    ///
    /// ```rust
    /// use part_design::DesignParameters;
    ///
    /// let lines = DesignParameters::default().summary_lines();
    /// assert_eq!(lines[0], "Size: 10.0, Height: 5.0");
    /// ```
    pub fn summary_lines(&self) -> [String; 3] {
        let f = to_fixed_1;
        [
            format!("Size: {}, Height: {}", f(self.size), f(self.height)),
            format!(
                "Hole 1 - Radius: {}, X: {}, Y: {}",
                f(self.hole_radius1),
                f(self.hole_x1),
                f(self.hole_y1)
            ),
            format!(
                "Hole 2 - Radius: {}, X: {}, Y: {}",
                f(self.hole_radius2),
                f(self.hole_x2),
                f(self.hole_y2)
            ),
        ]
    }
}

/// Formats `value` with one decimal the way JavaScript's `toFixed(1)` does.
///
/// Exact ties round away from zero (`0.25` → `0.3`, `-0.75` → `-0.8`),
/// negative zero prints as `0.0`, and infinities print as `Infinity`.
fn to_fixed_1(value: f64) -> String {
    if value == 0.0 {
        return "0.0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // A double is an exact tie at one decimal only when it equals m/4 with
    // m odd; scaling by 4 is exact.
    let quarters = value.abs() * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        let tenths = (5 * quarters as u64 + 1) / 2;
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}{}.{}", tenths / 10, tenths % 10);
    }

    format!("{value:.1}")
}

/// One cylindrical cutout after clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hole {
    pub radius: f64,
    pub x: f64,
    pub y: f64,
}

/// Values actually used for geometry construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampedParameters {
    pub size: f64,
    pub height: f64,
    /// Cutouts in subtraction order.
    pub holes: [Hole; 2],
}

/// `min(max(value, low), high)`.
///
/// Unlike `f64::clamp` this does not panic when `low > high`; the upper
/// bound takes precedence.
fn clamp(value: f64, low: f64, high: f64) -> f64 {
    value.max(low).min(high)
}

fn clamp_logged(field: (&str, usize), value: f64, low: f64, high: f64) -> f64 {
    let clamped = clamp(value, low, high);
    if clamped != value {
        debug!(
            parameter = field.0,
            hole = field.1,
            requested = value,
            clamped,
            "parameter clamped"
        );
    }
    clamped
}
