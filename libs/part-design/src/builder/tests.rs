//! # Builder Tests
//!
//! Composition order is checked against a kernel that records the operation
//! tree; geometry is checked against the mesh kernel.

use super::*;
use approx::assert_relative_eq;
use config::constants::DEFAULT_SEGMENTS;
use part_mesh::{MeshError, Solid};
use std::cell::Cell;
use std::f64::consts::TAU;

/// Operation tree produced by [`RecordingKernel`].
#[derive(Debug, Clone, PartialEq)]
enum Op {
    Cube(f64),
    Cylinder { radius: f64, height: f64 },
    Translate(DVec3, Box<Op>),
    Subtract(Box<Op>, Box<Op>),
}

fn translate(x: f64, y: f64, z: f64, op: Op) -> Op {
    Op::Translate(DVec3::new(x, y, z), Box::new(op))
}

fn subtract(a: Op, b: Op) -> Op {
    Op::Subtract(Box::new(a), Box::new(b))
}

fn cylinder(radius: f64, height: f64) -> Op {
    Op::Cylinder { radius, height }
}

#[derive(Default)]
struct RecordingKernel {
    calls: Cell<usize>,
    fail_subtract: bool,
}

impl RecordingKernel {
    fn record(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl GeometryKernel for RecordingKernel {
    type Solid = Op;
    type Error = MeshError;

    fn cube(&self, edge: f64) -> Result<Op, MeshError> {
        self.record();
        Ok(Op::Cube(edge))
    }

    fn cylinder(&self, radius: f64, height: f64) -> Result<Op, MeshError> {
        self.record();
        Ok(cylinder(radius, height))
    }

    fn translate(&self, offset: DVec3, solid: &Op) -> Op {
        self.record();
        Op::Translate(offset, Box::new(solid.clone()))
    }

    fn subtract(&self, a: &Op, b: &Op) -> Result<Op, MeshError> {
        self.record();
        if self.fail_subtract {
            return Err(MeshError::degenerate("subtraction rejected"));
        }
        Ok(subtract(a.clone(), b.clone()))
    }
}

fn params(json: &str) -> PartialDesignParameters {
    serde_json::from_str(json).unwrap()
}

fn record(json: &str) -> Op {
    build(&RecordingKernel::default(), &params(json)).unwrap()
}

fn cap_area(radius: f64) -> f64 {
    let n = DEFAULT_SEGMENTS as f64;
    0.5 * n * radius * radius * (TAU / n).sin()
}

#[test]
fn test_build_defaults() {
    let expected = translate(
        0.0,
        0.0,
        2.5,
        subtract(
            subtract(
                Op::Cube(10.0),
                translate(0.0, 0.0, 0.0, cylinder(2.0, 6.0)),
            ),
            translate(2.0, 2.0, 0.0, cylinder(1.0, 6.0)),
        ),
    );
    assert_eq!(record("{}"), expected);
}

#[test]
fn test_build_clamps_oversized_radius() {
    let expected = translate(
        0.0,
        0.0,
        2.5,
        subtract(
            subtract(Op::Cube(4.0), translate(0.0, 0.0, 0.0, cylinder(2.0, 6.0))),
            translate(2.0, 2.0, 0.0, cylinder(1.0, 6.0)),
        ),
    );
    assert_eq!(record(r#"{"size": 4, "holeRadius1": 10}"#), expected);
}

#[test]
fn test_build_clamps_out_of_range_position() {
    let expected = translate(
        0.0,
        0.0,
        2.5,
        subtract(
            subtract(Op::Cube(4.0), translate(2.0, 0.0, 0.0, cylinder(2.0, 6.0))),
            translate(2.0, 2.0, 0.0, cylinder(1.0, 6.0)),
        ),
    );
    assert_eq!(record(r#"{"size": 4, "holeX1": 100}"#), expected);
}

#[test]
fn test_build_tiny_cube_collapses_radii() {
    let op = record(r#"{"size": 0.1, "holeRadius1": 0.001, "holeRadius2": 7}"#);
    let expected = translate(
        0.0,
        0.0,
        2.5,
        subtract(
            subtract(
                Op::Cube(0.1),
                translate(0.0, 0.0, 0.0, cylinder(0.05, 6.0)),
            ),
            translate(0.05, 0.05, 0.0, cylinder(0.05, 6.0)),
        ),
    );
    assert_eq!(op, expected);
}

#[test]
fn test_overlapping_cutouts_subtract_in_order() {
    let json = r#"{"holeRadius1": 3, "holeX1": 1, "holeRadius2": 3, "holeX2": 2, "holeY2": 0}"#;

    let expected = translate(
        0.0,
        0.0,
        2.5,
        subtract(
            subtract(Op::Cube(10.0), translate(1.0, 0.0, 0.0, cylinder(3.0, 6.0))),
            translate(2.0, 0.0, 0.0, cylinder(3.0, 6.0)),
        ),
    );
    assert_eq!(record(json), expected);

    let built = build_solid(&params(json)).unwrap();
    let hole = |x: f64| {
        Solid::cylinder(3.0, 6.0, DEFAULT_SEGMENTS)
            .unwrap()
            .translate(DVec3::new(x, 0.0, 0.0))
    };
    let manual = Solid::cube(10.0)
        .unwrap()
        .difference(&hole(1.0))
        .difference(&hole(2.0))
        .translate(DVec3::new(0.0, 0.0, 2.5));
    assert_eq!(built, manual);
}

#[test]
fn test_nan_rejected_before_geometry() {
    let kernel = RecordingKernel::default();
    let partial = PartialDesignParameters {
        size: Some(f64::NAN),
        ..Default::default()
    };
    let result = build(&kernel, &partial);
    assert!(matches!(
        result,
        Err(DesignError::InvalidParameter { name: "size", .. })
    ));
    assert_eq!(kernel.calls.get(), 0);
}

#[test]
fn test_infinite_height_rejected() {
    let partial = PartialDesignParameters {
        height: Some(f64::INFINITY),
        ..Default::default()
    };
    assert!(matches!(
        build_solid(&partial),
        Err(DesignError::InvalidParameter { name: "height", .. })
    ));
}

#[test]
fn test_non_positive_size_fails_in_kernel() {
    for size in [0.0, -1.0] {
        let partial = PartialDesignParameters {
            size: Some(size),
            ..Default::default()
        };
        match build_solid(&partial) {
            Err(DesignError::GeometryConstructionFailed(source)) => {
                assert!(matches!(
                    source.downcast_ref::<MeshError>(),
                    Some(MeshError::DegenerateGeometry { .. })
                ));
            }
            other => panic!("expected GeometryConstructionFailed, got {other:?}"),
        }
    }
}

#[test]
fn test_negative_height_fails_in_kernel() {
    let result = build_solid(&params(r#"{"height": -3}"#));
    assert!(matches!(
        result,
        Err(DesignError::GeometryConstructionFailed(_))
    ));
}

#[test]
fn test_kernel_error_is_wrapped_unchanged() {
    let kernel = RecordingKernel {
        fail_subtract: true,
        ..Default::default()
    };
    let err = build(&kernel, &PartialDesignParameters::default()).unwrap_err();
    let source = std::error::Error::source(&err).unwrap();
    assert_eq!(
        source.to_string(),
        MeshError::degenerate("subtraction rejected").to_string()
    );
}

#[test]
fn test_default_bounding_box() {
    let solid = build_solid(&PartialDesignParameters::default()).unwrap();
    let (min, max) = solid.bounding_box().unwrap();
    assert!((min - DVec3::new(-5.0, -5.0, -2.5)).length() < 1e-9);
    assert!((max - DVec3::new(5.0, 5.0, 7.5)).length() < 1e-9);
}

#[test]
fn test_default_build_removes_cavity_volume() {
    let solid = build_solid(&PartialDesignParameters::default()).unwrap();
    let volume = solid.volume();
    // The cutouts overlap, so less than their sum is removed.
    assert!(volume < 1000.0 - 6.0 * cap_area(2.0) + 1e-6);
    assert!(volume > 1000.0 - 6.0 * (cap_area(2.0) + cap_area(1.0)));
}

#[test]
fn test_through_holes_remove_prism_volume() {
    let partial = params(
        r#"{"height": 12, "holeX1": -2.5, "holeY1": -2.5, "holeX2": 2.5, "holeY2": 2.5}"#,
    );
    let solid = build_solid(&partial).unwrap();

    assert_relative_eq!(
        solid.volume(),
        1000.0 - 10.0 * (cap_area(2.0) + cap_area(1.0)),
        epsilon = 1e-6
    );
    let (min, max) = solid.bounding_box().unwrap();
    assert!((min.z - 1.0).abs() < 1e-9);
    assert!((max.z - 11.0).abs() < 1e-9);
}
