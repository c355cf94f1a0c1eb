//! Tests for the WASM-facing session and one-shot helpers.

use super::*;
use part_design::DesignError;

/// Flat buffers for a single triangle in the XY plane.
fn triangle_buffers() -> (Vec<f32>, Vec<u32>) {
    (
        vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        vec![0, 1, 2],
    )
}

#[test]
fn build_design_produces_valid_buffers() {
    let mesh = build_design_internal("{}").expect("default design builds");

    assert!(!mesh.is_empty());
    assert_eq!(mesh.vertex_buffer().len(), mesh.vertex_count() as usize * 3);
    assert_eq!(mesh.index_buffer().len(), mesh.triangle_count() as usize * 3);
    assert_eq!(mesh.normal_buffer().len(), mesh.vertex_buffer().len());

    assert!(mesh.vertex_buffer().iter().all(|v| v.is_finite()));
    let vertex_count = mesh.vertex_count();
    for &idx in mesh.index_buffer() {
        assert!(idx < vertex_count, "Index {} out of range", idx);
    }
}

#[test]
fn build_design_rejects_malformed_json() {
    assert!(matches!(
        build_design_internal("{size: 4"),
        Err(SessionError::Json(_))
    ));
    assert!(matches!(
        build_design_internal(r#"{"diameter": 4}"#),
        Err(SessionError::Json(_))
    ));
}

#[test]
fn build_design_surfaces_geometry_failures() {
    assert!(matches!(
        build_design_internal(r#"{"size": 0}"#),
        Err(SessionError::Design(DesignError::GeometryConstructionFailed(_)))
    ));
}

#[test]
fn session_renders_design_only_by_default() {
    let session = DesignSession::new();
    let scene = session.render_internal().expect("default design builds");

    assert_eq!(scene.mesh_count(), 1);
    assert_eq!(scene.mesh(0), Some(build_design_internal("{}").unwrap()));
    assert!(scene.mesh(1).is_none());
}

#[test]
fn session_renders_overlay_after_design() {
    let mut session = DesignSession::new();
    let (vertices, indices) = triangle_buffers();
    session
        .set_overlay_internal(&vertices, &indices)
        .expect("overlay accepted");
    assert!(session.has_overlay());

    let scene = session.render_internal().unwrap();
    assert_eq!(scene.mesh_count(), 2);
    let overlay = &scene.meshes()[1];
    assert_eq!(overlay.vertex_buffer(), &vertices[..]);
    assert_eq!(overlay.index_buffer(), &indices[..]);
    assert_eq!(&overlay.normal_buffer()[0..3], &[0.0, 0.0, 1.0]);
    assert!(scene.meshes()[0].triangle_count() > overlay.triangle_count());

    session.clear_overlay();
    assert!(!session.has_overlay());
    assert_eq!(session.render_internal().unwrap().mesh_count(), 1);
}

#[test]
fn session_rejects_invalid_overlay_and_keeps_previous() {
    let mut session = DesignSession::new();
    let (vertices, indices) = triangle_buffers();
    session.set_overlay_internal(&vertices, &indices).unwrap();

    let cases: [(&[f32], &[u32]); 3] = [
        (&[0.0, 1.0], &[]),
        (&vertices, &[0, 1]),
        (&vertices, &[0, 1, 3]),
    ];
    for (bad_vertices, bad_indices) in cases {
        assert!(matches!(
            session.set_overlay_internal(bad_vertices, bad_indices),
            Err(SessionError::Mesh(_))
        ));
    }
    assert_eq!(session.overlay().map(|m| m.triangle_count()), Some(1));
}

#[test]
fn session_json_replaces_parameters() {
    let mut session = DesignSession::new();
    session.set_parameter_internal("holeX2", -3.0).unwrap();
    session
        .set_parameters_json_internal(r#"{"size": 4, "holeRadius1": 10}"#)
        .unwrap();

    let params = session.parameters();
    assert_eq!(params.size, Some(4.0));
    assert_eq!(params.hole_radius1, Some(10.0));
    assert_eq!(params.hole_x2, None);
}

#[test]
fn session_invalid_json_leaves_state_untouched() {
    let mut session = DesignSession::new();
    session.set_parameters_json_internal(r#"{"size": 8}"#).unwrap();
    let before = *session.parameters();

    assert!(session.set_parameters_json_internal("not json").is_err());
    assert!(session
        .set_parameters_json_internal(r#"{"size": "big"}"#)
        .is_err());
    assert_eq!(*session.parameters(), before);
}

#[test]
fn session_rejects_unknown_parameter_name() {
    let mut session = DesignSession::new();
    let err = session.set_parameter_internal("hole_x1", 1.0).unwrap_err();
    assert!(matches!(err, SessionError::UnknownParameter(ref name) if name == "hole_x1"));
    assert_eq!(*session.parameters(), PartialDesignParameters::default());
}

#[test]
fn session_nan_parameter_fails_render() {
    let mut session = DesignSession::new();
    session.set_parameter_internal("size", f64::NAN).unwrap();
    assert!(matches!(
        session.render_internal(),
        Err(SessionError::Design(DesignError::InvalidParameter { name: "size", .. }))
    ));
}

#[test]
fn feedback_shows_defaults() {
    let session = DesignSession::new();
    assert_eq!(
        session.feedback(),
        "Size: 10.0, Height: 5.0<br>\
         Hole 1 - Radius: 2.0, X: 0.0, Y: 0.0<br>\
         Hole 2 - Radius: 1.0, X: 2.0, Y: 2.0"
    );
}

#[test]
fn feedback_shows_entered_values_before_clamping() {
    let mut session = DesignSession::new();
    session
        .set_parameters_json_internal(r#"{"size": 4, "holeRadius1": 10, "holeY2": -1.26}"#)
        .unwrap();
    assert_eq!(
        session.feedback(),
        "Size: 4.0, Height: 5.0<br>\
         Hole 1 - Radius: 10.0, X: 0.0, Y: 0.0<br>\
         Hole 2 - Radius: 1.0, X: 2.0, Y: -1.3"
    );
}

#[test]
fn feedback_rounds_ties_like_the_form() {
    let mut session = DesignSession::new();
    session
        .set_parameters_json_internal(
            r#"{"holeRadius1": 0.25, "holeX1": 1.25, "holeY1": -0.75, "holeX2": -0.0}"#,
        )
        .unwrap();
    assert_eq!(
        session.feedback(),
        "Size: 10.0, Height: 5.0<br>\
         Hole 1 - Radius: 0.3, X: 1.3, Y: -0.8<br>\
         Hole 2 - Radius: 1.0, X: 0.0, Y: 2.0"
    );
}

#[test]
fn session_with_coarse_kernel_builds_fewer_triangles() {
    let coarse = part_design::MeshKernel::new(
        config::constants::KernelConfig::new(8).expect("valid segment count"),
    );
    let coarse_scene = DesignSession::with_kernel(coarse).render_internal().unwrap();
    let default_scene = DesignSession::new().render_internal().unwrap();
    assert!(
        coarse_scene.meshes()[0].triangle_count() < default_scene.meshes()[0].triangle_count()
    );
}
