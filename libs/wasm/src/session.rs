//! # Design Session
//!
//! State the host page keeps between form edits: the current parameter set
//! and, optionally, externally loaded geometry shown next to the design.
//!
//! ```text
//! form input ─▶ set_parameter / set_parameters_json ─┐
//! loaded DXF ─▶ set_overlay ─────────────────────────┤
//!                                                    ▼
//!                                  render() ─▶ SceneHandle [design, overlay?]
//!                                  feedback() ─▶ "Size: …<br>Hole 1 …<br>Hole 2 …"
//! ```

use crate::error::{to_js_error, SessionError};
use crate::mesh_handle::{MeshHandle, SceneHandle};
use part_design::{build, MeshKernel, PartialDesignParameters};
use part_mesh::Mesh;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;

/// Separator between feedback lines, rendered as HTML by the host page.
const FEEDBACK_SEPARATOR: &str = "<br>";

/// Owned design state for one viewer.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const session = new DesignSession();
/// session.set_parameter("holeRadius1", 3);
/// const scene = session.render();
/// feedbackDiv.innerHTML = session.feedback();
/// ```
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct DesignSession {
    params: PartialDesignParameters,
    overlay: Option<Mesh>,
    kernel: MeshKernel,
}

#[wasm_bindgen]
impl DesignSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all parameters with the fields of a JSON object.
    ///
    /// # Errors
    /// Malformed JSON or unknown field names; the previous parameters stay.
    pub fn set_parameters_json(&mut self, json: &str) -> Result<(), JsValue> {
        self.set_parameters_json_internal(json).map_err(to_js_error)
    }

    /// Sets one parameter by its camel-case form name (`"holeX1"`).
    pub fn set_parameter(&mut self, name: &str, value: f64) -> Result<(), JsValue> {
        self.set_parameter_internal(name, value).map_err(to_js_error)
    }

    /// Stores externally produced geometry to display next to the design.
    ///
    /// # Errors
    /// Buffers whose lengths are not multiples of three, non-finite
    /// coordinates, or out-of-range indices. A previous overlay stays.
    pub fn set_overlay(&mut self, vertices: Vec<f32>, indices: Vec<u32>) -> Result<(), JsValue> {
        self.set_overlay_internal(&vertices, &indices)
            .map_err(to_js_error)
    }

    pub fn clear_overlay(&mut self) {
        self.overlay = None;
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    /// Builds the design and returns every mesh to display.
    pub fn render(&self) -> Result<SceneHandle, JsValue> {
        self.render_internal().map_err(to_js_error)
    }

    /// Parameter summary with each value to one decimal, lines joined by `<br>`.
    ///
    /// Shows the values as entered (defaults for absent fields), not the
    /// clamped values.
    pub fn feedback(&self) -> String {
        self.params
            .resolve()
            .summary_lines()
            .join(FEEDBACK_SEPARATOR)
    }
}

impl DesignSession {
    /// Session using a non-default kernel configuration.
    pub fn with_kernel(kernel: MeshKernel) -> Self {
        Self {
            kernel,
            ..Self::default()
        }
    }

    pub fn parameters(&self) -> &PartialDesignParameters {
        &self.params
    }

    pub fn overlay(&self) -> Option<&Mesh> {
        self.overlay.as_ref()
    }

    pub fn set_parameters_json_internal(&mut self, json: &str) -> Result<(), SessionError> {
        let params: PartialDesignParameters = serde_json::from_str(json).map_err(|err| {
            warn!(error = %err, "rejected parameter JSON");
            err
        })?;
        self.params = params;
        Ok(())
    }

    pub fn set_parameter_internal(&mut self, name: &str, value: f64) -> Result<(), SessionError> {
        if self.params.set(name, value) {
            Ok(())
        } else {
            warn!(parameter = name, "rejected unknown parameter");
            Err(SessionError::UnknownParameter(name.to_string()))
        }
    }

    pub fn set_overlay_internal(
        &mut self,
        vertices: &[f32],
        indices: &[u32],
    ) -> Result<(), SessionError> {
        let mesh = Mesh::from_buffers(vertices, indices).map_err(|err| {
            warn!(error = %err, "rejected overlay mesh");
            err
        })?;
        debug!(
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "overlay stored"
        );
        self.overlay = Some(mesh);
        Ok(())
    }

    pub fn render_internal(&self) -> Result<SceneHandle, SessionError> {
        let solid = build(&self.kernel, &self.params)?;

        let mut meshes = vec![MeshHandle::from_mesh(solid.mesh())];
        meshes.extend(self.overlay.as_ref().map(MeshHandle::from_mesh));
        debug!(meshes = meshes.len(), "scene rendered");

        Ok(SceneHandle::new(meshes))
    }
}
