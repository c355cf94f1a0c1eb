//! WASM-facing entry points for the parametric part designer.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Each exported function has an `*_internal` counterpart
//! returning Rust error types, so native tests never need a JS host.
//!
//! ```
//! let mesh = part_wasm::build_design_internal(r#"{"size": 4}"#).unwrap();
//! assert!(mesh.triangle_count() > 12);
//! ```

use part_design::{build_solid, PartialDesignParameters};
use wasm_bindgen::prelude::*;

mod error;
mod mesh_handle;
mod session;

pub use error::SessionError;
pub use mesh_handle::{MeshHandle, SceneHandle};
pub use session::DesignSession;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "part-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Builds the design from a JSON parameter object in one call.
///
/// Absent fields take their defaults. For repeated edits prefer
/// [`DesignSession`], which keeps parameters between calls.
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message
/// when the JSON is malformed or the design cannot be built.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = build_design('{"size": 12, "holeRadius1": 3}');
/// // console.log(mesh.vertex_count, mesh.triangle_count);
/// ```
#[wasm_bindgen]
pub fn build_design(json: &str) -> Result<MeshHandle, JsValue> {
    build_design_internal(json).map_err(error::to_js_error)
}

/// Host-only helper behind [`build_design`].
///
/// # Examples
/// ```
/// let err = part_wasm::build_design_internal(r#"{"size": -1}"#).unwrap_err();
/// assert!(err.to_string().contains("Geometry construction failed"));
/// ```
pub fn build_design_internal(json: &str) -> Result<MeshHandle, SessionError> {
    let params: PartialDesignParameters = serde_json::from_str(json)?;
    let solid = build_solid(&params)?;
    Ok(MeshHandle::from_mesh(solid.mesh()))
}

#[cfg(test)]
mod tests;
