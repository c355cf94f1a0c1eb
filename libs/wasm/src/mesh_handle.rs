//! # Mesh Handles
//!
//! WASM-friendly wrappers for mesh data that can be transferred to JavaScript.

use part_mesh::Mesh;
use wasm_bindgen::prelude::*;

/// GPU-ready buffers for one solid.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const scene = session.render();
/// const mesh = scene.mesh(0);
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.vertices(), 3));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.normals(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct MeshHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    indices: Vec<u32>,
    /// Vertex normals as [nx, ny, nz, ...]
    normals: Vec<f32>,
    vertex_count: u32,
    triangle_count: u32,
}

#[wasm_bindgen]
impl MeshHandle {
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Length: vertex_count * 3
    #[wasm_bindgen]
    pub fn vertices(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.vertices[..])
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Length: triangle_count * 3
    #[wasm_bindgen]
    pub fn indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&self.indices[..])
    }

    /// Returns the area-weighted vertex normals as a Float32Array.
    #[wasm_bindgen]
    pub fn normals(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.normals[..])
    }

    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.triangle_count == 0
    }
}

impl MeshHandle {
    /// Flattens a mesh, computing normals on a copy when they are missing.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        let normals = match mesh.normals_f32() {
            Some(normals) => normals,
            None => {
                let mut with_normals = mesh.clone();
                with_normals.compute_normals();
                with_normals.normals_f32().unwrap_or_default()
            }
        };

        Self {
            vertices: mesh.vertices_f32(),
            indices: mesh.indices_u32(),
            normals,
            vertex_count: mesh.vertex_count() as u32,
            triangle_count: mesh.triangle_count() as u32,
        }
    }

    pub fn vertex_buffer(&self) -> &[f32] {
        &self.vertices
    }

    pub fn index_buffer(&self) -> &[u32] {
        &self.indices
    }

    pub fn normal_buffer(&self) -> &[f32] {
        &self.normals
    }
}

/// Ordered list of meshes to display: the design first, then the overlay.
#[wasm_bindgen]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneHandle {
    meshes: Vec<MeshHandle>,
}

#[wasm_bindgen]
impl SceneHandle {
    #[wasm_bindgen(getter)]
    pub fn mesh_count(&self) -> u32 {
        self.meshes.len() as u32
    }

    /// Returns a copy of the mesh at `index`, or `undefined` when out of range.
    #[wasm_bindgen]
    pub fn mesh(&self, index: u32) -> Option<MeshHandle> {
        self.meshes.get(index as usize).cloned()
    }
}

impl SceneHandle {
    pub fn new(meshes: Vec<MeshHandle>) -> Self {
        Self { meshes }
    }

    pub fn meshes(&self) -> &[MeshHandle] {
        &self.meshes
    }
}
