//! Rill Core - scene assets consumed by the ray tracer.
//!
//! This crate provides:
//!
//! - **Meshes**: indexed triangle data with optional texture coordinates,
//!   loaded from OBJ files
//! - **Textures**: images decoded to linear floats with bilinear lookup
//!
//! # Example
//!
//! ```ignore
//! use rill_core::load_obj;
//!
//! let mesh = load_obj("assets/teapot.obj")?;
//! println!("Loaded {} vertices, {} triangles",
//!     mesh.vertex_count(),
//!     mesh.triangle_count());
//! ```

pub mod mesh;
pub mod texture;

// Re-export commonly used types
pub use mesh::{load_obj, parse_obj, Mesh, MeshError, MeshResult};
pub use texture::{Texture, TextureCache, TextureError, TextureResult};
