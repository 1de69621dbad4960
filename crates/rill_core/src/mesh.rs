//! Triangle mesh data and OBJ loading.
//!
//! A mesh is an indexed triangle list. Texture coordinates are optional; when
//! present, every triangle carries a triple of indices into the UV list.
//! All indices are validated on construction, so consumers can index the
//! vertex and UV arrays directly.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rill_math::{Aabb, DVec2, DVec3};
use thiserror::Error;

/// Errors that can occur while building or loading a mesh.
#[derive(Error, Debug)]
pub enum MeshError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("OBJ error: {0}")]
    Obj(#[from] tobj::LoadError),

    #[error("triangle {triangle} references vertex {index}, but the mesh has {count} vertices")]
    VertexIndexOutOfRange {
        triangle: usize,
        index: usize,
        count: usize,
    },

    #[error("triangle {triangle} references uv {index}, but the mesh has {count} uvs")]
    UvIndexOutOfRange {
        triangle: usize,
        index: usize,
        count: usize,
    },

    #[error("expected uv indices for {expected} triangles, found {found}")]
    TextureIndexCount { expected: usize, found: usize },

    #[error("faces mix textured and untextured vertex references")]
    MixedTextureIndices,

    #[error("mesh has no triangles")]
    Empty,
}

pub type MeshResult<T> = Result<T, MeshError>;

/// An indexed triangle mesh with optional texture coordinates.
#[derive(Clone, Debug)]
pub struct Mesh {
    vertices: Vec<DVec3>,
    triangles: Vec<[usize; 3]>,
    uvs: Vec<DVec2>,
    /// Empty, or one uv-index triple per triangle
    texture_triangles: Vec<[usize; 3]>,
    bounds: Aabb,
}

impl Mesh {
    /// Create a mesh from vertex positions and 0-based triangle indices.
    ///
    /// A mesh without triangles is allowed here; it simply never intersects
    /// anything. The loaders reject it instead.
    pub fn new(vertices: Vec<DVec3>, triangles: Vec<[usize; 3]>) -> MeshResult<Self> {
        for (triangle, corners) in triangles.iter().enumerate() {
            if let Some(&index) = corners.iter().find(|&&i| i >= vertices.len()) {
                return Err(MeshError::VertexIndexOutOfRange {
                    triangle,
                    index,
                    count: vertices.len(),
                });
            }
        }

        let bounds = Aabb::enclosing(&vertices);
        Ok(Self {
            vertices,
            triangles,
            uvs: Vec::new(),
            texture_triangles: Vec::new(),
            bounds,
        })
    }

    /// Attach texture coordinates, one uv-index triple per triangle.
    pub fn with_texture(
        mut self,
        uvs: Vec<DVec2>,
        texture_triangles: Vec<[usize; 3]>,
    ) -> MeshResult<Self> {
        if texture_triangles.len() != self.triangles.len() {
            return Err(MeshError::TextureIndexCount {
                expected: self.triangles.len(),
                found: texture_triangles.len(),
            });
        }

        for (triangle, corners) in texture_triangles.iter().enumerate() {
            if let Some(&index) = corners.iter().find(|&&i| i >= uvs.len()) {
                return Err(MeshError::UvIndexOutOfRange {
                    triangle,
                    index,
                    count: uvs.len(),
                });
            }
        }

        self.uvs = uvs;
        self.texture_triangles = texture_triangles;
        Ok(self)
    }

    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Check if the mesh has UV coordinates.
    pub fn has_uvs(&self) -> bool {
        !self.texture_triangles.is_empty()
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Corner positions of triangle `index`.
    ///
    /// # Panics
    /// If `index >= triangle_count()`.
    pub fn triangle_vertices(&self, index: usize) -> [DVec3; 3] {
        let [a, b, c] = self.triangles[index];
        [self.vertices[a], self.vertices[b], self.vertices[c]]
    }

    /// Corner texture coordinates of triangle `index`, if the mesh is textured.
    pub fn triangle_uvs(&self, index: usize) -> Option<[DVec2; 3]> {
        self.texture_triangles
            .get(index)
            .map(|&[a, b, c]| [self.uvs[a], self.uvs[b], self.uvs[c]])
    }

    /// Bounding box of a single triangle.
    pub fn triangle_bounds(&self, index: usize) -> Aabb {
        Aabb::enclosing(&self.triangle_vertices(index))
    }
}

/// Load a mesh from an OBJ file.
///
/// Every object and group in the file is merged into one mesh. Material
/// libraries are not read.
pub fn load_obj(path: impl AsRef<Path>) -> MeshResult<Mesh> {
    let path = path.as_ref();
    let mut reader = BufReader::new(File::open(path)?);
    let mesh = read_obj(&mut reader)?;

    log::info!(
        "Loaded mesh {}: {} vertices, {} triangles{}",
        path.display(),
        mesh.vertex_count(),
        mesh.triangle_count(),
        if mesh.has_uvs() { ", textured" } else { "" }
    );

    Ok(mesh)
}

/// Parse OBJ text already in memory. See [`load_obj`].
pub fn parse_obj(source: &str) -> MeshResult<Mesh> {
    read_obj(&mut source.as_bytes())
}

fn read_obj(reader: &mut impl BufRead) -> MeshResult<Mesh> {
    let options = tobj::LoadOptions {
        triangulate: true,
        single_index: false,
        ..Default::default()
    };
    let (models, _materials) =
        tobj::load_obj_buf(reader, &options, |_| Err(tobj::LoadError::OpenFileFailed))?;

    let mut vertices = Vec::new();
    let mut triangles = Vec::new();
    let mut uvs = Vec::new();
    let mut texture_triangles = Vec::new();
    let mut untextured_models = 0;

    for model in &models {
        let mesh = &model.mesh;
        if mesh.indices.is_empty() {
            continue;
        }

        let vertex_offset = vertices.len();
        vertices.extend(
            mesh.positions
                .chunks_exact(3)
                .map(|p| DVec3::new(f64::from(p[0]), f64::from(p[1]), f64::from(p[2]))),
        );
        triangles.extend(index_triples(&mesh.indices, vertex_offset));

        if mesh.texcoord_indices.is_empty() {
            untextured_models += 1;
            continue;
        }
        // tobj drops the uv index of untextured corners, so a partial list means mixed faces
        if mesh.texcoord_indices.len() != mesh.indices.len() {
            return Err(MeshError::MixedTextureIndices);
        }
        let uv_offset = uvs.len();
        uvs.extend(
            mesh.texcoords
                .chunks_exact(2)
                .map(|t| DVec2::new(f64::from(t[0]), f64::from(t[1]))),
        );
        texture_triangles.extend(index_triples(&mesh.texcoord_indices, uv_offset));
    }

    if triangles.is_empty() {
        return Err(MeshError::Empty);
    }
    if !texture_triangles.is_empty() && untextured_models > 0 {
        return Err(MeshError::MixedTextureIndices);
    }

    let mesh = Mesh::new(vertices, triangles)?;
    if texture_triangles.is_empty() {
        Ok(mesh)
    } else {
        mesh.with_texture(uvs, texture_triangles)
    }
}

fn index_triples(indices: &[u32], offset: usize) -> impl Iterator<Item = [usize; 3]> + '_ {
    indices
        .chunks_exact(3)
        .map(move |c| [c[0] as usize + offset, c[1] as usize + offset, c[2] as usize + offset])
}
