//! Rill Renderer - recursive Whitted-style ray tracing.
//!
//! Geometry answers "where does this ray first hit me" and "what is my
//! normal there"; shaders turn a hit into a color, casting reflection,
//! refraction and shadow rays back into the [`World`]. Recursion is bounded
//! by the world's depth limit, which is also the only guard against shader
//! graphs that reference themselves.

mod trace;
mod hit;
mod color;
mod light;
pub mod geometry;
pub mod shader;
mod world;
mod camera;
mod renderer;
mod bucket;

pub use trace::Trace;
pub use hit::{Hit, Surface};
pub use color::{Color, ColorSource};
pub use light::{Light, PointLight};
pub use geometry::{Cylinder, Geometry, Paraboloid, Plane, Sphere, SurfaceFunction, TriangleMesh};
pub use shader::{FlatShader, PhongShader, ReflectiveShader, Shader, TransparentShader};
pub use world::{ShadedObject, World};
pub use camera::Camera;
pub use renderer::{color_to_rgba, ImageBuffer, RenderConfig};
pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};

/// Re-export math types from rill_math
pub use rill_math::{Aabb, DVec2, DVec3, Interval, Ray, SMALL_T};
