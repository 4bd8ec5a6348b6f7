//! Solids Mesh - Procedural primitive mesh generation
//!
//! Builds flat-colored triangle meshes for cubes, cylinders and spheres,
//! and keeps generated meshes paired with their uploaded buffers in a
//! handle-addressed registry.

mod error;
mod handle;
mod mesh;
mod registry;
pub mod shapes;
mod upload;
mod vertex;

pub use error::MeshError;
pub use handle::{MeshHandle, MeshId};
pub use mesh::Mesh;
pub use registry::{MeshRegistry, RegisteredMesh};
pub use shapes::{generate_cube, generate_cylinder, generate_sphere, ShapeKind, ShapeParams};
pub use upload::{HostBuffers, HostUploader, MeshUploader};
pub use vertex::Vertex;
