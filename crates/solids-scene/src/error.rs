use solids_mesh::MeshError;

/// Errors that can occur while building or driving a scene.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    #[error("mesh error: {0}")]
    Mesh(#[from] MeshError),

    #[error("no mesh named '{0}' in the scene")]
    NoSuchMesh(String),
}
