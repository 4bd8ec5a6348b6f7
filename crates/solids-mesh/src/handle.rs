/// Identifier of a mesh within a [`MeshRegistry`](crate::MeshRegistry).
pub type MeshId = u64;

/// A handle referencing a registered mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshHandle {
    id: MeshId,
}

impl MeshHandle {
    pub(crate) fn new(id: MeshId) -> Self {
        Self { id }
    }

    /// The registry-local ID of this mesh.
    pub fn id(&self) -> MeshId {
        self.id
    }
}
