//! Named mesh storage paired with uploaded buffers

use std::collections::{BTreeMap, HashMap};

use tracing::info;

use crate::error::MeshError;
use crate::handle::{MeshHandle, MeshId};
use crate::mesh::Mesh;
use crate::shapes::ShapeParams;
use crate::upload::MeshUploader;

/// A generated mesh together with the parameters it came from and the
/// buffers the uploader produced for it.
#[derive(Debug, Clone)]
pub struct RegisteredMesh<B> {
    pub name: String,
    pub params: ShapeParams,
    pub mesh: Mesh,
    pub buffers: B,
}

/// Registry of named meshes, each paired with its own uploaded buffers.
///
/// New shapes only need a [`ShapeParams`] value; nothing here switches on
/// the kind of shape.
pub struct MeshRegistry<U: MeshUploader> {
    uploader: U,
    next_id: MeshId,
    meshes: BTreeMap<MeshId, RegisteredMesh<U::Buffers>>,
    name_to_mesh: HashMap<String, MeshHandle>,
}

impl<U: MeshUploader> MeshRegistry<U> {
    /// Create an empty registry that uploads through `uploader`.
    pub fn new(uploader: U) -> Self {
        Self {
            uploader,
            next_id: 1,
            meshes: BTreeMap::new(),
            name_to_mesh: HashMap::new(),
        }
    }

    /// Generate a mesh from `params`, upload it and register it under `name`.
    /// Nothing is uploaded or registered if generation fails.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        params: ShapeParams,
    ) -> Result<MeshHandle, MeshError> {
        let name = name.into();
        if self.name_to_mesh.contains_key(&name) {
            return Err(MeshError::DuplicateName(name));
        }

        let mesh = params.generate()?;
        let buffers = self.uploader.upload(&name, &mesh);

        let handle = MeshHandle::new(self.next_id);
        self.next_id += 1;

        info!(
            "Registered {} '{}' ({} vertices, {} triangles)",
            params.kind(),
            name,
            mesh.vertex_count(),
            mesh.triangle_count()
        );

        self.name_to_mesh.insert(name.clone(), handle);
        self.meshes.insert(
            handle.id(),
            RegisteredMesh {
                name,
                params,
                mesh,
                buffers,
            },
        );

        Ok(handle)
    }

    /// Rebuild a registered mesh from new parameters, replacing its buffers.
    /// The old mesh stays in place if generation fails.
    pub fn regenerate(&mut self, handle: MeshHandle, params: ShapeParams) -> Result<(), MeshError> {
        let Some(entry) = self.meshes.get_mut(&handle.id()) else {
            return Err(MeshError::UnknownHandle(handle.id()));
        };

        let mesh = params.generate()?;
        entry.buffers = self.uploader.upload(&entry.name, &mesh);
        entry.params = params;
        entry.mesh = mesh;

        info!("Regenerated '{}' as {}", entry.name, params.kind());
        Ok(())
    }

    /// Remove a mesh and return it with its buffers.
    pub fn remove(&mut self, handle: MeshHandle) -> Option<RegisteredMesh<U::Buffers>> {
        let entry = self.meshes.remove(&handle.id())?;
        self.name_to_mesh.remove(&entry.name);
        Some(entry)
    }

    /// Get a registered mesh by its handle.
    pub fn get(&self, handle: MeshHandle) -> Option<&RegisteredMesh<U::Buffers>> {
        self.meshes.get(&handle.id())
    }

    /// Look up a mesh handle by name.
    pub fn find(&self, name: &str) -> Option<MeshHandle> {
        self.name_to_mesh.get(name).copied()
    }

    /// Check if a handle refers to a registered mesh.
    pub fn contains(&self, handle: MeshHandle) -> bool {
        self.meshes.contains_key(&handle.id())
    }

    /// Registered meshes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (MeshHandle, &RegisteredMesh<U::Buffers>)> {
        self.meshes
            .iter()
            .map(|(&id, entry)| (MeshHandle::new(id), entry))
    }

    /// Handles of all registered meshes in insertion order.
    pub fn handles(&self) -> Vec<MeshHandle> {
        self.meshes.keys().map(|&id| MeshHandle::new(id)).collect()
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    pub fn uploader(&self) -> &U {
        &self.uploader
    }
}
