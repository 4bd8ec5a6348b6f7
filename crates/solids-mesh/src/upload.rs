//! Hand-off from generated meshes to renderer-owned buffers

use crate::mesh::Mesh;

/// Turns a generated mesh into whatever buffers the renderer draws from.
///
/// A GPU backend creates vertex and index buffers here; headless code can
/// use [`HostUploader`] instead.
pub trait MeshUploader {
    type Buffers;

    fn upload(&mut self, label: &str, mesh: &Mesh) -> Self::Buffers;
}

/// Host-memory copy of a mesh's vertex and index buffers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostBuffers {
    pub label: String,
    pub vertex_bytes: Vec<u8>,
    pub index_bytes: Vec<u8>,
    pub index_count: u32,
}

/// Uploader that keeps buffer contents in host memory.
#[derive(Debug, Default)]
pub struct HostUploader {
    uploaded_bytes: usize,
}

impl HostUploader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total bytes copied by this uploader so far
    pub fn uploaded_bytes(&self) -> usize {
        self.uploaded_bytes
    }
}

impl MeshUploader for HostUploader {
    type Buffers = HostBuffers;

    fn upload(&mut self, label: &str, mesh: &Mesh) -> HostBuffers {
        let vertex_bytes = mesh.vertex_bytes().to_vec();
        let index_bytes = mesh.index_bytes().to_vec();
        self.uploaded_bytes += vertex_bytes.len() + index_bytes.len();

        HostBuffers {
            label: label.to_string(),
            vertex_bytes,
            index_bytes,
            index_count: mesh.index_count() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::generate_cube;
    use glam::Vec3;

    #[test]
    fn test_host_upload_copies_both_buffers() {
        let mesh = generate_cube(1.0, Vec3::ZERO).unwrap();
        let mut uploader = HostUploader::new();
        let buffers = uploader.upload("cube", &mesh);

        assert_eq!(buffers.label, "cube");
        assert_eq!(buffers.index_count, 36);
        assert_eq!(buffers.vertex_bytes.len(), 24 * 24);
        assert_eq!(buffers.index_bytes.len(), 36 * 4);
        assert_eq!(uploader.uploaded_bytes(), 24 * 24 + 36 * 4);
    }
}
