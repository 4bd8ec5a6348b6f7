//! JSON export of registered meshes
//!
//! Each mesh is written to `<dir>/<name>.json` with the parameters it was
//! generated from, so the file can be regenerated or inspected later.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use solids_mesh::{Mesh, MeshRegistry, MeshUploader, RegisteredMesh, ShapeParams};
use tracing::info;

/// Export format version
const EXPORT_VERSION: u32 = 1;

/// On-disk representation of one mesh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshExport {
    /// Export format version (for future migration)
    pub version: u32,
    pub name: String,
    pub params: ShapeParams,
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub mesh: Mesh,
}

impl MeshExport {
    pub fn from_registered<B>(entry: &RegisteredMesh<B>) -> Self {
        Self {
            version: EXPORT_VERSION,
            name: entry.name.clone(),
            params: entry.params,
            vertex_count: entry.mesh.vertex_count(),
            triangle_count: entry.mesh.triangle_count(),
            mesh: entry.mesh.clone(),
        }
    }
}

/// Write every registered mesh into `dir`, returning the written paths
pub fn export_all<U: MeshUploader>(registry: &MeshRegistry<U>, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {:?}", dir))?;

    let mut written = Vec::with_capacity(registry.len());
    for (_, entry) in registry.iter() {
        let export = MeshExport::from_registered(entry);
        let path = dir.join(format!("{}.json", sanitize_filename(&entry.name)));
        let json = serde_json::to_string_pretty(&export)
            .with_context(|| format!("Failed to serialize mesh '{}'", entry.name))?;
        fs::write(&path, json).with_context(|| format!("Failed to write {:?}", path))?;
        info!("Exported '{}' to {:?}", entry.name, path);
        written.push(path);
    }

    Ok(written)
}

/// Read a previously exported mesh
pub fn load_export(path: &Path) -> Result<MeshExport> {
    let json = fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    let export: MeshExport =
        serde_json::from_str(&json).with_context(|| format!("Failed to parse {:?}", path))?;
    Ok(export)
}

/// Convert a mesh name into a safe filename
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}
