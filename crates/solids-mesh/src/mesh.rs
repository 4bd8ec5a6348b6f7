//! Generated mesh data

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::vertex::Vertex;

/// Vertex buffer plus triangle index buffer
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Create an empty mesh
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a mesh with room for the given number of vertices and triangles
    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            triangles: Vec::with_capacity(triangles),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Number of entries in the flattened index buffer
    pub fn index_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Check that every index names an existing vertex
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len();
        match self
            .triangles
            .iter()
            .flatten()
            .find(|&&index| index as usize >= vertex_count)
        {
            Some(&index) => Err(MeshError::IndexOutOfRange {
                index,
                vertex_count,
            }),
            None => Ok(()),
        }
    }

    /// Index buffer flattened to a list of `u32`
    pub fn flat_indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Index buffer narrowed to `u16` for renderers using 16-bit indices
    pub fn indices_u16(&self) -> Result<Vec<u16>, MeshError> {
        if self.vertices.len() > usize::from(u16::MAX) + 1 {
            return Err(MeshError::IndexOverflow {
                vertex_count: self.vertices.len(),
            });
        }
        Ok(self
            .triangles
            .iter()
            .flatten()
            .map(|&index| index as u16)
            .collect())
    }

    /// Raw vertex bytes, ready for upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw `u32` index bytes, ready for upload
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }

    /// Unnormalized face normal of a triangle (right-handed cross product)
    ///
    /// Counter-clockwise triangles seen from outside produce a normal that
    /// points outward. Returns `None` if the triangle does not exist.
    pub fn triangle_normal(&self, triangle: usize) -> Option<Vec3> {
        let [a, b, c] = *self.triangles.get(triangle)?;
        let a = self.vertices.get(a as usize)?.position();
        let b = self.vertices.get(b as usize)?.position();
        let c = self.vertices.get(c as usize)?.position();
        Some((b - a).cross(c - a))
    }

    /// Axis-aligned bounds as (min, max), `None` for an empty mesh
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut positions = self.vertices.iter().map(Vertex::position);
        let first = positions.next()?;
        Some(positions.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> Mesh {
        let color = [1.0, 1.0, 1.0];
        Mesh {
            vertices: vec![
                Vertex::new([0.0, 0.0, 0.0], color),
                Vertex::new([1.0, 0.0, 0.0], color),
                Vertex::new([1.0, 1.0, 0.0], color),
                Vertex::new([0.0, 1.0, 0.0], color),
            ],
            triangles: vec![[0, 1, 2], [0, 2, 3]],
        }
    }

    #[test]
    fn test_counts_and_flat_indices() {
        let mesh = quad();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.index_count(), 6);
        assert_eq!(mesh.flat_indices(), vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(mesh.indices_u16().unwrap(), vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn test_validate_rejects_out_of_range_index() {
        let mut mesh = quad();
        assert!(mesh.validate().is_ok());

        mesh.triangles.push([0, 3, 4]);
        assert_eq!(
            mesh.validate(),
            Err(MeshError::IndexOutOfRange {
                index: 4,
                vertex_count: 4
            })
        );
    }

    #[test]
    fn test_u16_indices_overflow() {
        let mesh = Mesh {
            vertices: vec![Vertex::default(); 65_537],
            triangles: vec![[0, 1, 65_536]],
        };
        assert!(matches!(
            mesh.indices_u16(),
            Err(MeshError::IndexOverflow {
                vertex_count: 65_537
            })
        ));

        let fits = Mesh {
            vertices: vec![Vertex::default(); 65_536],
            triangles: vec![[0, 1, 65_535]],
        };
        assert_eq!(fits.indices_u16().unwrap(), vec![0, 1, 65_535]);
    }

    #[test]
    fn test_byte_views_match_buffer_sizes() {
        let mesh = quad();
        assert_eq!(mesh.vertex_bytes().len(), 4 * Vertex::STRIDE);
        assert_eq!(mesh.index_bytes().len(), 6 * 4);
    }

    #[test]
    fn test_counter_clockwise_normal_faces_viewer() {
        let mesh = quad();
        let normal = mesh.triangle_normal(0).unwrap();
        assert!(normal.z > 0.0);
        assert!(mesh.triangle_normal(2).is_none());
    }

    #[test]
    fn test_bounds_cover_all_vertices() {
        let (min, max) = quad().bounds().unwrap();
        assert_eq!(min, Vec3::ZERO);
        assert_eq!(max, Vec3::new(1.0, 1.0, 0.0));
        assert!(Mesh::empty().bounds().is_none());
    }
}
