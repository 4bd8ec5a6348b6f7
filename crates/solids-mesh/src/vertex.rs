//! Vertex type shared by every generated mesh

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use solids_core::Color;

/// Interleaved vertex with position and color
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    /// Size of one vertex record in bytes
    pub const STRIDE: usize = std::mem::size_of::<Self>();
    /// Byte offset of the position attribute
    pub const POSITION_OFFSET: usize = 0;
    /// Byte offset of the color attribute
    pub const COLOR_OFFSET: usize = 12;

    /// Create a new vertex
    pub fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }

    /// Create a vertex from a world-space point and a palette color
    pub fn at(position: Vec3, color: Color) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_array(),
        }
    }

    /// Position as a glam vector
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_position_then_color() {
        assert_eq!(Vertex::STRIDE, 24);
        let vertex = Vertex::new([1.0, 2.0, 3.0], [0.25, 0.5, 0.75]);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&vertex));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.25, 0.5, 0.75]);
        assert_eq!(
            Vertex::COLOR_OFFSET,
            Vertex::POSITION_OFFSET + std::mem::size_of::<[f32; 3]>()
        );
    }
}
