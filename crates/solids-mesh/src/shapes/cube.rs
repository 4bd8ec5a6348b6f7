//! Axis-aligned cube with one flat color per face

use glam::Vec3;
use solids_core::Color;
use tracing::debug;

use super::{require_finite_center, require_positive, ShapeKind};
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::vertex::Vertex;

/// Faces of the cube, named as seen by a camera on the -Z side looking at +Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeFace {
    Front,
    Back,
    Top,
    Bottom,
    Right,
    Left,
}

impl CubeFace {
    /// Faces in vertex buffer order
    pub const ALL: [CubeFace; 6] = [
        CubeFace::Front,
        CubeFace::Back,
        CubeFace::Top,
        CubeFace::Bottom,
        CubeFace::Right,
        CubeFace::Left,
    ];

    pub fn color(&self) -> Color {
        match self {
            CubeFace::Front => Color::BLUE,
            CubeFace::Back => Color::RED,
            CubeFace::Top => Color::YELLOW,
            CubeFace::Bottom => Color::GREEN,
            CubeFace::Right => Color::ORANGE,
            CubeFace::Left => Color::MAGENTA,
        }
    }

    /// Unit normal pointing out of the cube
    pub fn outward_normal(&self) -> Vec3 {
        match self {
            CubeFace::Front => Vec3::NEG_Z,
            CubeFace::Back => Vec3::Z,
            CubeFace::Top => Vec3::Y,
            CubeFace::Bottom => Vec3::NEG_Y,
            CubeFace::Right => Vec3::NEG_X,
            CubeFace::Left => Vec3::X,
        }
    }

    /// Corner signs in counter-clockwise order seen from outside
    fn corners(&self) -> [[f32; 3]; 4] {
        match self {
            CubeFace::Front => [
                [-1.0, -1.0, -1.0],
                [-1.0, 1.0, -1.0],
                [1.0, 1.0, -1.0],
                [1.0, -1.0, -1.0],
            ],
            CubeFace::Back => [
                [-1.0, -1.0, 1.0],
                [1.0, -1.0, 1.0],
                [1.0, 1.0, 1.0],
                [-1.0, 1.0, 1.0],
            ],
            CubeFace::Top => [
                [-1.0, 1.0, -1.0],
                [-1.0, 1.0, 1.0],
                [1.0, 1.0, 1.0],
                [1.0, 1.0, -1.0],
            ],
            CubeFace::Bottom => [
                [-1.0, -1.0, -1.0],
                [1.0, -1.0, -1.0],
                [1.0, -1.0, 1.0],
                [-1.0, -1.0, 1.0],
            ],
            CubeFace::Right => [
                [-1.0, -1.0, -1.0],
                [-1.0, -1.0, 1.0],
                [-1.0, 1.0, 1.0],
                [-1.0, 1.0, -1.0],
            ],
            CubeFace::Left => [
                [1.0, -1.0, -1.0],
                [1.0, 1.0, -1.0],
                [1.0, 1.0, 1.0],
                [1.0, -1.0, 1.0],
            ],
        }
    }
}

/// Generate a cube of the given side length centered on `center`
///
/// Produces 24 vertices (four per face, unshared so each face keeps its own
/// color) and 12 triangles.
pub fn generate_cube(side_length: f32, center: Vec3) -> Result<Mesh, MeshError> {
    require_positive(ShapeKind::Cube, "side_length", side_length)?;
    require_finite_center(ShapeKind::Cube, center)?;

    let half = side_length / 2.0;
    let mut mesh = Mesh::with_capacity(24, 12);

    for face in CubeFace::ALL {
        let base = mesh.vertices.len() as u32;
        let color = face.color();

        for corner in face.corners() {
            let position = center + Vec3::from_array(corner) * half;
            mesh.vertices.push(Vertex::at(position, color));
        }

        mesh.triangles.push([base, base + 1, base + 2]);
        mesh.triangles.push([base, base + 2, base + 3]);
    }

    debug!(
        side_length,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "generated cube"
    );

    Ok(mesh)
}
