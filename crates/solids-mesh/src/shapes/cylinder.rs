//! Capped cylinder around the Y axis

use std::f32::consts::TAU;

use glam::Vec3;
use solids_core::Color;
use tracing::debug;

use super::{
    require_at_least, require_finite_center, require_indexable, require_positive, ShapeKind,
};
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::vertex::Vertex;

const TOP_COLOR: Color = Color::RED;
const BOTTOM_COLOR: Color = Color::GREEN;

/// Generate a closed cylinder standing on the Y axis through `center`
///
/// Ring vertices are interleaved as `[top_0, bottom_0, top_1, bottom_1, ..]`,
/// followed by the top and bottom cap centers. Each segment contributes two
/// side triangles and one triangle per cap.
pub fn generate_cylinder(
    radius: f32,
    center: Vec3,
    height: f32,
    segments: u32,
) -> Result<Mesh, MeshError> {
    require_positive(ShapeKind::Cylinder, "radius", radius)?;
    require_positive(ShapeKind::Cylinder, "height", height)?;
    require_at_least(ShapeKind::Cylinder, "segments", segments, 3)?;
    require_finite_center(ShapeKind::Cylinder, center)?;
    require_indexable(
        ShapeKind::Cylinder,
        "segments",
        2 * u64::from(segments) + 2,
    )?;

    let half_height = height / 2.0;
    let top_y = center.y + half_height;
    let bottom_y = center.y - half_height;

    let mut mesh = Mesh::with_capacity(2 * segments as usize + 2, 4 * segments as usize);

    for i in 0..segments {
        let theta = TAU * i as f32 / segments as f32;
        let x = center.x + radius * theta.cos();
        let z = center.z + radius * theta.sin();

        mesh.vertices.push(Vertex::at(Vec3::new(x, top_y, z), TOP_COLOR));
        mesh.vertices
            .push(Vertex::at(Vec3::new(x, bottom_y, z), BOTTOM_COLOR));
    }

    mesh.vertices
        .push(Vertex::at(Vec3::new(center.x, top_y, center.z), TOP_COLOR));
    mesh.vertices
        .push(Vertex::at(Vec3::new(center.x, bottom_y, center.z), BOTTOM_COLOR));

    let ring = segments * 2;
    let top_center = ring;
    let bottom_center = ring + 1;

    for i in 0..segments {
        let top = i * 2;
        let bottom = top + 1;
        // Wrap so the last segment closes back onto segment 0
        let next_top = (top + 2) % ring;
        let next_bottom = (top + 3) % ring;

        mesh.triangles.push([top, next_top, bottom]);
        mesh.triangles.push([next_top, next_bottom, bottom]);
        mesh.triangles.push([top_center, next_top, top]);
        mesh.triangles.push([bottom_center, bottom, next_bottom]);
    }

    debug!(
        radius,
        height,
        segments,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "generated cylinder"
    );

    Ok(mesh)
}
