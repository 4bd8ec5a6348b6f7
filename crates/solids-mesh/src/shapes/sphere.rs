//! UV sphere with longitude stripes

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use solids_core::Color;
use tracing::debug;

use super::{
    require_at_least, require_finite_center, require_indexable, require_positive, ShapeKind,
};
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::vertex::Vertex;

const EVEN_SECTOR_COLOR: Color = Color::MAGENTA;
const ODD_SECTOR_COLOR: Color = Color::YELLOW;

/// Generate a latitude/longitude sphere around `center`
///
/// Vertices are laid out row-major over `stacks + 1` rings from the +Y pole
/// down to the -Y pole, each ring holding `sectors + 1` vertices so the seam
/// is duplicated. Colors alternate by sector parity. Triangles touching a
/// pole collapse to zero area.
pub fn generate_sphere(
    radius: f32,
    center: Vec3,
    stacks: u32,
    sectors: u32,
) -> Result<Mesh, MeshError> {
    require_positive(ShapeKind::Sphere, "radius", radius)?;
    require_at_least(ShapeKind::Sphere, "stacks", stacks, 2)?;
    require_at_least(ShapeKind::Sphere, "sectors", sectors, 3)?;
    require_finite_center(ShapeKind::Sphere, center)?;
    require_indexable(
        ShapeKind::Sphere,
        "sectors",
        (u64::from(stacks) + 1) * (u64::from(sectors) + 1),
    )?;

    let row = sectors + 1;
    let mut mesh = Mesh::with_capacity(
        (stacks as usize + 1) * row as usize,
        2 * stacks as usize * sectors as usize,
    );

    for i in 0..=stacks {
        let theta = PI * i as f32 / stacks as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for j in 0..=sectors {
            let phi = TAU * j as f32 / sectors as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();

            let direction = Vec3::new(cos_phi * sin_theta, cos_theta, sin_phi * sin_theta);
            let color = if j % 2 == 0 {
                EVEN_SECTOR_COLOR
            } else {
                ODD_SECTOR_COLOR
            };

            mesh.vertices
                .push(Vertex::at(center + direction * radius, color));
        }
    }

    for i in 0..stacks {
        for j in 0..sectors {
            let first = i * row + j;
            let second = first + row;

            // Counter-clockwise seen from outside
            mesh.triangles.push([first, first + 1, second]);
            mesh.triangles.push([second, first + 1, second + 1]);
        }
    }

    debug!(
        radius,
        stacks,
        sectors,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "generated sphere"
    );

    Ok(mesh)
}
