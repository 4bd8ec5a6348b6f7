//! Shape parameters and the three primitive generators
//!
//! Every generator is a pure function of its parameters. Invalid input is
//! rejected up front, so a returned mesh is always complete and every index
//! names an existing vertex.

mod cube;
mod cylinder;
mod sphere;

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::mesh::Mesh;

pub use cube::{generate_cube, CubeFace};
pub use cylinder::generate_cylinder;
pub use sphere::generate_sphere;

/// The kind of primitive a mesh was generated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Cube,
    Cylinder,
    Sphere,
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Cube => "cube",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Sphere => "sphere",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inputs for one generator call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ShapeParams {
    Cube {
        side_length: f32,
        center: Vec3,
    },
    Cylinder {
        radius: f32,
        center: Vec3,
        height: f32,
        segments: u32,
    },
    Sphere {
        radius: f32,
        center: Vec3,
        stacks: u32,
        sectors: u32,
    },
}

impl ShapeParams {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeParams::Cube { .. } => ShapeKind::Cube,
            ShapeParams::Cylinder { .. } => ShapeKind::Cylinder,
            ShapeParams::Sphere { .. } => ShapeKind::Sphere,
        }
    }

    pub fn center(&self) -> Vec3 {
        match *self {
            ShapeParams::Cube { center, .. }
            | ShapeParams::Cylinder { center, .. }
            | ShapeParams::Sphere { center, .. } => center,
        }
    }

    /// Run the matching generator
    pub fn generate(&self) -> Result<Mesh, MeshError> {
        match *self {
            ShapeParams::Cube {
                side_length,
                center,
            } => generate_cube(side_length, center),
            ShapeParams::Cylinder {
                radius,
                center,
                height,
                segments,
            } => generate_cylinder(radius, center, height, segments),
            ShapeParams::Sphere {
                radius,
                center,
                stacks,
                sectors,
            } => generate_sphere(radius, center, stacks, sectors),
        }
    }
}

/// Reject zero, negative, NaN and infinite lengths
fn require_positive(
    shape: ShapeKind,
    parameter: &'static str,
    value: f32,
) -> Result<(), MeshError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MeshError::InvalidParameter {
            shape,
            parameter,
            reason: format!("must be a positive finite number, got {value}"),
        })
    }
}

fn require_at_least(
    shape: ShapeKind,
    parameter: &'static str,
    value: u32,
    minimum: u32,
) -> Result<(), MeshError> {
    if value >= minimum {
        Ok(())
    } else {
        Err(MeshError::InvalidParameter {
            shape,
            parameter,
            reason: format!("must be at least {minimum}, got {value}"),
        })
    }
}

fn require_finite_center(shape: ShapeKind, center: Vec3) -> Result<(), MeshError> {
    if center.is_finite() {
        Ok(())
    } else {
        Err(MeshError::InvalidParameter {
            shape,
            parameter: "center",
            reason: format!("must be finite, got {center}"),
        })
    }
}

/// Reject vertex counts that overflow `u32` indices
fn require_indexable(
    shape: ShapeKind,
    parameter: &'static str,
    vertex_count: u64,
) -> Result<(), MeshError> {
    if vertex_count <= u64::from(u32::MAX) {
        Ok(())
    } else {
        Err(MeshError::InvalidParameter {
            shape,
            parameter,
            reason: format!("{vertex_count} vertices cannot be addressed by 32-bit indices"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_dispatch_to_matching_generator() {
        let params = [
            ShapeParams::Cube {
                side_length: 1.0,
                center: Vec3::ZERO,
            },
            ShapeParams::Cylinder {
                radius: 1.0,
                center: Vec3::ZERO,
                height: 1.0,
                segments: 6,
            },
            ShapeParams::Sphere {
                radius: 1.0,
                center: Vec3::ZERO,
                stacks: 3,
                sectors: 5,
            },
        ];
        let counts: Vec<_> = params
            .iter()
            .map(|p| p.generate().unwrap().vertex_count())
            .collect();
        assert_eq!(counts, vec![24, 14, 24]);
    }

    #[test]
    fn test_indices_stay_in_range_across_resolutions() {
        for segments in 3..40 {
            let mesh = generate_cylinder(0.5, Vec3::new(1.0, 2.0, 3.0), 1.0, segments).unwrap();
            assert_eq!(mesh.vertex_count(), 2 * segments as usize + 2);
            assert_eq!(mesh.triangle_count(), 4 * segments as usize);
            assert!(mesh.validate().is_ok(), "cylinder with {segments} segments");
        }
        for stacks in 2..12 {
            for sectors in 3..12 {
                let mesh = generate_sphere(1.0, Vec3::ZERO, stacks, sectors).unwrap();
                assert_eq!(mesh.triangle_count(), 2 * (stacks * sectors) as usize);
                assert!(mesh.validate().is_ok(), "sphere {stacks}x{sectors}");
            }
        }
    }

    #[test]
    fn test_meshes_can_cross_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Mesh>();
        assert_send_sync::<ShapeParams>();

        let params = ShapeParams::Sphere {
            radius: 1.0,
            center: Vec3::ZERO,
            stacks: 8,
            sectors: 8,
        };
        let worker = std::thread::spawn(move || params.generate().unwrap());
        assert_eq!(worker.join().unwrap(), params.generate().unwrap());
    }

    #[test]
    fn test_params_parse_from_tagged_json() {
        let params: ShapeParams = serde_json::from_str(
            r#"{ "shape": "cylinder", "radius": 0.5, "center": [0.0, 1.0, 0.0], "height": 2.0, "segments": 8 }"#,
        )
        .unwrap();
        assert_eq!(params.kind(), ShapeKind::Cylinder);
        assert_eq!(params.center(), Vec3::Y);
    }

    #[test]
    fn test_error_message_names_shape_and_parameter() {
        let err = ShapeParams::Sphere {
            radius: 1.0,
            center: Vec3::ZERO,
            stacks: 1,
            sectors: 3,
        }
        .generate()
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid sphere parameter `stacks`: must be at least 2, got 1"
        );
    }

    #[test]
    fn test_non_finite_center_is_rejected() {
        let err = generate_cube(1.0, Vec3::new(f32::NAN, 0.0, 0.0)).unwrap_err();
        assert!(matches!(
            err,
            MeshError::InvalidParameter {
                parameter: "center",
                ..
            }
        ));
    }
}
