//! Scene configuration

use glam::Vec3;
use serde::{Deserialize, Serialize};
use solids_mesh::ShapeParams;

/// Everything needed to build a [`Scene`](crate::Scene)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Seconds for the object spin to cover half a turn
    pub spin_half_turn_secs: f32,
    /// Name of the shape shown first (defaults to the first entry)
    pub initial_shape: Option<String>,
    pub camera: CameraConfig,
    pub controls: ControlConfig,
    pub shapes: Vec<ShapeEntry>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            spin_half_turn_secs: 3.0,
            initial_shape: None,
            camera: CameraConfig::default(),
            controls: ControlConfig::default(),
            shapes: ShapeEntry::defaults(),
        }
    }
}

/// A named shape to register when the scene is built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeEntry {
    pub name: String,
    pub params: ShapeParams,
}

impl ShapeEntry {
    pub fn new(name: impl Into<String>, params: ShapeParams) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// Cube on the right, cylinder in the middle, sphere on the left
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(
                "cube",
                ShapeParams::Cube {
                    side_length: 1.0,
                    center: Vec3::new(2.0, 0.0, 0.0),
                },
            ),
            Self::new(
                "cylinder",
                ShapeParams::Cylinder {
                    radius: 0.5,
                    center: Vec3::ZERO,
                    height: 1.0,
                    segments: 20,
                },
            ),
            Self::new(
                "sphere",
                ShapeParams::Sphere {
                    radius: 0.5,
                    center: Vec3::new(-2.0, 0.0, 0.0),
                    stacks: 20,
                    sectors: 20,
                },
            ),
        ]
    }
}

/// Camera placement and projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub eye: Vec3,
    pub target: Vec3,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, -4.0),
            target: Vec3::ZERO,
            fov_degrees: 45.0,
            near: 0.2,
            far: 500.0,
        }
    }
}

/// Per-tick step sizes for held controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    /// Seconds between control ticks
    pub tick_secs: f32,
    /// Largest frame delta accepted by one update
    pub max_frame_secs: f32,
    /// Look target shift per tick (yaw and pitch)
    pub look_step: f32,
    /// Up vector rotation per tick, in radians
    pub roll_step: f32,
    /// Object translation per tick
    pub move_step: f32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            tick_secs: 0.02,
            max_frame_secs: 0.25,
            look_step: 0.1,
            roll_step: 0.05,
            move_step: 0.03,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_describe_three_shapes() {
        let config = SceneConfig::default();
        let names: Vec<_> = config.shapes.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["cube", "cylinder", "sphere"]);
        assert_eq!(config.camera.eye, Vec3::new(0.0, 0.0, -4.0));
        assert_eq!(config.controls.tick_secs, 0.02);
    }

    #[test]
    fn test_partial_toml_fills_in_defaults() {
        let config: SceneConfig = toml::from_str(
            r#"
            spin_half_turn_secs = 6.0

            [camera]
            fov_degrees = 60.0

            [[shapes]]
            name = "ball"
            params = { shape = "sphere", radius = 2.0, center = [0.0, 0.0, 0.0], stacks = 8, sectors = 12 }
            "#,
        )
        .unwrap();

        assert_eq!(config.spin_half_turn_secs, 6.0);
        assert_eq!(config.camera.fov_degrees, 60.0);
        assert_eq!(config.camera.near, 0.2);
        assert_eq!(config.controls, ControlConfig::default());
        assert_eq!(config.shapes.len(), 1);
        assert_eq!(config.shapes[0].name, "ball");
    }

    #[test]
    fn test_toml_round_trip_preserves_config() {
        let config = SceneConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: SceneConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
