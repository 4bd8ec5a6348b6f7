//! Look-at camera with a rollable up vector

use glam::{Mat4, Vec3};

use crate::config::CameraConfig;

/// Camera looking from a fixed eye toward a movable target
#[derive(Debug, Clone, PartialEq)]
pub struct ViewCamera {
    /// Camera position
    pub eye: Vec3,
    /// Point the camera looks at
    pub target: Vec3,
    /// Rotation of the up vector around the view axis, in radians
    pub roll: f32,
    /// Vertical field of view in radians
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ViewCamera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

impl ViewCamera {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            eye: config.eye,
            target: config.target,
            roll: 0.0,
            fov: config.fov_degrees.to_radians(),
            near: config.near,
            far: config.far,
        }
    }

    /// Up vector tilted by the current roll
    pub fn up(&self) -> Vec3 {
        let (sin, cos) = self.roll.sin_cos();
        Vec3::new(sin, cos, 0.0)
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up())
    }

    /// Get the projection matrix for the given aspect ratio
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov, aspect_ratio, self.near, self.far)
    }

    /// Shift the look target
    pub fn shift_target(&mut self, offset: Vec3) {
        self.target += offset;
    }

    /// Rotate the up vector
    pub fn add_roll(&mut self, radians: f32) {
        self.roll += radians;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera_looks_down_positive_z() {
        let camera = ViewCamera::default();
        let view = camera.view_matrix();
        // The origin sits 4 units in front of the eye
        let origin = view.transform_point3(Vec3::ZERO);
        assert!((origin - Vec3::new(0.0, 0.0, -4.0)).length() < 1e-5);
        assert!((camera.fov - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
    }

    #[test]
    fn test_roll_tilts_up_vector() {
        let mut camera = ViewCamera::default();
        assert_eq!(camera.up(), Vec3::Y);

        camera.add_roll(std::f32::consts::FRAC_PI_2);
        assert!((camera.up() - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn test_projection_keeps_points_inside_frustum() {
        let camera = ViewCamera::default();
        let clip = camera.projection_matrix(16.0 / 9.0) * camera.view_matrix();
        let ndc = clip.project_point3(Vec3::ZERO);
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }
}
