//! Scene state: registered meshes, active selection, camera and object

use std::f32::consts::PI;

use glam::{Mat4, Quat};
use solids_core::Transform;
use solids_mesh::{MeshHandle, MeshRegistry, MeshUploader, RegisteredMesh};
use tracing::{debug, info};

use crate::camera::ViewCamera;
use crate::config::SceneConfig;
use crate::controls::ControlState;
use crate::error::SceneError;
use crate::uniforms::SceneUniforms;

/// One entry of a frame's draw list
#[derive(Debug)]
pub struct Drawable<'a, B> {
    pub handle: MeshHandle,
    pub mesh: &'a RegisteredMesh<B>,
    pub uniforms: SceneUniforms,
}

/// Everything a renderer needs to draw one frame
pub struct Scene<U: MeshUploader> {
    config: SceneConfig,
    registry: MeshRegistry<U>,
    active: Option<MeshHandle>,
    camera: ViewCamera,
    /// Object translation driven by the movement controls
    object: Transform,
    /// Seconds since the scene started
    elapsed: f64,
    /// Time not yet consumed by control ticks
    tick_accumulator: f32,
}

impl<U: MeshUploader> Scene<U> {
    /// Build a scene and register every configured shape
    pub fn new(config: SceneConfig, uploader: U) -> Result<Self, SceneError> {
        let mut registry = MeshRegistry::new(uploader);
        for entry in &config.shapes {
            registry.insert(entry.name.clone(), entry.params)?;
        }

        let active = match &config.initial_shape {
            Some(name) => Some(
                registry
                    .find(name)
                    .ok_or_else(|| SceneError::NoSuchMesh(name.clone()))?,
            ),
            None => registry.handles().first().copied(),
        };

        info!("Scene created with {} meshes", registry.len());

        Ok(Self {
            camera: ViewCamera::from_config(&config.camera),
            config,
            registry,
            active,
            object: Transform::default(),
            elapsed: 0.0,
            tick_accumulator: 0.0,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn registry(&self) -> &MeshRegistry<U> {
        &self.registry
    }

    /// Mutable registry access for adding or regenerating meshes
    pub fn registry_mut(&mut self) -> &mut MeshRegistry<U> {
        &mut self.registry
    }

    pub fn camera(&self) -> &ViewCamera {
        &self.camera
    }

    pub fn object(&self) -> &Transform {
        &self.object
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Handle of the mesh currently shown
    pub fn active(&self) -> Option<MeshHandle> {
        self.active.filter(|&handle| self.registry.contains(handle))
    }

    /// The mesh currently shown, with its buffers
    pub fn active_mesh(&self) -> Option<&RegisteredMesh<U::Buffers>> {
        self.active().and_then(|handle| self.registry.get(handle))
    }

    /// Show the mesh behind `handle`
    pub fn select(&mut self, handle: MeshHandle) -> Result<(), SceneError> {
        let entry = self
            .registry
            .get(handle)
            .ok_or(solids_mesh::MeshError::UnknownHandle(handle.id()))?;
        info!("Showing '{}'", entry.name);
        self.active = Some(handle);
        Ok(())
    }

    /// Show the mesh registered under `name`
    pub fn select_named(&mut self, name: &str) -> Result<MeshHandle, SceneError> {
        let handle = self
            .registry
            .find(name)
            .ok_or_else(|| SceneError::NoSuchMesh(name.to_string()))?;
        self.select(handle)?;
        Ok(handle)
    }

    /// Show the next registered mesh, wrapping around
    pub fn select_next(&mut self) -> Option<MeshHandle> {
        let handles = self.registry.handles();
        let next = match self.active().and_then(|a| handles.iter().position(|&h| h == a)) {
            Some(index) => handles[(index + 1) % handles.len()],
            None => *handles.first()?,
        };
        self.select(next).ok()?;
        Some(next)
    }

    /// Advance time and apply held controls once per elapsed tick
    pub fn update(&mut self, controls: &ControlState, dt: f32) {
        let dt = dt.clamp(0.0, self.config.controls.max_frame_secs);
        self.elapsed += f64::from(dt);
        self.tick_accumulator += dt;

        let tick = self.config.controls.tick_secs;
        if tick <= 0.0 {
            self.tick_accumulator = 0.0;
            return;
        }

        let mut ticks = 0;
        while self.tick_accumulator >= tick {
            self.tick_accumulator -= tick;
            self.apply_controls(controls);
            ticks += 1;
        }

        if ticks > 0 {
            debug!(ticks, elapsed = self.elapsed, "applied control ticks");
        }
    }

    fn apply_controls(&mut self, controls: &ControlState) {
        let config = &self.config.controls;
        for action in controls.held() {
            self.camera.shift_target(action.target_offset(config));
            self.camera.add_roll(action.roll_offset(config));
            self.object.translate(action.object_offset(config));
        }
    }

    /// Current spin angle around +X, in radians
    pub fn spin_angle(&self) -> f32 {
        if self.config.spin_half_turn_secs <= 0.0 {
            return 0.0;
        }
        (self.elapsed / f64::from(self.config.spin_half_turn_secs)) as f32 * PI
    }

    /// World matrix: spin about +X, then the control-driven translation
    pub fn world_matrix(&self) -> Mat4 {
        let spun = Transform::from_position_rotation(
            self.object.position,
            Quat::from_rotation_x(self.spin_angle()),
        );
        spun.matrix()
    }

    /// Uniforms for the current frame
    pub fn uniforms(&self, aspect_ratio: f32) -> SceneUniforms {
        SceneUniforms::new(
            self.world_matrix(),
            self.camera.view_matrix(),
            self.camera.projection_matrix(aspect_ratio),
        )
    }

    /// Draw list for the current frame: every registered mesh in
    /// registration order, all sharing the frame's uniforms
    pub fn drawables(
        &self,
        aspect_ratio: f32,
    ) -> impl Iterator<Item = Drawable<'_, U::Buffers>> + '_ {
        let uniforms = self.uniforms(aspect_ratio);
        self.registry.iter().map(move |(handle, mesh)| Drawable {
            handle,
            mesh,
            uniforms,
        })
    }
}
