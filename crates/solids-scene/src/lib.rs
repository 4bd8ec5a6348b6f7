//! Solids Scene - Renderer-agnostic viewer state
//!
//! Holds the registered meshes, the active selection, the look-at camera
//! and the keyboard-driven controls. Each frame a renderer walks
//! [`Scene::drawables`] and draws every mesh's buffers with its
//! [`SceneUniforms`].

mod camera;
mod config;
mod controls;
mod error;
mod scene;
mod uniforms;

pub use camera::ViewCamera;
pub use config::{CameraConfig, ControlConfig, SceneConfig, ShapeEntry};
pub use controls::{ControlAction, ControlBindings, ControlState};
pub use error::SceneError;
pub use scene::{Drawable, Scene};
pub use uniforms::SceneUniforms;
