use crate::handle::MeshId;
use crate::shapes::ShapeKind;

/// Errors that can occur while generating or registering meshes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    #[error("invalid {shape} parameter `{parameter}`: {reason}")]
    InvalidParameter {
        shape: ShapeKind,
        parameter: &'static str,
        reason: String,
    },

    #[error("mesh has {vertex_count} vertices, too many for 16-bit indices")]
    IndexOverflow { vertex_count: usize },

    #[error("index {index} is out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    #[error("no mesh is registered with id {0}")]
    UnknownHandle(MeshId),

    #[error("a mesh named '{0}' is already registered")]
    DuplicateName(String),
}
