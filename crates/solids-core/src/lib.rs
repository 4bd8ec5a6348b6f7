//! Solids Core - Shared types for the solids crates
//!
//! This crate provides the small set of types every other crate speaks:
//! - RGB colors with the fixed shape palette
//! - Transform for placing objects in the world

pub mod types;

pub use types::{Color, Transform};
