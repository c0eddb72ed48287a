//! Camera module - free-flying camera, derived views and pass contexts.
//!
//! The primary camera is owned by `SceneState` and mutated by the controls
//! between frames. Light and mirrored views, and the per-pass contexts built
//! from them, are recomputed every frame.

mod camera;
mod derivation;
mod pass_context;

pub use camera::{Camera, CameraPose, Lens, WORLD_UP};
pub use derivation::{
    light_camera, light_transforms, mirror_height, mirror_matrix, mirrored_view, plane_height,
    LightTransforms, MirroredView,
};
pub use pass_context::PassContext;
