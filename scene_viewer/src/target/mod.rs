//! Render target management module
//!
//! Named registry of render targets and the bundle of three targets every
//! frame renders into (shadow map, reflection, screen).

mod frame_targets;
mod target_manager;

pub use frame_targets::{FrameTargets, REFLECTION_TARGET, SCREEN_TARGET, SHADOW_TARGET};
pub use target_manager::TargetManager;
