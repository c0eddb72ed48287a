//! Controls module
//!
//! Maps keyboard, mouse and window events onto `SceneState` edits. Events
//! are applied between frames, never while a frame is being recorded.

mod viewer_controls;

pub use viewer_controls::{RightMouseMode, ViewerControls};
