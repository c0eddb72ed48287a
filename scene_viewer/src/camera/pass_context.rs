/// PassContext - resolved view state for one render pass.
///
/// Built by the frame renderer from the camera (or its mirror) and handed to
/// the draw routine. Contains plain matrices and flags only.
///
/// Ephemeral: lives for one pass. No Arc, no Mutex.

use glam::{Mat4, Vec3};
use super::camera::Camera;
use super::derivation::{mirrored_view, LightTransforms};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassContext {
    /// World-space eye used for skybox placement, lighting and billboards
    pub eye_position: Vec3,
    pub view: Mat4,
    pub projection: Mat4,
    /// Shadow lookup transform, never mirrored
    pub light_view_projection: Mat4,
    pub draw_axes: bool,
    /// Clip plane height; None disables clipping
    pub clip_z: Option<f32>,
    pub draw_water: bool,
}

impl PassContext {
    /// Real view through `camera`: no clipping, water drawn
    pub fn composite(camera: &Camera, light: &LightTransforms, draw_axes: bool) -> Self {
        Self {
            eye_position: camera.position(),
            view: camera.view(),
            projection: camera.projection(),
            light_view_projection: light.view_projection,
            draw_axes,
            clip_z: None,
            draw_water: true,
        }
    }

    /// View mirrored about `water_z`: clipped at the water line, no water, no axes
    pub fn reflection(camera: &Camera, light: &LightTransforms, water_z: f32) -> Self {
        let mirrored = mirrored_view(camera, water_z);
        Self {
            eye_position: mirrored.eye_position,
            view: mirrored.view,
            projection: camera.projection(),
            light_view_projection: light.view_projection,
            draw_axes: false,
            clip_z: Some(water_z),
            draw_water: false,
        }
    }

    pub fn is_clipped(&self) -> bool {
        self.clip_z.is_some()
    }

    /// Clip plane height, 0 when clipping is off
    pub fn clip_plane_z(&self) -> f32 {
        self.clip_z.unwrap_or(0.0)
    }
}

#[cfg(test)]
#[path = "pass_context_tests.rs"]
mod tests;
