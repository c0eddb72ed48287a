/// Viewer configuration - every tunable constant of the viewer in one place
///
/// `ViewerConfig::default()` reproduces the stock viewer: 512x512 shadow and
/// reflection targets, a 640x480 window and the lens, billboard and input
/// settings below.

use glam::Vec3;
use crate::camera::{CameraPose, Lens};

/// Viewer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Initial window size in pixels
    pub window_width: u32,
    pub window_height: u32,

    /// Shadow map (depth-only target) size
    pub shadow_map_width: u32,
    pub shadow_map_height: u32,

    /// Reflection color target size
    pub reflection_width: u32,
    pub reflection_height: u32,

    /// Primary camera lens
    pub camera_lens: Lens,
    /// Lens of the shadow-casting spot light (aspect is always 1)
    pub light_lens: Lens,
    /// Pose restored by "reset camera"
    pub default_camera_pose: CameraPose,

    /// Clear color of the reflection and screen targets
    pub clear_color: [f32; 4],
    /// Depth offset (factor, units) applied while rendering the shadow map
    pub shadow_polygon_offset: (f32, f32),
    /// Length of the world reference axes
    pub axis_length: f32,

    pub billboards: BillboardSettings,
    pub controls: ControlSettings,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_width: 640,
            window_height: 480,
            shadow_map_width: 512,
            shadow_map_height: 512,
            reflection_width: 512,
            reflection_height: 512,
            camera_lens: Lens { near_plane: 0.1, far_plane: 10000.0, fov_y: 45.0 },
            light_lens: Lens { near_plane: 0.1, far_plane: 10000.0, fov_y: 30.0 },
            default_camera_pose: CameraPose {
                position: Vec3::new(15.0, 0.0, 0.0),
                look: Vec3::new(-1.0, 0.0, 0.0),
            },
            clear_color: [0.0, 15.0 / 255.0, 66.0 / 255.0, 1.0],
            shadow_polygon_offset: (-10.0, -100.0),
            axis_length: 10000.0,
            billboards: BillboardSettings::default(),
            controls: ControlSettings::default(),
        }
    }
}

impl ViewerConfig {
    /// Window aspect ratio
    pub fn window_aspect(&self) -> f32 {
        self.window_width as f32 / self.window_height.max(1) as f32
    }
}

/// Billboard geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BillboardSettings {
    /// Half-size of the square point-light orb
    pub orb_half_size: f32,
    pub orb_alpha_scale: f32,
    /// Half-width of the spot beam at its wide end
    pub beam_half_width: f32,
    pub beam_length: f32,
    pub beam_alpha_scale: f32,
}

impl Default for BillboardSettings {
    fn default() -> Self {
        Self {
            orb_half_size: 4.0,
            orb_alpha_scale: 1.0,
            beam_half_width: 60.0,
            beam_length: 150.0,
            beam_alpha_scale: 0.375,
        }
    }
}

/// Input sensitivities
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlSettings {
    /// WASD / Space / C step
    pub move_step: f32,
    /// Arrow key step
    pub sprint_step: f32,
    /// Degrees of camera rotation per pixel of left drag
    pub rotate_sensitivity: f32,
    /// Coarse and fine object rotation, degrees
    pub coarse_rotation: f32,
    pub fine_rotation: f32,
    /// Per-keypress downscale factor (upscale is its inverse)
    pub scale_factor: f32,
    /// Light attribute change per pixel of right drag
    pub light_sensitivity: f32,
    /// Directional light intensity change per pixel of right drag
    pub light_scale_sensitivity: f32,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            move_step: 0.7,
            sprint_step: 5.0,
            rotate_sensitivity: 0.5,
            coarse_rotation: 45.0,
            fine_rotation: 1.0,
            scale_factor: 0.99,
            light_sensitivity: 0.25,
            light_scale_sensitivity: 0.002,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
