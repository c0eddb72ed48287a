/// Derived views - secondary cameras computed from the primary camera.
///
/// * Light camera: a square-aspect camera placed at a light and looking
///   along its direction, used to render and sample the shadow map.
/// * Mirrored view: the primary view reflected about a horizontal plane,
///   used to render the planar water reflection.
///
/// Everything here is a pure function of its inputs.

use glam::{Mat4, Vec3};
use super::camera::{Camera, CameraPose, Lens};

/// View and projection of a light, plus their product for shadow lookups
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightTransforms {
    pub view: Mat4,
    pub projection: Mat4,
    pub view_projection: Mat4,
}

impl LightTransforms {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view: camera.view(),
            projection: camera.projection(),
            view_projection: camera.view_projection(),
        }
    }
}

/// Camera looking from `position` along `direction` with aspect 1
pub fn light_camera(position: Vec3, direction: Vec3, lens: Lens) -> Camera {
    Camera::with_pose(CameraPose { position, look: direction }, lens, 1.0)
}

/// Light transforms for a light at `position` shining along `direction`
pub fn light_transforms(position: Vec3, direction: Vec3, lens: Lens) -> LightTransforms {
    LightTransforms::from_camera(&light_camera(position, direction, lens))
}

/// Height of a point reflected about the plane `z = water_z`
pub fn mirror_height(z: f32, water_z: f32) -> f32 {
    2.0 * water_z - z
}

/// Reflection about the horizontal plane `z = water_z`
pub fn mirror_matrix(water_z: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.0, water_z))
        * Mat4::from_scale(Vec3::new(1.0, 1.0, -1.0))
        * Mat4::from_translation(Vec3::new(0.0, 0.0, -water_z))
}

/// Eye position and view matrix of the reflected viewer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MirroredView {
    pub eye_position: Vec3,
    pub view: Mat4,
}

/// Reflect the camera's view about `z = water_z`.
///
/// The basis is not re-derived: the mirror is folded into the view matrix,
/// so world-space positions (and the light transforms) stay untouched.
pub fn mirrored_view(camera: &Camera, water_z: f32) -> MirroredView {
    let position = camera.position();
    MirroredView {
        eye_position: Vec3::new(position.x, position.y, mirror_height(position.z, water_z)),
        view: camera.view() * mirror_matrix(water_z),
    }
}

/// World-space height of an object: z of its world matrix applied to the origin
pub fn plane_height(world_matrix: &Mat4) -> f32 {
    world_matrix.transform_point3(Vec3::ZERO).z
}

#[cfg(test)]
#[path = "derivation_tests.rs"]
mod tests;
