/// Scene object - a named group of meshes sharing one world matrix.
///
/// The mesh provider supplies the meshes and the model-space center of mass.
/// Edits are applied in world space by pre-multiplying the world matrix.

use std::fmt;
use std::sync::Arc;
use glam::{Mat4, Vec3};
use crate::graphics_device::Mesh;

pub struct SceneObject {
    name: String,
    meshes: Vec<Arc<dyn Mesh>>,
    center_of_mass: Vec3,
    default_world_matrix: Mat4,
    world_matrix: Mat4,
}

impl SceneObject {
    /// Object whose default placement puts its center of mass at the origin
    pub fn new(name: &str, meshes: Vec<Arc<dyn Mesh>>, center_of_mass: Vec3) -> Self {
        let centered = Mat4::from_translation(-center_of_mass);
        Self {
            name: name.to_string(),
            meshes,
            center_of_mass,
            default_world_matrix: centered,
            world_matrix: centered,
        }
    }

    /// Object with an explicit default world matrix
    pub fn with_world_matrix(
        name: &str,
        meshes: Vec<Arc<dyn Mesh>>,
        center_of_mass: Vec3,
        world_matrix: Mat4,
    ) -> Self {
        Self {
            name: name.to_string(),
            meshes,
            center_of_mass,
            default_world_matrix: world_matrix,
            world_matrix,
        }
    }

    // ===== ACCESSORS =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn meshes(&self) -> &[Arc<dyn Mesh>] {
        &self.meshes
    }

    /// Center of mass in model space
    pub fn center_of_mass(&self) -> Vec3 {
        self.center_of_mass
    }

    /// Center of mass in world space
    pub fn world_center(&self) -> Vec3 {
        self.world_matrix.transform_point3(self.center_of_mass)
    }

    pub fn world_matrix(&self) -> &Mat4 {
        &self.world_matrix
    }

    pub fn default_world_matrix(&self) -> &Mat4 {
        &self.default_world_matrix
    }

    /// Inverse-transpose of the world matrix, for normals
    pub fn normal_matrix(&self) -> Mat4 {
        self.world_matrix.inverse().transpose()
    }

    // ===== EDITS =====

    pub fn set_world_matrix(&mut self, matrix: Mat4) {
        self.world_matrix = matrix;
    }

    pub fn reset_world_matrix(&mut self) {
        self.world_matrix = self.default_world_matrix;
    }

    /// Translate so the world-space center of mass sits at the origin
    pub fn center_at_origin(&mut self) {
        let center = self.world_center();
        self.world_matrix = Mat4::from_translation(-center) * self.world_matrix;
    }

    /// Rotate `degrees` about `axis` through the world-space center of mass.
    ///
    /// A zero axis leaves the object untouched.
    pub fn rotate_about_center(&mut self, axis: Vec3, degrees: f32) {
        let Some(axis) = axis.try_normalize() else {
            return;
        };
        let center = self.world_center();
        self.world_matrix = Mat4::from_translation(center)
            * Mat4::from_axis_angle(axis, degrees.to_radians())
            * Mat4::from_translation(-center)
            * self.world_matrix;
    }

    /// World-space translation
    pub fn translate(&mut self, offset: Vec3) {
        self.world_matrix = Mat4::from_translation(offset) * self.world_matrix;
    }

    /// Uniform scale about the world origin
    pub fn scale_uniform(&mut self, factor: f32) {
        self.world_matrix = Mat4::from_scale(Vec3::splat(factor)) * self.world_matrix;
    }
}

impl fmt::Debug for SceneObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneObject")
            .field("name", &self.name)
            .field("mesh_count", &self.meshes.len())
            .field("center_of_mass", &self.center_of_mass)
            .field("world_matrix", &self.world_matrix)
            .finish()
    }
}

#[cfg(test)]
#[path = "scene_object_tests.rs"]
mod tests;
