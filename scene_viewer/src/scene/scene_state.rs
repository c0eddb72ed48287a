/// Scene state - everything a frame is rendered from.
///
/// Owns the primary camera, the scene objects, the lights and the display
/// flags. The frame renderer and the draw routine only read it; controls
/// mutate it between frames.
///
/// Uses a SlotMap for objects so keys stay valid across removals, plus a
/// separate list that keeps the insertion (draw) order.

use glam::Vec3;
use slotmap::{new_key_type, SlotMap};
use crate::camera::{plane_height, Camera, CameraPose};
use crate::config::ViewerConfig;
use crate::engine_debug;
use super::light::{DirectionalLight, LightAttribute, PointLight, SpotLight};
use super::scene_object::SceneObject;

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for a SceneObject within a SceneState.
    pub struct ObjectKey;
}

/// Number of directional lights (without the spot light)
pub const DIRECTIONAL_LIGHT_COUNT: usize = 3;

/// Light index of the spot light; point lights follow it
pub const SPOT_LIGHT_INDEX: usize = DIRECTIONAL_LIGHT_COUNT;

/// What a flat light index refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightSlot {
    Directional(usize),
    Spot,
    Point(usize),
}

pub struct SceneState {
    camera: Camera,
    default_camera_pose: CameraPose,

    objects: SlotMap<ObjectKey, SceneObject>,
    /// Insertion order, used for drawing and selection cycling
    draw_order: Vec<ObjectKey>,
    water: Option<ObjectKey>,

    directional_lights: [DirectionalLight; DIRECTIONAL_LIGHT_COUNT],
    spot_light: SpotLight,
    point_lights: Vec<PointLight>,

    /// Draw the world reference axes in the composite pass
    pub draw_axes: bool,
    /// Smooth (true) or flat mesh shading
    pub smooth_shading: bool,
}

impl SceneState {
    /// Empty scene with the camera at the configured default pose
    pub fn new(config: &ViewerConfig) -> Self {
        let camera = Camera::with_pose(
            config.default_camera_pose,
            config.camera_lens,
            config.window_aspect(),
        );

        Self {
            camera,
            default_camera_pose: config.default_camera_pose,
            objects: SlotMap::with_key(),
            draw_order: Vec::new(),
            water: None,
            directional_lights: [DirectionalLight::default(); DIRECTIONAL_LIGHT_COUNT],
            spot_light: SpotLight::default(),
            point_lights: Vec::new(),
            draw_axes: false,
            smooth_shading: true,
        }
    }

    // ===== CAMERA =====

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn default_camera_pose(&self) -> CameraPose {
        self.default_camera_pose
    }

    pub fn set_default_camera_pose(&mut self, pose: CameraPose) {
        self.default_camera_pose = pose;
    }

    /// Move the camera back to the default pose
    pub fn reset_camera(&mut self) {
        self.camera.set_pose(self.default_camera_pose);
    }

    /// Window resized: keep the camera aspect in sync
    pub fn resize(&mut self, width: u32, height: u32) {
        if height == 0 {
            engine_debug!("viewer::SceneState", "Ignoring resize to zero height");
            return;
        }
        self.camera.set_aspect(width as f32 / height as f32);
    }

    // ===== OBJECTS =====

    /// Add an object at the end of the draw order
    pub fn add_object(&mut self, object: SceneObject) -> ObjectKey {
        let key = self.objects.insert(object);
        self.draw_order.push(key);
        key
    }

    /// Add an object and designate it as the water plane
    pub fn add_water(&mut self, object: SceneObject) -> ObjectKey {
        let key = self.add_object(object);
        self.water = Some(key);
        key
    }

    /// Designate an existing object as the water plane
    ///
    /// Returns false if the key is unknown.
    pub fn set_water(&mut self, key: ObjectKey) -> bool {
        if !self.objects.contains_key(key) {
            return false;
        }
        self.water = Some(key);
        true
    }

    pub fn water_key(&self) -> Option<ObjectKey> {
        self.water
    }

    pub fn water_object(&self) -> Option<&SceneObject> {
        self.water.and_then(|key| self.objects.get(key))
    }

    /// World height of the water plane, 0 without water
    pub fn water_height(&self) -> f32 {
        self.water_object()
            .map(|water| plane_height(water.world_matrix()))
            .unwrap_or(0.0)
    }

    /// Remove an object; clears the water designation if it was the water
    pub fn remove_object(&mut self, key: ObjectKey) -> Option<SceneObject> {
        let object = self.objects.remove(key)?;
        self.draw_order.retain(|k| *k != key);
        if self.water == Some(key) {
            self.water = None;
        }
        Some(object)
    }

    pub fn object(&self, key: ObjectKey) -> Option<&SceneObject> {
        self.objects.get(key)
    }

    pub fn object_mut(&mut self, key: ObjectKey) -> Option<&mut SceneObject> {
        self.objects.get_mut(key)
    }

    /// Object keys in draw order
    pub fn object_keys(&self) -> &[ObjectKey] {
        &self.draw_order
    }

    /// Objects in draw order
    pub fn objects(&self) -> impl Iterator<Item = (ObjectKey, &SceneObject)> + '_ {
        self.draw_order
            .iter()
            .filter_map(move |&key| self.objects.get(key).map(|object| (key, object)))
    }

    /// Objects in draw order, water excluded
    pub fn non_water_objects(&self) -> impl Iterator<Item = (ObjectKey, &SceneObject)> + '_ {
        let water = self.water;
        self.objects().filter(move |(key, _)| Some(*key) != water)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    // ===== LIGHTS =====

    pub fn directional_lights(&self) -> &[DirectionalLight; DIRECTIONAL_LIGHT_COUNT] {
        &self.directional_lights
    }

    pub fn directional_light_mut(&mut self, index: usize) -> Option<&mut DirectionalLight> {
        self.directional_lights.get_mut(index)
    }

    pub fn spot_light(&self) -> &SpotLight {
        &self.spot_light
    }

    pub fn spot_light_mut(&mut self) -> &mut SpotLight {
        &mut self.spot_light
    }

    pub fn point_lights(&self) -> &[PointLight] {
        &self.point_lights
    }

    pub fn add_point_light(&mut self, light: PointLight) -> usize {
        self.point_lights.push(light);
        SPOT_LIGHT_INDEX + self.point_lights.len()
    }

    /// Total light count: directional lights, the spot, then point lights
    pub fn light_count(&self) -> usize {
        DIRECTIONAL_LIGHT_COUNT + 1 + self.point_lights.len()
    }

    /// Resolve a flat light index
    pub fn light_slot(&self, index: usize) -> Option<LightSlot> {
        if index < DIRECTIONAL_LIGHT_COUNT {
            Some(LightSlot::Directional(index))
        } else if index == SPOT_LIGHT_INDEX {
            Some(LightSlot::Spot)
        } else if index < self.light_count() {
            Some(LightSlot::Point(index - SPOT_LIGHT_INDEX - 1))
        } else {
            None
        }
    }

    /// Edit one attribute of the light at a flat index.
    ///
    /// Returns the new attribute value, or None for an unknown index.
    pub fn adjust_light(&mut self, index: usize, attribute: LightAttribute, delta: f32) -> Option<f32> {
        let value = match self.light_slot(index)? {
            LightSlot::Directional(i) => self.directional_lights[i].adjust(attribute, delta),
            LightSlot::Spot => self.spot_light.light.adjust(attribute, delta),
            LightSlot::Point(i) => self.point_lights[i].adjust(attribute, delta),
        };
        engine_debug!("viewer::SceneState", "Light {} {:?} = {}", index, attribute, value);
        Some(value)
    }

    /// Directions of the directional lights followed by the spot light
    pub fn light_directions(&self) -> Vec<Vec3> {
        self.directional_lights
            .iter()
            .map(|light| light.direction())
            .chain(std::iter::once(self.spot_light.direction()))
            .collect()
    }

    /// Diffuse colors in the same order as `light_directions()`
    pub fn light_diffuse_colors(&self) -> Vec<Vec3> {
        self.directional_lights
            .iter()
            .map(|light| light.diffuse())
            .chain(std::iter::once(self.spot_light.light.diffuse()))
            .collect()
    }

    pub fn point_light_positions(&self) -> Vec<Vec3> {
        self.point_lights.iter().map(|light| light.position).collect()
    }
}

#[cfg(test)]
#[path = "scene_state_tests.rs"]
mod tests;
