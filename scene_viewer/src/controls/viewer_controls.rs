/// Viewer controls - input state machine over `SceneState`.
///
/// Keeps the selection (object, light, light attribute, rotation and
/// translation axes), which mouse button is held and the last cursor
/// position. Every handler takes the scene by `&mut` so edits only happen
/// where the frame loop dispatches events.

use glam::{Vec2, Vec3};
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;
use crate::config::ControlSettings;
use crate::scene::{LightAttribute, LightSlot, ObjectKey, SceneObject, SceneState};
use crate::{engine_debug, engine_info};

/// What a right-button drag edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RightMouseMode {
    /// Translate the selected object along the translation axis
    Objects,
    /// Change the selected attribute of the selected light
    Lights,
}

#[derive(Debug, Clone)]
pub struct ViewerControls {
    settings: ControlSettings,
    selected_object: usize,
    rotation_axis: Vec3,
    translation_axis: Vec3,
    right_mouse: RightMouseMode,
    selected_light: usize,
    light_attribute: LightAttribute,
    held_button: Option<MouseButton>,
    /// Cursor position of the previous drag event; None right after a press
    last_cursor: Option<Vec2>,
}

impl ViewerControls {
    pub fn new(settings: ControlSettings) -> Self {
        Self {
            settings,
            selected_object: 0,
            rotation_axis: Vec3::Z,
            translation_axis: Vec3::Z,
            right_mouse: RightMouseMode::Objects,
            selected_light: 0,
            light_attribute: LightAttribute::Azimuth,
            held_button: None,
            last_cursor: None,
        }
    }

    // ===== ACCESSORS =====

    pub fn settings(&self) -> &ControlSettings {
        &self.settings
    }

    /// Index of the selected object in draw order
    pub fn selected_object(&self) -> usize {
        self.selected_object
    }

    /// Key of the selected object, if the scene has one at that index
    pub fn selected_object_key(&self, scene: &SceneState) -> Option<ObjectKey> {
        scene.object_keys().get(self.selected_object).copied()
    }

    pub fn rotation_axis(&self) -> Vec3 {
        self.rotation_axis
    }

    pub fn translation_axis(&self) -> Vec3 {
        self.translation_axis
    }

    pub fn right_mouse_mode(&self) -> RightMouseMode {
        self.right_mouse
    }

    /// Flat light index: 0..2 directional, 3 spot, 4.. point lights
    pub fn selected_light(&self) -> usize {
        self.selected_light
    }

    pub fn light_attribute(&self) -> LightAttribute {
        self.light_attribute
    }

    // ===== KEYBOARD =====

    /// Apply a key press. Returns false for keys with no binding.
    pub fn key_pressed(&mut self, key: KeyCode, scene: &mut SceneState) -> bool {
        let s = self.settings;
        match key {
            KeyCode::KeyW => { scene.camera_mut().move_forward(s.move_step); }
            KeyCode::KeyS => { scene.camera_mut().move_forward(-s.move_step); }
            KeyCode::KeyA => { scene.camera_mut().move_right(-s.move_step); }
            KeyCode::KeyD => { scene.camera_mut().move_right(s.move_step); }
            KeyCode::Space => { scene.camera_mut().move_up(s.move_step); }
            KeyCode::KeyC => { scene.camera_mut().move_up(-s.move_step); }
            KeyCode::ArrowUp => { scene.camera_mut().move_forward(s.sprint_step); }
            KeyCode::ArrowDown => { scene.camera_mut().move_forward(-s.sprint_step); }
            KeyCode::ArrowLeft => { scene.camera_mut().move_right(-s.sprint_step); }
            KeyCode::ArrowRight => { scene.camera_mut().move_right(s.sprint_step); }

            KeyCode::KeyR => scene.reset_camera(),
            KeyCode::KeyX => scene.draw_axes = !scene.draw_axes,
            KeyCode::KeyF => scene.smooth_shading = !scene.smooth_shading,

            KeyCode::KeyO => self.edit_selected(scene, |object| object.center_at_origin()),
            KeyCode::Digit0 => self.edit_selected(scene, |object| object.reset_world_matrix()),

            KeyCode::Digit1 => self.set_rotation_axis(Vec3::X),
            KeyCode::Digit2 => self.set_rotation_axis(Vec3::Y),
            KeyCode::Digit3 => self.set_rotation_axis(Vec3::Z),
            KeyCode::Minus => self.rotate_selected(scene, s.coarse_rotation),
            KeyCode::Equal => self.rotate_selected(scene, -s.coarse_rotation),
            KeyCode::BracketLeft => self.rotate_selected(scene, s.fine_rotation),
            KeyCode::BracketRight => self.rotate_selected(scene, -s.fine_rotation),

            KeyCode::Digit4 => self.set_translation_axis(Vec3::X),
            KeyCode::Digit5 => self.set_translation_axis(Vec3::Y),
            KeyCode::Digit6 => self.set_translation_axis(Vec3::Z),

            KeyCode::Semicolon => self.edit_selected(scene, |object| object.scale_uniform(s.scale_factor)),
            KeyCode::Quote => self.edit_selected(scene, |object| object.scale_uniform(1.0 / s.scale_factor)),

            KeyCode::Comma => self.cycle_object(scene, false),
            KeyCode::Period => self.cycle_object(scene, true),

            KeyCode::KeyY => {
                self.right_mouse = match self.right_mouse {
                    RightMouseMode::Objects => RightMouseMode::Lights,
                    RightMouseMode::Lights => RightMouseMode::Objects,
                };
                engine_info!("viewer::ViewerControls", "Right mouse controls {:?}", self.right_mouse);
            }
            KeyCode::KeyB => self.cycle_light(scene, false),
            KeyCode::KeyN => self.cycle_light(scene, true),

            KeyCode::Digit7 => self.set_light_attribute(LightAttribute::Azimuth),
            KeyCode::Digit8 => self.set_light_attribute(LightAttribute::Elevation),
            KeyCode::Digit9 => self.set_light_attribute(LightAttribute::Scale),

            _ => return false,
        }
        true
    }

    // ===== MOUSE =====

    /// Track which button drives the drag. Releasing any button ends it.
    pub fn mouse_input(&mut self, button: MouseButton, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.held_button = match button {
                    MouseButton::Left | MouseButton::Right => Some(button),
                    _ => None,
                };
            }
            ElementState::Released => {
                self.held_button = None;
                self.last_cursor = None;
            }
        }
    }

    /// Apply a cursor move. The first move of a drag only records the position.
    pub fn cursor_moved(&mut self, x: f64, y: f64, scene: &mut SceneState) {
        let position = Vec2::new(x as f32, y as f32);
        let Some(previous) = self.last_cursor.replace(position) else {
            return;
        };
        let delta = position - previous;

        match self.held_button {
            Some(MouseButton::Left) => {
                let camera = scene.camera_mut();
                camera.rotate_right(delta.x * self.settings.rotate_sensitivity);
                camera.rotate_up(-delta.y * self.settings.rotate_sensitivity);
            }
            Some(MouseButton::Right) => match self.right_mouse {
                RightMouseMode::Objects => {
                    let offset = -delta.y * self.translation_axis;
                    self.edit_selected(scene, |object| object.translate(offset));
                }
                RightMouseMode::Lights => self.drag_light(scene, -delta.y),
            },
            _ => {}
        }
    }

    // ===== WINDOW =====

    /// Window resize: camera aspect follows the new size
    pub fn resized(&mut self, width: u32, height: u32, scene: &mut SceneState) {
        scene.resize(width, height);
    }

    // ===== INTERNALS =====

    fn edit_selected<F>(&self, scene: &mut SceneState, edit: F)
    where
        F: FnOnce(&mut SceneObject),
    {
        if let Some(object) = self
            .selected_object_key(scene)
            .and_then(|key| scene.object_mut(key))
        {
            edit(object);
        }
    }

    fn rotate_selected(&self, scene: &mut SceneState, degrees: f32) {
        let axis = self.rotation_axis;
        self.edit_selected(scene, |object| object.rotate_about_center(axis, degrees));
    }

    fn set_rotation_axis(&mut self, axis: Vec3) {
        self.rotation_axis = axis;
        engine_info!("viewer::ViewerControls", "Axis of rotation is {}", axis);
    }

    fn set_translation_axis(&mut self, axis: Vec3) {
        self.translation_axis = axis;
        engine_info!("viewer::ViewerControls", "Axis of translation is {}", axis);
    }

    fn set_light_attribute(&mut self, attribute: LightAttribute) {
        self.light_attribute = attribute;
        engine_info!("viewer::ViewerControls", "Light attribute {:?} selected", attribute);
    }

    fn cycle_object(&mut self, scene: &SceneState, forward: bool) {
        let count = scene.object_count();
        if count == 0 {
            return;
        }
        self.selected_object = cycle(self.selected_object.min(count - 1), count, forward);
        self.right_mouse = RightMouseMode::Objects;
        if let Some(object) = self.selected_object_key(scene).and_then(|key| scene.object(key)) {
            engine_info!("viewer::ViewerControls", "{} selected", object.name());
        }
    }

    fn cycle_light(&mut self, scene: &SceneState, forward: bool) {
        let count = scene.light_count();
        self.selected_light = cycle(self.selected_light.min(count - 1), count, forward);
        self.right_mouse = RightMouseMode::Lights;
        engine_info!("viewer::ViewerControls", "Light {} selected", self.selected_light);
    }

    fn drag_light(&self, scene: &mut SceneState, drag: f32) {
        let sensitivity = match (self.light_attribute, scene.light_slot(self.selected_light)) {
            (LightAttribute::Scale, Some(LightSlot::Directional(_) | LightSlot::Spot)) => {
                self.settings.light_scale_sensitivity
            }
            _ => self.settings.light_sensitivity,
        };
        if scene
            .adjust_light(self.selected_light, self.light_attribute, drag * sensitivity)
            .is_none()
        {
            engine_debug!("viewer::ViewerControls", "No light at index {}", self.selected_light);
        }
    }
}

impl Default for ViewerControls {
    fn default() -> Self {
        Self::new(ControlSettings::default())
    }
}

/// Step an index through 0..count with wrap-around
fn cycle(index: usize, count: usize, forward: bool) -> usize {
    if forward {
        if index + 1 >= count { 0 } else { index + 1 }
    } else if index == 0 {
        count - 1
    } else {
        index - 1
    }
}

#[cfg(test)]
#[path = "viewer_controls_tests.rs"]
mod tests;
