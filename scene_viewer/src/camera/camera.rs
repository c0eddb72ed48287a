/// Camera - free-flying perspective camera with an orthonormal basis.
///
/// The camera stores its position and the triple `{right, up, look_neg}`
/// where `look_neg` is the negated view direction. The basis is kept
/// right-handed and orthonormal after every rotation; the view matrix is
/// built directly from it without a matrix inversion.
///
/// World up is +Z. Vertical motion (`move_up`) is always world-space.

use glam::{Mat4, Quat, Vec3, Vec4};

/// World vertical axis
pub const WORLD_UP: Vec3 = Vec3::Z;

/// Perspective lens parameters (`fov_y` in degrees)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lens {
    pub near_plane: f32,
    pub far_plane: f32,
    pub fov_y: f32,
}

/// Position and view direction used to (re)initialize a camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look: Vec3,
}

#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    right: Vec3,
    up: Vec3,
    look_neg: Vec3,

    near_plane: f32,
    far_plane: f32,
    fov_y: f32,
    aspect: f32,

    projection: Mat4,
}

impl Default for Camera {
    /// Camera at the origin looking along +Y, lens 0.1..1000, 45°, 4:3.
    fn default() -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            right: Vec3::X,
            up: Vec3::Z,
            look_neg: Vec3::NEG_Y,
            near_plane: 0.1,
            far_plane: 1000.0,
            fov_y: 45.0,
            aspect: 4.0 / 3.0,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection();
        camera
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Camera placed at `pose` with the given lens and aspect ratio
    pub fn with_pose(pose: CameraPose, lens: Lens, aspect: f32) -> Self {
        let mut camera = Self::default();
        camera.set_lens(lens.near_plane, lens.far_plane, lens.fov_y);
        camera.set_aspect(aspect);
        camera.set_pose(pose);
        camera
    }

    // ===== SETTERS =====

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Position and look direction in one call
    pub fn set_pose(&mut self, pose: CameraPose) {
        self.set_position(pose.position);
        self.set_look(pose.look);
    }

    /// Point the camera along `direction`.
    ///
    /// When `direction` is parallel to world up the previous `right` is kept
    /// and only `up` is recomputed. A zero direction leaves the basis as is.
    pub fn set_look(&mut self, direction: Vec3) {
        if direction.length_squared() == 0.0 {
            crate::engine_debug!("viewer::Camera", "set_look ignored zero-length direction");
            return;
        }

        self.look_neg = -direction.normalize();
        let right_new = WORLD_UP.cross(self.look_neg);

        if right_new.length() == 0.0 {
            // looking straight up or down
            crate::engine_debug!("viewer::Camera", "look parallel to world up, keeping previous right");
            self.up = self.look_neg.cross(self.right);
        } else {
            self.right = right_new.normalize();
            self.up = self.look_neg.cross(self.right);
        }
    }

    /// Lens parameters (`fov_y` in degrees); recomputes the projection
    pub fn set_lens(&mut self, near_plane: f32, far_plane: f32, fov_y: f32) {
        self.near_plane = near_plane;
        self.far_plane = far_plane;
        self.fov_y = fov_y;
        self.update_projection();
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.update_projection();
    }

    // ===== MOVEMENT =====

    /// Move along the view direction; returns the new position
    pub fn move_forward(&mut self, distance: f32) -> Vec3 {
        self.position -= distance * self.look_neg;
        self.position
    }

    /// Strafe along `right`; returns the new position
    pub fn move_right(&mut self, distance: f32) -> Vec3 {
        self.position += distance * self.right;
        self.position
    }

    /// Move along world up regardless of pitch; returns the new position
    pub fn move_up(&mut self, distance: f32) -> Vec3 {
        self.position.z += distance;
        self.position
    }

    // ===== ROTATION =====

    /// Yaw about world up. Positive angles (degrees) turn right.
    pub fn rotate_right(&mut self, angle: f32) {
        let rotation = Quat::from_axis_angle(WORLD_UP, (-angle).to_radians());
        self.right = rotation * self.right;
        self.look_neg = rotation * self.look_neg;
        self.orthonormalize();
    }

    /// Pitch about `right`. Positive angles (degrees) look up.
    ///
    /// The camera never pitches past straight up or down: when `up` would
    /// point below the horizon the view is snapped to the nearer vertical.
    pub fn rotate_up(&mut self, angle: f32) {
        let rotation = Quat::from_axis_angle(self.right, angle.to_radians());
        self.up = rotation * self.up;
        self.look_neg = rotation * self.look_neg;

        if self.up.dot(WORLD_UP) < 0.0 {
            self.look_neg = if self.look_neg.dot(WORLD_UP) > 0.0 { WORLD_UP } else { -WORLD_UP };
            self.up = -self.right.cross(self.look_neg);
        }

        self.orthonormalize();
    }

    /// Look at a world-space point. No-op when `target` is the camera position.
    pub fn look_at(&mut self, target: Vec3) {
        let to_target = target - self.position;
        let distance = to_target.length();
        if distance == 0.0 {
            return;
        }
        self.set_look(to_target / distance);
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// View direction
    pub fn look(&self) -> Vec3 {
        -self.look_neg
    }

    /// Negated view direction (camera-space +Z)
    pub fn look_negated(&self) -> Vec3 {
        self.look_neg
    }

    pub fn near_plane(&self) -> f32 {
        self.near_plane
    }

    pub fn far_plane(&self) -> f32 {
        self.far_plane
    }

    /// Vertical field of view in degrees
    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Current pose (position + look direction)
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            look: self.look(),
        }
    }

    /// View matrix: rows are the basis vectors, translation is `-basis · position`.
    pub fn view(&self) -> Mat4 {
        let t_right = -self.position.dot(self.right);
        let t_up = -self.position.dot(self.up);
        let t_look = -self.position.dot(self.look_neg);

        Mat4::from_cols(
            Vec4::new(self.right.x, self.up.x, self.look_neg.x, 0.0),
            Vec4::new(self.right.y, self.up.y, self.look_neg.y, 0.0),
            Vec4::new(self.right.z, self.up.z, self.look_neg.z, 0.0),
            Vec4::new(t_right, t_up, t_look, 1.0),
        )
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view()
    }

    // ===== INTERNAL =====

    fn update_projection(&mut self) {
        self.projection = Mat4::perspective_rh_gl(
            self.fov_y.to_radians(),
            self.aspect,
            self.near_plane,
            self.far_plane,
        );
    }

    /// Re-anchor the basis on the look direction: up drifts before right.
    fn orthonormalize(&mut self) {
        self.look_neg = self.look_neg.normalize();
        self.up = self.look_neg.cross(self.right).normalize();
        self.right = self.up.cross(self.look_neg);
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
