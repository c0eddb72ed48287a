/// Billboard orientation and the immediate geometry drawn by the scene routine.
///
/// Orbs are quads in their local XY plane whose +Z is turned towards the eye.
/// The spot beam is a quad in the local YZ plane that extends along the spot
/// direction and rotates about it to face the eye.

use glam::{Mat4, Vec3};
use crate::graphics_device::Vertex;

const PARALLEL_EPSILON: f32 = 1e-12;

/// World matrix of a point-light orb at `light_position` facing `eye`.
///
/// `translate(p) * rotZ(theta) * rotY(phi)`, with `phi` the polar angle and
/// `theta` the azimuth of the unit light-to-eye direction. Returns None when
/// the eye sits on the light.
pub fn point_light_billboard(light_position: Vec3, eye: Vec3) -> Option<Mat4> {
    let to_eye = (eye - light_position).try_normalize()?;
    let phi = to_eye.z.clamp(-1.0, 1.0).acos();
    let theta = to_eye.y.atan2(to_eye.x);

    Some(
        Mat4::from_translation(light_position)
            * Mat4::from_rotation_z(theta)
            * Mat4::from_rotation_y(phi),
    )
}

/// World matrix of the spot beam.
///
/// Local Z follows the spot direction, local Y is perpendicular to both the
/// direction and the eye, local X completes the frame. Returns None when the
/// eye lies on the beam axis.
pub fn beam_frame(spot_position: Vec3, spot_direction: Vec3, eye: Vec3) -> Option<Mat4> {
    let z_dir = spot_direction.try_normalize()?;
    let to_eye = eye - spot_position;
    let y_raw = z_dir.cross(to_eye);
    if y_raw.length_squared() <= PARALLEL_EPSILON {
        return None;
    }
    let y_dir = y_raw.normalize();
    let x_dir = y_dir.cross(z_dir);

    Some(Mat4::from_cols(
        x_dir.extend(0.0),
        y_dir.extend(0.0),
        z_dir.extend(0.0),
        spot_position.extend(1.0),
    ))
}

// ===== IMMEDIATE GEOMETRY =====

/// Orb quad as a triangle strip
pub fn orb_quad(half_size: f32) -> [Vertex; 4] {
    let s = half_size;
    [
        Vertex::textured(s, -s, 0.0, 1.0, 0.0),
        Vertex::textured(s, s, 0.0, 1.0, 1.0),
        Vertex::textured(-s, -s, 0.0, 0.0, 0.0),
        Vertex::textured(-s, s, 0.0, 0.0, 1.0),
    ]
}

/// Beam quad as a triangle strip; wide end at `length` along local Z
pub fn beam_quad(half_width: f32, length: f32) -> [Vertex; 4] {
    let w = half_width;
    [
        Vertex::textured(0.0, -w, length, 1.0, 0.0),
        Vertex::textured(0.0, w, length, 1.0, 1.0),
        Vertex::textured(0.0, -w, 0.0, 0.0, 0.0),
        Vertex::textured(0.0, w, 0.0, 0.0, 1.0),
    ]
}

/// Unit cube around the origin as three triangle strips
pub fn skybox_strips() -> [Vec<Vertex>; 3] {
    let s = 1.0;
    [
        vec![
            Vertex::at(s, -s, -s),
            Vertex::at(-s, -s, -s),
            Vertex::at(s, -s, s),
            Vertex::at(-s, -s, s),
            Vertex::at(s, s, s),
            Vertex::at(-s, s, s),
            Vertex::at(s, s, -s),
            Vertex::at(-s, s, -s),
            Vertex::at(s, -s, -s),
            Vertex::at(-s, -s, -s),
        ],
        vec![
            Vertex::at(s, s, -s),
            Vertex::at(s, -s, -s),
            Vertex::at(s, s, s),
            Vertex::at(s, -s, s),
        ],
        vec![
            Vertex::at(-s, -s, -s),
            Vertex::at(-s, s, -s),
            Vertex::at(-s, -s, s),
            Vertex::at(-s, s, s),
        ],
    ]
}

/// World axes as (color, line) pairs: X red, Y green, Z blue
pub fn axis_lines(length: f32) -> [(Vec3, [Vertex; 2]); 3] {
    let origin = Vertex::at(0.0, 0.0, 0.0);
    [
        (Vec3::X, [origin, Vertex::at(length, 0.0, 0.0)]),
        (Vec3::Y, [origin, Vertex::at(0.0, length, 0.0)]),
        (Vec3::Z, [origin, Vertex::at(0.0, 0.0, length)]),
    ]
}

#[cfg(test)]
#[path = "billboard_tests.rs"]
mod tests;
