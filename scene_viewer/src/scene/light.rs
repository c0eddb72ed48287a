/// Scene lights.
///
/// Directional lights are described by spherical angles in degrees:
/// `azimuth` turns about world up, `elevation` tilts towards the ground.
/// A spot light is a directional light with a fixed world position; it is the
/// single shadow caster. Point lights only carry a position.

use glam::Vec3;

/// Position of the stock spot light
pub const DEFAULT_SPOT_POSITION: Vec3 = Vec3::new(-28.2751, 253.996, 67.9616);

/// Attribute edited by the right mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightAttribute {
    Azimuth,
    Elevation,
    Scale,
}

/// Directional light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Degrees about world up
    pub azimuth: f32,
    /// Degrees below the horizon
    pub elevation: f32,
    /// Diffuse scale in [0, 1]
    pub intensity: f32,
    pub color: Vec3,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            azimuth: 0.0,
            elevation: 0.0,
            intensity: 1.0,
            color: Vec3::ONE,
        }
    }
}

impl DirectionalLight {
    pub fn new(azimuth: f32, elevation: f32, intensity: f32) -> Self {
        Self { azimuth, elevation, intensity, color: Vec3::ONE }
    }

    /// Direction the light shines along.
    ///
    /// -X tilted by `elevation` about Y, then turned by `azimuth` about Z.
    pub fn direction(&self) -> Vec3 {
        let (sin_el, cos_el) = (-self.elevation).to_radians().sin_cos();
        // rotate (-1, 0, 0) about Y
        let tilted = Vec3::new(-cos_el, 0.0, sin_el);
        let (sin_az, cos_az) = self.azimuth.to_radians().sin_cos();
        Vec3::new(
            tilted.x * cos_az - tilted.y * sin_az,
            tilted.x * sin_az + tilted.y * cos_az,
            tilted.z,
        )
    }

    /// Diffuse color (`intensity * color`)
    pub fn diffuse(&self) -> Vec3 {
        self.intensity * self.color
    }

    /// Apply a delta to one attribute.
    ///
    /// Azimuth wraps into [0, 360], elevation clamps to [-90, 90] and
    /// intensity clamps to [0, 1]. Returns the new attribute value.
    pub fn adjust(&mut self, attribute: LightAttribute, delta: f32) -> f32 {
        match attribute {
            LightAttribute::Azimuth => {
                self.azimuth = wrap_degrees(self.azimuth + delta);
                self.azimuth
            }
            LightAttribute::Elevation => {
                self.elevation = (self.elevation + delta).clamp(-90.0, 90.0);
                self.elevation
            }
            LightAttribute::Scale => {
                self.intensity = (self.intensity + delta).clamp(0.0, 1.0);
                self.intensity
            }
        }
    }
}

/// Spot light: a directional light anchored at a world position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    pub light: DirectionalLight,
    pub position: Vec3,
}

impl Default for SpotLight {
    fn default() -> Self {
        Self {
            light: DirectionalLight::default(),
            position: DEFAULT_SPOT_POSITION,
        }
    }
}

impl SpotLight {
    pub fn new(light: DirectionalLight, position: Vec3) -> Self {
        Self { light, position }
    }

    pub fn direction(&self) -> Vec3 {
        self.light.direction()
    }
}

/// Point light
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointLight {
    pub position: Vec3,
}

impl PointLight {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }

    /// Point lights reuse the three edit attributes as x, y and z, unclamped.
    pub fn adjust(&mut self, attribute: LightAttribute, delta: f32) -> f32 {
        let component = match attribute {
            LightAttribute::Azimuth => &mut self.position.x,
            LightAttribute::Elevation => &mut self.position.y,
            LightAttribute::Scale => &mut self.position.z,
        };
        *component += delta;
        *component
    }
}

/// Wrap into [0, 360]; a positive multiple of 360 stays 360.
fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped == 0.0 && degrees > 0.0 {
        360.0
    } else {
        wrapped
    }
}

#[cfg(test)]
#[path = "light_tests.rs"]
mod tests;
