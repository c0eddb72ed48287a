/// CommandList trait - immediate-mode stream of rendering commands
///
/// Every render pass issues its work through a command list: target binding,
/// viewport and clear, transient render state, shader uniforms, and geometry.
/// Matrices are always passed explicitly as uniforms; there is no ambient
/// matrix stack.

use std::sync::Arc;
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};
use crate::error::Result;
use crate::graphics_device::{ClearFlags, RenderTarget, Shader, Texture};

/// Command list for recording rendering commands
pub trait CommandList {
    /// Bind a render target; subsequent draws land in it
    fn bind_render_target(&mut self, target: &dyn RenderTarget) -> Result<()>;

    /// Set the viewport
    fn set_viewport(&mut self, viewport: Viewport) -> Result<()>;

    /// Clear the buffers selected by `flags` of the bound target
    fn clear(&mut self, flags: ClearFlags, color: [f32; 4]) -> Result<()>;

    /// Enable or disable depth writes
    fn set_depth_write(&mut self, enabled: bool) -> Result<()>;

    /// Set the blend mode
    fn set_blend(&mut self, mode: BlendMode) -> Result<()>;

    /// Set the depth polygon offset (0, 0 disables it)
    fn set_polygon_offset(&mut self, factor: f32, units: f32) -> Result<()>;

    /// Bind a shader program
    fn bind_shader(&mut self, shader: &Arc<dyn Shader>) -> Result<()>;

    /// Unbind the current shader program
    fn unbind_shader(&mut self) -> Result<()>;

    /// Set a uniform on the bound shader
    fn set_uniform(&mut self, name: &str, value: UniformValue) -> Result<()>;

    /// Point a sampler uniform of the bound shader at a texture unit
    fn set_texture(&mut self, name: &str, unit: u32) -> Result<()>;

    /// Bind a texture to a texture unit
    fn bind_texture(&mut self, unit: u32, texture: TextureSource<'_>) -> Result<()>;

    /// Draw immediate geometry
    fn draw_primitive(&mut self, topology: PrimitiveTopology, vertices: &[Vertex]) -> Result<()>;

    /// Insert a debug label into the command stream
    fn debug_marker(&mut self, _label: &str) -> Result<()> {
        Ok(())
    }
}

/// Viewport dimensions and depth range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Viewport {
    /// Viewport covering `width` x `height` pixels from the origin
    pub fn from_size(width: u32, height: u32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: width as f32,
            height: height as f32,
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }
}

/// Blend mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    /// Blending disabled (entry state of every pass)
    Disabled,
    /// src_alpha, one_minus_src_alpha
    Alpha,
}

/// Primitive topology for immediate geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveTopology {
    Lines,
    Triangles,
    TriangleStrip,
}

/// Immediate-mode vertex
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec3,
    pub tex_coord: Vec2,
}

impl Vertex {
    /// Vertex without texture coordinates
    pub fn at(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            tex_coord: Vec2::ZERO,
        }
    }

    /// Textured vertex
    pub fn textured(x: f32, y: f32, z: f32, u: f32, v: f32) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            tex_coord: Vec2::new(u, v),
        }
    }
}

/// Uniform value
#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Vec3(Vec3),
    Mat4(Mat4),
    Vec3Array(Vec<Vec3>),
}

impl UniformValue {
    /// Shader convention for boolean switches: +1 on, -1 off
    pub fn switch(enabled: bool) -> Self {
        UniformValue::Float(if enabled { 1.0 } else { -1.0 })
    }

    /// Raw bytes as uploaded to a uniform buffer
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            UniformValue::Float(v) => bytemuck::bytes_of(v),
            UniformValue::Vec3(v) => bytemuck::bytes_of(v),
            UniformValue::Mat4(m) => bytemuck::bytes_of(m),
            UniformValue::Vec3Array(values) => bytemuck::cast_slice(values.as_slice()),
        }
    }
}

/// Texture bound to a texture unit
#[derive(Clone, Copy)]
pub enum TextureSource<'a> {
    /// Color attachment of an off-screen target
    TargetColor(&'a dyn RenderTarget),
    /// Depth attachment of an off-screen target
    TargetDepth(&'a dyn RenderTarget),
    /// Loaded image texture (cubemap, spot cookie, billboards)
    Image(&'a dyn Texture),
}

impl TextureSource<'_> {
    /// `kind:name` label, used by logs and recording devices
    pub fn label(&self) -> String {
        match self {
            TextureSource::TargetColor(target) => format!("color:{}", target.name()),
            TextureSource::TargetDepth(target) => format!("depth:{}", target.name()),
            TextureSource::Image(texture) => format!("image:{}", texture.name()),
        }
    }
}
