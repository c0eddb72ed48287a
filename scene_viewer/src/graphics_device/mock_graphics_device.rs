/// Mock graphics device for unit tests (no GPU required)
///
/// Every command is recorded as a string so tests can assert pass ordering,
/// render state restoration, and the uniforms in effect at each mesh draw.

use std::sync::Arc;
use rustc_hash::FxHashMap;
use glam::Vec3;
use crate::error::{Error, Result};
use crate::graphics_device::{
    Attachments, BlendMode, ClearFlags, CommandList, GraphicsDevice, Mesh,
    PrimitiveTopology, RenderTarget, RenderTargetDesc, Shader, Texture,
    TextureSource, TextureType, UniformValue, Vertex, Viewport,
};

// ============================================================================
// Mock RenderTarget
// ============================================================================

#[derive(Debug)]
pub struct MockRenderTarget {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub attachments: Attachments,
}

impl MockRenderTarget {
    pub fn new(name: &str, width: u32, height: u32, attachments: Attachments) -> Self {
        Self { name: name.to_string(), width, height, attachments }
    }

    /// Screen target: color + depth
    pub fn screen(width: u32, height: u32) -> Self {
        Self::new("screen", width, height, Attachments::COLOR | Attachments::DEPTH)
    }
}

impl RenderTarget for MockRenderTarget {
    fn name(&self) -> &str { &self.name }
    fn width(&self) -> u32 { self.width }
    fn height(&self) -> u32 { self.height }
    fn attachments(&self) -> Attachments { self.attachments }
}

// ============================================================================
// Mock Shader / Texture / Mesh
// ============================================================================

#[derive(Debug)]
pub struct MockShader {
    pub name: String,
}

impl MockShader {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string() }
    }

    pub fn shared(name: &str) -> Arc<dyn Shader> {
        Arc::new(Self::new(name))
    }
}

impl Shader for MockShader {
    fn name(&self) -> &str { &self.name }
}

#[derive(Debug)]
pub struct MockTexture {
    pub name: String,
    pub texture_type: TextureType,
}

impl MockTexture {
    pub fn shared(name: &str, texture_type: TextureType) -> Arc<dyn Texture> {
        Arc::new(Self { name: name.to_string(), texture_type })
    }
}

impl Texture for MockTexture {
    fn name(&self) -> &str { &self.name }
    fn texture_type(&self) -> TextureType { self.texture_type }
}

#[derive(Debug)]
pub struct MockMesh {
    pub name: String,
    pub normal_map: bool,
    pub color_map: bool,
}

impl MockMesh {
    pub fn shared(name: &str, normal_map: bool, color_map: bool) -> Arc<dyn Mesh> {
        Arc::new(Self { name: name.to_string(), normal_map, color_map })
    }
}

impl Mesh for MockMesh {
    fn draw(&self, cmd: &mut dyn CommandList, smooth: bool) -> Result<()> {
        let shading = if smooth { "smooth" } else { "flat" };
        cmd.debug_marker(&format!("mesh:{}:{}", self.name, shading))?;
        cmd.draw_primitive(
            PrimitiveTopology::Triangles,
            &[Vertex::at(0.0, 0.0, 0.0), Vertex::at(1.0, 0.0, 0.0), Vertex::at(0.0, 1.0, 0.0)],
        )
    }

    fn has_normal_map(&self) -> bool { self.normal_map }
    fn has_color_map(&self) -> bool { self.color_map }
}

// ============================================================================
// Mock GraphicsDevice
// ============================================================================

#[derive(Debug, Default)]
pub struct MockGraphicsDevice {
    /// Descriptors of every target created so far
    pub created: Vec<RenderTargetDesc>,
    /// Target name the device refuses to complete
    pub incomplete: Option<String>,
}

impl MockGraphicsDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(name: &str) -> Self {
        Self { created: Vec::new(), incomplete: Some(name.to_string()) }
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn create_render_target(&mut self, desc: &RenderTargetDesc) -> Result<Arc<dyn RenderTarget>> {
        if self.incomplete.as_deref() == Some(desc.name.as_str()) {
            return Err(Error::IncompleteRenderTarget(desc.name.clone()));
        }
        self.created.push(desc.clone());
        Ok(Arc::new(MockRenderTarget::new(&desc.name, desc.width, desc.height, desc.attachments)))
    }
}

// ============================================================================
// Mock CommandList
// ============================================================================

/// Uniform state captured when a mesh starts drawing
#[derive(Debug, Clone)]
pub struct MeshDrawRecord {
    pub label: String,
    pub shader: Option<String>,
    pub uniforms: FxHashMap<String, UniformValue>,
}

#[derive(Debug)]
pub struct MockCommandList {
    pub commands: Vec<String>,
    pub uniforms: FxHashMap<String, UniformValue>,
    pub mesh_draws: Vec<MeshDrawRecord>,
    pub depth_write: bool,
    pub blend: BlendMode,
    pub polygon_offset: (f32, f32),
    pub bound_shader: Option<String>,
    pub bound_target: Option<String>,
    /// Target name whose binding fails with a backend error
    pub fail_on_bind: Option<String>,
}

impl MockCommandList {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            uniforms: FxHashMap::default(),
            mesh_draws: Vec::new(),
            depth_write: true,
            blend: BlendMode::Disabled,
            polygon_offset: (0.0, 0.0),
            bound_shader: None,
            bound_target: None,
            fail_on_bind: None,
        }
    }

    /// Commands starting with `prefix`
    pub fn commands_with_prefix(&self, prefix: &str) -> Vec<&str> {
        self.commands
            .iter()
            .filter(|c| c.starts_with(prefix))
            .map(|c| c.as_str())
            .collect()
    }

    /// Index of the first command equal to `command`
    pub fn position(&self, command: &str) -> Option<usize> {
        self.commands.iter().position(|c| c == command)
    }

    /// Last value set for a uniform
    pub fn uniform(&self, name: &str) -> Option<&UniformValue> {
        self.uniforms.get(name)
    }

    /// Mesh draw records whose label starts with `prefix`
    pub fn mesh_draws_with_prefix(&self, prefix: &str) -> Vec<&MeshDrawRecord> {
        self.mesh_draws.iter().filter(|r| r.label.starts_with(prefix)).collect()
    }
}

impl CommandList for MockCommandList {
    fn bind_render_target(&mut self, target: &dyn RenderTarget) -> Result<()> {
        if self.fail_on_bind.as_deref() == Some(target.name()) {
            return Err(Error::BackendError(format!("cannot bind '{}'", target.name())));
        }
        self.bound_target = Some(target.name().to_string());
        self.commands.push(format!("bind_render_target:{}", target.name()));
        Ok(())
    }

    fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        self.commands.push(format!(
            "set_viewport:{}x{}",
            viewport.width as u32, viewport.height as u32
        ));
        Ok(())
    }

    fn clear(&mut self, flags: ClearFlags, _color: [f32; 4]) -> Result<()> {
        self.commands.push(format!("clear:{}", flags.label()));
        Ok(())
    }

    fn set_depth_write(&mut self, enabled: bool) -> Result<()> {
        self.depth_write = enabled;
        self.commands.push(format!("set_depth_write:{}", enabled));
        Ok(())
    }

    fn set_blend(&mut self, mode: BlendMode) -> Result<()> {
        self.blend = mode;
        self.commands.push(format!("set_blend:{:?}", mode));
        Ok(())
    }

    fn set_polygon_offset(&mut self, factor: f32, units: f32) -> Result<()> {
        self.polygon_offset = (factor, units);
        self.commands.push(format!("set_polygon_offset:{},{}", factor, units));
        Ok(())
    }

    fn bind_shader(&mut self, shader: &Arc<dyn Shader>) -> Result<()> {
        self.bound_shader = Some(shader.name().to_string());
        self.commands.push(format!("bind_shader:{}", shader.name()));
        Ok(())
    }

    fn unbind_shader(&mut self) -> Result<()> {
        self.bound_shader = None;
        self.commands.push("unbind_shader".to_string());
        Ok(())
    }

    fn set_uniform(&mut self, name: &str, value: UniformValue) -> Result<()> {
        match &value {
            UniformValue::Float(v) => self.commands.push(format!("set_uniform:{}={}", name, v)),
            _ => self.commands.push(format!("set_uniform:{}", name)),
        }
        self.uniforms.insert(name.to_string(), value);
        Ok(())
    }

    fn set_texture(&mut self, name: &str, unit: u32) -> Result<()> {
        self.commands.push(format!("set_texture:{}:{}", name, unit));
        Ok(())
    }

    fn bind_texture(&mut self, unit: u32, texture: TextureSource<'_>) -> Result<()> {
        self.commands.push(format!("bind_texture:{}:{}", unit, texture.label()));
        Ok(())
    }

    fn draw_primitive(&mut self, topology: PrimitiveTopology, vertices: &[Vertex]) -> Result<()> {
        self.commands.push(format!("draw_primitive:{:?}:{}", topology, vertices.len()));
        Ok(())
    }

    fn debug_marker(&mut self, label: &str) -> Result<()> {
        if label.starts_with("mesh:") {
            self.mesh_draws.push(MeshDrawRecord {
                label: label.to_string(),
                shader: self.bound_shader.clone(),
                uniforms: self.uniforms.clone(),
            });
        }
        self.commands.push(format!("marker:{}", label));
        Ok(())
    }
}

/// Uniform as a float, panicking on any other variant
pub fn float_uniform(value: Option<&UniformValue>) -> f32 {
    match value {
        Some(UniformValue::Float(v)) => *v,
        other => panic!("expected float uniform, got {:?}", other),
    }
}

/// Uniform as a Vec3, panicking on any other variant
pub fn vec3_uniform(value: Option<&UniformValue>) -> Vec3 {
    match value {
        Some(UniformValue::Vec3(v)) => *v,
        other => panic!("expected vec3 uniform, got {:?}", other),
    }
}

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
