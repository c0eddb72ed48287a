/// Drawing strategies.
///
/// A Drawer turns a `SceneState` plus a resolved `PassContext` into commands
/// on a command list. It never binds render targets: the frame renderer owns
/// target binding and pass order.
///
/// Scene draw order inside a pass:
/// 1. environment cube around the eye (depth writes off)
/// 2. world axes (optional)
/// 3. meshes: water first, then every other object
/// 4. alpha-blended billboards (depth writes off)
///
/// The routine leaves depth writes enabled and blending disabled.

use std::sync::Arc;
use glam::Mat4;
use crate::camera::{LightTransforms, PassContext};
use crate::config::{BillboardSettings, ViewerConfig};
use crate::error::Result;
use crate::graphics_device::{
    BlendMode, CommandList, PrimitiveTopology, RenderTarget, Shader, Texture, TextureSource,
    UniformValue,
};
use crate::{engine_bail, engine_trace};
use super::billboard::{
    axis_lines, beam_frame, beam_quad, orb_quad, point_light_billboard, skybox_strips,
};
use super::scene_object::SceneObject;
use super::scene_state::SceneState;

// ===== TEXTURE UNITS =====

pub const NORMAL_TEX_UNIT: u32 = 0;
pub const DISPLACEMENT_TEX_UNIT: u32 = 1;
pub const COLOR_TEX_UNIT: u32 = 2;
pub const CUBE_MAP_UNIT: u32 = 3;
/// Reflection texture for water, billboard texture for the billboard shader
pub const REFLECTION_TEX_UNIT: u32 = 4;
pub const DEPTH_TEX_UNIT: u32 = 5;
pub const SPOT_TEX_UNIT: u32 = 6;

/// Shaders and textures the draw routine samples from
#[derive(Clone)]
pub struct DrawResources {
    /// Lit mesh shader (shadow test, reflection, normal/color maps)
    pub mesh_shader: Arc<dyn Shader>,
    /// Depth-only shader for the shadow map
    pub shadow_shader: Arc<dyn Shader>,
    /// Environment cube and axis lines
    pub environment_shader: Arc<dyn Shader>,
    /// Textured, alpha-scaled billboards
    pub billboard_shader: Arc<dyn Shader>,

    pub cube_map: Arc<dyn Texture>,
    /// Spot light cookie
    pub spot_texture: Arc<dyn Texture>,
    pub orb_texture: Arc<dyn Texture>,
    pub beam_texture: Arc<dyn Texture>,
}

/// Targets written by earlier passes and sampled by this one
#[derive(Clone, Copy)]
pub struct PassInputs<'a> {
    pub shadow_map: &'a dyn RenderTarget,
    /// Present only when the pass draws water
    pub reflection: Option<&'a dyn RenderTarget>,
}

/// Strategy for drawing the scene.
///
/// Stateless: one Drawer serves every pass of every frame.
pub trait Drawer: Send + Sync {
    /// Depth-only draw of every object from the light's point of view
    fn draw_depth(&self, scene: &SceneState, light: &LightTransforms, cmd: &mut dyn CommandList) -> Result<()>;

    /// Full scene draw for one color pass
    fn draw_scene(
        &self,
        scene: &SceneState,
        ctx: &PassContext,
        inputs: &PassInputs<'_>,
        cmd: &mut dyn CommandList,
    ) -> Result<()>;
}

/// Forward drawer - draws each object sequentially, one shader per stage.
pub struct ForwardDrawer {
    resources: DrawResources,
    billboards: BillboardSettings,
    axis_length: f32,
    polygon_offset: (f32, f32),
}

impl ForwardDrawer {
    pub fn new(resources: DrawResources, config: &ViewerConfig) -> Self {
        Self {
            resources,
            billboards: config.billboards,
            axis_length: config.axis_length,
            polygon_offset: config.shadow_polygon_offset,
        }
    }

    pub fn resources(&self) -> &DrawResources {
        &self.resources
    }

    // ===== STAGES =====

    fn draw_environment(&self, ctx: &PassContext, cmd: &mut dyn CommandList) -> Result<()> {
        cmd.bind_shader(&self.resources.environment_shader)?;

        cmd.set_texture("cubeMap", CUBE_MAP_UNIT)?;
        cmd.set_uniform("eyePosWorld", UniformValue::Vec3(ctx.eye_position))?;
        cmd.set_uniform("overrideWithColor", UniformValue::switch(false))?;
        cmd.bind_texture(CUBE_MAP_UNIT, TextureSource::Image(self.resources.cube_map.as_ref()))?;

        // cube follows the eye so it never gets closer or farther
        let model = Mat4::from_translation(ctx.eye_position);
        cmd.set_uniform("projMat", UniformValue::Mat4(ctx.projection))?;
        cmd.set_uniform("modelViewMat", UniformValue::Mat4(ctx.view * model))?;
        cmd.set_uniform("modelMat", UniformValue::Mat4(model))?;

        cmd.set_depth_write(false)?;
        for strip in skybox_strips() {
            cmd.draw_primitive(PrimitiveTopology::TriangleStrip, &strip)?;
        }
        cmd.set_depth_write(true)?;

        if ctx.draw_axes {
            cmd.set_uniform("modelViewMat", UniformValue::Mat4(ctx.view))?;
            cmd.set_uniform("modelMat", UniformValue::Mat4(Mat4::IDENTITY))?;
            cmd.set_uniform("overrideWithColor", UniformValue::switch(true))?;
            for (color, line) in axis_lines(self.axis_length) {
                cmd.set_uniform("color", UniformValue::Vec3(color))?;
                cmd.draw_primitive(PrimitiveTopology::Lines, &line)?;
            }
        }

        cmd.unbind_shader()
    }

    fn draw_meshes(
        &self,
        scene: &SceneState,
        ctx: &PassContext,
        inputs: &PassInputs<'_>,
        cmd: &mut dyn CommandList,
    ) -> Result<()> {
        let resources = &self.resources;
        cmd.bind_shader(&resources.mesh_shader)?;

        cmd.set_uniform("displacementMapping", UniformValue::switch(false))?;
        cmd.set_uniform("depthTexDu", UniformValue::Float(1.0 / inputs.shadow_map.width() as f32))?;
        cmd.set_uniform("depthTexDv", UniformValue::Float(1.0 / inputs.shadow_map.height() as f32))?;

        cmd.set_texture("normalTex", NORMAL_TEX_UNIT)?;
        cmd.set_texture("displacementTex", DISPLACEMENT_TEX_UNIT)?;
        cmd.set_texture("colorTex", COLOR_TEX_UNIT)?;
        cmd.set_texture("cubeMap", CUBE_MAP_UNIT)?;
        cmd.set_texture("depthTex", DEPTH_TEX_UNIT)?;
        cmd.set_texture("spotTex", SPOT_TEX_UNIT)?;

        cmd.set_uniform("projMat", UniformValue::Mat4(ctx.projection))?;

        // lights are already in world space
        cmd.set_uniform("lightDir", UniformValue::Vec3Array(scene.light_directions()))?;
        cmd.set_uniform("lightDiffuse", UniformValue::Vec3Array(scene.light_diffuse_colors()))?;
        cmd.set_uniform("spotLightPos", UniformValue::Vec3(scene.spot_light().position))?;

        cmd.bind_texture(CUBE_MAP_UNIT, TextureSource::Image(resources.cube_map.as_ref()))?;
        cmd.bind_texture(DEPTH_TEX_UNIT, TextureSource::TargetDepth(inputs.shadow_map))?;
        cmd.bind_texture(SPOT_TEX_UNIT, TextureSource::Image(resources.spot_texture.as_ref()))?;

        cmd.set_uniform("eyePosWorld", UniformValue::Vec3(ctx.eye_position))?;
        cmd.set_uniform("lightViewProjMat", UniformValue::Mat4(ctx.light_view_projection))?;
        cmd.set_uniform("pointLightPos", UniformValue::Vec3Array(scene.point_light_positions()))?;

        if ctx.draw_water {
            if let Some(water) = scene.water_object() {
                let Some(reflection) = inputs.reflection else {
                    engine_bail!("viewer::ForwardDrawer",
                        "Water pass has no reflection texture bound");
                };

                cmd.set_uniform("cubeMapping", UniformValue::switch(false))?;
                cmd.set_uniform("clipping", UniformValue::switch(false))?;
                cmd.set_texture("reflTex", REFLECTION_TEX_UNIT)?;
                cmd.bind_texture(REFLECTION_TEX_UNIT, TextureSource::TargetColor(reflection))?;
                cmd.set_uniform("viewMat", UniformValue::Mat4(ctx.view))?;

                self.draw_object(water, ctx.view, scene.smooth_shading, cmd)?;
            } else {
                engine_trace!("viewer::ForwardDrawer", "No water object, skipping water draw");
            }
        }

        cmd.set_uniform("cubeMapping", UniformValue::switch(true))?;
        match ctx.clip_z {
            Some(clip_z) => {
                cmd.set_uniform("clipping", UniformValue::switch(true))?;
                cmd.set_uniform("clipZ", UniformValue::Float(clip_z))?;
            }
            None => cmd.set_uniform("clipping", UniformValue::switch(false))?,
        }

        for (_, object) in scene.non_water_objects() {
            self.draw_object(object, ctx.view, scene.smooth_shading, cmd)?;
        }

        cmd.unbind_shader()
    }

    fn draw_object(&self, object: &SceneObject, view: Mat4, smooth: bool, cmd: &mut dyn CommandList) -> Result<()> {
        let world = *object.world_matrix();
        cmd.set_uniform("modelViewMat", UniformValue::Mat4(view * world))?;
        cmd.set_uniform("modelMat", UniformValue::Mat4(world))?;
        cmd.set_uniform("modelMatInvTrans", UniformValue::Mat4(object.normal_matrix()))?;

        for mesh in object.meshes() {
            cmd.set_uniform("normalMapping", UniformValue::switch(mesh.has_normal_map()))?;
            cmd.set_uniform("colorMapping", UniformValue::switch(mesh.has_color_map()))?;
            mesh.draw(cmd, smooth)?;
        }
        Ok(())
    }

    fn draw_billboards(&self, scene: &SceneState, ctx: &PassContext, cmd: &mut dyn CommandList) -> Result<()> {
        let resources = &self.resources;
        let settings = &self.billboards;
        cmd.bind_shader(&resources.billboard_shader)?;

        cmd.set_blend(BlendMode::Alpha)?;
        cmd.set_depth_write(false)?;

        cmd.set_uniform("clipping", UniformValue::switch(ctx.is_clipped()))?;
        cmd.set_uniform("clipZ", UniformValue::Float(ctx.clip_plane_z()))?;
        cmd.set_uniform("alphaScale", UniformValue::Float(settings.orb_alpha_scale))?;
        cmd.set_texture("colorTex", REFLECTION_TEX_UNIT)?;
        cmd.bind_texture(REFLECTION_TEX_UNIT, TextureSource::Image(resources.orb_texture.as_ref()))?;
        cmd.set_uniform("projMat", UniformValue::Mat4(ctx.projection))?;

        let orb = orb_quad(settings.orb_half_size);
        for (index, light) in scene.point_lights().iter().enumerate() {
            let Some(world) = point_light_billboard(light.position, ctx.eye_position) else {
                engine_trace!("viewer::ForwardDrawer", "Point light {} at eye, orb skipped", index);
                continue;
            };
            cmd.set_uniform("modelViewMat", UniformValue::Mat4(ctx.view * world))?;
            cmd.set_uniform("modelMat", UniformValue::Mat4(world))?;
            cmd.draw_primitive(PrimitiveTopology::TriangleStrip, &orb)?;
        }

        cmd.set_uniform("alphaScale", UniformValue::Float(settings.beam_alpha_scale))?;
        cmd.bind_texture(REFLECTION_TEX_UNIT, TextureSource::Image(resources.beam_texture.as_ref()))?;

        let spot = scene.spot_light();
        match beam_frame(spot.position, spot.direction(), ctx.eye_position) {
            Some(world) => {
                cmd.set_uniform("modelViewMat", UniformValue::Mat4(ctx.view * world))?;
                cmd.set_uniform("modelMat", UniformValue::Mat4(world))?;
                cmd.draw_primitive(
                    PrimitiveTopology::TriangleStrip,
                    &beam_quad(settings.beam_half_width, settings.beam_length),
                )?;
            }
            None => engine_trace!("viewer::ForwardDrawer", "Eye on spot axis, beam skipped"),
        }

        cmd.set_depth_write(true)?;
        cmd.set_blend(BlendMode::Disabled)?;
        cmd.unbind_shader()
    }
}

impl Drawer for ForwardDrawer {
    fn draw_depth(&self, scene: &SceneState, light: &LightTransforms, cmd: &mut dyn CommandList) -> Result<()> {
        cmd.bind_shader(&self.resources.shadow_shader)?;

        let (factor, units) = self.polygon_offset;
        cmd.set_polygon_offset(factor, units)?;
        cmd.set_uniform("projMat", UniformValue::Mat4(light.projection))?;

        for (_, object) in scene.objects() {
            cmd.set_uniform("modelViewMat", UniformValue::Mat4(light.view * *object.world_matrix()))?;
            for mesh in object.meshes() {
                mesh.draw(cmd, scene.smooth_shading)?;
            }
        }

        cmd.set_polygon_offset(0.0, 0.0)?;
        cmd.unbind_shader()
    }

    fn draw_scene(
        &self,
        scene: &SceneState,
        ctx: &PassContext,
        inputs: &PassInputs<'_>,
        cmd: &mut dyn CommandList,
    ) -> Result<()> {
        self.draw_environment(ctx, cmd)?;
        self.draw_meshes(scene, ctx, inputs, cmd)?;
        self.draw_billboards(scene, ctx, cmd)
    }
}

#[cfg(test)]
#[path = "drawer_tests.rs"]
mod tests;
