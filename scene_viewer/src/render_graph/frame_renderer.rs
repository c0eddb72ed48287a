/// Frame renderer - runs the render graph once per frame.
///
/// Each pass binds its output target, sets the viewport to the target's
/// size, clears what the target holds and hands the draw routine the
/// matrices for that pass. Passes run strictly in graph order on the
/// calling thread; the first failing command aborts the frame.

use crate::camera::{light_transforms, Lens, LightTransforms, PassContext};
use crate::config::ViewerConfig;
use crate::error::Result;
use crate::graphics_device::{CommandList, RenderTarget};
use crate::scene::{Drawer, PassInputs, SceneState};
use crate::target::{FrameTargets, REFLECTION_TARGET, SHADOW_TARGET};
use crate::{engine_bail, engine_trace};
use super::render_graph::RenderGraph;
use super::render_pass::{PassKind, RenderPass};

pub struct FrameRenderer {
    graph: RenderGraph,
    drawer: Box<dyn Drawer>,
    light_lens: Lens,
    clear_color: [f32; 4],
}

impl FrameRenderer {
    /// Build the shadow, reflection and composite sequence
    pub fn new(drawer: Box<dyn Drawer>, config: &ViewerConfig) -> Result<Self> {
        Ok(Self::with_graph(RenderGraph::shadow_reflection_composite()?, drawer, config))
    }

    pub fn with_graph(graph: RenderGraph, drawer: Box<dyn Drawer>, config: &ViewerConfig) -> Self {
        Self {
            graph,
            drawer,
            light_lens: config.light_lens,
            clear_color: config.clear_color,
        }
    }

    pub fn graph(&self) -> &RenderGraph {
        &self.graph
    }

    pub fn drawer(&self) -> &dyn Drawer {
        self.drawer.as_ref()
    }

    /// Light-space transforms of the shadow-casting spot light
    pub fn light_transforms(&self, scene: &SceneState) -> LightTransforms {
        let spot = scene.spot_light();
        light_transforms(spot.position, spot.direction(), self.light_lens)
    }

    /// Record one full frame
    pub fn render_frame(
        &self,
        scene: &SceneState,
        targets: &FrameTargets,
        cmd: &mut dyn CommandList,
    ) -> Result<()> {
        let light = self.light_transforms(scene);

        for pass in self.graph.passes() {
            let target = self.output_target(pass, targets)?;
            cmd.bind_render_target(target)?;
            cmd.set_viewport(target.viewport())?;
            cmd.clear(target.clear_flags(), self.clear_color)?;

            engine_trace!("viewer::FrameRenderer", "{} pass -> '{}' ({}x{})",
                pass.kind(), target.name(), target.width(), target.height());

            match pass.kind() {
                PassKind::Shadow => {
                    self.drawer.draw_depth(scene, &light, cmd)?;
                }
                PassKind::Reflection => {
                    let ctx = PassContext::reflection(scene.camera(), &light, scene.water_height());
                    let inputs = PassInputs {
                        shadow_map: self.input_target(pass, targets, SHADOW_TARGET)?,
                        reflection: None,
                    };
                    self.drawer.draw_scene(scene, &ctx, &inputs, cmd)?;
                }
                PassKind::Composite => {
                    let ctx = PassContext::composite(scene.camera(), &light, scene.draw_axes);
                    let inputs = PassInputs {
                        shadow_map: self.input_target(pass, targets, SHADOW_TARGET)?,
                        reflection: Some(self.input_target(pass, targets, REFLECTION_TARGET)?),
                    };
                    self.drawer.draw_scene(scene, &ctx, &inputs, cmd)?;
                }
            }
        }

        Ok(())
    }

    fn output_target<'a>(&self, pass: &RenderPass, targets: &'a FrameTargets) -> Result<&'a dyn RenderTarget> {
        let name = self.graph.target_name(pass.output()).unwrap_or_default();
        match targets.target(name) {
            Some(target) => Ok(target),
            None => engine_bail!("viewer::FrameRenderer",
                "Pass '{}' writes '{}', which is not a frame target", pass.kind(), name),
        }
    }

    /// A target the pass samples; it must be declared as an input
    fn input_target<'a>(
        &self,
        pass: &RenderPass,
        targets: &'a FrameTargets,
        name: &str,
    ) -> Result<&'a dyn RenderTarget> {
        let declared = self.graph.target_id(name).is_some_and(|id| pass.reads(id));
        match targets.target(name) {
            Some(target) if declared => Ok(target),
            _ => engine_bail!("viewer::FrameRenderer",
                "Pass '{}' samples '{}' without declaring it as an input", pass.kind(), name),
        }
    }
}

#[cfg(test)]
#[path = "frame_renderer_tests.rs"]
mod tests;
