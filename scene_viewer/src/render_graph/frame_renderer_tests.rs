/// Tests for FrameRenderer
///
/// Pass sequencing is asserted against the MockCommandList log, first with a
/// drawer that only leaves markers, then with the real ForwardDrawer.

use std::sync::{Arc, Mutex};
use glam::{Mat4, Vec3};
use crate::camera::{LightTransforms, PassContext};
use crate::config::ViewerConfig;
use crate::error::{Error, Result};
use crate::graphics_device::mock_graphics_device::*;
use crate::graphics_device::{Attachments, CommandList, TextureType};
use crate::scene::{DrawResources, Drawer, ForwardDrawer, PassInputs, SceneObject, SceneState};
use crate::target::FrameTargets;
use super::*;

/// Drawer that records what each pass was handed
#[derive(Default)]
struct MarkerDrawer {
    contexts: Arc<Mutex<Vec<PassContext>>>,
}

impl Drawer for MarkerDrawer {
    fn draw_depth(&self, _scene: &SceneState, _light: &LightTransforms, cmd: &mut dyn CommandList) -> Result<()> {
        cmd.debug_marker("depth")
    }

    fn draw_scene(
        &self,
        _scene: &SceneState,
        ctx: &PassContext,
        inputs: &PassInputs<'_>,
        cmd: &mut dyn CommandList,
    ) -> Result<()> {
        self.contexts.lock().unwrap().push(*ctx);
        let reflection = inputs.reflection.map(|t| t.name().to_string()).unwrap_or_default();
        cmd.debug_marker(&format!("scene:{}:{}", inputs.shadow_map.name(), reflection))
    }
}

fn create_test_targets(width: u32, height: u32) -> FrameTargets {
    FrameTargets::new(
        Arc::new(MockRenderTarget::new("shadow", 512, 512, Attachments::DEPTH)),
        Arc::new(MockRenderTarget::new("reflection", 256, 256, Attachments::COLOR | Attachments::DEPTH)),
        Arc::new(MockRenderTarget::screen(width, height)),
    )
    .unwrap()
}

fn create_test_scene() -> SceneState {
    let mut scene = SceneState::new(&ViewerConfig::default());
    scene.add_object(SceneObject::with_world_matrix(
        "rock",
        vec![MockMesh::shared("rock", false, false)],
        Vec3::ZERO,
        Mat4::from_translation(Vec3::new(0.0, 0.0, 12.0)),
    ));
    scene.add_water(SceneObject::with_world_matrix(
        "water",
        vec![MockMesh::shared("water", true, false)],
        Vec3::ZERO,
        Mat4::from_translation(Vec3::new(0.0, 0.0, 10.0)),
    ));
    scene
}

fn create_marker_renderer() -> (FrameRenderer, Arc<Mutex<Vec<PassContext>>>) {
    let drawer = MarkerDrawer::default();
    let contexts = Arc::clone(&drawer.contexts);
    let renderer = FrameRenderer::new(Box::new(drawer), &ViewerConfig::default()).unwrap();
    (renderer, contexts)
}

fn create_forward_renderer() -> FrameRenderer {
    let config = ViewerConfig::default();
    let resources = DrawResources {
        mesh_shader: MockShader::shared("phong"),
        shadow_shader: MockShader::shared("shadow"),
        environment_shader: MockShader::shared("environment"),
        billboard_shader: MockShader::shared("billboard"),
        cube_map: MockTexture::shared("sky", TextureType::CubeMap),
        spot_texture: MockTexture::shared("spot", TextureType::Tex2D),
        orb_texture: MockTexture::shared("orb", TextureType::Tex2D),
        beam_texture: MockTexture::shared("beam", TextureType::Tex2D),
    };
    FrameRenderer::new(Box::new(ForwardDrawer::new(resources, &config)), &config).unwrap()
}

// ============================================================================
// Tests: Pass Sequencing
// ============================================================================

#[test]
fn test_three_binds_in_order() {
    let (renderer, _) = create_marker_renderer();
    let mut cmd = MockCommandList::new();

    renderer.render_frame(&create_test_scene(), &create_test_targets(640, 480), &mut cmd).unwrap();

    assert_eq!(
        cmd.commands_with_prefix("bind_render_target:"),
        vec!["bind_render_target:shadow", "bind_render_target:reflection", "bind_render_target:screen"]
    );
}

#[test]
fn test_each_bind_sets_viewport_and_clears() {
    let (renderer, _) = create_marker_renderer();
    let mut cmd = MockCommandList::new();

    renderer.render_frame(&create_test_scene(), &create_test_targets(640, 480), &mut cmd).unwrap();

    let expected = [
        vec!["bind_render_target:shadow", "set_viewport:512x512", "clear:DEPTH", "marker:depth"],
        vec!["bind_render_target:reflection", "set_viewport:256x256", "clear:COLOR|DEPTH", "marker:scene:shadow:"],
        vec!["bind_render_target:screen", "set_viewport:640x480", "clear:COLOR|DEPTH", "marker:scene:shadow:reflection"],
    ];
    let mut start = 0;
    for block in expected.iter() {
        let at = start + cmd.commands[start..].iter().position(|c| c == block[0]).unwrap();
        let recorded: Vec<&str> = cmd.commands[at..at + block.len()].iter().map(|c| c.as_str()).collect();
        assert_eq!(&recorded, block);
        start = at + block.len();
    }
}

#[test]
fn test_pass_contexts() {
    let (renderer, contexts) = create_marker_renderer();
    let mut scene = create_test_scene();
    scene.draw_axes = true;
    scene.camera_mut().set_position(Vec3::new(0.0, -20.0, 50.0));
    let mut cmd = MockCommandList::new();

    renderer.render_frame(&scene, &create_test_targets(640, 480), &mut cmd).unwrap();

    let contexts = contexts.lock().unwrap();
    assert_eq!(contexts.len(), 2);

    let reflection = contexts[0];
    assert!(!reflection.draw_water);
    assert!(!reflection.draw_axes);
    assert_eq!(reflection.clip_z, Some(10.0));
    assert!((reflection.eye_position.z - (-30.0)).abs() < 1e-4);

    let composite = contexts[1];
    assert!(composite.draw_water);
    assert!(composite.draw_axes);
    assert!(!composite.is_clipped());
    assert_eq!(composite.eye_position, Vec3::new(0.0, -20.0, 50.0));
    assert_eq!(composite.light_view_projection, reflection.light_view_projection);
}

#[test]
fn test_light_transforms_follow_spot_light() {
    let (renderer, _) = create_marker_renderer();
    let mut scene = create_test_scene();
    let before = renderer.light_transforms(&scene);

    scene.spot_light_mut().position = Vec3::new(0.0, 0.0, 100.0);
    let after = renderer.light_transforms(&scene);

    assert_ne!(before.view, after.view);
    let origin = after.view.transform_point3(Vec3::new(0.0, 0.0, 100.0));
    assert!(origin.abs_diff_eq(Vec3::ZERO, 1e-3));
}

#[test]
fn test_no_water_still_runs_three_passes() {
    let (renderer, contexts) = create_marker_renderer();
    let mut scene = SceneState::new(&ViewerConfig::default());
    scene.add_object(SceneObject::new("rock", Vec::new(), Vec3::ZERO));
    let mut cmd = MockCommandList::new();

    renderer.render_frame(&scene, &create_test_targets(640, 480), &mut cmd).unwrap();

    assert_eq!(cmd.commands_with_prefix("bind_render_target:").len(), 3);
    assert_eq!(contexts.lock().unwrap()[0].clip_z, Some(0.0));
}

// ============================================================================
// Tests: Failures
// ============================================================================

#[test]
fn test_bind_failure_aborts_frame() {
    let (renderer, contexts) = create_marker_renderer();
    let mut cmd = MockCommandList::new();
    cmd.fail_on_bind = Some("reflection".to_string());

    let result = renderer.render_frame(&create_test_scene(), &create_test_targets(640, 480), &mut cmd);

    assert!(matches!(result, Err(Error::BackendError(_))));
    assert!(cmd.position("marker:depth").is_some());
    assert!(contexts.lock().unwrap().is_empty());
    assert!(cmd.position("bind_render_target:screen").is_none());
}

#[test]
fn test_undeclared_input_rejected() {
    // Composite without the reflection edge
    let mut graph = RenderGraph::new();
    let shadow = graph.add_target("shadow").unwrap();
    let screen = graph.add_target("screen").unwrap();
    graph.add_pass(PassKind::Shadow, &[], shadow).unwrap();
    graph.add_pass(PassKind::Composite, &[shadow], screen).unwrap();
    let renderer = FrameRenderer::with_graph(graph, Box::new(MarkerDrawer::default()), &ViewerConfig::default());
    let mut cmd = MockCommandList::new();

    let result = renderer.render_frame(&create_test_scene(), &create_test_targets(640, 480), &mut cmd);
    assert!(result.is_err());
}

#[test]
fn test_unknown_output_rejected() {
    let mut graph = RenderGraph::new();
    let bloom = graph.add_target("bloom").unwrap();
    graph.add_pass(PassKind::Shadow, &[], bloom).unwrap();
    let renderer = FrameRenderer::with_graph(graph, Box::new(MarkerDrawer::default()), &ViewerConfig::default());
    let mut cmd = MockCommandList::new();

    let result = renderer.render_frame(&create_test_scene(), &create_test_targets(640, 480), &mut cmd);
    assert!(result.is_err());
    assert!(cmd.commands.is_empty());
}

// ============================================================================
// Tests: With ForwardDrawer
// ============================================================================

#[test]
fn test_forward_frame_water_only_in_composite() {
    let renderer = create_forward_renderer();
    let mut cmd = MockCommandList::new();

    renderer.render_frame(&create_test_scene(), &create_test_targets(640, 480), &mut cmd).unwrap();

    let screen = cmd.position("bind_render_target:screen").unwrap();
    let water: Vec<usize> = cmd
        .commands
        .iter()
        .enumerate()
        .filter(|(_, c)| c.starts_with("marker:mesh:water"))
        .map(|(i, _)| i)
        .collect();
    // Once in the shadow pass, once in the composite
    assert_eq!(water.len(), 2);
    assert!(water[0] < cmd.position("bind_render_target:reflection").unwrap());
    assert!(water[1] > screen);

    let rock = cmd.commands_with_prefix("marker:mesh:rock");
    assert_eq!(rock.len(), 3);
}

#[test]
fn test_forward_frame_leaves_default_state() {
    let renderer = create_forward_renderer();
    let mut cmd = MockCommandList::new();

    renderer.render_frame(&create_test_scene(), &create_test_targets(640, 480), &mut cmd).unwrap();

    assert!(cmd.depth_write);
    assert_eq!(cmd.blend, crate::graphics_device::BlendMode::Disabled);
    assert_eq!(cmd.polygon_offset, (0.0, 0.0));
    assert_eq!(cmd.bound_target.as_deref(), Some("screen"));
}

#[test]
fn test_forward_frame_reflection_samples_shadow_only() {
    let renderer = create_forward_renderer();
    let mut cmd = MockCommandList::new();

    renderer.render_frame(&create_test_scene(), &create_test_targets(640, 480), &mut cmd).unwrap();

    let reflection = cmd.position("bind_render_target:reflection").unwrap();
    let screen = cmd.position("bind_render_target:screen").unwrap();
    let reflection_binds: Vec<&String> = cmd.commands[reflection..screen]
        .iter()
        .filter(|c| c.starts_with("bind_texture:4:color:reflection"))
        .collect();
    assert!(reflection_binds.is_empty());
    assert!(cmd.commands[screen..].iter().any(|c| c == "bind_texture:4:color:reflection"));
    assert!(cmd.commands[reflection..screen].iter().any(|c| c == "bind_texture:5:depth:shadow"));
}
