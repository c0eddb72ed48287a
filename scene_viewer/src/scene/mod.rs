//! Scene module
//!
//! Scene objects, lights, the scene state a frame is rendered from, and the
//! drawing strategy that turns it into commands.

mod billboard;
mod drawer;
mod light;
mod scene_object;
mod scene_state;

pub use billboard::{axis_lines, beam_frame, beam_quad, orb_quad, point_light_billboard, skybox_strips};
pub use drawer::{
    DrawResources, Drawer, ForwardDrawer, PassInputs,
    NORMAL_TEX_UNIT, DISPLACEMENT_TEX_UNIT, COLOR_TEX_UNIT, CUBE_MAP_UNIT,
    REFLECTION_TEX_UNIT, DEPTH_TEX_UNIT, SPOT_TEX_UNIT,
};
pub use light::{DirectionalLight, LightAttribute, PointLight, SpotLight, DEFAULT_SPOT_POSITION};
pub use scene_object::SceneObject;
pub use scene_state::{LightSlot, ObjectKey, SceneState, DIRECTIONAL_LIGHT_COUNT, SPOT_LIGHT_INDEX};
