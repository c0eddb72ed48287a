/// Central render target manager for the viewer.
///
/// Manages named render targets. Off-screen targets (shadow map, reflection)
/// are allocated through the graphics device; the screen target is owned by
/// the windowing backend and registered as-is.

use std::sync::Arc;
use rustc_hash::FxHashMap;
use crate::config::ViewerConfig;
use crate::error::{Error, Result};
use crate::graphics_device::{GraphicsDevice, RenderTarget, RenderTargetDesc};
use crate::{engine_bail, engine_error, engine_info};
use super::frame_targets::{FrameTargets, REFLECTION_TARGET, SHADOW_TARGET};

/// Target manager
///
/// Stores named render targets. Names are unique.
pub struct TargetManager {
    render_targets: FxHashMap<String, Arc<dyn RenderTarget>>,
}

impl TargetManager {
    /// Create a new empty target manager
    pub fn new() -> Self {
        Self {
            render_targets: FxHashMap::default(),
        }
    }

    /// Allocate a named off-screen render target
    ///
    /// # Errors
    ///
    /// Returns an error if a render target with the same name already exists,
    /// or if the device cannot complete the target.
    pub fn create_render_target(
        &mut self,
        device: &mut dyn GraphicsDevice,
        desc: &RenderTargetDesc,
    ) -> Result<Arc<dyn RenderTarget>> {
        if self.render_targets.contains_key(&desc.name) {
            engine_bail!("viewer::TargetManager",
                "RenderTarget '{}' already exists", desc.name);
        }

        let target = device.create_render_target(desc).map_err(|e| {
            engine_error!("viewer::TargetManager", "{}", e);
            e
        })?;

        engine_info!("viewer::TargetManager", "Created render target '{}' ({}x{}, {})",
            desc.name, desc.width, desc.height, target.clear_flags().label());

        self.render_targets.insert(desc.name.clone(), Arc::clone(&target));
        Ok(target)
    }

    /// Register an externally owned target (the screen)
    ///
    /// # Errors
    ///
    /// Returns an error if a render target with the same name already exists.
    pub fn register_render_target(&mut self, target: Arc<dyn RenderTarget>) -> Result<()> {
        let name = target.name().to_string();
        if self.render_targets.contains_key(&name) {
            engine_bail!("viewer::TargetManager",
                "RenderTarget '{}' already exists", name);
        }

        engine_info!("viewer::TargetManager", "Registered render target '{}' ({}x{})",
            name, target.width(), target.height());
        self.render_targets.insert(name, target);
        Ok(())
    }

    /// Swap in a new target under the same name (screen resize)
    ///
    /// Returns the previous target, or None if the name was free.
    pub fn replace_render_target(&mut self, target: Arc<dyn RenderTarget>) -> Option<Arc<dyn RenderTarget>> {
        self.render_targets.insert(target.name().to_string(), target)
    }

    /// Allocate the shadow and reflection targets and bundle them with the screen
    ///
    /// # Errors
    ///
    /// `InitializationFailed` if the configured shadow map or reflection size
    /// is zero. Otherwise fails if any target already exists, cannot be
    /// completed, or lacks the attachments its pass needs.
    pub fn create_frame_targets(
        &mut self,
        device: &mut dyn GraphicsDevice,
        config: &ViewerConfig,
        screen: Arc<dyn RenderTarget>,
    ) -> Result<FrameTargets> {
        let sizes = [
            (SHADOW_TARGET, config.shadow_map_width, config.shadow_map_height),
            (REFLECTION_TARGET, config.reflection_width, config.reflection_height),
        ];
        if let Some((name, width, height)) = sizes.iter().find(|(_, w, h)| *w == 0 || *h == 0) {
            let message = format!("render target '{}' configured as {}x{}", name, width, height);
            engine_error!("viewer::TargetManager", "{}", message);
            return Err(Error::InitializationFailed(message));
        }

        let shadow = self.create_render_target(
            device,
            &RenderTargetDesc::depth_only(SHADOW_TARGET, config.shadow_map_width, config.shadow_map_height),
        )?;
        let reflection = self.create_render_target(
            device,
            &RenderTargetDesc::color_depth(REFLECTION_TARGET, config.reflection_width, config.reflection_height),
        )?;
        self.register_render_target(Arc::clone(&screen))?;

        FrameTargets::new(shadow, reflection, screen)
    }

    /// Get a render target by name
    pub fn render_target(&self, name: &str) -> Option<&Arc<dyn RenderTarget>> {
        self.render_targets.get(name)
    }

    /// Remove a render target by name
    ///
    /// Returns the removed render target, or None if not found.
    pub fn remove_render_target(&mut self, name: &str) -> Option<Arc<dyn RenderTarget>> {
        self.render_targets.remove(name)
    }

    /// Get the number of render targets
    pub fn render_target_count(&self) -> usize {
        self.render_targets.len()
    }

    /// Get all render target names
    pub fn render_target_names(&self) -> Vec<&str> {
        self.render_targets.keys().map(|k| k.as_str()).collect()
    }

    /// Remove all render targets
    pub fn clear(&mut self) {
        self.render_targets.clear();
    }
}

impl Default for TargetManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "target_manager_tests.rs"]
mod tests;
