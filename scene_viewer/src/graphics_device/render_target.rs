/// RenderTarget trait - a destination a render pass draws into
///
/// Off-screen targets (shadow depth, reflection color) are created through
/// `GraphicsDevice::create_render_target()`. The screen target is owned by the
/// windowing backend and handed to the viewer as the same trait object.

use bitflags::bitflags;
use crate::graphics_device::Viewport;

bitflags! {
    /// Attachments carried by a render target
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Attachments: u32 {
        /// Color attachment (sampled as a 2D texture)
        const COLOR = 1 << 0;
        /// Depth attachment (sampled as a depth texture when off-screen)
        const DEPTH = 1 << 1;
    }
}

bitflags! {
    /// Buffers cleared at the start of a pass
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClearFlags: u32 {
        /// Clear the color buffer
        const COLOR = 1 << 0;
        /// Clear the depth buffer
        const DEPTH = 1 << 1;
    }
}

impl ClearFlags {
    /// Clear mask matching a set of attachments
    pub fn for_attachments(attachments: Attachments) -> Self {
        let mut flags = ClearFlags::empty();
        if attachments.contains(Attachments::COLOR) {
            flags |= ClearFlags::COLOR;
        }
        if attachments.contains(Attachments::DEPTH) {
            flags |= ClearFlags::DEPTH;
        }
        flags
    }

    /// `COLOR|DEPTH` style label, used by logs and recording devices
    pub fn label(&self) -> String {
        let names: Vec<&str> = self.iter_names().map(|(name, _)| name).collect();
        if names.is_empty() {
            "NONE".to_string()
        } else {
            names.join("|")
        }
    }
}

/// Render target trait
///
/// A surface with a fixed pixel size. Exactly one target is bound at a time.
pub trait RenderTarget: Send + Sync {
    /// Debug name ("shadow", "reflection", "screen")
    fn name(&self) -> &str;

    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Attachments present on this target
    fn attachments(&self) -> Attachments;

    /// Buffers cleared when a pass begins on this target
    fn clear_flags(&self) -> ClearFlags {
        ClearFlags::for_attachments(self.attachments())
    }

    /// Full-size viewport for this target
    fn viewport(&self) -> Viewport {
        Viewport::from_size(self.width(), self.height())
    }
}

/// Descriptor for creating an off-screen render target
#[derive(Debug, Clone, PartialEq)]
pub struct RenderTargetDesc {
    /// Debug name, unique within a `TargetManager`
    pub name: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Attachments to allocate
    pub attachments: Attachments,
}

impl RenderTargetDesc {
    /// Depth-only target (shadow map)
    pub fn depth_only(name: &str, width: u32, height: u32) -> Self {
        Self {
            name: name.to_string(),
            width,
            height,
            attachments: Attachments::DEPTH,
        }
    }

    /// Color target with a depth buffer (reflection)
    pub fn color_depth(name: &str, width: u32, height: u32) -> Self {
        Self {
            name: name.to_string(),
            width,
            height,
            attachments: Attachments::COLOR | Attachments::DEPTH,
        }
    }
}
