/// GraphicsDevice trait - factory for off-screen render targets

use std::sync::Arc;
use crate::error::Result;
use crate::graphics_device::{RenderTarget, RenderTargetDesc};

/// Graphics device
///
/// Implemented by backends. Target creation happens once at startup; a
/// target the backend cannot complete is reported as
/// `Error::IncompleteRenderTarget` and aborts initialization.
pub trait GraphicsDevice: Send + Sync {
    /// Create an off-screen render target
    fn create_render_target(&mut self, desc: &RenderTargetDesc) -> Result<Arc<dyn RenderTarget>>;
}
