/// Frame targets - the three surfaces one frame renders into.
///
/// Pass order is fixed: the shadow map is written first, the reflection
/// second, and the screen last while sampling the other two.

use std::fmt;
use std::sync::Arc;
use crate::error::{Error, Result};
use crate::engine_error;
use crate::graphics_device::{Attachments, RenderTarget};

pub const SHADOW_TARGET: &str = "shadow";
pub const REFLECTION_TARGET: &str = "reflection";
pub const SCREEN_TARGET: &str = "screen";

#[derive(Clone)]
pub struct FrameTargets {
    shadow: Arc<dyn RenderTarget>,
    reflection: Arc<dyn RenderTarget>,
    screen: Arc<dyn RenderTarget>,
}

impl FrameTargets {
    /// Bundle the three targets, checking each has what its pass needs
    ///
    /// # Errors
    ///
    /// `InvalidResource` if the shadow target has no depth attachment, or the
    /// reflection or screen target has no color attachment.
    pub fn new(
        shadow: Arc<dyn RenderTarget>,
        reflection: Arc<dyn RenderTarget>,
        screen: Arc<dyn RenderTarget>,
    ) -> Result<Self> {
        require(shadow.as_ref(), Attachments::DEPTH)?;
        require(reflection.as_ref(), Attachments::COLOR)?;
        require(screen.as_ref(), Attachments::COLOR)?;
        Ok(Self { shadow, reflection, screen })
    }

    pub fn shadow(&self) -> &dyn RenderTarget {
        self.shadow.as_ref()
    }

    pub fn reflection(&self) -> &dyn RenderTarget {
        self.reflection.as_ref()
    }

    pub fn screen(&self) -> &dyn RenderTarget {
        self.screen.as_ref()
    }

    /// Look up one of the three targets by its registry name
    pub fn target(&self, name: &str) -> Option<&dyn RenderTarget> {
        match name {
            SHADOW_TARGET => Some(self.shadow()),
            REFLECTION_TARGET => Some(self.reflection()),
            SCREEN_TARGET => Some(self.screen()),
            _ => None,
        }
    }

    /// Swap the screen target after a window resize
    pub fn set_screen(&mut self, screen: Arc<dyn RenderTarget>) -> Result<()> {
        require(screen.as_ref(), Attachments::COLOR)?;
        self.screen = screen;
        Ok(())
    }
}

impl fmt::Debug for FrameTargets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameTargets")
            .field("shadow", &self.shadow.name())
            .field("reflection", &self.reflection.name())
            .field("screen", &self.screen.name())
            .finish()
    }
}

fn require(target: &dyn RenderTarget, attachments: Attachments) -> Result<()> {
    if target.attachments().contains(attachments) {
        return Ok(());
    }
    let message = format!(
        "Render target '{}' is missing attachments {:?}",
        target.name(),
        attachments
    );
    engine_error!("viewer::FrameTargets", "{}", message);
    Err(Error::InvalidResource(message))
}

#[cfg(test)]
#[path = "frame_targets_tests.rs"]
mod tests;
