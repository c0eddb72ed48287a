/// Mesh trait - drawable mesh part provided by the mesh loader
///
/// The viewer only supplies matrices and per-mesh flags as uniforms before
/// calling `draw()`; vertex data and its upload stay with the provider.

use crate::error::Result;
use crate::graphics_device::CommandList;

/// Drawable mesh part
pub trait Mesh: Send + Sync {
    /// Issue the mesh's draw calls with smooth or flat shading
    fn draw(&self, cmd: &mut dyn CommandList, smooth: bool) -> Result<()>;

    /// Whether the mesh carries a normal map
    fn has_normal_map(&self) -> bool;

    /// Whether the mesh carries a color map
    fn has_color_map(&self) -> bool;
}
