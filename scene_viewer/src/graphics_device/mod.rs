/// Graphics device module - capability traits the viewer renders through

pub mod graphics_device;
pub mod command_list;
pub mod render_target;
pub mod shader;
pub mod texture;
pub mod mesh;

pub use graphics_device::*;
pub use command_list::*;
pub use render_target::*;
pub use shader::*;
pub use texture::*;
pub use mesh::*;

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_device;
