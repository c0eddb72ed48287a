/*!
# Scene Viewer

Core of a real-time 3D scene viewer: a free-flying camera, the transforms
derived from it, and a three-pass frame (shadow map, planar reflection,
composite) recorded through backend-agnostic capability traits.

The crate never talks to a graphics API directly. Backends implement
`GraphicsDevice`, `CommandList`, `RenderTarget`, `Shader`, `Texture` and
`Mesh`; the viewer issues binds, clears, uniforms and draws through them.

## Architecture

- **Camera**: orthonormal basis, movement and pitch-clamped rotation
- **Derivation**: light camera and mirrored view from the primary camera
- **SceneState**: objects, water designation, lights, display flags
- **FrameRenderer**: walks the shadow → reflection → composite render graph
- **ForwardDrawer**: environment, meshes and billboards for one pass
- **ViewerControls**: keyboard and mouse input applied between frames
*/

// Internal modules
mod error;
mod engine;
pub mod log;
mod camera;
mod config;
mod controls;
mod graphics_device;
mod render_graph;
mod scene;
mod target;

// Main viewer namespace module
pub mod viewer {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging front-end
    pub use crate::engine::Engine;

    // Configuration
    pub use crate::config::{BillboardSettings, ControlSettings, ViewerConfig};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{format_entry, DefaultLogger, LogEntry, LogSeverity, Logger};
    }

    // Camera and derived transforms
    pub mod camera {
        pub use crate::camera::*;
    }

    // Capability traits, render targets and the frame renderer
    pub mod render {
        pub use crate::graphics_device::*;
        pub use crate::render_graph::*;
        pub use crate::target::*;
    }

    // Scene state and draw routine
    pub mod scene {
        pub use crate::scene::*;
    }

    // Input handling
    pub mod controls {
        pub use crate::controls::*;
    }
}

// Re-export math library at crate root
pub use glam;
