//! Render graph module
//!
//! A render graph is a directed acyclic graph (DAG) describing how a frame
//! is rendered: which passes execute, which targets they read and write, and
//! in what order. The frame renderer walks it once per frame.

mod frame_renderer;
mod render_graph;
mod render_pass;

pub use frame_renderer::FrameRenderer;
pub use render_graph::RenderGraph;
pub use render_pass::{PassKind, RenderPass};
