/// Render graph - a DAG describing how a frame is rendered.
///
/// Passes are stored in execution order. Edges are the targets that connect
/// them: a target has exactly one writer, and every pass that samples a
/// target must come after its writer. A pass never samples its own output.

use crate::error::Result;
use crate::engine_bail;
use crate::target::{REFLECTION_TARGET, SCREEN_TARGET, SHADOW_TARGET};
use super::render_pass::{PassKind, RenderPass};

#[derive(Debug, Clone, Default)]
pub struct RenderGraph {
    /// Target names, indexed by target id
    targets: Vec<String>,
    /// Passes in execution order
    passes: Vec<RenderPass>,
}

impl RenderGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// The viewer's frame: shadow map, then reflection, then the screen
    ///
    /// The reflection pass samples the shadow map; the composite pass
    /// samples both.
    pub fn shadow_reflection_composite() -> Result<Self> {
        let mut graph = Self::new();
        let shadow = graph.add_target(SHADOW_TARGET)?;
        let reflection = graph.add_target(REFLECTION_TARGET)?;
        let screen = graph.add_target(SCREEN_TARGET)?;

        graph.add_pass(PassKind::Shadow, &[], shadow)?;
        graph.add_pass(PassKind::Reflection, &[shadow], reflection)?;
        graph.add_pass(PassKind::Composite, &[shadow, reflection], screen)?;
        Ok(graph)
    }

    /// Declare a target and return its id
    ///
    /// # Errors
    ///
    /// Returns an error if a target with the same name already exists.
    pub fn add_target(&mut self, name: &str) -> Result<usize> {
        if self.target_id(name).is_some() {
            engine_bail!("viewer::RenderGraph", "Target '{}' already declared", name);
        }
        self.targets.push(name.to_string());
        Ok(self.targets.len() - 1)
    }

    /// Append a pass after every pass added so far
    ///
    /// # Errors
    ///
    /// Fails on unknown target ids, a second writer for `output`, an input
    /// that no earlier pass writes, or a pass reading its own output.
    pub fn add_pass(&mut self, kind: PassKind, inputs: &[usize], output: usize) -> Result<usize> {
        if output >= self.targets.len() {
            engine_bail!("viewer::RenderGraph", "Pass '{}' writes unknown target {}", kind, output);
        }
        if let Some(writer) = self.writer_of(output) {
            engine_bail!("viewer::RenderGraph",
                "Target '{}' already written by pass '{}'", self.targets[output], writer.kind());
        }
        for &input in inputs {
            if input >= self.targets.len() {
                engine_bail!("viewer::RenderGraph", "Pass '{}' reads unknown target {}", kind, input);
            }
            if input == output {
                engine_bail!("viewer::RenderGraph",
                    "Pass '{}' reads its own output '{}'", kind, self.targets[input]);
            }
            if self.writer_of(input).is_none() {
                engine_bail!("viewer::RenderGraph",
                    "Pass '{}' reads '{}' before any pass writes it", kind, self.targets[input]);
            }
        }

        self.passes.push(RenderPass::new(kind, inputs, output));
        Ok(self.passes.len() - 1)
    }

    /// Passes in execution order
    pub fn passes(&self) -> &[RenderPass] {
        &self.passes
    }

    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Get a target name by id
    pub fn target_name(&self, id: usize) -> Option<&str> {
        self.targets.get(id).map(|name| name.as_str())
    }

    /// Get a target id by name
    pub fn target_id(&self, name: &str) -> Option<usize> {
        self.targets.iter().position(|target| target == name)
    }

    /// The pass that writes `target_id`, if any
    pub fn writer_of(&self, target_id: usize) -> Option<&RenderPass> {
        self.passes.iter().find(|pass| pass.output() == target_id)
    }
}

#[cfg(test)]
#[path = "render_graph_tests.rs"]
mod tests;
