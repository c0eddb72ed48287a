/// Render pass node in a render graph.
///
/// High-level description of one rendering step of a frame. Each pass
/// declares which targets it reads from (inputs) and the single target it
/// writes to (output), using target indices within the parent `RenderGraph`.

use std::fmt;

/// What a pass draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassKind {
    /// Depth of every object seen from the spot light
    Shadow,
    /// Scene mirrored about the water plane, water itself excluded
    Reflection,
    /// Final image through the primary camera
    Composite,
}

impl PassKind {
    pub fn name(&self) -> &'static str {
        match self {
            PassKind::Shadow => "shadow",
            PassKind::Reflection => "reflection",
            PassKind::Composite => "composite",
        }
    }
}

impl fmt::Display for PassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub struct RenderPass {
    kind: PassKind,
    /// Target indices this pass reads from
    inputs: Vec<usize>,
    /// Target index this pass writes to
    output: usize,
}

impl RenderPass {
    pub(crate) fn new(kind: PassKind, inputs: &[usize], output: usize) -> Self {
        Self {
            kind,
            inputs: inputs.to_vec(),
            output,
        }
    }

    pub fn kind(&self) -> PassKind {
        self.kind
    }

    /// Get the target indices this pass reads from
    pub fn inputs(&self) -> &[usize] {
        &self.inputs
    }

    /// Get the target index this pass writes to
    pub fn output(&self) -> usize {
        self.output
    }

    /// Check whether this pass samples the given target
    pub fn reads(&self, target_id: usize) -> bool {
        self.inputs.contains(&target_id)
    }
}
