/// Shader trait - opaque compiled shader program
///
/// Binding and uniform upload go through `CommandList` against the bound
/// program; the viewer never inspects shading-language details.

/// Compiled shader program handle
pub trait Shader: Send + Sync {
    /// Program name ("phong", "shadow", "environment", "texture")
    fn name(&self) -> &str;
}
