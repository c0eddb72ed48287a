/// Texture trait - loaded image textures sampled by the draw routine

/// Texture dimensionality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureType {
    /// Plain 2D texture (billboards, spot cookie)
    Tex2D,
    /// Six-face cubemap (environment)
    CubeMap,
}

/// Loaded image texture handle
pub trait Texture: Send + Sync {
    /// Debug name
    fn name(&self) -> &str;

    /// Texture dimensionality
    fn texture_type(&self) -> TextureType;
}
