//! Error types for the scene viewer
//!
//! This module defines the error types used throughout the viewer,
//! including render target setup, backend calls, and resource lookups.

use std::fmt;

/// Result type for viewer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Scene viewer errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (OpenGL, Vulkan, recording device, etc.)
    BackendError(String),

    /// Invalid resource (target, shader, mesh, scene object, etc.)
    InvalidResource(String),

    /// Initialization failed (targets, shaders, scene setup)
    InitializationFailed(String),

    /// A render target could not be completed by the backend
    IncompleteRenderTarget(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::IncompleteRenderTarget(name) => {
                write!(f, "Render target '{}' setup failed: framebuffer incomplete", name)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
