//! Unit tests for error.rs
//!
//! Tests all Error variants and their implementations (Display, Debug, Clone, std::error::Error).

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_backend_error_display() {
    let err = Error::BackendError("glBindFramebuffer failed".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Backend error"));
    assert!(display.contains("glBindFramebuffer failed"));
}

#[test]
fn test_invalid_resource_display() {
    let err = Error::InvalidResource("Target 'shadow' not found".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid resource"));
    assert!(display.contains("shadow"));
}

#[test]
fn test_initialization_failed_display() {
    let err = Error::InitializationFailed("Shader compilation failed".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Initialization failed"));
    assert!(display.contains("Shader compilation failed"));
}

#[test]
fn test_incomplete_render_target_display() {
    let err = Error::IncompleteRenderTarget("reflection".to_string());
    assert_eq!(
        format!("{}", err),
        "Render target 'reflection' setup failed: framebuffer incomplete"
    );
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::BackendError("test".to_string());
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let err = Error::IncompleteRenderTarget("shadow".to_string());
    let debug = format!("{:?}", err);
    assert!(debug.contains("IncompleteRenderTarget"));
    assert!(debug.contains("shadow"));
}

#[test]
fn test_error_clone() {
    let err1 = Error::InvalidResource("mesh".to_string());
    let err2 = err1.clone();
    assert_eq!(format!("{}", err1), format!("{}", err2));
}

// ============================================================================
// RESULT TYPE
// ============================================================================

fn fails() -> Result<u32> {
    Err(Error::InitializationFailed("no targets".to_string()))
}

fn propagates() -> Result<u32> {
    let value = fails()?;
    Ok(value + 1)
}

#[test]
fn test_result_propagation() {
    match propagates() {
        Err(Error::InitializationFailed(msg)) => assert_eq!(msg, "no targets"),
        other => panic!("unexpected result: {:?}", other),
    }
}
