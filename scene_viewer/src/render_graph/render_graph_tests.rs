/// Tests for RenderGraph
///
/// These tests validate target declaration, pass ordering and the
/// single-writer / write-before-read rules.

use crate::error::Error;
use super::*;

// ============================================================================
// Tests: Viewer Frame Graph
// ============================================================================

#[test]
fn test_shadow_reflection_composite_order() {
    let graph = RenderGraph::shadow_reflection_composite().unwrap();

    let kinds: Vec<PassKind> = graph.passes().iter().map(|p| p.kind()).collect();
    assert_eq!(kinds, vec![PassKind::Shadow, PassKind::Reflection, PassKind::Composite]);
    assert_eq!(graph.target_count(), 3);
}

#[test]
fn test_shadow_reflection_composite_edges() {
    let graph = RenderGraph::shadow_reflection_composite().unwrap();
    let shadow = graph.target_id("shadow").unwrap();
    let reflection = graph.target_id("reflection").unwrap();
    let screen = graph.target_id("screen").unwrap();

    let passes = graph.passes();
    assert!(passes[0].inputs().is_empty());
    assert_eq!(passes[0].output(), shadow);
    assert_eq!(passes[1].inputs(), &[shadow]);
    assert_eq!(passes[1].output(), reflection);
    assert!(passes[2].reads(shadow));
    assert!(passes[2].reads(reflection));
    assert_eq!(passes[2].output(), screen);
}

#[test]
fn test_writer_of() {
    let graph = RenderGraph::shadow_reflection_composite().unwrap();
    let reflection = graph.target_id("reflection").unwrap();

    assert_eq!(graph.writer_of(reflection).unwrap().kind(), PassKind::Reflection);
}

// ============================================================================
// Tests: Targets
// ============================================================================

#[test]
fn test_add_target() {
    let mut graph = RenderGraph::new();
    assert_eq!(graph.add_target("shadow").unwrap(), 0);
    assert_eq!(graph.add_target("screen").unwrap(), 1);
    assert_eq!(graph.target_name(1), Some("screen"));
    assert_eq!(graph.target_name(7), None);
}

#[test]
fn test_add_target_duplicate_fails() {
    let mut graph = RenderGraph::new();
    graph.add_target("shadow").unwrap();

    match graph.add_target("shadow") {
        Err(Error::BackendError(msg)) => assert!(msg.contains("already declared")),
        _ => panic!("Expected BackendError for duplicate target"),
    }
    assert_eq!(graph.target_count(), 1);
}

// ============================================================================
// Tests: Pass Validation
// ============================================================================

#[test]
fn test_read_before_write_rejected() {
    let mut graph = RenderGraph::new();
    let shadow = graph.add_target("shadow").unwrap();
    let screen = graph.add_target("screen").unwrap();

    let result = graph.add_pass(PassKind::Composite, &[shadow], screen);
    match result {
        Err(Error::BackendError(msg)) => assert!(msg.contains("before any pass writes it")),
        _ => panic!("Expected BackendError for read before write"),
    }
    assert_eq!(graph.pass_count(), 0);
}

#[test]
fn test_second_writer_rejected() {
    let mut graph = RenderGraph::new();
    let shadow = graph.add_target("shadow").unwrap();
    graph.add_pass(PassKind::Shadow, &[], shadow).unwrap();

    assert!(graph.add_pass(PassKind::Reflection, &[], shadow).is_err());
    assert_eq!(graph.pass_count(), 1);
}

#[test]
fn test_reading_own_output_rejected() {
    let mut graph = RenderGraph::new();
    let shadow = graph.add_target("shadow").unwrap();

    assert!(graph.add_pass(PassKind::Shadow, &[shadow], shadow).is_err());
}

#[test]
fn test_unknown_target_rejected() {
    let mut graph = RenderGraph::new();
    let shadow = graph.add_target("shadow").unwrap();

    assert!(graph.add_pass(PassKind::Shadow, &[], 5).is_err());
    assert!(graph.add_pass(PassKind::Shadow, &[9], shadow).is_err());
}

#[test]
fn test_pass_kind_names() {
    assert_eq!(PassKind::Shadow.to_string(), "shadow");
    assert_eq!(PassKind::Reflection.name(), "reflection");
    assert_eq!(format!("{}", PassKind::Composite), "composite");
}
