//! Tests for longer mutation sequences
//!
//! This tests:
//! - History bound and eviction order
//! - Undo/redo as inverse operations
//! - Batched mutations
//! - Tree integrity after failed operations

use designable_editor::{
    ComponentNode, DesignerEngine, Mutation, NodeTemplate, Props, DEFAULT_HISTORY_LIMIT,
};
use serde_json::json;

fn props(value: serde_json::Value) -> Props {
    value.as_object().cloned().unwrap()
}

fn label(engine: &DesignerEngine, id: &str) -> Option<serde_json::Value> {
    engine
        .find_component(id)
        .and_then(|node| node.props.get("label").cloned())
}

#[test]
fn test_history_is_bounded_to_most_recent_states() {
    let mut engine = DesignerEngine::new();
    let id = engine.add_component("root", NodeTemplate::new("Button")).unwrap();

    for i in 0..60 {
        assert!(engine.update_component_props(&id, props(json!({ "label": i }))));
    }

    assert_eq!(engine.history().undo_levels(), DEFAULT_HISTORY_LIMIT);

    // The oldest kept snapshot is the state before update #10
    let oldest = engine.history().undo_snapshots().next().unwrap();
    let node = designable_common::find_node(&oldest.tree, &id).unwrap();
    assert_eq!(node.props.get("label"), Some(&json!(9)));

    let mut undone = 0;
    while engine.undo() {
        undone += 1;
    }
    assert_eq!(undone, DEFAULT_HISTORY_LIMIT);
    assert_eq!(label(&engine, &id), Some(json!(9)));
}

#[test]
fn test_undo_all_then_redo_all_returns_to_latest() {
    let mut engine = DesignerEngine::new();
    let mut states: Vec<ComponentNode> = vec![engine.root().clone()];

    let card = engine.add_component("root", NodeTemplate::new("Card")).unwrap();
    states.push(engine.root().clone());
    let button = engine.add_component(&card, NodeTemplate::new("Button")).unwrap();
    states.push(engine.root().clone());
    engine.update_component_props(&button, props(json!({ "label": "Go" })));
    states.push(engine.root().clone());
    engine.add_component("root", NodeTemplate::new("Divider")).unwrap();
    states.push(engine.root().clone());
    engine.remove_component(&card);
    states.push(engine.root().clone());

    for expected in states.iter().rev().skip(1) {
        assert!(engine.undo());
        assert_eq!(engine.root(), expected);
    }
    assert!(!engine.undo());

    for expected in states.iter().skip(1) {
        assert!(engine.redo());
        assert_eq!(engine.root(), expected);
    }
    assert!(!engine.redo());
}

#[test]
fn test_new_mutation_after_undo_discards_redo() {
    let mut engine = DesignerEngine::new();
    engine.add_component("root", NodeTemplate::new("Text")).unwrap();
    engine.undo();
    assert!(engine.can_redo());

    engine.add_component("root", NodeTemplate::new("Divider")).unwrap();
    assert!(!engine.can_redo());
    assert_eq!(engine.root().children()[0].component_type, "Divider");
}

#[test]
fn test_undo_keeps_selection() {
    let mut engine = DesignerEngine::new();
    let id = engine.add_component("root", NodeTemplate::new("Text")).unwrap();
    engine.undo();

    assert_eq!(engine.state().selected_id(), Some(id.as_str()));
    assert!(engine.selected_component().is_none());
}

#[test]
fn test_batch_is_one_undo_step() {
    let mut engine = DesignerEngine::new();
    let before = engine.root().clone();

    engine.begin_batch("Build form");
    let form = engine.add_component("root", NodeTemplate::new("Form")).unwrap();
    engine.add_component(&form, NodeTemplate::new("Input")).unwrap();
    engine.add_component(&form, NodeTemplate::new("Button")).unwrap();
    engine.end_batch();

    assert_eq!(engine.history().undo_levels(), 1);
    assert_eq!(engine.history().undo_description(), Some("Build form"));

    assert!(engine.undo());
    assert_eq!(engine.root(), &before);

    assert!(engine.redo());
    assert_eq!(engine.find_component(&form).unwrap().children().len(), 2);
}

#[test]
fn test_failed_operations_do_not_consume_history() {
    let mut engine = DesignerEngine::new();
    let id = engine.add_component("root", NodeTemplate::new("Text")).unwrap();
    engine.undo();
    let redo_levels = engine.history().redo_levels();

    assert!(!engine.remove_component(&id));
    assert!(!engine.remove_component("root"));
    assert!(!engine.update_component_props(&id, props(json!({ "text": "x" }))));
    assert!(engine.add_component(&id, NodeTemplate::new("Text")).is_none());

    assert_eq!(engine.history().undo_levels(), 0);
    assert_eq!(engine.history().redo_levels(), redo_levels);
}

#[test]
fn test_remove_detaches_whole_subtree() {
    let mut engine = DesignerEngine::new();
    let card = engine.add_component("root", NodeTemplate::new("Card")).unwrap();
    let row = engine.add_component(&card, NodeTemplate::new("Row")).unwrap();
    let col = engine.add_component(&row, NodeTemplate::new("Col")).unwrap();

    assert_eq!(engine.parent_of(&col).map(|n| n.id.as_str()), Some(row.as_str()));
    assert!(engine.remove_component(&card));

    for id in [&card, &row, &col] {
        assert!(engine.find_component(id).is_none());
    }
    assert_eq!(engine.root().children().len(), 0);
}

#[test]
fn test_deferred_chain_runs_in_order() {
    let mut engine = DesignerEngine::new();

    // Mirror every new Button with a Divider after it
    engine.subscribe(|state, deferred| {
        if let Some(node) = state.selected_component() {
            if node.component_type == "Button" {
                deferred.push(Mutation::AddComponent {
                    parent_id: "root".to_string(),
                    component: NodeTemplate::new("Divider"),
                });
            }
        }
    });

    engine.add_component("root", NodeTemplate::new("Button")).unwrap();
    engine.add_component("root", NodeTemplate::new("Button")).unwrap();

    let types: Vec<&str> = engine
        .root()
        .children()
        .iter()
        .map(|n| n.component_type.as_str())
        .collect();
    assert_eq!(types, vec!["Button", "Divider", "Button", "Divider"]);
}
