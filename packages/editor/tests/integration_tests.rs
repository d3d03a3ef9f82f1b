//! Integration tests for editor crate

use designable_editor::{
    ComponentNode, DesignerEngine, DesignerSession, Mutation, NodeTemplate, Props, ResizeAxis,
    ResizeDirection, SessionOptions,
};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

fn props(value: serde_json::Value) -> Props {
    value.as_object().cloned().unwrap()
}

fn is_button_id(id: &str) -> bool {
    id.strip_prefix("button_")
        .is_some_and(|token| !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()))
}

#[test]
fn test_add_undo_redo_scenario() {
    let mut engine = DesignerEngine::new();
    let initial = engine.root().clone();

    let id = engine
        .add_component("root", NodeTemplate::new("Button"))
        .expect("root exists");
    assert!(is_button_id(&id), "unexpected id {id}");
    assert_eq!(engine.selected_component().map(|n| n.id.as_str()), Some(id.as_str()));

    assert!(engine.undo());
    assert_eq!(engine.root(), &initial);
    assert!(!engine.can_undo());

    assert!(engine.redo());
    let restored = engine.find_component(&id).unwrap();
    assert_eq!(restored.component_type, "Button");
}

#[test]
fn test_update_merge_keeps_existing_props() {
    let mut engine = DesignerEngine::new();
    let id = engine
        .add_component(
            "root",
            NodeTemplate::new("Button").with_props(props(json!({ "type": "primary" }))),
        )
        .unwrap();

    assert!(engine.update_component_props(&id, props(json!({ "label": "Save" }))));

    let node = engine.find_component(&id).unwrap();
    assert_eq!(node.props, props(json!({ "type": "primary", "label": "Save" })));
}

#[test]
fn test_root_protection() {
    let mut engine = DesignerEngine::new();
    let id = engine.add_component("root", NodeTemplate::new("Text")).unwrap();
    let tree = engine.root().clone();

    assert!(!engine.remove_component("root"));
    assert_eq!(engine.state().selected_id(), Some(id.as_str()));
    assert_eq!(engine.root(), &tree);
}

#[test]
fn test_import_round_trip() {
    let mut source = DesignerSession::with_defaults(SessionOptions::default());
    let form = source.insert_from_catalog("root", "Form").unwrap();
    source.insert_from_catalog(&form, "Input").unwrap();
    let card = source.insert_from_catalog("root", "Card").unwrap();
    let row = source.insert_from_catalog(&card, "Row").unwrap();
    source.insert_from_catalog(&row, "Col").unwrap();
    source.insert_from_catalog(&card, "Table").unwrap();

    let exported = source.engine().export_tree().unwrap();

    let mut target = DesignerEngine::new();
    target.select_component(Some("root"));
    assert!(target.import_tree(&exported));
    assert_eq!(target.root(), source.engine().root());
    assert_eq!(target.state().selected_id(), None);

    // Exporting again yields the same document
    assert_eq!(target.export_tree().unwrap(), exported);
}

#[test]
fn test_import_rejects_bad_shapes() {
    let mut engine = DesignerEngine::new();
    let tree = engine.root().clone();

    for input in [
        "",
        "{}",
        "[]",
        r#"[{"id":"root","type":"Root"},{"id":"x","type":"Text"}]"#,
        r#"[{"id":"main","type":"Root"}]"#,
        r#"[{"type":"Root"}]"#,
        r#"[{"id":"root","type":"Root","props":null}]"#,
    ] {
        assert!(!engine.import_tree(input), "accepted {input:?}");
    }

    assert_eq!(engine.root(), &tree);
    assert!(!engine.can_undo());
}

#[test]
fn test_subscribers_see_every_change() {
    let mut engine = DesignerEngine::new();
    let seen: Rc<RefCell<Vec<(usize, Option<String>)>>> = Rc::default();

    let sink = seen.clone();
    engine.subscribe(move |state, _| {
        sink.borrow_mut().push((
            state.root().children().len(),
            state.selected_id().map(str::to_string),
        ));
    });

    let id = engine.add_component("root", NodeTemplate::new("Text")).unwrap();
    engine.remove_component(&id);
    engine.undo();

    assert_eq!(
        *seen.borrow(),
        vec![(0, None), (1, Some(id.clone())), (0, None), (1, None)]
    );
}

#[test]
fn test_typed_apply_reports_version() {
    let mut engine = DesignerEngine::new();
    let mutation: Mutation = serde_json::from_value(json!({
        "op": "addComponent",
        "parentId": "root",
        "component": { "type": "Divider", "props": { "content": "or" } }
    }))
    .unwrap();

    let result = engine.apply(mutation).unwrap();
    assert_eq!(result.version, 1);
    assert!(result.component_id.starts_with("divider_"));
}

#[test]
fn test_session_resize_through_engine() {
    let mut session = DesignerSession::with_defaults(SessionOptions::default());
    let table = session.insert_from_catalog("root", "Table").unwrap();
    session.engine_mut().update_component_props(
        &table,
        props(json!({ "style": { "width": "480px" } })),
    );

    let width = |session: &DesignerSession| {
        session
            .engine()
            .find_component(&table)
            .and_then(ComponentNode::style)
            .and_then(|style| style.get("width").cloned())
    };

    assert!(session.resize(&table, ResizeAxis::Width, ResizeDirection::Increase));
    assert_eq!(width(&session), Some(json!("530px")));
    assert!(session.resize(&table, ResizeAxis::Width, ResizeDirection::Decrease));
    assert!(session.resize(&table, ResizeAxis::Width, ResizeDirection::Decrease));
    assert!(session.resize(&table, ResizeAxis::Width, ResizeDirection::Decrease));
    // 530 -> 480 -> 430 -> 400 (floor)
    assert_eq!(width(&session), Some(json!("400px")));

    // Already at the floor
    assert!(!session.resize(&table, ResizeAxis::Width, ResizeDirection::Decrease));

    session.engine_mut().undo();
    assert_eq!(width(&session), Some(json!("430px")));
}

#[test]
fn test_session_decrease_below_floor_changes_nothing() {
    let mut session = DesignerSession::with_defaults(SessionOptions::default());
    let table = session.insert_from_catalog("root", "Table").unwrap();
    let levels = session.engine().history().undo_levels();

    // The stock "100%" width reads as 100, below the 400 floor
    assert!(!session.resize(&table, ResizeAxis::Width, ResizeDirection::Decrease));

    let node = session.engine().find_component(&table).unwrap();
    assert_eq!(node.style().unwrap().get("width"), Some(&json!("100%")));
    assert_eq!(session.engine().history().undo_levels(), levels);
}

#[test]
fn test_session_resize_huge_imported_width() {
    let mut session = DesignerSession::with_defaults(SessionOptions::default());
    assert!(session.engine_mut().import_tree(
        r#"[{"id":"root","type":"Root","children":[
            {"id":"card_1","type":"Card","props":{"style":{"width":1e300}}}
        ]}]"#
    ));

    assert!(session.resize("card_1", ResizeAxis::Width, ResizeDirection::Increase));
    let node = session.engine().find_component("card_1").unwrap();
    assert_eq!(
        node.style().unwrap().get("width"),
        Some(&json!(format!("{}px", i64::MAX)))
    );
}

#[test]
fn test_independent_sessions() {
    let mut first = DesignerSession::with_defaults(SessionOptions::default());
    let second = DesignerSession::with_defaults(SessionOptions::default());

    first.insert_from_catalog("root", "Card").unwrap();
    first.locales_mut().set_language("en-us");

    assert!(second.engine().root().children().is_empty());
    assert_eq!(second.locales().language(), "zh-cn");
}
