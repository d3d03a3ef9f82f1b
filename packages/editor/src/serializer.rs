//! Tree import/export.
//!
//! The persisted form is a JSON array holding exactly one node, the root:
//!
//! ```json
//! [{ "id": "root", "type": "Root", "children": [] }]
//! ```

use designable_common::{ComponentNode, ROOT_ID};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Expected a JSON array holding the root node")]
    NotAnArray,

    #[error("Expected exactly one root node, found {0}")]
    RootCount(usize),

    #[error("The top-level node must have id \"root\"")]
    MissingRoot,

    #[error("Malformed node: {0}")]
    Malformed(serde_json::Error),
}

/// Serialize the tree as pretty-printed JSON, props in insertion order
pub fn export_tree(root: &ComponentNode) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(std::slice::from_ref(root))
}

/// Parse and validate a serialized tree
pub fn import_tree(input: &str) -> Result<ComponentNode, ImportError> {
    let value: Value = serde_json::from_str(input)?;

    let Value::Array(mut nodes) = value else {
        return Err(ImportError::NotAnArray);
    };

    if nodes.len() != 1 {
        return Err(ImportError::RootCount(nodes.len()));
    }

    let root = nodes.remove(0);
    if root.get("id").and_then(Value::as_str) != Some(ROOT_ID) {
        return Err(ImportError::MissingRoot);
    }

    serde_json::from_value(root).map_err(ImportError::Malformed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ComponentNode {
        ComponentNode::root().with_children(vec![ComponentNode::new("card_1", "Card")
            .with_props(json!({ "title": "Hi", "style": { "width": "300px" } }).as_object().cloned().unwrap())
            .with_children(vec![ComponentNode::new("text_1", "Text")])])
    }

    #[test]
    fn test_round_trip() {
        let tree = sample();
        let exported = export_tree(&tree).unwrap();
        assert_eq!(import_tree(&exported).unwrap(), tree);
    }

    #[test]
    fn test_export_shape() {
        let exported = export_tree(&ComponentNode::root()).unwrap();
        let value: Value = serde_json::from_str(&exported).unwrap();
        assert_eq!(value, json!([{ "id": "root", "type": "Root", "children": [] }]));
    }

    #[test]
    fn test_props_keep_insertion_order() {
        let node = ComponentNode::new("button_1", "Button")
            .with_props(json!({ "zeta": 1, "alpha": 2 }).as_object().cloned().unwrap());
        let exported = export_tree(&node).unwrap();
        assert!(exported.find("zeta").unwrap() < exported.find("alpha").unwrap());
    }

    #[test]
    fn test_rejections() {
        assert!(matches!(import_tree("not json"), Err(ImportError::Parse(_))));
        assert!(matches!(
            import_tree(r#"{"id":"root","type":"Root"}"#),
            Err(ImportError::NotAnArray)
        ));
        assert!(matches!(import_tree("[]"), Err(ImportError::RootCount(0))));
        assert!(matches!(
            import_tree(r#"[{"id":"root","type":"Root"},{"id":"root","type":"Root"}]"#),
            Err(ImportError::RootCount(2))
        ));
        assert!(matches!(
            import_tree(r#"[{"id":"page","type":"Root"}]"#),
            Err(ImportError::MissingRoot)
        ));
        assert!(matches!(
            import_tree(r#"[{"id":"root","type":"Root","children":{"a":1}}]"#),
            Err(ImportError::Malformed(_))
        ));
    }

    #[test]
    fn test_null_props_are_rejected() {
        // Props must be an object when present; null is not read as empty
        assert!(matches!(
            import_tree(r#"[{"id":"root","type":"Root","props":null}]"#),
            Err(ImportError::Malformed(_))
        ));
        assert!(matches!(
            import_tree(r#"[{"id":"root","type":"Root","children":[{"id":"text_1","type":"Text","props":null}]}]"#),
            Err(ImportError::Malformed(_))
        ));
    }
}
