//! # Component Tree Nodes
//!
//! A designer document is a single-rooted tree of [`ComponentNode`]s. The
//! root always has id `"root"` and type `"Root"`; every other node is an
//! instance of a catalog component.
//!
//! Nodes serialize to the designer's JSON interchange shape:
//!
//! ```text
//! { "id": "card_1718000000000", "type": "Card", "props": { ... }, "children": [ ... ] }
//! ```
//!
//! `props` is omitted when empty and `children` is omitted for leaf types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Open, insertion-ordered property map of a node
pub type Props = Map<String, Value>;

/// Id of the single root node
pub const ROOT_ID: &str = "root";

/// Component type of the single root node
pub const ROOT_TYPE: &str = "Root";

/// Property holding the inline style sub-map
pub const STYLE_PROP: &str = "style";

/// A single element of the component tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentNode {
    /// Unique id, stable for the node's lifetime
    pub id: String,

    /// Catalog id of the component this node instantiates
    #[serde(rename = "type")]
    pub component_type: String,

    /// Component properties
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub props: Props,

    /// Child nodes (container types only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ComponentNode>>,
}

/// A node that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeTemplate {
    #[serde(rename = "type")]
    pub component_type: String,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub props: Props,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ComponentNode>>,
}

impl ComponentNode {
    /// Create a leaf node
    pub fn new(id: impl Into<String>, component_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            component_type: component_type.into(),
            props: Props::new(),
            children: None,
        }
    }

    /// The empty root of a fresh document
    pub fn root() -> Self {
        Self::new(ROOT_ID, ROOT_TYPE).with_children(Vec::new())
    }

    /// Build a node from a template and a freshly generated id
    pub fn from_template(id: impl Into<String>, template: NodeTemplate) -> Self {
        Self {
            id: id.into(),
            component_type: template.component_type,
            props: template.props,
            children: template.children,
        }
    }

    pub fn with_props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    pub fn with_children(mut self, children: Vec<ComponentNode>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn is_root(&self) -> bool {
        self.id == ROOT_ID
    }

    /// Child nodes, empty for leaves
    pub fn children(&self) -> &[ComponentNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Shallow-merge `partial` into the existing props.
    ///
    /// New keys are appended, existing keys are overwritten in place and
    /// untouched keys are preserved.
    pub fn merge_props(&mut self, partial: Props) {
        for (key, value) in partial {
            self.props.insert(key, value);
        }
    }

    /// Inline style sub-map, if present and an object
    pub fn style(&self) -> Option<&Props> {
        self.props.get(STYLE_PROP).and_then(Value::as_object)
    }

    /// Inline style sub-map, created (or replaced, if not an object) on demand
    pub fn style_mut(&mut self) -> &mut Props {
        let style = self
            .props
            .entry(STYLE_PROP)
            .or_insert_with(|| Value::Object(Props::new()));

        if !style.is_object() {
            *style = Value::Object(Props::new());
        }

        match style {
            Value::Object(map) => map,
            _ => unreachable!("style was just normalized to an object"),
        }
    }
}

impl NodeTemplate {
    pub fn new(component_type: impl Into<String>) -> Self {
        Self {
            component_type: component_type.into(),
            props: Props::new(),
            children: None,
        }
    }

    pub fn with_props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    pub fn with_children(mut self, children: Vec<ComponentNode>) -> Self {
        self.children = Some(children);
        self
    }
}

impl From<ComponentNode> for NodeTemplate {
    fn from(node: ComponentNode) -> Self {
        Self {
            component_type: node.component_type,
            props: node.props,
            children: node.children,
        }
    }
}
