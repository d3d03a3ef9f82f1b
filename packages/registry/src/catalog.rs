//! # Component Catalog
//!
//! Static metadata for every component the designer can place: display
//! name, icon, palette group, default props and an optional property schema.
//! Entries are immutable once registered; registering the same id again
//! replaces the entry but keeps its original position.

use crate::RegistryError;
use designable_common::{ComponentNode, IdGenerator, Props};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Group assigned to components registered without one
pub const DEFAULT_GROUP: &str = "default";

/// Editor type of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropKind {
    String,
    Number,
    Boolean,
    Select,
    Json,
    Color,
}

/// Descriptor of a single configurable property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropSchema {
    #[serde(rename = "type")]
    pub kind: PropKind,

    pub label: String,

    #[serde(default)]
    pub default: Value,

    /// Allowed values for `select` properties
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
}

impl PropSchema {
    pub fn new(kind: PropKind, label: impl Into<String>, default: Value) -> Self {
        Self {
            kind,
            label: label.into(),
            default,
            options: None,
            minimum: None,
            maximum: None,
        }
    }

    pub fn with_options<I, V>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_range(mut self, minimum: f64, maximum: f64) -> Self {
        self.minimum = Some(minimum);
        self.maximum = Some(maximum);
        self
    }
}

/// Catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMetadata {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub icon: String,

    #[serde(default)]
    pub group: String,

    #[serde(default)]
    pub default_props: Props,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props_schema: Option<IndexMap<String, PropSchema>>,

    #[serde(default)]
    pub is_container: bool,

    #[serde(default)]
    pub droppable: bool,
}

impl ComponentMetadata {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: String::new(),
            group: String::new(),
            default_props: Props::new(),
            props_schema: None,
            is_container: false,
            droppable: false,
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Set default props from a JSON object (non-objects are ignored)
    pub fn default_props(mut self, props: Value) -> Self {
        if let Value::Object(map) = props {
            self.default_props = map;
        }
        self
    }

    /// Add a property descriptor
    pub fn prop(mut self, name: impl Into<String>, schema: PropSchema) -> Self {
        self.props_schema
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), schema);
        self
    }

    /// Mark as a container that accepts dropped children
    pub fn container(mut self) -> Self {
        self.is_container = true;
        self.droppable = true;
        self
    }

    /// Palette group, defaulting ungrouped entries
    pub fn group_or_default(&self) -> &str {
        if self.group.is_empty() {
            DEFAULT_GROUP
        } else {
            &self.group
        }
    }
}

/// Registry of component metadata, in registration order
#[derive(Debug, Clone, Default)]
pub struct ComponentCatalog {
    components: IndexMap<String, ComponentMetadata>,
    ids: IdGenerator,
}

impl ComponentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a component
    pub fn register_component(&mut self, metadata: ComponentMetadata) {
        debug!(component = %metadata.id, group = %metadata.group_or_default(), "Registering component");
        self.components.insert(metadata.id.clone(), metadata);
    }

    /// All components in registration order
    pub fn components(&self) -> impl Iterator<Item = &ComponentMetadata> {
        self.components.values()
    }

    /// Components grouped by palette group, groups in first-seen order
    pub fn components_by_group(&self) -> IndexMap<&str, Vec<&ComponentMetadata>> {
        let mut groups: IndexMap<&str, Vec<&ComponentMetadata>> = IndexMap::new();
        for component in self.components.values() {
            groups
                .entry(component.group_or_default())
                .or_default()
                .push(component);
        }
        groups
    }

    pub fn component(&self, id: &str) -> Option<&ComponentMetadata> {
        self.components.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.components.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Build a fresh node for a registered component.
    ///
    /// The node gets a new id, a copy of the default props and an empty
    /// child list if and only if the component is a container.
    pub fn create_component_instance(&mut self, id: &str) -> Result<ComponentNode, RegistryError> {
        let metadata = self
            .components
            .get(id)
            .ok_or_else(|| RegistryError::ComponentNotFound(id.to_string()))?;

        let mut node = ComponentNode::new(self.ids.new_id(&metadata.id), metadata.id.clone())
            .with_props(metadata.default_props.clone());
        if metadata.is_container {
            node.children = Some(Vec::new());
        }

        Ok(node)
    }
}
