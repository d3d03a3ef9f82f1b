//! # Designer Session
//!
//! Composes one engine with the registries it consults: a component
//! catalog, a behavior registry and a locale store. Each session owns its
//! own instances, so several designers can run side by side.
//!
//! Capabilities are read from the registries and every durable change is
//! applied through the engine, which keeps resizing undoable.

use crate::engine::DesignerEngine;
use crate::errors::EditorError;
use crate::mutations::{Mutation, MutationError};
use crate::undo_stack::DEFAULT_HISTORY_LIMIT;
use designable_common::{NodeTemplate, Props, STYLE_PROP};
use designable_registry::{
    build_default_behaviors, build_default_catalog, build_default_locales, BehaviorRegistry,
    ComponentCatalog, LocaleStore, ResizeAxis,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Session configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOptions {
    /// Number of undo levels kept (0 = unlimited)
    pub history_limit: usize,

    /// Initial UI language; ignored if no table is registered for it
    pub language: Option<String>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            language: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeDirection {
    Increase,
    Decrease,
}

/// Editor affordances for one node, as the rendering layer needs them
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub component_id: String,
    pub component_type: String,
    pub label: String,
    pub droppable: bool,
    pub translatable: bool,
    pub resizable: Vec<ResizeAxis>,
    pub designer_props: Props,
}

#[derive(Debug)]
pub struct DesignerSession {
    engine: DesignerEngine,
    catalog: ComponentCatalog,
    behaviors: BehaviorRegistry,
    locales: LocaleStore,
}

impl DesignerSession {
    pub fn new(
        options: SessionOptions,
        catalog: ComponentCatalog,
        behaviors: BehaviorRegistry,
        locales: LocaleStore,
    ) -> Self {
        let mut session = Self {
            engine: DesignerEngine::with_history_limit(options.history_limit),
            catalog,
            behaviors,
            locales,
        };

        if let Some(language) = options.language.as_deref() {
            if !session.locales.set_language(language) {
                warn!(language, "no locale table registered, keeping default");
            }
        }

        session
    }

    /// Session over the stock catalog, behaviors and locales
    pub fn with_defaults(options: SessionOptions) -> Self {
        Self::new(
            options,
            build_default_catalog(),
            build_default_behaviors(),
            build_default_locales(),
        )
    }

    pub fn engine(&self) -> &DesignerEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut DesignerEngine {
        &mut self.engine
    }

    pub fn catalog(&self) -> &ComponentCatalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut ComponentCatalog {
        &mut self.catalog
    }

    pub fn behaviors(&self) -> &BehaviorRegistry {
        &self.behaviors
    }

    pub fn behaviors_mut(&mut self) -> &mut BehaviorRegistry {
        &mut self.behaviors
    }

    pub fn locales(&self) -> &LocaleStore {
        &self.locales
    }

    pub fn locales_mut(&mut self) -> &mut LocaleStore {
        &mut self.locales
    }

    /// Whether `node_id` accepts dropped children.
    ///
    /// A matching behavior decides first, then the catalog entry for the
    /// node's type; anything else is not a drop target.
    pub fn can_drop_into(&self, node_id: &str) -> bool {
        let Some(node) = self.engine.find_component(node_id) else {
            return false;
        };

        self.behaviors
            .behavior_for(node)
            .and_then(|behavior| behavior.droppable)
            .or_else(|| {
                self.catalog
                    .component(&node.component_type)
                    .map(|metadata| metadata.droppable)
            })
            .unwrap_or(false)
    }

    /// Instantiate a catalog component under `parent_id`. Returns the new id.
    pub fn insert_from_catalog(
        &mut self,
        parent_id: &str,
        component_id: &str,
    ) -> Result<String, EditorError> {
        let instance = self.catalog.create_component_instance(component_id)?;

        if self.engine.find_component(parent_id).is_none() {
            return Err(MutationError::ParentNotFound(parent_id.to_string()).into());
        }
        if !self.can_drop_into(parent_id) {
            return Err(EditorError::NotDroppable(parent_id.to_string()));
        }

        let result = self.engine.apply(Mutation::AddComponent {
            parent_id: parent_id.to_string(),
            component: NodeTemplate::from(instance),
        })?;

        debug!(component = component_id, id = %result.component_id, "inserted from catalog");
        Ok(result.component_id)
    }

    /// Step a node's width or height through its resize policy.
    ///
    /// The policy runs on a copy of the node and the resulting style is
    /// committed as a prop update, so the change is undoable and notifies
    /// subscribers. Returns false when the node has no resizer for `axis`
    /// or the step left the style unchanged.
    pub fn resize(&mut self, node_id: &str, axis: ResizeAxis, direction: ResizeDirection) -> bool {
        let Some(node) = self.engine.find_component(node_id) else {
            return false;
        };
        let Some(resizer) = self
            .behaviors
            .behavior_for(node)
            .and_then(|behavior| behavior.resizer(axis))
        else {
            return false;
        };

        let mut scratch = node.clone();
        {
            let mut handles = resizer.handles(&mut scratch, None);
            match direction {
                ResizeDirection::Increase => handles.increase(),
                ResizeDirection::Decrease => handles.decrease(),
            }
        }

        let Some(style) = scratch.style().filter(|style| Some(*style) != node.style()) else {
            return false;
        };

        let mut props = Props::new();
        props.insert(STYLE_PROP.to_string(), Value::Object(style.clone()));
        self.engine.update_component_props(node_id, props)
    }

    pub fn capabilities(&self, node_id: &str) -> Option<Capabilities> {
        let node = self.engine.find_component(node_id)?;
        let behavior = self.behaviors.behavior_for(node);

        let resizable = [ResizeAxis::Width, ResizeAxis::Height]
            .into_iter()
            .filter(|axis| behavior.is_some_and(|b| b.resizer(*axis).is_some()))
            .collect();

        Some(Capabilities {
            component_id: node.id.clone(),
            component_type: node.component_type.clone(),
            label: self.label_for(&node.component_type),
            droppable: self.can_drop_into(node_id),
            translatable: behavior.and_then(|b| b.translatable).unwrap_or(false),
            resizable,
            designer_props: behavior.map(|b| b.designer_props.clone()).unwrap_or_default(),
        })
    }

    /// Display label for a component type: its `component.<id>` translation,
    /// else the catalog name, else the id itself
    pub fn label_for(&self, component_id: &str) -> String {
        let key = format!("component.{component_id}");
        if let Some(label) = self.locales.lookup(&key) {
            return label.to_string();
        }

        self.catalog
            .component(component_id)
            .map(|metadata| metadata.name.clone())
            .unwrap_or_else(|| component_id.to_string())
    }

    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.locales.translate(key)
    }
}
