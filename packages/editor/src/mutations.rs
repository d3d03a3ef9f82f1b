//! # Tree Mutations
//!
//! Structural operations on the component tree.
//!
//! ## Mutation Semantics
//!
//! ### AddComponent
//! - Appends a new node to the parent's children, creating the list if the
//!   parent had none
//! - The node id is generated as `<lowercased-type>_<token>` and is never
//!   one already present in the tree
//!
//! ### RemoveComponent
//! - Detaches the node and all its descendants
//! - The root can never be removed
//!
//! ### UpdateProps
//! - Shallow merge: new keys added, existing keys overwritten, others kept
//!
//! Lookups are depth-first; if ids were ever duplicated the first match wins.

use designable_common::{
    find_node, find_node_mut, remove_node, ComponentNode, IdGenerator, NodeTemplate, Props,
    ROOT_ID,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structural tree mutations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Mutation {
    /// Append a new node under `parent_id`
    #[serde(rename_all = "camelCase")]
    AddComponent {
        parent_id: String,
        component: NodeTemplate,
    },

    /// Remove a node and its subtree
    #[serde(rename_all = "camelCase")]
    RemoveComponent { component_id: String },

    /// Shallow-merge props into a node
    #[serde(rename_all = "camelCase")]
    UpdateProps {
        component_id: String,
        props: Props,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Parent not found: {0}")]
    ParentNotFound(String),

    #[error("The root node cannot be removed")]
    RootProtected,
}

impl Mutation {
    /// Check the mutation against the tree without changing it
    pub fn validate(&self, root: &ComponentNode) -> Result<(), MutationError> {
        match self {
            Mutation::AddComponent { parent_id, .. } => {
                find_node(root, parent_id)
                    .ok_or_else(|| MutationError::ParentNotFound(parent_id.clone()))?;
                Ok(())
            }

            Mutation::RemoveComponent { component_id } => {
                if component_id == ROOT_ID {
                    return Err(MutationError::RootProtected);
                }
                find_node(root, component_id)
                    .ok_or_else(|| MutationError::NodeNotFound(component_id.clone()))?;
                Ok(())
            }

            Mutation::UpdateProps { component_id, .. } => {
                find_node(root, component_id)
                    .ok_or_else(|| MutationError::NodeNotFound(component_id.clone()))?;
                Ok(())
            }
        }
    }

    /// Apply the mutation, returning the id of the affected node
    pub fn apply(
        &self,
        root: &mut ComponentNode,
        ids: &mut IdGenerator,
    ) -> Result<String, MutationError> {
        self.validate(root)?;

        match self {
            Mutation::AddComponent {
                parent_id,
                component,
            } => Self::apply_add(root, ids, parent_id, component),

            Mutation::RemoveComponent { component_id } => {
                remove_node(root, component_id)
                    .map(|removed| removed.id)
                    .ok_or_else(|| MutationError::NodeNotFound(component_id.clone()))
            }

            Mutation::UpdateProps {
                component_id,
                props,
            } => {
                let node = find_node_mut(root, component_id)
                    .ok_or_else(|| MutationError::NodeNotFound(component_id.clone()))?;
                node.merge_props(props.clone());
                Ok(node.id.clone())
            }
        }
    }

    fn apply_add(
        root: &mut ComponentNode,
        ids: &mut IdGenerator,
        parent_id: &str,
        component: &NodeTemplate,
    ) -> Result<String, MutationError> {
        let mut id = ids.new_id(&component.component_type);
        while find_node(root, &id).is_some() {
            id = ids.new_id(&component.component_type);
        }

        let parent = find_node_mut(root, parent_id)
            .ok_or_else(|| MutationError::ParentNotFound(parent_id.to_string()))?;

        parent
            .children
            .get_or_insert_with(Vec::new)
            .push(ComponentNode::from_template(id.clone(), component.clone()));

        Ok(id)
    }

    /// Short human-readable label, used as the undo step description
    pub fn describe(&self) -> String {
        match self {
            Mutation::AddComponent { component, .. } => format!("Add {}", component.component_type),
            Mutation::RemoveComponent { component_id } => format!("Remove {}", component_id),
            Mutation::UpdateProps { component_id, .. } => format!("Update {}", component_id),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mutation::AddComponent { .. } => "addComponent",
            Mutation::RemoveComponent { .. } => "removeComponent",
            Mutation::UpdateProps { .. } => "updateProps",
        }
    }
}

/// Result of applying a mutation through the engine
#[derive(Debug, Clone, PartialEq)]
pub struct MutationResult {
    /// State version after the mutation
    pub version: u64,

    /// Node that was added, removed or updated
    pub component_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree() -> ComponentNode {
        ComponentNode::root().with_children(vec![
            ComponentNode::new("card_1", "Card").with_children(vec![]),
            ComponentNode::new("text_1", "Text"),
        ])
    }

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::UpdateProps {
            component_id: "button_1".to_string(),
            props: json!({ "label": "Save" }).as_object().cloned().unwrap(),
        };

        let json = serde_json::to_value(&mutation).unwrap();
        assert_eq!(
            json,
            json!({ "op": "updateProps", "componentId": "button_1", "props": { "label": "Save" } })
        );

        let deserialized: Mutation = serde_json::from_value(json).unwrap();
        assert_eq!(mutation, deserialized);
    }

    #[test]
    fn test_add_creates_missing_children_list() {
        let mut root = tree();
        let mut ids = IdGenerator::new();
        let mutation = Mutation::AddComponent {
            parent_id: "text_1".to_string(),
            component: NodeTemplate::new("Button"),
        };

        let id = mutation.apply(&mut root, &mut ids).unwrap();

        let text = find_node(&root, "text_1").unwrap();
        assert_eq!(text.children().len(), 1);
        assert_eq!(text.children()[0].id, id);
    }

    #[test]
    fn test_validation_rejects_root_removal() {
        let root = tree();
        let mutation = Mutation::RemoveComponent {
            component_id: ROOT_ID.to_string(),
        };
        assert_eq!(mutation.validate(&root), Err(MutationError::RootProtected));
    }

    #[test]
    fn test_unknown_targets_are_rejected() {
        let mut root = tree();
        let mut ids = IdGenerator::new();

        let add = Mutation::AddComponent {
            parent_id: "nope".to_string(),
            component: NodeTemplate::new("Button"),
        };
        assert_eq!(
            add.apply(&mut root, &mut ids),
            Err(MutationError::ParentNotFound("nope".to_string()))
        );

        let update = Mutation::UpdateProps {
            component_id: "nope".to_string(),
            props: Props::new(),
        };
        assert_eq!(update.validate(&root), Err(MutationError::NodeNotFound("nope".to_string())));
        assert_eq!(root, tree());
    }

    #[test]
    fn test_describe() {
        let add = Mutation::AddComponent {
            parent_id: "root".to_string(),
            component: NodeTemplate::new("Card"),
        };
        assert_eq!(add.describe(), "Add Card");
        assert_eq!(add.name(), "addComponent");
    }
}
