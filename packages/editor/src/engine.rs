//! # Designer Engine
//!
//! Owns the live component tree, the current selection and the undo
//! history, and broadcasts every change to subscribers.
//!
//! ## Notification
//!
//! Listeners run synchronously in registration order, once when they
//! subscribe and again after every operation that changes state. A listener
//! cannot reach the engine directly; to react with a further edit it pushes
//! a [`Mutation`] onto the [`Deferred`] queue it is handed. The engine
//! applies queued mutations in FIFO order once the current broadcast has
//! reached every listener, each one with its own snapshot and notification.
//!
//! ## Failures
//!
//! Operations that target a missing node, or the root for removal, leave the
//! tree, the selection and the history untouched and notify nobody.

use crate::mutations::{Mutation, MutationError, MutationResult};
use crate::serializer::{self, ImportError};
use crate::undo_stack::UndoStack;
use designable_common::{find_node, find_parent, ComponentNode, IdGenerator, NodeTemplate, Props};
use std::collections::VecDeque;
use std::fmt;
use tracing::{debug, warn};

/// Upper bound on mutations applied from the deferred queue in one drain
pub const MAX_DEFERRED_MUTATIONS: usize = 64;

/// Subscriber callback
pub type Listener = Box<dyn FnMut(&DesignerState, &mut Deferred)>;

/// Handle returned by [`DesignerEngine::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Everything a subscriber observes
#[derive(Debug, Clone)]
pub struct DesignerState {
    root: ComponentNode,
    selected_id: Option<String>,
    history: UndoStack,
    version: u64,
}

impl DesignerState {
    fn new(history: UndoStack) -> Self {
        Self {
            root: ComponentNode::root(),
            selected_id: None,
            history,
            version: 0,
        }
    }

    /// The tree as a one-element sequence holding the root
    pub fn tree(&self) -> &[ComponentNode] {
        std::slice::from_ref(&self.root)
    }

    pub fn root(&self) -> &ComponentNode {
        &self.root
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn selected_component(&self) -> Option<&ComponentNode> {
        self.selected_id
            .as_deref()
            .and_then(|id| find_node(&self.root, id))
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    /// Incremented on every notification
    pub fn version(&self) -> u64 {
        self.version
    }
}

/// Mutations queued by listeners during a notification
#[derive(Debug, Default)]
pub struct Deferred {
    queue: VecDeque<Mutation>,
}

impl Deferred {
    pub fn push(&mut self, mutation: Mutation) {
        self.queue.push_back(mutation);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn pop(&mut self) -> Option<Mutation> {
        self.queue.pop_front()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }
}

/// The tree engine: tree, selection, history and subscribers
pub struct DesignerEngine {
    state: DesignerState,
    ids: IdGenerator,
    listeners: Vec<(u64, Listener)>,
    next_listener: u64,
    deferred: Deferred,
    draining: bool,
}

impl DesignerEngine {
    /// Engine holding only the root, with the default history limit
    pub fn new() -> Self {
        Self::with_history(UndoStack::new())
    }

    /// Engine with a custom number of undo levels (0 = unlimited)
    pub fn with_history_limit(limit: usize) -> Self {
        Self::with_history(UndoStack::with_max_levels(limit))
    }

    fn with_history(history: UndoStack) -> Self {
        Self {
            state: DesignerState::new(history),
            ids: IdGenerator::new(),
            listeners: Vec::new(),
            next_listener: 0,
            deferred: Deferred::default(),
            draining: false,
        }
    }

    pub fn state(&self) -> &DesignerState {
        &self.state
    }

    pub fn root(&self) -> &ComponentNode {
        &self.state.root
    }

    pub fn history(&self) -> &UndoStack {
        &self.state.history
    }

    pub fn version(&self) -> u64 {
        self.state.version
    }

    /// Apply a structural mutation with snapshot, selection update and
    /// notification
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, MutationError> {
        mutation.validate(&self.state.root)?;

        self.state
            .history
            .record(&self.state.root, Some(mutation.describe()));
        let component_id = mutation.apply(&mut self.state.root, &mut self.ids)?;

        match &mutation {
            Mutation::AddComponent { .. } => self.state.selected_id = Some(component_id.clone()),
            Mutation::RemoveComponent { .. } => self.state.selected_id = None,
            Mutation::UpdateProps { .. } => {}
        }

        debug!(op = mutation.name(), component = %component_id, "applied mutation");

        let version = self.notify();
        Ok(MutationResult {
            version,
            component_id,
        })
    }

    /// Append a node under `parent_id` and select it. Returns the new id.
    pub fn add_component(&mut self, parent_id: &str, component: NodeTemplate) -> Option<String> {
        self.apply(Mutation::AddComponent {
            parent_id: parent_id.to_string(),
            component,
        })
        .map(|result| result.component_id)
        .map_err(|err| debug!(%err, "add rejected"))
        .ok()
    }

    /// Remove a node and its subtree; the root is refused
    pub fn remove_component(&mut self, component_id: &str) -> bool {
        self.apply(Mutation::RemoveComponent {
            component_id: component_id.to_string(),
        })
        .map_err(|err| debug!(%err, "remove rejected"))
        .is_ok()
    }

    /// Shallow-merge `props` into a node's props
    pub fn update_component_props(&mut self, component_id: &str, props: Props) -> bool {
        self.apply(Mutation::UpdateProps {
            component_id: component_id.to_string(),
            props,
        })
        .map_err(|err| debug!(%err, "update rejected"))
        .is_ok()
    }

    /// Set the selection. The id is not checked against the tree.
    pub fn select_component(&mut self, component_id: Option<&str>) {
        self.state.selected_id = component_id.map(str::to_string);
        self.notify();
    }

    pub fn selected_component(&self) -> Option<&ComponentNode> {
        self.state.selected_component()
    }

    pub fn find_component(&self, component_id: &str) -> Option<&ComponentNode> {
        find_node(&self.state.root, component_id)
    }

    pub fn parent_of(&self, component_id: &str) -> Option<&ComponentNode> {
        find_parent(&self.state.root, component_id)
    }

    pub fn undo(&mut self) -> bool {
        if !self.state.history.undo(&mut self.state.root) {
            return false;
        }
        debug!(remaining = self.state.history.undo_levels(), "undo");
        self.notify();
        true
    }

    pub fn redo(&mut self) -> bool {
        if !self.state.history.redo(&mut self.state.root) {
            return false;
        }
        debug!(remaining = self.state.history.redo_levels(), "redo");
        self.notify();
        true
    }

    /// Group the following mutations into one undo step
    pub fn begin_batch(&mut self, description: impl Into<String>) {
        self.state.history.begin_batch(Some(description.into()));
    }

    pub fn end_batch(&mut self) {
        self.state.history.end_batch();
    }

    pub fn can_undo(&self) -> bool {
        self.state.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.state.history.can_redo()
    }

    pub fn clear_history(&mut self) {
        self.state.history.clear();
        self.notify();
    }

    pub fn export_tree(&self) -> Result<String, serde_json::Error> {
        serializer::export_tree(&self.state.root)
    }

    /// Replace the tree with a serialized one. Returns false, leaving the
    /// state untouched, when the input is rejected.
    pub fn import_tree(&mut self, input: &str) -> bool {
        match self.try_import_tree(input) {
            Ok(()) => true,
            Err(err) => {
                warn!(%err, "import rejected");
                false
            }
        }
    }

    pub fn try_import_tree(&mut self, input: &str) -> Result<(), ImportError> {
        let root = serializer::import_tree(input)?;

        self.state
            .history
            .record(&self.state.root, Some("Import tree".to_string()));
        self.state.root = root;
        self.state.selected_id = None;

        debug!("imported tree");
        self.notify();
        Ok(())
    }

    /// Register a listener; it is called immediately with the current state
    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&DesignerState, &mut Deferred) + 'static,
    {
        let mut listener: Listener = Box::new(listener);
        listener(&self.state, &mut self.deferred);

        let id = self.next_listener;
        self.next_listener += 1;
        self.listeners.push((id, listener));

        self.drain_deferred();
        Subscription(id)
    }

    /// Deregister a listener. Returns false if it was already removed.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription.0);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self) -> u64 {
        self.state.version += 1;
        let version = self.state.version;

        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state, &mut self.deferred);
        }

        self.drain_deferred();
        version
    }

    fn drain_deferred(&mut self) {
        if self.draining {
            return;
        }
        self.draining = true;

        let mut applied = 0;
        while let Some(mutation) = self.deferred.pop() {
            if applied == MAX_DEFERRED_MUTATIONS {
                warn!(
                    dropped = self.deferred.len() + 1,
                    "deferred mutation limit reached"
                );
                self.deferred.clear();
                break;
            }
            applied += 1;

            if let Err(err) = self.apply(mutation) {
                warn!(%err, "deferred mutation rejected");
            }
        }

        self.draining = false;
    }
}

impl Default for DesignerEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DesignerEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DesignerEngine")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .field("deferred", &self.deferred)
            .finish()
    }
}
