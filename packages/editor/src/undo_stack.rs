//! # Undo/Redo Stack
//!
//! Snapshot-based history for the component tree.
//!
//! ## Design
//!
//! - Before every mutating operation the whole tree is deep-copied onto the
//!   undo stack
//! - Undo swaps the live tree with the newest undo snapshot, pushing the
//!   live tree onto the redo stack; redo is symmetric
//! - Recording a new snapshot clears the redo stack
//! - The undo stack is bounded; the oldest snapshots are evicted first
//! - Batches group several mutations into one undo step: only the first
//!   mutation of a batch records a snapshot
//! - Selection is not part of a snapshot
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut stack = UndoStack::new();
//! let mut tree = ComponentNode::root();
//!
//! stack.record(&tree, Some("Add Button".into()));
//! // ... mutate tree ...
//!
//! stack.undo(&mut tree);
//! stack.redo(&mut tree);
//! ```

use designable_common::ComponentNode;
use std::collections::VecDeque;

/// Default number of undo levels
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// A deep copy of the tree taken immediately before a mutation
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub tree: ComponentNode,

    /// Description of the operation this snapshot undoes
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
struct PendingBatch {
    description: Option<String>,
    recorded: bool,
}

/// Undo/redo stacks of full tree snapshots
#[derive(Debug, Clone)]
pub struct UndoStack {
    /// Snapshots to restore on undo (most recent last)
    undo_stack: VecDeque<Snapshot>,

    /// Snapshots to restore on redo (most recent last)
    redo_stack: Vec<Snapshot>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,

    /// Currently building a batch
    current_batch: Option<PendingBatch>,
}

impl UndoStack {
    /// Create a new undo stack with the default limit (50)
    pub fn new() -> Self {
        Self::with_max_levels(DEFAULT_HISTORY_LIMIT)
    }

    /// Create an undo stack with custom max levels
    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_levels,
            current_batch: None,
        }
    }

    /// Snapshot `tree` before it is mutated.
    ///
    /// Inside a batch only the first call records; the batch description
    /// takes precedence over `description`.
    pub fn record(&mut self, tree: &ComponentNode, description: Option<String>) {
        let description = match &mut self.current_batch {
            Some(batch) if batch.recorded => return,
            Some(batch) => {
                batch.recorded = true;
                batch.description.clone().or(description)
            }
            None => description,
        };

        self.push_undo(Snapshot {
            tree: tree.clone(),
            description,
        });

        // New action invalidates the redo future
        self.redo_stack.clear();
    }

    fn push_undo(&mut self, snapshot: Snapshot) {
        self.undo_stack.push_back(snapshot);

        if self.max_levels > 0 {
            while self.undo_stack.len() > self.max_levels {
                self.undo_stack.pop_front();
            }
        }
    }

    /// Start grouping mutations into a single undo step. Ignored while a
    /// batch is already open; the outer batch keeps going.
    pub fn begin_batch(&mut self, description: Option<String>) {
        if self.current_batch.is_some() {
            return;
        }
        self.current_batch = Some(PendingBatch {
            description,
            recorded: false,
        });
    }

    /// Close the current batch
    pub fn end_batch(&mut self) {
        self.current_batch = None;
    }

    pub fn is_batching(&self) -> bool {
        self.current_batch.is_some()
    }

    /// Restore the most recent snapshot into `tree`. Closes any open batch.
    pub fn undo(&mut self, tree: &mut ComponentNode) -> bool {
        self.current_batch = None;

        let Some(snapshot) = self.undo_stack.pop_back() else {
            return false;
        };

        let current = std::mem::replace(tree, snapshot.tree);
        self.redo_stack.push(Snapshot {
            tree: current,
            description: snapshot.description,
        });
        true
    }

    /// Reapply the most recently undone state into `tree`. Closes any open batch.
    pub fn redo(&mut self, tree: &mut ComponentNode) -> bool {
        self.current_batch = None;

        let Some(snapshot) = self.redo_stack.pop() else {
            return false;
        };

        let current = std::mem::replace(tree, snapshot.tree);
        self.push_undo(Snapshot {
            tree: current,
            description: snapshot.description,
        });
        true
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get the number of undo levels available
    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of redo levels available
    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_levels(&self) -> usize {
        self.max_levels
    }

    /// Undo snapshots, oldest first
    pub fn undo_snapshots(&self) -> impl Iterator<Item = &Snapshot> {
        self.undo_stack.iter()
    }

    /// Redo snapshots, oldest first
    pub fn redo_snapshots(&self) -> impl Iterator<Item = &Snapshot> {
        self.redo_stack.iter()
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current_batch = None;
    }

    /// Get description of the next undo operation
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack
            .back()
            .and_then(|snapshot| snapshot.description.as_deref())
    }

    /// Get description of the next redo operation
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack
            .last()
            .and_then(|snapshot| snapshot.description.as_deref())
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}
