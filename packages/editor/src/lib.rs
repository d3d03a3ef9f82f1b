//! # Designable Editor
//!
//! State core of the visual layout designer.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ registry: catalog, behaviors, locales       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ session: capability lookup + durable edits  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ engine: tree + selection + history          │
//! │  - Apply mutations with validation          │
//! │  - Snapshot undo/redo                       │
//! │  - Notify subscribers, drain deferred edits │
//! │  - Import/export JSON                       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The tree is the source of truth**: rendering is a derived view
//! 2. **Every durable edit goes through the engine**: so it is undoable
//! 3. **Misuse is never fatal**: missing targets fail softly
//!
//! ## Usage
//!
//! ```rust,ignore
//! use designable_editor::{DesignerSession, SessionOptions};
//!
//! let mut session = DesignerSession::with_defaults(SessionOptions::default());
//! let card = session.insert_from_catalog("root", "Card")?;
//! session.insert_from_catalog(&card, "Button")?;
//!
//! session.engine_mut().undo();
//! let json = session.engine().export_tree()?;
//! ```

mod engine;
mod errors;
mod mutations;
mod serializer;
mod session;
mod undo_stack;

pub use engine::{
    DesignerEngine, DesignerState, Deferred, Listener, Subscription, MAX_DEFERRED_MUTATIONS,
};
pub use errors::EditorError;
pub use mutations::{Mutation, MutationError, MutationResult};
pub use serializer::{export_tree, import_tree, ImportError};
pub use session::{Capabilities, DesignerSession, ResizeDirection, SessionOptions};
pub use undo_stack::{Snapshot, UndoStack, DEFAULT_HISTORY_LIMIT};

// Re-export common types for convenience
pub use designable_common::{ComponentNode, NodeTemplate, Props};
pub use designable_registry::ResizeAxis;
