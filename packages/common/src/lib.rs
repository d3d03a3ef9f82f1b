//! Shared types for the Designable workspace: the component tree node,
//! depth-first traversal helpers and id generation.

pub mod id_generator;
pub mod node;
pub mod visitor;

pub use id_generator::*;
pub use node::*;
pub use visitor::*;
