//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),

    #[error("Import error: {0}")]
    Import(#[from] crate::serializer::ImportError),

    #[error("Registry error: {0}")]
    Registry(#[from] designable_registry::RegistryError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Component {0} does not accept dropped children")]
    NotDroppable(String),
}
