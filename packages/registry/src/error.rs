//! Error types for the registries

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("Component {0} not found")]
    ComponentNotFound(String),
}
