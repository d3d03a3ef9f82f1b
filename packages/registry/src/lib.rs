//! # Designable Registry
//!
//! Static metadata and editor capabilities consulted by the designer:
//!
//! - [`LocaleStore`]: per-language key → string tables with key fallback
//! - [`ComponentCatalog`]: component metadata, defaults and property schema
//! - [`BehaviorRegistry`]: ordered (selector, capabilities) rules; the first
//!   rule whose selector accepts a node decides what the editor may do with it
//!
//! Registries are plain owned values. Build them once with the
//! `build_default_*` constructors (or by hand) and pass them to whatever
//! composes a designer session.

mod behavior;
mod catalog;
mod defaults;
mod error;
mod locale;

pub use behavior::{
    matches_any_type, matches_type, BehaviorRegistry, ComponentBehavior, PixelStep, ResizeAxis,
    ResizeHandles, Resizer, Selector,
};
pub use catalog::{ComponentCatalog, ComponentMetadata, PropKind, PropSchema, DEFAULT_GROUP};
pub use defaults::{build_default_behaviors, build_default_catalog, build_default_locales};
pub use error::RegistryError;
pub use locale::{LocaleStore, DEFAULT_LANGUAGE};
