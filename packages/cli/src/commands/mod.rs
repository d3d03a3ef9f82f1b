pub mod apply;
pub mod catalog;
pub mod init;
pub mod inspect;

pub use apply::{apply, ApplyArgs};
pub use catalog::{catalog, CatalogArgs};
pub use init::{init, InitArgs};
pub use inspect::{inspect, InspectArgs};

use crate::config::Config;
use anyhow::{Context, Result};
use designable_editor::DesignerSession;
use std::fs;
use std::path::Path;

/// Open a session over the stock registries and load `path` into it
pub(crate) fn open_session(config: &Config, path: &Path) -> Result<DesignerSession> {
    let mut session = DesignerSession::with_defaults(config.session_options());

    let content = fs::read_to_string(path)
        .with_context(|| format!("Cannot read layout {}", path.display()))?;
    session
        .engine_mut()
        .try_import_tree(&content)
        .with_context(|| format!("Invalid layout {}", path.display()))?;

    // Loading is not an edit the user can undo
    session.engine_mut().clear_history();
    Ok(session)
}
