pub mod config;
pub mod form;
pub mod fragment;
pub mod source;
pub mod status;
pub mod update;

use crate::config::{PanelConfig, SourceKind};
use anyhow::Result;
use source::{CommandConfigSource, ConfigSource, FileConfigSource};
use std::sync::Arc;

/// Builds the configured retrieval strategy for the watcher configuration.
pub fn build_source(panel: &PanelConfig) -> Result<Arc<dyn ConfigSource>> {
    match panel.source {
        SourceKind::File => Ok(Arc::new(FileConfigSource::new(&panel.config_path))),
        SourceKind::Command => {
            let helper = panel
                .helper_path
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("panel.helper_path is required for the command source"))?;
            Ok(Arc::new(CommandConfigSource::new(helper)))
        }
    }
}
