use super::config::WatcherConfig;
use serde::{Deserialize, Serialize};
use std::process::Command;
use tracing::warn;

/// Checks whether a systemd unit is currently active.
pub fn service_is_active(unit: &str) -> bool {
    match Command::new("systemctl").arg("is-active").arg(unit).output() {
        Ok(output) => output.status.success(),
        Err(e) => {
            warn!("Could not check state of {}: {}", unit, e);
            false
        }
    }
}

/// Redacted view of the watcher configuration for status reporting: the token
/// is cut down to its first five characters and the `active` flag reflects
/// the live service state rather than the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSummary {
    #[serde(rename = "apiToken")]
    pub api_token: String,
    pub directory: String,
    pub active: bool,
}

impl ConfigSummary {
    pub fn from_config(config: &WatcherConfig, service_active: bool) -> Self {
        let truncated: String = config
            .api_token
            .as_deref()
            .unwrap_or("")
            .chars()
            .take(5)
            .collect();

        Self {
            api_token: format!("{}...", truncated),
            directory: config.directory.clone().unwrap_or_default(),
            active: service_active,
        }
    }
}
