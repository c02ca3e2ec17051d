use serde::{Deserialize, Serialize};
use tracing::debug;

/// Directory the watcher monitors when the configuration does not name one.
pub const DEFAULT_DIRECTORY: &str = "/var/named";

/// Settings of the zone-update watcher as stored in its config.json.
///
/// Every field is optional: the panel must stay renderable when the file is
/// missing, unreadable, or only partially filled in. Absence is a first-class
/// state, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatcherConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(rename = "apiToken", skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
}

impl WatcherConfig {
    /// The all-absent configuration every failed retrieval degrades to.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses raw JSON text. Malformed input degrades to the empty
    /// configuration instead of failing the render.
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(config) => config,
            Err(e) => {
                debug!("Watcher configuration is not parseable JSON: {}", e);
                Self::empty()
            }
        }
    }
}
