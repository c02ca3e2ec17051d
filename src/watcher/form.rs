use super::config::{WatcherConfig, DEFAULT_DIRECTORY};
use serde::{Deserialize, Serialize};

/// The two historical behaviors of the "Aktive" checkbox.
///
/// The two legacy fragments disagreed on when the box shows as checked, and
/// operators may depend on either reading, so both survive as selectable
/// policies instead of being unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivePolicy {
    /// The box renders checked unconditionally; the stored token only decides
    /// whether the attribute value spells it out.
    TokenPresent,
    /// The box is unchecked unless `active` is present and true.
    ActiveFlag,
}

/// Values the three form controls are pre-populated with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub active_checked: bool,
    pub api_token: String,
    pub directory: String,
}

impl FormState {
    pub fn derive(config: &WatcherConfig, policy: ActivePolicy) -> Self {
        let active_checked = match policy {
            ActivePolicy::TokenPresent => true,
            ActivePolicy::ActiveFlag => config.active == Some(true),
        };

        Self {
            active_checked,
            api_token: config.api_token.clone().unwrap_or_default(),
            directory: config
                .directory
                .clone()
                .unwrap_or_else(|| DEFAULT_DIRECTORY.to_string()),
        }
    }
}
