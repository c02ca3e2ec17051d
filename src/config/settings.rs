use crate::watcher::form::ActivePolicy;
use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub panel: PanelConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Where the watcher configuration comes from: a JSON file read directly,
/// or the captured stdout of an external helper program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    File,
    Command,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    #[serde(default = "default_source_kind")]
    pub source: SourceKind,
    /// Path of the watcher's config.json, read by the file source and
    /// written by the update endpoint.
    #[serde(default = "default_config_path")]
    pub config_path: String,
    /// Helper executable invoked (without arguments) by the command source.
    #[serde(default)]
    pub helper_path: Option<String>,
    /// Which of the two historical checkbox behaviors the fragment uses.
    #[serde(default = "default_active_policy")]
    pub active_policy: ActivePolicy,
    /// Systemd unit whose state is reported as "active" in the status summary.
    #[serde(default = "default_service_unit")]
    pub service_unit: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8089
}

fn default_source_kind() -> SourceKind {
    SourceKind::File
}

fn default_config_path() -> String {
    "/usr/local/bin/hetznerdns/config.json".to_string()
}

fn default_active_policy() -> ActivePolicy {
    ActivePolicy::ActiveFlag
}

fn default_service_unit() -> String {
    "hetznerDnsUpdate.service".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            bind_address: default_bind_address(),
            port: default_port(),
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            source: default_source_kind(),
            config_path: default_config_path(),
            helper_path: None,
            active_policy: default_active_policy(),
            service_unit: default_service_unit(),
        }
    }
}

impl Settings {
    pub fn load(config_path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("DNSPANEL").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("server.port must be non-zero");
        }

        if self.server.bind_address.parse::<std::net::IpAddr>().is_err() {
            anyhow::bail!(
                "server.bind_address is not a valid IP address: {}",
                self.server.bind_address
            );
        }

        match self.panel.source {
            SourceKind::File => {
                if self.panel.config_path.is_empty() {
                    anyhow::bail!("panel.config_path is required for the file source");
                }
            }
            SourceKind::Command => {
                if self
                    .panel
                    .helper_path
                    .as_deref()
                    .map_or(true, str::is_empty)
                {
                    anyhow::bail!("panel.helper_path is required when panel.source is \"command\"");
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.panel.source, SourceKind::File);
        assert_eq!(
            settings.panel.config_path,
            "/usr/local/bin/hetznerdns/config.json"
        );
        assert_eq!(settings.panel.service_unit, "hetznerDnsUpdate.service");
    }

    #[test]
    fn test_command_source_requires_helper() {
        let mut settings = Settings::default();
        settings.panel.source = SourceKind::Command;
        assert!(settings.validate().is_err());

        settings.panel.helper_path = Some("/usr/local/bin/hetznerdns/configGet.py".to_string());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_bad_bind_address_rejected() {
        let mut settings = Settings::default();
        settings.server.bind_address = "not-an-ip".to_string();
        assert!(settings.validate().is_err());
    }
}
