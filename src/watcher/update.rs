use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("API token is missing")]
    MissingToken,
    #[error("The directory does not exist on file system")]
    DirectoryNotFound,
    #[error("Could not read configuration: {0}")]
    Read(#[source] std::io::Error),
    #[error("Configuration is not a JSON object")]
    NotAnObject,
    #[error("Configuration is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not write configuration: {0}")]
    Write(#[source] std::io::Error),
}

/// Writes edited token and directory values back into the watcher's
/// config.json, preserving any other keys the file carries.
///
/// Unlike the load path this does not degrade on failure: a configuration
/// that cannot be read must not be overwritten.
pub fn update_config(path: &Path, api_token: &str, directory: &str) -> Result<(), UpdateError> {
    if api_token.is_empty() {
        return Err(UpdateError::MissingToken);
    }
    if !Path::new(directory).exists() {
        return Err(UpdateError::DirectoryNotFound);
    }

    let raw = fs::read_to_string(path).map_err(UpdateError::Read)?;
    let mut config: Value = serde_json::from_str(&raw)?;
    let fields = config.as_object_mut().ok_or(UpdateError::NotAnObject)?;

    fields.insert("apiToken".to_string(), Value::from(api_token));
    fields.insert("directory".to_string(), Value::from(directory));

    fs::write(path, serde_json::to_string_pretty(&config)?).map_err(UpdateError::Write)?;

    info!("Watcher configuration updated at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::watcher::config::WatcherConfig;

    #[test]
    fn test_update_rejects_empty_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{}").unwrap();

        let err = update_config(&path, "", dir.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, UpdateError::MissingToken));
    }

    #[test]
    fn test_update_rejects_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{}").unwrap();

        let err = update_config(&path, "tok", "/no/such/directory").unwrap_err();
        assert!(matches!(err, UpdateError::DirectoryNotFound));
    }

    #[test]
    fn test_update_requires_readable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = update_config(&path, "tok", dir.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, UpdateError::Read(_)));
    }

    #[test]
    fn test_update_rejects_malformed_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ truncated").unwrap();

        let err = update_config(&path, "tok", dir.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, UpdateError::Json(_)));
    }

    #[test]
    fn test_update_preserves_unrelated_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"active": true, "apiToken": "old", "directory": "/old", "ttl": 11400}"#,
        )
        .unwrap();

        let watch_dir = dir.path().join("zones");
        fs::create_dir(&watch_dir).unwrap();
        let watch_dir = watch_dir.to_str().unwrap();

        update_config(&path, "newtoken", watch_dir).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["apiToken"], "newtoken");
        assert_eq!(value["directory"], watch_dir);
        assert_eq!(value["active"], true);
        assert_eq!(value["ttl"], 11400);

        // The loader reads the updated file back unchanged.
        let config = WatcherConfig::parse(&raw);
        assert_eq!(config.api_token.as_deref(), Some("newtoken"));
        assert_eq!(config.directory.as_deref(), Some(watch_dir));
    }
}
