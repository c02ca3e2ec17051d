use super::config::WatcherConfig;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tracing::warn;

/// Retrieval strategy for the watcher configuration.
///
/// Loading never fails: any open, spawn, or parse problem degrades to
/// [`WatcherConfig::empty`] so the panel can still render with defaults.
/// A fresh configuration is read on every call; nothing is cached.
pub trait ConfigSource: Send + Sync {
    fn load(&self) -> WatcherConfig;
}

/// Reads the configuration straight from the watcher's config.json.
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigSource for FileConfigSource {
    fn load(&self) -> WatcherConfig {
        match fs::read_to_string(&self.path) {
            Ok(raw) => WatcherConfig::parse(&raw),
            Err(e) => {
                warn!(
                    "Could not read watcher configuration {}: {}",
                    self.path.display(),
                    e
                );
                WatcherConfig::empty()
            }
        }
    }
}

/// Invokes an external helper and parses its captured stdout.
pub struct CommandConfigSource {
    program: PathBuf,
}

impl CommandConfigSource {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl ConfigSource for CommandConfigSource {
    fn load(&self) -> WatcherConfig {
        // The helper reports its own failures as JSON on stdout; the exit
        // code is not inspected.
        match Command::new(&self.program).output() {
            Ok(output) => WatcherConfig::parse(&String::from_utf8_lossy(&output.stdout)),
            Err(e) => {
                warn!(
                    "Could not run config helper {}: {}",
                    self.program.display(),
                    e
                );
                WatcherConfig::empty()
            }
        }
    }
}
