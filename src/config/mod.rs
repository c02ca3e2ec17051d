pub mod settings;

pub use settings::{PanelConfig, ServerConfig, Settings, SourceKind};
