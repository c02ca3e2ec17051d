use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Form submission from the panel fragment; field names match the legacy
/// form controls.
#[derive(Debug, Deserialize)]
pub struct UpdateConfigRequest {
    #[serde(rename = "apiToken")]
    pub api_token: String,
    pub directory: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub config_source: String,
    pub service_unit: String,
    pub timestamp: DateTime<Utc>,
}
