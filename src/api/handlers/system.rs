use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::api::models::HealthResponse;
use crate::api::server::PanelState;
use crate::config::SourceKind;

pub async fn health(state: web::Data<PanelState>) -> actix_web::Result<HttpResponse> {
    let config_source = match state.settings.panel.source {
        SourceKind::File => "file",
        SourceKind::Command => "command",
    };

    let response = HealthResponse {
        status: "healthy".to_string(),
        config_source: config_source.to_string(),
        service_unit: state.settings.panel.service_unit.clone(),
        timestamp: Utc::now(),
    };

    Ok(HttpResponse::Ok().json(response))
}
