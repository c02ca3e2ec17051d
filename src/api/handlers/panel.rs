use actix_web::{web, HttpRequest, HttpResponse};
use std::path::Path;
use tracing::{info, warn};

use crate::api::models::UpdateConfigRequest;
use crate::api::server::PanelState;
use crate::api::validators::{validate_api_token, validate_directory};
use crate::watcher::form::FormState;
use crate::watcher::fragment::{render_fragment, FragmentError};
use crate::watcher::status::{service_is_active, ConfigSummary};
use crate::watcher::update::{self, UpdateError};

/// Header the hosting panel sets on embedded requests; it stands in for the
/// legacy include guard.
pub const EMBED_HEADER: &str = "x-panel-embed";

pub async fn fragment(
    state: web::Data<PanelState>,
    req: HttpRequest,
) -> actix_web::Result<HttpResponse> {
    let embedded = req.headers().contains_key(EMBED_HEADER);
    if !embedded {
        // The configuration source is not consulted without the guard.
        warn!("Fragment requested without embed guard");
        return Ok(HttpResponse::Forbidden()
            .content_type("text/html; charset=utf-8")
            .body(FragmentError::AccessDenied.to_string()));
    }

    let policy = state.settings.panel.active_policy;
    let config = state.source.load();
    let form = FormState::derive(&config, policy);

    match render_fragment(embedded, &form, policy) {
        Ok(html) => Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html)),
        Err(FragmentError::AccessDenied) => Ok(HttpResponse::Forbidden()
            .content_type("text/html; charset=utf-8")
            .body(FragmentError::AccessDenied.to_string())),
    }
}

pub async fn update_config(
    state: web::Data<PanelState>,
    form: web::Form<UpdateConfigRequest>,
) -> actix_web::Result<HttpResponse> {
    if !validate_api_token(&form.api_token) {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "invalid_api_token",
            "message": "API token must be 1-32 alphanumeric characters"
        })));
    }

    if !validate_directory(&form.directory) {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "invalid_directory",
            "message": "Directory must be an absolute path of at most 255 characters"
        })));
    }

    let path = Path::new(&state.settings.panel.config_path);
    match update::update_config(path, &form.api_token, &form.directory) {
        Ok(()) => {
            info!("Watcher configuration updated via panel");
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "message": "Successfully updated"
            })))
        }
        Err(e @ (UpdateError::MissingToken | UpdateError::DirectoryNotFound)) => {
            Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": "invalid_request",
                "message": e.to_string()
            })))
        }
        Err(e) => {
            warn!("Configuration update failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "update_failed",
                "message": e.to_string()
            })))
        }
    }
}

pub async fn status(state: web::Data<PanelState>) -> actix_web::Result<HttpResponse> {
    let config = state.source.load();
    let active = service_is_active(&state.settings.panel.service_unit);

    Ok(HttpResponse::Ok().json(ConfigSummary::from_config(&config, active)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::watcher::source::FileConfigSource;
    use actix_web::{test, App};
    use std::fs;
    use std::sync::Arc;

    fn state_with_config(raw: &str) -> (tempfile::TempDir, web::Data<PanelState>) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, raw).unwrap();

        let mut settings = Settings::default();
        settings.panel.config_path = path.to_str().unwrap().to_string();

        let state = web::Data::new(PanelState {
            settings: Arc::new(settings),
            source: Arc::new(FileConfigSource::new(&path)),
        });
        (dir, state)
    }

    #[actix_web::test]
    async fn test_fragment_without_guard_is_denied() {
        let (_dir, state) = state_with_config(r#"{"active": true}"#);
        let app = test::init_service(
            App::new()
                .app_data(state)
                .route("/panel/fragment", web::get().to(fragment)),
        )
        .await;

        let req = test::TestRequest::get().uri("/panel/fragment").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::FORBIDDEN);

        let body = test::read_body(resp).await;
        assert_eq!(&body[..], b"invalid access");
    }

    #[actix_web::test]
    async fn test_fragment_with_guard_renders_form() {
        let (_dir, state) =
            state_with_config(r#"{"active": true, "apiToken": "tok", "directory": "/srv/zones"}"#);
        let app = test::init_service(
            App::new()
                .app_data(state)
                .route("/panel/fragment", web::get().to(fragment)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/panel/fragment")
            .insert_header((EMBED_HEADER, "1"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains(r#"value="tok""#));
        assert!(html.contains(r#"value="/srv/zones""#));
    }

    #[actix_web::test]
    async fn test_update_rejects_bad_token() {
        let (_dir, state) = state_with_config("{}");
        let app = test::init_service(
            App::new()
                .app_data(state)
                .route("/panel/config", web::post().to(update_config)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/panel/config")
            .set_form(&[("apiToken", "bad token!"), ("directory", "/var/named")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_update_writes_config() {
        let (dir, state) = state_with_config(r#"{"active": true, "apiToken": "old"}"#);
        let watch_dir = dir.path().join("zones");
        fs::create_dir(&watch_dir).unwrap();

        let config_path = state.settings.panel.config_path.clone();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .route("/panel/config", web::post().to(update_config)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/panel/config")
            .set_form(&[
                ("apiToken", "newtoken"),
                ("directory", watch_dir.to_str().unwrap()),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let raw = fs::read_to_string(config_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["apiToken"], "newtoken");
        assert_eq!(value["active"], true);
    }
}
