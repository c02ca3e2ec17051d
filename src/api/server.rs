use crate::config::Settings;
use crate::watcher;
use crate::watcher::source::ConfigSource;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

use crate::api::handlers;

pub struct PanelState {
    pub settings: Arc<Settings>,
    pub source: Arc<dyn ConfigSource>,
}

pub async fn start(settings: Arc<Settings>) -> Result<()> {
    let source = watcher::build_source(&settings.panel)?;

    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );

    info!("Starting panel server on {}", addr);

    let state = web::Data::new(PanelState {
        settings: settings.clone(),
        source,
    });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .service(
                web::scope("/panel")
                    .route("/fragment", web::get().to(handlers::panel::fragment))
                    .route("/config", web::post().to(handlers::panel::update_config))
                    .route("/status", web::get().to(handlers::panel::status))
                    .route("/health", web::get().to(handlers::system::health)),
            )
    })
    .bind(&addr)?
    .run();

    info!("Panel server listening on {}", addr);

    match server.await {
        Ok(_) => {
            info!("Panel server shutdown gracefully");
            Ok(())
        }
        Err(e) => {
            error!("Panel server error: {}", e);
            Err(anyhow::anyhow!("Panel server failed: {}", e))
        }
    }
}
