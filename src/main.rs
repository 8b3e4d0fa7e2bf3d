pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::modules::assistant::adapter::outgoing::AssistantApiHttp;
use crate::modules::assistant::application::ports::outgoing::AssistantApi;
use crate::modules::portfolio::adapter::outgoing::StaticPortfolioStore;
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::service::{
    GetEducationService, GetPortfolioService, GetProjectService,
};
use crate::modules::site::application::ports::incoming::use_cases::ComposeHomePageUseCase;
use crate::modules::site::application::service::ComposeHomePageService;
use crate::shared::config::AppConfig;

use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: PortfolioUseCases,
    pub compose_home_page: Arc<dyn ComposeHomePageUseCase + Send + Sync>,
    /// Present only when `ASSISTANT_API_URL` is configured.
    pub assistant_api: Option<Arc<dyn AssistantApi + Send + Sync>>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    // Portfolio data
    let store = StaticPortfolioStore::load(config.portfolio_data_path.as_deref()).map_err(|e| {
        error!("Failed to load portfolio data: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    })?;

    // Assistant backend (optional)
    let assistant_api: Option<Arc<dyn AssistantApi + Send + Sync>> = match &config.assistant {
        Some(assistant) => match AssistantApiHttp::new(&assistant.base_url, assistant.timeout) {
            Ok(api) => {
                info!("Assistant backend configured at {}", assistant.base_url);
                Some(Arc::new(api))
            }
            Err(e) => {
                warn!("Assistant client disabled: {}", e);
                None
            }
        },
        None => None,
    };

    let state = AppState {
        portfolio: PortfolioUseCases {
            get_portfolio: Arc::new(GetPortfolioService::new(store.clone())),
            get_project: Arc::new(GetProjectService::new(store.clone())),
            get_education: Arc::new(GetEducationService::new(store.clone())),
        },
        compose_home_page: Arc::new(ComposeHomePageService::new(store)),
        assistant_api,
    };

    let server_url = config.bind_address();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Page
    cfg.service(crate::modules::site::adapter::incoming::web::routes::home_page_handler);
    // Portfolio JSON
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(
        crate::modules::portfolio::adapter::incoming::web::routes::get_single_project_handler,
    );
    cfg.service(
        crate::modules::portfolio::adapter::incoming::web::routes::get_single_education_handler,
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
