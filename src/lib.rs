use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod judgment;
pub mod page;
pub mod state;

pub use crate::config::AppConfig;
pub use crate::state::AppState;

/// Upper bound for form and JSON bodies; generated judgments are posted back for download
/// base64-encoded.
pub const BODY_LIMIT: usize = 2 * 1024 * 1024;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn bad_gateway(message: &str) -> Self {
        Self::new("BadGateway", message)
    }

    pub fn service_unavailable(message: &str) -> Self {
        Self::new("ServiceUnavailable", message)
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::judgment::handlers::generate_judgment,
        crate::judgment::handlers::export_judgment,
        crate::judgment::handlers::template_status
    ),
    components(
        schemas(
            judgment::handlers::GenerateJudgmentRequest,
            judgment::handlers::JudgmentResponse,
            judgment::handlers::ExportJudgmentRequest,
            judgment::handlers::TemplateStatus,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Judgment Service", description = "Divorce judgment drafting endpoints.")
    )
)]
pub struct ApiDoc;

fn api_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}

/// Page and API routes, without static files, metrics or docs.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().limit(BODY_LIMIT))
        .app_data(web::JsonConfig::default().limit(BODY_LIMIT))
        .configure(page::config)
        .service(
            web::scope("/api")
                .configure(judgment::handlers::config)
                .wrap(api_cors()),
        );
}

pub async fn run() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    log::debug!("Loaded configuration: {:?}", config);

    let app_state = match AppState::new(&config) {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            log::error!("Failed to initialise application state: {:#}", e);
            return Err(e);
        }
    };

    match app_state.judgments.load_template() {
        Ok(template) => log::info!(
            "Template {} ready ({} bytes)",
            config.template_path.display(),
            template.as_str().len()
        ),
        Err(_) => log::warn!(
            "Template {} is not readable; generation stays disabled until it is",
            config.template_path.display()
        ),
    }

    let prometheus = PrometheusMetricsBuilder::new("judgment_drafter_server")
        .endpoint("/metrics")
        .build()
        .map_err(|e| anyhow::anyhow!("failed to create Prometheus metrics middleware: {}", e))?;

    let static_dir = config.static_dir.clone();
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .wrap(prometheus.clone())
            .app_data(app_state.clone())
            .configure(configure)
            .service(actix_files::Files::new("/static", &static_dir))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .keep_alive(actix_web::http::KeepAlive::Os)
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?
    .run()
    .await?;

    Ok(())
}
