use actix_web::{web, HttpResponse, Responder};
use log::{error, info};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::export::{export_document, DOWNLOAD_FILENAME};
use super::service::{Generation, Submission};
use crate::{AppState, ErrorResponse};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct GenerateJudgmentRequest {
    /// Free-text description of the divorce situation.
    pub situation: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct JudgmentResponse {
    pub document: String,
    pub filename: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ExportJudgmentRequest {
    pub document: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct TemplateStatus {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[utoipa::path(
    context_path = "/api",
    tag = "Judgment Service",
    post,
    path = "/judgments",
    request_body = GenerateJudgmentRequest,
    responses(
        (status = 200, description = "Judgment generated", body = JudgmentResponse),
        (status = 400, description = "Situation is empty", body = ErrorResponse),
        (status = 502, description = "Completion service failed", body = ErrorResponse),
        (status = 503, description = "Template unavailable", body = ErrorResponse)
    )
)]
pub async fn generate_judgment(
    state: web::Data<AppState>,
    req: web::Json<GenerateJudgmentRequest>,
) -> impl Responder {
    info!("Executing generate_judgment handler");

    let template = match state.judgments.load_template() {
        Ok(template) => template,
        Err(e) => {
            return HttpResponse::ServiceUnavailable()
                .json(ErrorResponse::service_unavailable(&e.user_message()));
        }
    };

    match state.judgments.submit(&template, &req.situation).await {
        Submission::EmptyInput => {
            HttpResponse::BadRequest().json(ErrorResponse::bad_request("Situation cannot be empty"))
        }
        Submission::Generated(Generation::Document(document)) => {
            HttpResponse::Ok().json(JudgmentResponse {
                document,
                filename: DOWNLOAD_FILENAME.to_string(),
            })
        }
        Submission::Generated(Generation::Failed(e)) => {
            error!("Judgment generation failed: {}", e);
            HttpResponse::BadGateway().json(ErrorResponse::bad_gateway(&e.user_message()))
        }
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Judgment Service",
    post,
    path = "/judgments/export",
    request_body = ExportJudgmentRequest,
    responses(
        (status = 200, description = "Judgment as a UTF-8 text file", body = String, content_type = "text/plain")
    )
)]
pub async fn export_judgment(req: web::Json<ExportJudgmentRequest>) -> impl Responder {
    info!("Executing export_judgment handler ({} bytes)", req.document.len());
    export_document(&req.document).into_response()
}

#[utoipa::path(
    context_path = "/api",
    tag = "Judgment Service",
    get,
    path = "/template/status",
    responses(
        (status = 200, description = "Whether the judgment template can be read", body = TemplateStatus)
    )
)]
pub async fn template_status(state: web::Data<AppState>) -> impl Responder {
    let status = match state.judgments.load_template() {
        Ok(_) => TemplateStatus {
            available: true,
            message: None,
        },
        Err(e) => TemplateStatus {
            available: false,
            message: Some(e.user_message()),
        },
    };
    HttpResponse::Ok().json(status)
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/judgments").route(web::post().to(generate_judgment)))
        .service(web::resource("/judgments/export").route(web::post().to(export_judgment)))
        .service(web::resource("/template/status").route(web::get().to(template_status)));
}
