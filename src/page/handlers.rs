use actix_web::{web, HttpResponse, Responder};
use log::{error, info, warn};
use serde::Deserialize;

use super::view::PageView;
use crate::judgment::{ExportBuffer, Submission};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub situation: String,
}

#[derive(Debug, Deserialize)]
pub struct DownloadForm {
    #[serde(default)]
    pub document: String,
}

fn render_page(state: &AppState, view: &PageView) -> HttpResponse {
    match state.pages.render(view) {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => {
            error!("Failed to render page: {}", e);
            HttpResponse::InternalServerError().body("Failed to render page")
        }
    }
}

/// GET / - idle page.
pub async fn index(state: web::Data<AppState>) -> impl Responder {
    info!("Executing index handler");

    let view = match state.judgments.load_template() {
        Ok(_) => PageView::default(),
        Err(e) => PageView::template_unavailable(String::new(), e.user_message()),
    };
    render_page(&state, &view)
}

/// POST / - run the pipeline for the submitted situation.
pub async fn submit(state: web::Data<AppState>, form: web::Form<SubmitForm>) -> impl Responder {
    let situation = form.into_inner().situation;
    info!("Executing submit handler ({} chars)", situation.chars().count());

    let template = match state.judgments.load_template() {
        Ok(template) => template,
        Err(e) => {
            let view = PageView::template_unavailable(situation, e.user_message());
            return render_page(&state, &view);
        }
    };

    let view = match state.judgments.submit(&template, &situation).await {
        Submission::EmptyInput => PageView::empty_input(situation),
        Submission::Generated(generation) => PageView::generated(situation, &generation),
    };
    render_page(&state, &view)
}

/// POST /download - return the shown text as a file.
///
/// `document` carries the value rendered by [`ExportBuffer::to_form_value`].
pub async fn download(form: web::Form<DownloadForm>) -> impl Responder {
    let document = form.into_inner().document;
    info!("Executing download handler ({} encoded bytes)", document.len());

    match ExportBuffer::from_form_value(&document) {
        Ok(buffer) => buffer.into_response(),
        Err(e) => {
            warn!("Rejected download payload: {}", e);
            HttpResponse::BadRequest().body("Invalid download payload")
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(index))
            .route(web::post().to(submit)),
    )
    .service(web::resource("/download").route(web::post().to(download)));
}
