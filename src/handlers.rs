use actix_web::http::StatusCode;
use actix_web::web::{Data, Form};
use actix_web::{HttpResponse, mime};
use serde::Deserialize;

use crate::config;
use crate::errors::ExplainerError;
use crate::page::{self, PageView};
use crate::service::ExplanationService;

#[derive(Debug, Deserialize)]
pub struct ExplainForm {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub model: Option<String>,
}

fn html_page(status: StatusCode, view: &PageView<'_>) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(mime::TEXT_HTML_UTF_8)
        .body(page::render(view))
}

fn catalog_unavailable(e: &ExplainerError, selected_model: &str, code: &str) -> HttpResponse {
    log::error!("model catalog fetch failed: {}", e);
    let message = format!("Model catalog unavailable: {e}");
    html_page(
        StatusCode::BAD_GATEWAY,
        &PageView {
            model_names: &[],
            selected_model,
            code,
            report: "",
            error: Some(message.as_str()),
        },
    )
}

pub async fn index(
    service: Data<ExplanationService>,
    config: Data<config::Config>,
) -> impl actix_web::Responder {
    let model_names = match service.model_names().await {
        Ok(model_names) => model_names,
        Err(e) => return catalog_unavailable(&e, &config.default_model, ""),
    };

    html_page(
        StatusCode::OK,
        &PageView {
            model_names: &model_names,
            selected_model: &config.default_model,
            ..Default::default()
        },
    )
}

pub async fn explain(
    service: Data<ExplanationService>,
    config: Data<config::Config>,
    form: Form<ExplainForm>,
) -> impl actix_web::Responder {
    let ExplainForm { code, model } = form.into_inner();
    let model = model.unwrap_or_else(|| config.default_model.clone());

    let model_names = match service.model_names().await {
        Ok(model_names) => model_names,
        Err(e) => return catalog_unavailable(&e, &model, &code),
    };

    log::debug!("explain request: model {:?}, {} bytes of code", model, code.len());
    let report = service.explain(&code, &model).await;
    if report.is_aborted() {
        log::warn!("explanation aborted for model {:?}", model);
    }

    html_page(
        StatusCode::OK,
        &PageView {
            model_names: &model_names,
            selected_model: &model,
            code: &code,
            report: &report.render(),
            error: None,
        },
    )
}
