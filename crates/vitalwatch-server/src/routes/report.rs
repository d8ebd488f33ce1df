use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use axum::Json;
use jiff::Zoned;

use vitalwatch_core::models::input::RawHealthForm;
use vitalwatch_report::assemble::assemble;
use vitalwatch_report::card::ReportCard;
use vitalwatch_report::pdf::generate_pdf;
use vitalwatch_report::render::render_report_card;

use super::evaluate::parse_form;
use crate::error::ApiError;
use crate::state::AppState;

/// Evaluate a form and return the report card as a PDF download.
pub async fn report_pdf(
    State(state): State<AppState>,
    form: Result<Json<RawHealthForm>, JsonRejection>,
) -> Result<Response, ApiError> {
    let input = parse_form(form)?;
    let assessment = vitalwatch_rules::evaluate(&input);
    let result = assemble(&input, &assessment);

    let card = ReportCard::new(&input, &result, Zoned::now().date());
    let file_name = card.file_name();
    let rendered = render_report_card(&card, &state.pdf_styles.issuer)?;

    let styles = state.pdf_styles.clone();
    let logo = state.logo.clone();
    let bytes = tokio::task::spawn_blocking(move || {
        generate_pdf(&rendered, &styles, logo.as_deref())
    })
    .await
    .map_err(|e| ApiError::Internal(format!("pdf task failed: {e}")))??;

    tracing::info!(file = %file_name, bytes = bytes.len(), "report pdf generated");

    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{file_name}\""))
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
