use axum::extract::rejection::JsonRejection;
use axum::Json;

use vitalwatch_core::models::input::{HealthInput, RawHealthForm};
use vitalwatch_report::assemble::EvaluationReport;
use vitalwatch_rules::normalize::normalize;

use crate::error::ApiError;

/// Validate a raw form. Validation failures carry the corrective message.
pub(crate) fn parse_form(
    form: Result<Json<RawHealthForm>, JsonRejection>,
) -> Result<HealthInput, ApiError> {
    let Json(form) = form.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    Ok(normalize(&form)?)
}

pub async fn evaluate(
    form: Result<Json<RawHealthForm>, JsonRejection>,
) -> Result<Json<EvaluationReport>, ApiError> {
    let input = parse_form(form)?;
    let assessment = vitalwatch_rules::evaluate(&input);
    let report = EvaluationReport::build(&input, &assessment)?;

    tracing::info!(
        score = report.result.score,
        risk = %report.result.risk,
        conditions = report.result.conditions.len(),
        "evaluation served"
    );
    Ok(Json(report))
}
