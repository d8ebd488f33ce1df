//! Context block sent to the remote providers alongside the question.

use vitalwatch_core::models::chat_context::ChatContext;

fn or_na<T: ToString>(value: Option<&T>) -> String {
    value.map_or_else(|| "N/A".to_string(), ToString::to_string)
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

/// Six fixed lines describing the latest result. Missing values read `N/A`,
/// empty lists read `none`.
pub fn build_context_text(context: &ChatContext) -> String {
    [
        format!("Health score: {}", or_na(context.final_score.as_ref())),
        format!("Risk level: {}", or_na(context.risk.as_ref())),
        format!("Risk flags: {}", join_or_none(&context.flags)),
        format!("Conditions: {}", join_or_none(&context.conditions)),
        format!("Doctor review: {}", or_na(context.doctor_review.as_ref())),
        format!("Summary: {}", or_na(context.summary.as_ref())),
    ]
    .join("\n")
}
