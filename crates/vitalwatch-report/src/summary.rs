use vitalwatch_core::models::input::HealthInput;

/// Characters of medical history kept in the summary.
pub const HISTORY_EXCERPT_CHARS: usize = 120;
/// Characters of symptom text kept in the summary.
pub const SYMPTOMS_EXCERPT_CHARS: usize = 90;

fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// One-line summary of a submission, used on screen, in the payload and as
/// chat context.
pub fn build_summary(input: &HealthInput) -> String {
    format!(
        "History: {} | Symptoms: {} | Vitals: HR {}, BP {}, Sleep {}h, Steps {}",
        excerpt(&input.medical_history, HISTORY_EXCERPT_CHARS),
        excerpt(&input.symptoms, SYMPTOMS_EXCERPT_CHARS),
        input.heart_rate,
        input.blood_pressure,
        input.sleep_hours,
        input.steps,
    )
}
