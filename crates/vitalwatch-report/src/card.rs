//! Report-card view model: the flattened, display-ready strings the PDF
//! template renders.

use std::sync::LazyLock;

use jiff::civil::Date;
use regex::Regex;
use serde::{Deserialize, Serialize};

use vitalwatch_core::models::evaluation::EvaluationResult;
use vitalwatch_core::models::input::HealthInput;

use crate::badge::{HealthBadge, HealthCondition};

/// Advice lines printed on the card; the rest are dropped.
pub const MAX_CARD_ADVICES: usize = 6;

pub const NO_RISKS: &str = "No major risk flags";
pub const NO_CONDITIONS: &str = "No specific condition pattern detected";

static NON_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("Invalid slug regex"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportCard {
    pub patient_name: String,
    pub age_label: String,
    pub health_level: String,
    /// e.g. `"64%"`.
    pub health_score: String,
    pub health_badge: String,
    pub badge_class: String,
    pub risks: String,
    pub conditions: String,
    pub doctor_review: String,
    pub health_reports: String,
    pub advices: Vec<String>,
    pub generated_on: String,
}

impl ReportCard {
    pub fn new(input: &HealthInput, result: &EvaluationResult, generated_on: Date) -> Self {
        let badge = HealthBadge::from_score(result.score);
        let condition_labels: Vec<&str> =
            result.conditions.iter().map(|c| c.label.as_str()).collect();

        Self {
            patient_name: single_line(&result.patient_name),
            age_label: result.age_label.clone(),
            health_level: HealthCondition::from_score(result.score).label().to_string(),
            health_score: format!("{}%", result.score),
            health_badge: badge.label().to_string(),
            badge_class: badge.css_class().to_string(),
            risks: join_or(&result.flags, NO_RISKS),
            conditions: join_or(&condition_labels, NO_CONDITIONS),
            doctor_review: result.doctor_review.message().to_string(),
            health_reports: single_line(&health_reports(
                input,
                &condition_labels,
                &result.summary,
            )),
            advices: result
                .recommendations
                .iter()
                .take(MAX_CARD_ADVICES)
                .map(|advice| single_line(advice))
                .collect(),
            generated_on: generated_on.strftime("%Y-%m-%d").to_string(),
        }
    }

    /// Download name, e.g. `health-report-jane-doe.pdf`.
    pub fn file_name(&self) -> String {
        report_file_name(&self.patient_name)
    }
}

/// Collapse line breaks so a value stays on its template line; the PDF
/// renderer reads every line as its own block.
pub fn single_line(text: &str) -> String {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn join_or<S: AsRef<str>>(items: &[S], empty: &str) -> String {
    if items.is_empty() {
        return empty.to_string();
    }
    items.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ")
}

fn health_reports(input: &HealthInput, condition_labels: &[&str], summary: &str) -> String {
    format!(
        "Medical History: {} | Symptoms: {} | Medications: {} | \
         Vitals: HR {}, BP {}, Sleep {}h, Steps {} | \
         Detected Conditions: {} | Summary: {}",
        input.medical_history,
        input.symptoms,
        input.medications,
        input.heart_rate,
        input.blood_pressure,
        input.sleep_hours,
        input.steps,
        join_or(condition_labels, "None"),
        summary,
    )
}

/// `health-report-<slug>.pdf`, where the slug is the lower-cased name with
/// every run of non-alphanumerics replaced by `-`.
pub fn report_file_name(patient_name: &str) -> String {
    let name = if patient_name.trim().is_empty() {
        "patient".to_string()
    } else {
        patient_name.to_lowercase()
    };
    format!("health-report-{}.pdf", NON_SLUG.replace_all(&name, "-"))
}
