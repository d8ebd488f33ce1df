use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single loosely typed form field as sent by the browser.
///
/// HTML forms submit everything as text, but JSON clients may send real
/// numbers. Both are accepted and coerced later by the normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum FormValue {
    Number(f64),
    Text(String),
}

impl FormValue {
    /// Numeric view of the field. Blank or non-numeric text yields `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FormValue::Number(n) if n.is_finite() => Some(*n),
            FormValue::Number(_) => None,
            FormValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }

    /// Text view of the field. Numbers are rendered without a trailing `.0`.
    pub fn as_text(&self) -> String {
        match self {
            FormValue::Number(n) => n.to_string(),
            FormValue::Text(s) => s.clone(),
        }
    }
}

/// The health form exactly as received, before any coercion or validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct RawHealthForm {
    #[ts(optional)]
    pub patient_name: Option<FormValue>,
    #[ts(optional)]
    pub patient_age: Option<FormValue>,
    #[ts(optional)]
    pub medical_history: Option<FormValue>,
    #[ts(optional)]
    pub symptoms: Option<FormValue>,
    #[ts(optional)]
    pub medications: Option<FormValue>,
    #[ts(optional)]
    pub heart_rate: Option<FormValue>,
    #[ts(optional)]
    pub blood_pressure: Option<FormValue>,
    #[ts(optional)]
    pub sleep_hours: Option<FormValue>,
    #[ts(optional)]
    pub steps: Option<FormValue>,
    #[ts(optional)]
    pub exercise: Option<FormValue>,
    #[ts(optional)]
    pub diet: Option<FormValue>,
    #[ts(optional)]
    pub stress: Option<FormValue>,
}

/// A typed, validated health submission. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HealthInput {
    pub patient_name: String,
    /// Clamped to 1–120. Fractions are kept; only the profile label rounds.
    pub patient_age: f64,
    pub medical_history: String,
    pub symptoms: String,
    pub medications: String,
    /// Beats per minute.
    pub heart_rate: f64,
    /// Free text in `SYS/DIA` form, e.g. `"120/80"`.
    pub blood_pressure: String,
    pub sleep_hours: f64,
    pub steps: u32,
    pub exercise: String,
    pub diet: String,
    pub stress: String,
}
