use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use ts_rs::TS;

use super::evaluation::EvaluationResult;

/// Snapshot of the latest result sent along with a chat question.
///
/// Every field is optional: the browser may ask before any submission, and
/// the server must still build a prompt from whatever it was given. Fields
/// are read one at a time, so an ill-typed field is dropped on its own
/// instead of discarding the whole context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ChatContext {
    #[serde(deserialize_with = "lenient_text")]
    #[ts(optional)]
    pub summary: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    #[ts(optional)]
    pub risk: Option<String>,
    /// Numbers and numeric strings are accepted.
    #[serde(deserialize_with = "lenient_number")]
    #[ts(optional)]
    pub final_score: Option<f64>,
    #[serde(deserialize_with = "lenient_list")]
    pub flags: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub conditions: Vec<String>,
    #[serde(deserialize_with = "lenient_text")]
    #[ts(optional)]
    pub doctor_review: Option<String>,
}

/// Strings as-is, numbers and booleans stringified, anything else dropped.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().filter_map(scalar_text).collect(),
        _ => Vec::new(),
    })
}

impl From<&EvaluationResult> for ChatContext {
    fn from(result: &EvaluationResult) -> Self {
        Self {
            summary: Some(result.summary.clone()),
            risk: Some(result.risk.to_string()),
            final_score: Some(f64::from(result.score)),
            flags: result.flags.clone(),
            conditions: result.conditions.iter().map(|c| c.label.clone()).collect(),
            doctor_review: Some(result.doctor_review.message().to_string()),
        }
    }
}
