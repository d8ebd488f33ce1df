use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::condition::Condition;

/// Coarse risk classification derived from score and flag count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How soon a clinician should look at the submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DoctorReview {
    Urgent,
    Soon,
    Routine,
    NotNeeded,
}

impl DoctorReview {
    /// The fixed advisory message shown to the user.
    pub fn message(self) -> &'static str {
        match self {
            DoctorReview::Urgent => "Urgent doctor review recommended (within 24h)",
            DoctorReview::Soon => "Doctor review recommended soon",
            DoctorReview::Routine => "Routine doctor review suggested",
            DoctorReview::NotNeeded => "No immediate doctor review needed",
        }
    }
}

impl fmt::Display for DoctorReview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// The vitals the chat "vitals" intent answers from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VitalsSnapshot {
    pub heart_rate: f64,
    pub blood_pressure: String,
    pub sleep_hours: f64,
    pub steps: u32,
}

/// Everything computed for one submission.
///
/// Replaced wholesale on every submission; never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluationResult {
    pub patient_name: String,
    pub age_label: String,
    /// Always within 0–100.
    pub score: u8,
    pub risk: RiskTier,
    /// Heuristic flags followed by condition labels, duplicates removed.
    pub flags: Vec<String>,
    pub conditions: Vec<Condition>,
    pub doctor_review: DoctorReview,
    pub recommendations: Vec<String>,
    pub summary: String,
    pub vitals: VitalsSnapshot,
}
