use serde::{Deserialize, Serialize};
use ts_rs::TS;

use vitalwatch_core::models::evaluation::{EvaluationResult, VitalsSnapshot};
use vitalwatch_core::models::input::HealthInput;
use vitalwatch_rules::Assessment;

use crate::badge::{HealthBadge, HealthCondition};
use crate::error::ReportError;
use crate::payload::encode_payload;
use crate::recommendations::build_recommendations;
use crate::summary::build_summary;

/// Combine a validated submission with its assessment into the result shown
/// to the user.
pub fn assemble(input: &HealthInput, assessment: &Assessment) -> EvaluationResult {
    EvaluationResult {
        patient_name: input.patient_name.clone(),
        age_label: assessment.profile.label(),
        score: assessment.score,
        risk: assessment.risk,
        flags: assessment.flags.clone(),
        conditions: assessment.conditions.clone(),
        doctor_review: assessment.doctor_review,
        recommendations: build_recommendations(input, &assessment.conditions),
        summary: build_summary(input),
        vitals: VitalsSnapshot {
            heart_rate: input.heart_rate,
            blood_pressure: input.blood_pressure.clone(),
            sleep_hours: input.sleep_hours,
            steps: input.steps,
        },
    }
}

/// Everything the evaluate endpoint returns for one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluationReport {
    pub result: EvaluationResult,
    pub badge: HealthBadge,
    pub badge_label: String,
    pub badge_class: String,
    pub health_condition: HealthCondition,
    /// Base64 of `{summary, risk, flags, healthScore}`.
    pub compressed: String,
}

impl EvaluationReport {
    pub fn build(input: &HealthInput, assessment: &Assessment) -> Result<Self, ReportError> {
        let result = assemble(input, assessment);
        let badge = HealthBadge::from_score(result.score);
        let compressed = encode_payload(&result)?;

        Ok(Self {
            badge,
            badge_label: badge.label().to_string(),
            badge_class: badge.css_class().to_string(),
            health_condition: HealthCondition::from_score(result.score),
            compressed,
            result,
        })
    }
}
