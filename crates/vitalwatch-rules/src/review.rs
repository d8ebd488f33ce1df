use vitalwatch_core::models::condition::{Condition, Severity};
use vitalwatch_core::models::evaluation::DoctorReview;
use vitalwatch_core::models::input::HealthInput;
use vitalwatch_core::models::profile::AgeProfile;

use crate::blood_pressure::parse_blood_pressure;
use crate::patterns;

pub const URGENT_HEART_RATE_HIGH: f64 = 120.0;
pub const URGENT_HEART_RATE_LOW: f64 = 45.0;

/// Decide how soon a clinician should review. First matching branch wins.
pub fn classify_doctor_review(
    input: &HealthInput,
    conditions: &[Condition],
    profile: &AgeProfile,
) -> DoctorReview {
    let symptom_critical = patterns::has_urgent_symptoms(&input.symptoms);
    let hr_critical =
        input.heart_rate >= URGENT_HEART_RATE_HIGH || input.heart_rate <= URGENT_HEART_RATE_LOW;
    let bp_critical = parse_blood_pressure(&input.blood_pressure).is_urgent(profile);

    if symptom_critical || hr_critical || bp_critical {
        return DoctorReview::Urgent;
    }

    if conditions.iter().any(|c| c.severity >= Severity::Serious) {
        return DoctorReview::Soon;
    }

    if !conditions.is_empty() {
        return DoctorReview::Routine;
    }

    DoctorReview::NotNeeded
}
