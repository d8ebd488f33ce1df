//! vitalwatch-rules
//!
//! The rule engine: input normalization, age profiles, scoring, heuristic
//! flags, clinical-pattern detection, doctor-review urgency and risk tiers.
//! Pure functions only, no I/O.
//!
//! Everything here is keyword and threshold matching over self-reported
//! data. It is a non-authoritative heuristic, not medical logic, and must
//! never be presented as a diagnosis.

pub mod blood_pressure;
pub mod conditions;
pub mod error;
pub mod flags;
pub mod normalize;
pub mod patterns;
pub mod profile;
pub mod review;
pub mod risk;
pub mod scoring;

use serde::Serialize;

use vitalwatch_core::models::condition::Condition;
use vitalwatch_core::models::evaluation::{DoctorReview, RiskTier};
use vitalwatch_core::models::input::HealthInput;
use vitalwatch_core::models::profile::AgeProfile;

use flags::Flag;

/// Output of the rule engine for one submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub profile: AgeProfile,
    /// Score before the per-flag penalty.
    pub base_score: u8,
    /// Final score, 0–100.
    pub score: u8,
    pub heuristic_flags: Vec<Flag>,
    /// Heuristic flag labels followed by condition labels, deduplicated.
    pub flags: Vec<String>,
    pub conditions: Vec<Condition>,
    pub risk: RiskTier,
    pub doctor_review: DoctorReview,
}

/// Run every rule against a validated submission.
pub fn evaluate(input: &HealthInput) -> Assessment {
    let profile = profile::resolve_age_profile(input.patient_age);

    let heuristic_flags = flags::detect_flags(input, &profile);
    let conditions = conditions::detect_conditions(input, &profile);
    let combined = risk::combine_flags(&heuristic_flags, &conditions);

    let base_score = scoring::base_score(input, &profile);
    let score = scoring::apply_flag_penalty(base_score, heuristic_flags.len());
    let risk = risk::classify_risk(score, combined.len());
    let doctor_review = review::classify_doctor_review(input, &conditions, &profile);

    tracing::debug!(
        age_profile = %profile.label(),
        base_score,
        score,
        flags = combined.len(),
        conditions = conditions.len(),
        risk = %risk,
        "evaluation complete"
    );

    Assessment {
        profile,
        base_score,
        score,
        heuristic_flags,
        flags: combined,
        conditions,
        risk,
        doctor_review,
    }
}
