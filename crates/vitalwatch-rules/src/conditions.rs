//! Named clinical-pattern detection.
//!
//! An ordered table of `(label, severity, advice, predicate)` rules evaluated
//! against the structured vitals and a lower-cased concatenation of symptoms
//! and history. Keyword matching only; not a diagnosis.

use vitalwatch_core::models::condition::{Condition, Severity};
use vitalwatch_core::models::input::HealthInput;
use vitalwatch_core::models::profile::AgeProfile;

use crate::blood_pressure::{BloodPressure, parse_blood_pressure};
use crate::flags::LOW_ACTIVITY_STEPS;
use crate::patterns;

pub const CARDIAC_HEART_RATE: f64 = 110.0;
pub const BURNOUT_SLEEP_HOURS: f64 = 5.5;

/// Everything a rule predicate may look at.
pub struct RuleContext<'a> {
    pub input: &'a HealthInput,
    pub profile: &'a AgeProfile,
    pub bp: BloodPressure,
    /// `"{symptoms} {history}"`, lower-cased.
    pub text: String,
}

impl<'a> RuleContext<'a> {
    pub fn new(input: &'a HealthInput, profile: &'a AgeProfile) -> Self {
        Self {
            input,
            profile,
            bp: parse_blood_pressure(&input.blood_pressure),
            text: format!("{} {}", input.symptoms, input.medical_history).to_lowercase(),
        }
    }
}

pub struct ConditionRule {
    pub label: &'static str,
    pub severity: Severity,
    pub advice: &'static str,
    pub matches: fn(&RuleContext<'_>) -> bool,
}

static CONDITION_RULES: [ConditionRule; 7] = [
    ConditionRule {
        label: "Hypertension Risk",
        severity: Severity::Serious,
        advice: "Monitor BP twice daily and consult physician for BP management.",
        matches: |ctx| ctx.bp.is_high(ctx.profile),
    },
    ConditionRule {
        label: "Hypotension Risk",
        severity: Severity::Moderate,
        advice: "Increase hydration and seek medical review if dizziness persists.",
        matches: |ctx| ctx.bp.is_low(),
    },
    ConditionRule {
        label: "Cardiac Stress Pattern",
        severity: Severity::Serious,
        advice: "Prioritize urgent cardiac evaluation if chest symptoms continue.",
        matches: |ctx| {
            ctx.input.heart_rate > CARDIAC_HEART_RATE || patterns::mentions_cardiac(&ctx.text)
        },
    },
    ConditionRule {
        label: "Respiratory Concern",
        severity: Severity::Moderate,
        advice: "Track oxygen/respiratory symptoms and consult pulmonology if worsening.",
        matches: |ctx| patterns::mentions_respiratory(&ctx.text),
    },
    ConditionRule {
        label: "Glycemic/Diabetes Concern",
        severity: Severity::Moderate,
        advice: "Maintain glucose tracking and dietary carbohydrate control.",
        matches: |ctx| patterns::mentions_glycemic(&ctx.text),
    },
    ConditionRule {
        label: "Metabolic Lifestyle Risk",
        severity: Severity::Moderate,
        advice: "Increase daily movement and improve meal quality for metabolic health.",
        matches: |ctx| {
            ctx.input.steps < LOW_ACTIVITY_STEPS && patterns::is_poor_diet(&ctx.input.diet)
        },
    },
    ConditionRule {
        label: "Burnout / Recovery Deficit",
        severity: Severity::Moderate,
        advice: "Stabilize sleep routine and add stress-recovery breaks daily.",
        matches: |ctx| {
            ctx.input.sleep_hours < BURNOUT_SLEEP_HOURS && patterns::is_high_stress(&ctx.input.stress)
        },
    },
];

/// All rules, in evaluation order.
pub fn condition_rules() -> &'static [ConditionRule] {
    &CONDITION_RULES
}

/// Evaluate every rule in order. A label is inserted at most once.
pub fn detect_conditions(input: &HealthInput, profile: &AgeProfile) -> Vec<Condition> {
    let ctx = RuleContext::new(input, profile);
    let mut conditions: Vec<Condition> = Vec::new();

    for rule in condition_rules() {
        if !(rule.matches)(&ctx) {
            continue;
        }
        if conditions.iter().any(|c| c.label == rule.label) {
            continue;
        }
        conditions.push(Condition {
            label: rule.label.to_string(),
            severity: rule.severity,
            advice: rule.advice.to_string(),
        });
    }

    conditions
}
