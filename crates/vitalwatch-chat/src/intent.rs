//! Local intent matcher: canned answers from the latest result, no network.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use vitalwatch_core::models::evaluation::EvaluationResult;

pub const NO_RESULT_REPLY: &str = "Please submit your health data first so I can answer accurately.";
pub const GENERAL_REPLY: &str =
    "Focus on sleep consistency, stress control, and regular activity based on your latest profile.";

const MAX_SPOKEN_RECOMMENDATIONS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Health,
    Risk,
    Flags,
    Conditions,
    Doctor,
    Recommendation,
    Vitals,
    Summary,
}

/// Checked top to bottom; the first match wins.
static INTENT_PATTERNS: LazyLock<Vec<(Intent, Regex)>> = LazyLock::new(|| {
    [
        (Intent::Greeting, r"^\s*(hi|hello|hey|good (morning|afternoon|evening))\b"),
        (Intent::Health, r"how is my health|how am i doing|health score|overall"),
        (Intent::Risk, r"\brisk"),
        (Intent::Flags, r"\bflag|warning|alert"),
        (Intent::Conditions, r"condition|pattern|disease|diagnos"),
        (Intent::Doctor, r"doctor|physician|clinic|appointment"),
        (Intent::Recommendation, r"recommend|advice|advise|suggest|what should i|\btips?\b"),
        (Intent::Vitals, r"vital|heart|pulse|blood pressure|\bbp\b|sleep|steps"),
        (Intent::Summary, r"summar|medical history|history"),
    ]
    .into_iter()
    .map(|(intent, pattern)| {
        let regex = Regex::new(&format!("(?i){pattern}")).expect("Invalid intent regex pattern");
        (intent, regex)
    })
    .collect()
});

pub fn classify(question: &str) -> Option<Intent> {
    INTENT_PATTERNS
        .iter()
        .find(|(_, regex)| regex.is_match(question))
        .map(|(intent, _)| *intent)
}

fn join_or(items: &[String], empty: &str) -> String {
    if items.is_empty() {
        empty.to_string()
    } else {
        items.join(", ")
    }
}

/// Answer a question from a result without any remote call.
pub fn local_reply(question: &str, result: &EvaluationResult) -> String {
    let Some(intent) = classify(question) else {
        return GENERAL_REPLY.to_string();
    };

    match intent {
        Intent::Greeting => format!(
            "Hello {}! Ask me how your health is, or about your risks and next steps.",
            result.patient_name
        ),
        Intent::Health => format!(
            "Health score {}/100, risk {}. Flags: {}.",
            result.score,
            result.risk,
            join_or(&result.flags, "none")
        ),
        Intent::Risk => format!(
            "Your risk level is {} with a health score of {}/100.",
            result.risk, result.score
        ),
        Intent::Flags => match result.flags.as_slice() {
            [] => "No risk flags were raised in your latest check.".to_string(),
            flags => format!("Flags raised: {}.", flags.join(", ")),
        },
        Intent::Conditions => {
            let labels: Vec<String> = result.conditions.iter().map(|c| c.label.clone()).collect();
            if labels.is_empty() {
                "No specific condition pattern was detected.".to_string()
            } else {
                format!(
                    "Patterns detected: {}. These are screening hints, not a diagnosis.",
                    labels.join(", ")
                )
            }
        }
        Intent::Doctor => format!("{}.", result.doctor_review.message()),
        Intent::Recommendation => {
            let top: Vec<&str> = result
                .recommendations
                .iter()
                .take(MAX_SPOKEN_RECOMMENDATIONS)
                .map(String::as_str)
                .collect();
            if top.is_empty() {
                GENERAL_REPLY.to_string()
            } else {
                top.join(" ")
            }
        }
        Intent::Vitals => format!(
            "Heart rate {} bpm, blood pressure {}, sleep {}h, steps {}.",
            result.vitals.heart_rate,
            result.vitals.blood_pressure,
            result.vitals.sleep_hours,
            result.vitals.steps
        ),
        Intent::Summary => result.summary.clone(),
    }
}
