//! Keyword patterns shared by the scoring, flag, condition and review rules.

use std::sync::LazyLock;

use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid rule regex pattern")
}

static POOR_DIET: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)poor|junk|irregular"));
static HIGH_STRESS: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)high|severe"));
static CRITICAL_SYMPTOMS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)pain|breath|chest|dizziness"));
static URGENT_SYMPTOMS: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)chest pain|shortness of breath|severe dizziness|faint|blackout")
});
static CARDIAC_TERMS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)chest|palpitation|dizziness"));
static RESPIRATORY_TERMS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)breath|wheez|asthma|cough"));
static GLYCEMIC_TERMS: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)diabet|insulin|sugar"));

pub fn is_poor_diet(diet: &str) -> bool {
    POOR_DIET.is_match(diet)
}

pub fn is_high_stress(stress: &str) -> bool {
    HIGH_STRESS.is_match(stress)
}

/// Symptom words that raise the "Critical symptom keywords" flag.
pub fn has_critical_symptoms(symptoms: &str) -> bool {
    CRITICAL_SYMPTOMS.is_match(symptoms)
}

/// Symptom phrases that force an urgent doctor review.
pub fn has_urgent_symptoms(symptoms: &str) -> bool {
    URGENT_SYMPTOMS.is_match(symptoms)
}

pub fn mentions_cardiac(text: &str) -> bool {
    CARDIAC_TERMS.is_match(text)
}

pub fn mentions_respiratory(text: &str) -> bool {
    RESPIRATORY_TERMS.is_match(text)
}

pub fn mentions_glycemic(text: &str) -> bool {
    GLYCEMIC_TERMS.is_match(text)
}
