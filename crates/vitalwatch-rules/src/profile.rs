use vitalwatch_core::models::profile::{AgeBracket, AgeProfile};

pub const DEFAULT_AGE: f64 = 30.0;
pub const MIN_AGE: f64 = 1.0;
pub const MAX_AGE: f64 = 120.0;
pub const SENIOR_AGE: f64 = 60.0;

/// Coerce a raw age into 1–120. Missing, zero or non-finite values become 30.
/// Fractional ages are kept as given.
pub fn normalize_age(raw: Option<f64>) -> f64 {
    raw.filter(|a| a.is_finite() && *a != 0.0)
        .unwrap_or(DEFAULT_AGE)
        .clamp(MIN_AGE, MAX_AGE)
}

/// Pick the threshold bundle for an age. Two fixed variants, no interpolation.
///
/// The bracket is decided on the unrounded age, so 59.6 is still an adult.
pub fn resolve_age_profile(age: f64) -> AgeProfile {
    let exact = normalize_age(Some(age));
    let age = exact.round() as u8;

    if exact >= SENIOR_AGE {
        AgeProfile {
            bracket: AgeBracket::Senior,
            age,
            heart_rate_high: 100.0,
            heart_rate_low: 50.0,
            sleep_low: 6.5,
            steps_low: 5500,
            bp_high_sys: 145,
            bp_high_dia: 92,
            bp_urgent_sys: 165,
            bp_urgent_dia: 102,
        }
    } else {
        AgeProfile {
            bracket: AgeBracket::Adult,
            age,
            heart_rate_high: 95.0,
            heart_rate_low: 55.0,
            sleep_low: 7.0,
            steps_low: 7000,
            bp_high_sys: 140,
            bp_high_dia: 90,
            bp_urgent_sys: 160,
            bp_urgent_dia: 100,
        }
    }
}
