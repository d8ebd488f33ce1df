use std::fmt;

use serde::{Deserialize, Serialize};

use vitalwatch_core::models::input::HealthInput;
use vitalwatch_core::models::profile::AgeProfile;

use crate::blood_pressure::parse_blood_pressure;
use crate::patterns;

/// Heart rate must exceed the profile's high bound by this much to flag.
pub const HEART_RATE_FLAG_MARGIN: f64 = 5.0;
/// Fixed, independent of age profile.
pub const SLEEP_DEFICIT_HOURS: f64 = 6.0;
/// Fixed, independent of age profile.
pub const LOW_ACTIVITY_STEPS: u32 = 4000;

/// A short heuristic warning derived from a single predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flag {
    AbnormalHeartRate,
    CriticalBloodPressure,
    ElevatedBloodPressure,
    LowBloodPressure,
    SleepDeficit,
    LowActivity,
    HighStress,
    CriticalSymptoms,
}

impl Flag {
    pub fn label(self) -> &'static str {
        match self {
            Flag::AbnormalHeartRate => "Abnormal heart rate",
            Flag::CriticalBloodPressure => "Critical blood pressure",
            Flag::ElevatedBloodPressure => "Elevated blood pressure",
            Flag::LowBloodPressure => "Low blood pressure",
            Flag::SleepDeficit => "Sleep deficit",
            Flag::LowActivity => "Low activity",
            Flag::HighStress => "High stress",
            Flag::CriticalSymptoms => "Critical symptom keywords",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Emit one flag per independently true predicate, in evaluation order.
///
/// Blood pressure contributes at most one flag: critical wins over elevated,
/// which wins over low.
pub fn detect_flags(input: &HealthInput, profile: &AgeProfile) -> Vec<Flag> {
    let mut flags = Vec::new();

    if input.heart_rate > profile.heart_rate_high + HEART_RATE_FLAG_MARGIN
        || input.heart_rate < profile.heart_rate_low
    {
        flags.push(Flag::AbnormalHeartRate);
    }

    let bp = parse_blood_pressure(&input.blood_pressure);
    if bp.is_urgent(profile) {
        flags.push(Flag::CriticalBloodPressure);
    } else if bp.is_high(profile) {
        flags.push(Flag::ElevatedBloodPressure);
    } else if bp.is_low() {
        flags.push(Flag::LowBloodPressure);
    }

    if input.sleep_hours < SLEEP_DEFICIT_HOURS {
        flags.push(Flag::SleepDeficit);
    }
    if input.steps < LOW_ACTIVITY_STEPS {
        flags.push(Flag::LowActivity);
    }
    if patterns::is_high_stress(&input.stress) {
        flags.push(Flag::HighStress);
    }
    if patterns::has_critical_symptoms(&input.symptoms) {
        flags.push(Flag::CriticalSymptoms);
    }

    flags
}
