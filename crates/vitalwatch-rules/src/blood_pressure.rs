use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use vitalwatch_core::models::profile::AgeProfile;

/// Systolic below this counts as low pressure.
pub const LOW_SYSTOLIC: u16 = 95;
/// Diastolic below this counts as low pressure.
pub const LOW_DIASTOLIC: u16 = 60;

static BP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{2,3})\s*[/-]\s*(\d{2,3})").expect("Invalid blood pressure regex")
});

/// A blood-pressure reading extracted from free text.
///
/// Both parts are `None` when the text does not contain a reading; every
/// pressure-based rule is then silently disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BloodPressure {
    pub systolic: Option<u16>,
    pub diastolic: Option<u16>,
}

/// Extract the first `SYS/DIA` (or `SYS-DIA`) pair of 2–3 digit numbers.
pub fn parse_blood_pressure(text: &str) -> BloodPressure {
    let Some(caps) = BP_PATTERN.captures(text) else {
        return BloodPressure::default();
    };
    BloodPressure {
        systolic: caps[1].parse().ok(),
        diastolic: caps[2].parse().ok(),
    }
}

impl BloodPressure {
    pub fn is_parsed(&self) -> bool {
        self.systolic.is_some() && self.diastolic.is_some()
    }

    // A zero reading never triggers a rule.
    fn sys(&self) -> Option<u16> {
        self.systolic.filter(|v| *v > 0)
    }

    fn dia(&self) -> Option<u16> {
        self.diastolic.filter(|v| *v > 0)
    }

    /// At or above the profile's "high" thresholds on either side.
    pub fn is_high(&self, profile: &AgeProfile) -> bool {
        self.sys().is_some_and(|s| s >= profile.bp_high_sys)
            || self.dia().is_some_and(|d| d >= profile.bp_high_dia)
    }

    /// At or above the profile's "urgent" thresholds on either side.
    pub fn is_urgent(&self, profile: &AgeProfile) -> bool {
        self.sys().is_some_and(|s| s >= profile.bp_urgent_sys)
            || self.dia().is_some_and(|d| d >= profile.bp_urgent_dia)
    }

    pub fn is_low(&self) -> bool {
        self.sys().is_some_and(|s| s < LOW_SYSTOLIC) || self.dia().is_some_and(|d| d < LOW_DIASTOLIC)
    }
}
