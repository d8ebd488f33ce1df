use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Five-level motivational badge derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum HealthBadge {
    CriticalCare,
    RecoveryMode,
    HealthTracker,
    WellnessStar,
    HealthChampion,
}

impl HealthBadge {
    pub fn from_score(score: u8) -> Self {
        match score.min(100) {
            0..40 => HealthBadge::CriticalCare,
            40..60 => HealthBadge::RecoveryMode,
            60..75 => HealthBadge::HealthTracker,
            75..90 => HealthBadge::WellnessStar,
            _ => HealthBadge::HealthChampion,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HealthBadge::CriticalCare => "Critical Care",
            HealthBadge::RecoveryMode => "Recovery Mode",
            HealthBadge::HealthTracker => "Health Tracker",
            HealthBadge::WellnessStar => "Wellness Star",
            HealthBadge::HealthChampion => "Health Champion",
        }
    }

    /// Stylesheet class used by the front-end.
    pub fn css_class(self) -> &'static str {
        match self {
            HealthBadge::CriticalCare => "badge-critical",
            HealthBadge::RecoveryMode => "badge-low",
            HealthBadge::HealthTracker => "badge-mid",
            HealthBadge::WellnessStar => "badge-good",
            HealthBadge::HealthChampion => "badge-elite",
        }
    }
}

/// Three-state gauge shown next to the score ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum HealthCondition {
    Low,
    Mid,
    Excellent,
}

impl HealthCondition {
    pub fn from_score(score: u8) -> Self {
        match score.min(100) {
            0..50 => HealthCondition::Low,
            80.. => HealthCondition::Excellent,
            _ => HealthCondition::Mid,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HealthCondition::Low => "Low",
            HealthCondition::Mid => "Mid",
            HealthCondition::Excellent => "Excellent",
        }
    }
}
