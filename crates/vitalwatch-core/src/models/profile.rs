use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Age bracket used to pick a threshold profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AgeBracket {
    Adult,
    /// 60 and over.
    Senior,
}

/// Read-only threshold bundle shared by every downstream rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AgeProfile {
    pub bracket: AgeBracket,
    /// Whole years, for display.
    pub age: u8,
    pub heart_rate_high: f64,
    pub heart_rate_low: f64,
    pub sleep_low: f64,
    pub steps_low: u32,
    pub bp_high_sys: u16,
    pub bp_high_dia: u16,
    pub bp_urgent_sys: u16,
    pub bp_urgent_dia: u16,
}

impl AgeProfile {
    /// Display label, e.g. `"Adult (30)"` or `"Senior (65)"`.
    pub fn label(&self) -> String {
        match self.bracket {
            AgeBracket::Adult => format!("Adult ({})", self.age),
            AgeBracket::Senior => format!("Senior ({})", self.age),
        }
    }
}
