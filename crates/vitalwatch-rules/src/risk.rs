use std::collections::HashSet;

use vitalwatch_core::models::condition::Condition;
use vitalwatch_core::models::evaluation::RiskTier;

use crate::flags::Flag;

pub const HIGH_RISK_SCORE: u8 = 50;
pub const HIGH_RISK_FLAG_COUNT: usize = 4;
pub const MEDIUM_RISK_SCORE: u8 = 75;

/// Flag labels followed by condition labels, keeping the first occurrence.
pub fn combine_flags(flags: &[Flag], conditions: &[Condition]) -> Vec<String> {
    let mut seen = HashSet::new();
    flags
        .iter()
        .map(|f| f.label())
        .chain(conditions.iter().map(|c| c.label.as_str()))
        .filter(|label| seen.insert(*label))
        .map(str::to_string)
        .collect()
}

pub fn classify_risk(score: u8, flag_count: usize) -> RiskTier {
    if score < HIGH_RISK_SCORE || flag_count >= HIGH_RISK_FLAG_COUNT {
        RiskTier::High
    } else if score < MEDIUM_RISK_SCORE {
        RiskTier::Medium
    } else {
        RiskTier::Low
    }
}
