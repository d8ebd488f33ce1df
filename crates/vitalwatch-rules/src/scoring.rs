use vitalwatch_core::models::input::HealthInput;
use vitalwatch_core::models::profile::AgeProfile;

use crate::blood_pressure::parse_blood_pressure;
use crate::patterns;

pub const BASELINE_SCORE: i32 = 85;

pub const SLEEP_PENALTY: i32 = 8;
pub const STEPS_PENALTY: i32 = 7;
pub const HEART_RATE_PENALTY: i32 = 10;
pub const BP_HIGH_PENALTY: i32 = 10;
/// Applied on top of [`BP_HIGH_PENALTY`].
pub const BP_URGENT_PENALTY: i32 = 6;
pub const BP_LOW_PENALTY: i32 = 4;
pub const DIET_PENALTY: i32 = 6;
pub const STRESS_PENALTY: i32 = 8;
/// Subtracted per heuristic flag after the base score is computed.
pub const FLAG_PENALTY: i32 = 3;

/// Baseline minus every penalty whose predicate holds, clamped to 0–100.
pub fn base_score(input: &HealthInput, profile: &AgeProfile) -> u8 {
    let bp = parse_blood_pressure(&input.blood_pressure);

    let penalties = [
        (input.sleep_hours < profile.sleep_low, SLEEP_PENALTY),
        (input.steps < profile.steps_low, STEPS_PENALTY),
        (
            input.heart_rate > profile.heart_rate_high || input.heart_rate < profile.heart_rate_low,
            HEART_RATE_PENALTY,
        ),
        (bp.is_high(profile), BP_HIGH_PENALTY),
        (bp.is_urgent(profile), BP_URGENT_PENALTY),
        (bp.is_low(), BP_LOW_PENALTY),
        (patterns::is_poor_diet(&input.diet), DIET_PENALTY),
        (patterns::is_high_stress(&input.stress), STRESS_PENALTY),
    ];

    let score = penalties
        .iter()
        .filter(|(applies, _)| *applies)
        .fold(BASELINE_SCORE, |acc, (_, penalty)| acc - penalty);

    score.clamp(0, 100) as u8
}

/// Subtract the flat per-flag penalty and floor at zero.
pub fn apply_flag_penalty(base: u8, flag_count: usize) -> u8 {
    let flag_count = i32::try_from(flag_count).unwrap_or(i32::MAX / FLAG_PENALTY);
    let score = i32::from(base).saturating_sub(flag_count.saturating_mul(FLAG_PENALTY));
    score.clamp(0, 100) as u8
}
