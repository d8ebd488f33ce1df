use vitalwatch_core::models::condition::Condition;
use vitalwatch_core::models::input::HealthInput;
use vitalwatch_rules::patterns;

pub const SLEEP_TARGET_HOURS: f64 = 7.0;
pub const STEPS_TARGET: u32 = 8000;

pub const SLEEP_ADVICE: &str = "Improve sleep schedule and reduce screen time before bed.";
pub const STEPS_ADVICE: &str = "Increase daily steps with 2 short walks.";
pub const STRESS_ADVICE: &str = "Do 10 minutes of breathing/meditation twice daily.";
pub const DIET_ADVICE: &str = "Add fiber and protein to breakfast; reduce processed snacks.";
pub const MAINTAIN_ADVICE: &str = "Maintain your current routine and keep tracking.";

/// Lifestyle advice first, then each detected condition's advice.
///
/// Falls back to a single "keep going" line when nothing applies. Duplicate
/// lines are removed, keeping the first.
pub fn build_recommendations(input: &HealthInput, conditions: &[Condition]) -> Vec<String> {
    let mut recs: Vec<String> = Vec::new();

    if input.sleep_hours < SLEEP_TARGET_HOURS {
        recs.push(SLEEP_ADVICE.to_string());
    }
    if input.steps < STEPS_TARGET {
        recs.push(STEPS_ADVICE.to_string());
    }
    if patterns::is_high_stress(&input.stress) {
        recs.push(STRESS_ADVICE.to_string());
    }
    if patterns::is_poor_diet(&input.diet) {
        recs.push(DIET_ADVICE.to_string());
    }
    recs.extend(conditions.iter().map(|c| c.advice.clone()));

    if recs.is_empty() {
        recs.push(MAINTAIN_ADVICE.to_string());
    }

    let mut unique: Vec<String> = Vec::with_capacity(recs.len());
    for rec in recs {
        if !unique.contains(&rec) {
            unique.push(rec);
        }
    }
    unique
}
