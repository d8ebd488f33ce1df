use vitalwatch_core::models::condition::{Condition, Severity};
use vitalwatch_core::models::input::HealthInput;
use vitalwatch_core::models::profile::AgeBracket;
use vitalwatch_rules::blood_pressure::parse_blood_pressure;
use vitalwatch_rules::conditions::{condition_rules, detect_conditions};
use vitalwatch_rules::flags::{Flag, detect_flags};
use vitalwatch_rules::profile::{normalize_age, resolve_age_profile};
use vitalwatch_rules::risk::{classify_risk, combine_flags};
use vitalwatch_rules::scoring::{apply_flag_penalty, base_score};
use vitalwatch_core::models::evaluation::RiskTier;

fn input() -> HealthInput {
    HealthInput {
        patient_name: "Test".to_string(),
        patient_age: 40.0,
        medical_history: String::new(),
        symptoms: String::new(),
        medications: String::new(),
        heart_rate: 72.0,
        blood_pressure: "120/80".to_string(),
        sleep_hours: 7.5,
        steps: 8000,
        exercise: String::new(),
        diet: "balanced".to_string(),
        stress: "moderate".to_string(),
    }
}

#[test]
fn parses_slash_and_dash_readings() {
    let bp = parse_blood_pressure("120/80");
    assert_eq!(bp.systolic, Some(120));
    assert_eq!(bp.diastolic, Some(80));

    let bp = parse_blood_pressure("BP was 135 - 88 this morning");
    assert_eq!((bp.systolic, bp.diastolic), (Some(135), Some(88)));
}

#[test]
fn unparsable_pressure_disables_pressure_rules() {
    let bp = parse_blood_pressure("abc");
    assert_eq!(bp.systolic, None);
    assert_eq!(bp.diastolic, None);
    assert!(!bp.is_parsed());

    let profile = resolve_age_profile(40.0);
    assert!(!bp.is_high(&profile));
    assert!(!bp.is_urgent(&profile));
    assert!(!bp.is_low());

    let no_bp = HealthInput {
        blood_pressure: "abc".to_string(),
        ..input()
    };
    assert_eq!(base_score(&no_bp, &profile), 85);
    assert!(detect_flags(&no_bp, &profile).is_empty());
    assert!(detect_conditions(&no_bp, &profile).is_empty());
}

#[test]
fn age_is_clamped_and_defaulted() {
    assert_eq!(normalize_age(None), 30.0);
    assert_eq!(normalize_age(Some(0.0)), 30.0);
    assert_eq!(normalize_age(Some(-5.0)), 1.0);
    assert_eq!(normalize_age(Some(150.0)), 120.0);
    assert_eq!(normalize_age(Some(f64::NAN)), 30.0);
    assert_eq!(normalize_age(Some(59.6)), 59.6);
}

#[test]
fn senior_profile_starts_at_sixty() {
    assert_eq!(resolve_age_profile(59.0).bracket, AgeBracket::Adult);
    let senior = resolve_age_profile(60.0);
    assert_eq!(senior.bracket, AgeBracket::Senior);
    assert_eq!(senior.steps_low, 5500);
    assert_eq!(senior.bp_urgent_sys, 165);
    assert_eq!(resolve_age_profile(30.0).label(), "Adult (30)");
}

#[test]
fn fractional_age_is_classified_before_rounding() {
    let almost = resolve_age_profile(59.6);
    assert_eq!(almost.bracket, AgeBracket::Adult);
    assert_eq!(almost.steps_low, 7000);
    assert_eq!(almost.label(), "Adult (60)");

    let just_over = resolve_age_profile(60.2);
    assert_eq!(just_over.bracket, AgeBracket::Senior);
    assert_eq!(just_over.label(), "Senior (60)");
}

#[test]
fn low_pressure_costs_four_points_and_flags() {
    let profile = resolve_age_profile(40.0);
    let low = HealthInput {
        blood_pressure: "90/55".to_string(),
        ..input()
    };

    assert_eq!(base_score(&low, &profile), 81);
    assert_eq!(detect_flags(&low, &profile), vec![Flag::LowBloodPressure]);

    let conditions = detect_conditions(&low, &profile);
    assert_eq!(conditions.len(), 1);
    assert_eq!(conditions[0].label, "Hypotension Risk");
    assert_eq!(conditions[0].severity, Severity::Moderate);
}

#[test]
fn urgent_pressure_stacks_both_penalties_but_flags_once() {
    let profile = resolve_age_profile(40.0);
    let urgent = HealthInput {
        blood_pressure: "165/95".to_string(),
        ..input()
    };

    assert_eq!(base_score(&urgent, &profile), 69);
    assert_eq!(detect_flags(&urgent, &profile), vec![Flag::CriticalBloodPressure]);
}

#[test]
fn diet_and_stress_match_case_insensitively() {
    let profile = resolve_age_profile(40.0);
    let stressed = HealthInput {
        diet: "Mostly JUNK food".to_string(),
        stress: "HIGH at work".to_string(),
        ..input()
    };

    assert_eq!(base_score(&stressed, &profile), 85 - 6 - 8);
    assert_eq!(detect_flags(&stressed, &profile), vec![Flag::HighStress]);
}

#[test]
fn heart_rate_flag_uses_five_beat_margin() {
    let profile = resolve_age_profile(40.0);
    let borderline = HealthInput {
        heart_rate: 99.0,
        ..input()
    };
    // Outside the scoring band, inside the flag margin.
    assert_eq!(base_score(&borderline, &profile), 75);
    assert!(detect_flags(&borderline, &profile).is_empty());

    let high = HealthInput {
        heart_rate: 101.0,
        ..input()
    };
    assert_eq!(detect_flags(&high, &profile), vec![Flag::AbnormalHeartRate]);
}

#[test]
fn condition_text_includes_medical_history() {
    let profile = resolve_age_profile(40.0);
    let history = HealthInput {
        medical_history: "Type 2 Diabetes, on insulin".to_string(),
        ..input()
    };

    let conditions = detect_conditions(&history, &profile);
    assert_eq!(conditions.len(), 1);
    assert_eq!(conditions[0].label, "Glycemic/Diabetes Concern");
}

#[test]
fn lifestyle_conditions_need_both_signals() {
    let profile = resolve_age_profile(40.0);
    let sedentary = HealthInput {
        steps: 2000,
        diet: "irregular meals".to_string(),
        sleep_hours: 5.0,
        stress: "severe".to_string(),
        ..input()
    };

    let labels: Vec<String> = detect_conditions(&sedentary, &profile)
        .into_iter()
        .map(|c| c.label)
        .collect();
    assert_eq!(
        labels,
        vec![
            "Metabolic Lifestyle Risk".to_string(),
            "Burnout / Recovery Deficit".to_string()
        ]
    );

    let only_steps = HealthInput {
        steps: 2000,
        ..input()
    };
    assert!(detect_conditions(&only_steps, &profile).is_empty());
}

#[test]
fn rule_table_labels_are_unique() {
    let mut labels: Vec<&str> = condition_rules().iter().map(|r| r.label).collect();
    let total = labels.len();
    labels.sort();
    labels.dedup();
    assert_eq!(labels.len(), total);
}

#[test]
fn combine_flags_keeps_first_occurrence() {
    let condition = |label: &str| Condition {
        label: label.to_string(),
        severity: Severity::Moderate,
        advice: String::new(),
    };

    let combined = combine_flags(
        &[Flag::SleepDeficit, Flag::LowActivity, Flag::SleepDeficit],
        &[condition("Respiratory Concern"), condition("Respiratory Concern")],
    );
    assert_eq!(
        combined,
        vec!["Sleep deficit", "Low activity", "Respiratory Concern"]
    );
}

#[test]
fn flag_penalty_never_goes_negative() {
    assert_eq!(apply_flag_penalty(85, 0), 85);
    assert_eq!(apply_flag_penalty(85, 2), 79);
    assert_eq!(apply_flag_penalty(5, 4), 0);
}

#[test]
fn risk_tier_thresholds() {
    assert_eq!(classify_risk(49, 0), RiskTier::High);
    assert_eq!(classify_risk(90, 4), RiskTier::High);
    assert_eq!(classify_risk(50, 3), RiskTier::Medium);
    assert_eq!(classify_risk(74, 0), RiskTier::Medium);
    assert_eq!(classify_risk(75, 3), RiskTier::Low);
}
