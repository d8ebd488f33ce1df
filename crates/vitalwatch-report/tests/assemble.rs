use vitalwatch_core::models::evaluation::{DoctorReview, RiskTier};
use vitalwatch_core::models::input::HealthInput;
use vitalwatch_report::assemble::{EvaluationReport, assemble};
use vitalwatch_report::badge::{HealthBadge, HealthCondition};
use vitalwatch_report::payload::{decode_payload, encode_payload};
use vitalwatch_report::recommendations::{
    DIET_ADVICE, MAINTAIN_ADVICE, SLEEP_ADVICE, STEPS_ADVICE, STRESS_ADVICE,
    build_recommendations,
};
use vitalwatch_report::summary::build_summary;
use vitalwatch_rules::evaluate;

fn input() -> HealthInput {
    HealthInput {
        patient_name: "Jane Doe".to_string(),
        patient_age: 30.0,
        medical_history: "Seasonal allergies".to_string(),
        symptoms: "Sneezing".to_string(),
        medications: "Cetirizine".to_string(),
        heart_rate: 70.0,
        blood_pressure: "115/75".to_string(),
        sleep_hours: 8.0,
        steps: 9000,
        exercise: "yoga".to_string(),
        diet: "balanced".to_string(),
        stress: "low".to_string(),
    }
}

#[test]
fn summary_has_fixed_layout() {
    assert_eq!(
        build_summary(&input()),
        "History: Seasonal allergies | Symptoms: Sneezing | Vitals: HR 70, BP 115/75, Sleep 8h, Steps 9000"
    );
}

#[test]
fn summary_truncates_long_text() {
    let long = HealthInput {
        medical_history: "h".repeat(200),
        symptoms: "é".repeat(100),
        sleep_hours: 6.5,
        ..input()
    };

    let summary = build_summary(&long);
    assert!(summary.starts_with(&format!("History: {} |", "h".repeat(120))));
    assert!(summary.contains(&format!("Symptoms: {} |", "é".repeat(90))));
    assert!(summary.ends_with("Sleep 6.5h, Steps 9000"));
}

#[test]
fn healthy_input_gets_maintenance_advice_only() {
    assert_eq!(build_recommendations(&input(), &[]), vec![MAINTAIN_ADVICE]);
}

#[test]
fn lifestyle_advice_precedes_condition_advice() {
    let tired = HealthInput {
        sleep_hours: 4.5,
        steps: 2000,
        stress: "severe".to_string(),
        diet: "junk food".to_string(),
        ..input()
    };
    let assessment = evaluate(&tired);
    let recs = build_recommendations(&tired, &assessment.conditions);

    assert_eq!(&recs[..4], &[SLEEP_ADVICE, STEPS_ADVICE, STRESS_ADVICE, DIET_ADVICE]);
    assert!(recs.contains(&"Stabilize sleep routine and add stress-recovery breaks daily.".to_string()));
    assert!(!recs.contains(&MAINTAIN_ADVICE.to_string()));

    let mut deduped = recs.clone();
    deduped.dedup();
    assert_eq!(deduped.len(), recs.len());
}

#[test]
fn assemble_copies_assessment_and_vitals() {
    let input = input();
    let assessment = evaluate(&input);
    let result = assemble(&input, &assessment);

    assert_eq!(result.patient_name, "Jane Doe");
    assert_eq!(result.age_label, "Adult (30)");
    assert_eq!(result.score, 85);
    assert_eq!(result.risk, RiskTier::Low);
    assert_eq!(result.doctor_review, DoctorReview::NotNeeded);
    assert_eq!(result.vitals.blood_pressure, "115/75");
    assert_eq!(result.vitals.steps, 9000);
}

#[test]
fn badge_tiers() {
    assert_eq!(HealthBadge::from_score(0), HealthBadge::CriticalCare);
    assert_eq!(HealthBadge::from_score(39), HealthBadge::CriticalCare);
    assert_eq!(HealthBadge::from_score(40), HealthBadge::RecoveryMode);
    assert_eq!(HealthBadge::from_score(74), HealthBadge::HealthTracker);
    assert_eq!(HealthBadge::from_score(75), HealthBadge::WellnessStar);
    assert_eq!(HealthBadge::from_score(90), HealthBadge::HealthChampion);
    assert_eq!(HealthBadge::from_score(90).css_class(), "badge-elite");
    assert_eq!(HealthBadge::from_score(10).label(), "Critical Care");
}

#[test]
fn condition_gauge_tiers() {
    assert_eq!(HealthCondition::from_score(49), HealthCondition::Low);
    assert_eq!(HealthCondition::from_score(50), HealthCondition::Mid);
    assert_eq!(HealthCondition::from_score(79), HealthCondition::Mid);
    assert_eq!(HealthCondition::from_score(80), HealthCondition::Excellent);
}

#[test]
fn payload_is_base64_json() {
    let input = input();
    let result = assemble(&input, &evaluate(&input));

    let encoded = encode_payload(&result).unwrap();
    assert!(!encoded.contains('{'));

    let decoded = decode_payload(&encoded).unwrap();
    assert_eq!(decoded.summary, result.summary);
    assert_eq!(decoded.health_score, 85);
    assert_eq!(decoded.risk, RiskTier::Low);

    assert!(decode_payload("not base64!").is_err());
}

#[test]
fn evaluation_report_serializes_badge_fields() {
    let input = input();
    let report = EvaluationReport::build(&input, &evaluate(&input)).unwrap();

    assert_eq!(report.badge, HealthBadge::WellnessStar);
    assert_eq!(report.health_condition, HealthCondition::Excellent);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["badge"], "wellness_star");
    assert_eq!(json["badge_class"], "badge-good");
    assert_eq!(json["health_condition"], "excellent");
    assert_eq!(json["result"]["doctor_review"], "not_needed");
}
