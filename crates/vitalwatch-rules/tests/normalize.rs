use vitalwatch_core::models::input::{FormValue, RawHealthForm};
use vitalwatch_rules::error::ValidationError;
use vitalwatch_rules::normalize::normalize;

fn text(s: &str) -> Option<FormValue> {
    Some(FormValue::Text(s.to_string()))
}

fn valid_form() -> RawHealthForm {
    RawHealthForm {
        patient_name: text("  Grace Hopper "),
        patient_age: text("52"),
        medical_history: text("none"),
        symptoms: text(" occasional headache "),
        medications: text(""),
        heart_rate: Some(FormValue::Number(68.0)),
        blood_pressure: text("118/76"),
        sleep_hours: text("7.5"),
        steps: text("10234.4"),
        exercise: text("cycling"),
        diet: text("balanced"),
        stress: text("moderate"),
    }
}

#[test]
fn normalizes_a_valid_form() {
    let input = normalize(&valid_form()).unwrap();

    assert_eq!(input.patient_name, "Grace Hopper");
    assert_eq!(input.patient_age, 52.0);
    assert_eq!(input.symptoms, "occasional headache");
    assert_eq!(input.heart_rate, 68.0);
    assert_eq!(input.sleep_hours, 7.5);
    assert_eq!(input.steps, 10234);
    assert_eq!(input.blood_pressure, "118/76");
}

#[test]
fn blank_name_and_bad_age_fall_back_to_defaults() {
    let form = RawHealthForm {
        patient_name: text("   "),
        patient_age: text("unknown"),
        ..valid_form()
    };

    let input = normalize(&form).unwrap();
    assert_eq!(input.patient_name, "Patient");
    assert_eq!(input.patient_age, 30.0);
}

#[test]
fn rejects_unreadable_blood_pressure() {
    let form = RawHealthForm {
        blood_pressure: text("abc"),
        ..valid_form()
    };
    assert_eq!(normalize(&form), Err(ValidationError::BloodPressureFormat));

    let missing = RawHealthForm {
        blood_pressure: None,
        ..valid_form()
    };
    assert_eq!(normalize(&missing), Err(ValidationError::BloodPressureFormat));
}

#[test]
fn rejects_inverted_blood_pressure() {
    let form = RawHealthForm {
        blood_pressure: text("80/120"),
        ..valid_form()
    };

    let err = normalize(&form).unwrap_err();
    assert_eq!(
        err,
        ValidationError::BloodPressureOrder {
            systolic: 80,
            diastolic: 120
        }
    );
    assert!(err.to_string().contains("must be higher than"));
}

#[test]
fn rejects_out_of_range_vitals() {
    let form = RawHealthForm {
        blood_pressure: text("300/100"),
        ..valid_form()
    };
    assert!(matches!(
        normalize(&form),
        Err(ValidationError::OutOfRange { field: "Systolic pressure", .. })
    ));

    let no_pulse = RawHealthForm {
        heart_rate: None,
        ..valid_form()
    };
    let err = normalize(&no_pulse).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Heart rate must be between 30 and 220 (got 0)."
    );

    let oversleep = RawHealthForm {
        sleep_hours: text("30"),
        ..valid_form()
    };
    assert!(matches!(
        normalize(&oversleep),
        Err(ValidationError::OutOfRange { field: "Sleep hours", .. })
    ));
}

#[test]
fn fractional_age_keeps_the_adult_profile() {
    let form = RawHealthForm {
        patient_age: text("59.6"),
        ..valid_form()
    };

    let input = normalize(&form).unwrap();
    assert_eq!(input.patient_age, 59.6);

    let assessment = vitalwatch_rules::evaluate(&input);
    assert_eq!(assessment.profile.label(), "Adult (60)");
}
