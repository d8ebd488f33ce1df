//! Input normalizer: turns the raw browser form into a typed [`HealthInput`].
//!
//! Text is trimmed, numbers are coerced from either JSON numbers or numeric
//! strings, and the vitals are range-checked. Any failure blocks evaluation
//! entirely; there is no partial result.

use vitalwatch_core::models::input::{FormValue, HealthInput, RawHealthForm};

use crate::blood_pressure::parse_blood_pressure;
use crate::error::ValidationError;
use crate::profile::normalize_age;

pub const DEFAULT_PATIENT_NAME: &str = "Patient";

pub const HEART_RATE_RANGE: (f64, f64) = (30.0, 220.0);
pub const SYSTOLIC_RANGE: (f64, f64) = (70.0, 250.0);
pub const DIASTOLIC_RANGE: (f64, f64) = (40.0, 150.0);
pub const SLEEP_RANGE: (f64, f64) = (0.0, 24.0);
pub const STEPS_RANGE: (f64, f64) = (0.0, 100_000.0);

fn text(value: &Option<FormValue>) -> String {
    value
        .as_ref()
        .map(|v| v.as_text().trim().to_string())
        .unwrap_or_default()
}

fn number(value: &Option<FormValue>) -> f64 {
    value.as_ref().and_then(FormValue::as_f64).unwrap_or(0.0)
}

fn check_range(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<f64, ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

/// Coerce and validate a raw form.
pub fn normalize(form: &RawHealthForm) -> Result<HealthInput, ValidationError> {
    let patient_name = match text(&form.patient_name) {
        name if name.is_empty() => DEFAULT_PATIENT_NAME.to_string(),
        name => name,
    };
    let patient_age = normalize_age(form.patient_age.as_ref().and_then(FormValue::as_f64));

    let blood_pressure = text(&form.blood_pressure);
    let bp = parse_blood_pressure(&blood_pressure);
    let (Some(systolic), Some(diastolic)) = (bp.systolic, bp.diastolic) else {
        return Err(ValidationError::BloodPressureFormat);
    };
    if systolic <= diastolic {
        return Err(ValidationError::BloodPressureOrder {
            systolic,
            diastolic,
        });
    }
    check_range("Systolic pressure", f64::from(systolic), SYSTOLIC_RANGE)?;
    check_range("Diastolic pressure", f64::from(diastolic), DIASTOLIC_RANGE)?;

    let heart_rate = check_range("Heart rate", number(&form.heart_rate), HEART_RATE_RANGE)?;
    let sleep_hours = check_range("Sleep hours", number(&form.sleep_hours), SLEEP_RANGE)?;
    let steps = check_range("Steps", number(&form.steps).round(), STEPS_RANGE)? as u32;

    Ok(HealthInput {
        patient_name,
        patient_age,
        medical_history: text(&form.medical_history),
        symptoms: text(&form.symptoms),
        medications: text(&form.medications),
        heart_rate,
        blood_pressure,
        sleep_hours,
        steps,
        exercise: text(&form.exercise),
        diet: text(&form.diet),
        stress: text(&form.stress),
    })
}
