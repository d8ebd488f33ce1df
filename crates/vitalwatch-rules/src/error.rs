use thiserror::Error;

/// Input problems that block evaluation.
///
/// The `Display` text is the corrective message shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Enter blood pressure as systolic/diastolic, for example 120/80.")]
    BloodPressureFormat,

    #[error("Systolic pressure ({systolic}) must be higher than diastolic pressure ({diastolic}).")]
    BloodPressureOrder { systolic: u16, diastolic: u16 },

    #[error("{field} must be between {min} and {max} (got {value}).")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}
