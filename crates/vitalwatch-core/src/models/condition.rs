use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Severity tier of a detected clinical pattern.
///
/// Serialized as the bare tier number (2 or 3) to keep the wire format flat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Severity {
    Moderate,
    Serious,
}

impl Severity {
    pub fn level(self) -> u8 {
        match self {
            Severity::Moderate => 2,
            Severity::Serious => 3,
        }
    }
}

impl From<Severity> for u8 {
    fn from(s: Severity) -> Self {
        s.level()
    }
}

impl TryFrom<u8> for Severity {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Severity::Moderate),
            3 => Ok(Severity::Serious),
            other => Err(CoreError::InvalidSeverity(other)),
        }
    }
}

/// A named clinical pattern matched against the submission.
///
/// Labels are unique within one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Condition {
    pub label: String,
    #[ts(type = "2 | 3")]
    pub severity: Severity,
    pub advice: String,
}
