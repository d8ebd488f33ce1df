//! Compact, shareable encoding of a result: base64 over a small JSON object.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use vitalwatch_core::models::evaluation::{EvaluationResult, RiskTier};

use crate::error::ReportError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressedPayload {
    pub summary: String,
    pub risk: RiskTier,
    pub flags: Vec<String>,
    pub health_score: u8,
}

impl From<&EvaluationResult> for CompressedPayload {
    fn from(result: &EvaluationResult) -> Self {
        Self {
            summary: result.summary.clone(),
            risk: result.risk,
            flags: result.flags.clone(),
            health_score: result.score,
        }
    }
}

pub fn encode_payload(result: &EvaluationResult) -> Result<String, ReportError> {
    let json = serde_json::to_vec(&CompressedPayload::from(result))?;
    Ok(STANDARD.encode(json))
}

pub fn decode_payload(encoded: &str) -> Result<CompressedPayload, ReportError> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| ReportError::PayloadDecode(e.to_string()))?;
    Ok(serde_json::from_slice(&bytes)?)
}
