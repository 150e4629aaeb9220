use serde::Deserialize;

use super::AiOpinion;

/// Probability assumed when the model omits one, and the fallback value.
pub const NEUTRAL_PROBABILITY: u8 = 50;

#[derive(Debug, thiserror::Error)]
pub enum OpinionParseError {
    #[error("reply contains no JSON object")]
    MissingObject,
    #[error("reply JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct RawOpinion {
    #[serde(default = "neutral_probability")]
    ai_probability: f64,
    #[serde(default)]
    ai_reason: String,
    #[serde(default)]
    ai_key_factors: Vec<String>,
}

fn neutral_probability() -> f64 {
    f64::from(NEUTRAL_PROBABILITY)
}

/// Extracts the opinion from free-form model output.
///
/// Takes everything from the first `{` to the last `}` and parses it as one JSON object,
/// so prose around the object is tolerated. A reply holding two separate objects spans
/// both and fails to parse.
pub fn parse_opinion(raw: &str) -> Result<AiOpinion, OpinionParseError> {
    let start = raw.find('{').ok_or(OpinionParseError::MissingObject)?;
    let end = raw.rfind('}').ok_or(OpinionParseError::MissingObject)?;
    if end < start {
        return Err(OpinionParseError::MissingObject);
    }

    let parsed: RawOpinion = serde_json::from_str(&raw[start..=end])?;

    Ok(AiOpinion {
        probability: clamp_probability(parsed.ai_probability),
        reason: parsed.ai_reason,
        key_factors: parsed.ai_key_factors,
    })
}

fn clamp_probability(value: f64) -> u8 {
    if value.is_nan() {
        return NEUTRAL_PROBABILITY;
    }
    value.round().clamp(0.0, 100.0) as u8
}
