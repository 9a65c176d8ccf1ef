use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ingest;
use crate::planner::{plan_engagement, LaneValues};
use crate::roster::{parse_power_text, total_power};

/// Request body for POST /api/plan. The roster fields carry free-form power
/// text; advantage fields accept a JSON number or a numeric string (browser
/// forms submit strings) and default to 0 when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanRequest {
    #[serde(default)]
    pub our_power: String,
    #[serde(default)]
    pub enemy_left: String,
    #[serde(default)]
    pub enemy_center: String,
    #[serde(default)]
    pub enemy_right: String,
    #[serde(default)]
    pub left_advantage: Option<serde_json::Value>,
    #[serde(default)]
    pub center_advantage: Option<serde_json::Value>,
    #[serde(default)]
    pub right_advantage: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub field: &'static str,
    pub messages: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrorResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub errors: Vec<ValidationIssue>,
}

#[derive(Debug)]
pub enum PlanPayloadError {
    Parse(serde_json::Error),
    Validation(ValidationErrorResponse),
}

impl fmt::Display for PlanPayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Validation(_) => write!(f, "invalid plan request"),
        }
    }
}

impl std::error::Error for PlanPayloadError {}

pub fn health_payload() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "status": "ok",
        "service": "trilane-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub fn plan_payload(body: &str) -> Result<String, PlanPayloadError> {
    let request: PlanRequest = serde_json::from_str(body).map_err(PlanPayloadError::Parse)?;
    let advantages = parse_advantages(&request)?;

    let home = parse_power_text(&request.our_power);
    // Enemy identifiers are discarded after summation; only lane totals
    // feed the target arithmetic.
    let enemy_totals = LaneValues::new(
        total_power(&parse_power_text(&request.enemy_left)),
        total_power(&parse_power_text(&request.enemy_center)),
        total_power(&parse_power_text(&request.enemy_right)),
    );

    let report = plan_engagement(&home, enemy_totals, advantages);
    serde_json::to_string_pretty(&report).map_err(PlanPayloadError::Parse)
}

fn parse_advantages(request: &PlanRequest) -> Result<LaneValues, PlanPayloadError> {
    let mut errors: Vec<ValidationIssue> = Vec::new();
    let mut resolve = |field: &'static str, value: &Option<serde_json::Value>| -> i64 {
        match coerce_advantage(value.as_ref()) {
            Some(resolved) => resolved,
            None => {
                errors.push(ValidationIssue {
                    field,
                    messages: vec!["must be a valid integer".to_string()],
                });
                0
            }
        }
    };

    let left = resolve("left_advantage", &request.left_advantage);
    let center = resolve("center_advantage", &request.center_advantage);
    let right = resolve("right_advantage", &request.right_advantage);

    if errors.is_empty() {
        return Ok(LaneValues::new(left, center, right));
    }

    Err(PlanPayloadError::Validation(ValidationErrorResponse {
        status: "error",
        message: "Validation failed",
        errors,
    }))
}

/// Missing field or JSON null mean 0. Numbers truncate toward zero; numeric
/// strings are trimmed and parsed. Anything else is rejected.
fn coerce_advantage(value: Option<&serde_json::Value>) -> Option<i64> {
    match value {
        None | Some(serde_json::Value::Null) => Some(0),
        Some(serde_json::Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|float| float as i64)),
        Some(serde_json::Value::String(raw)) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Some(0);
            }
            trimmed.parse::<i64>().ok()
        }
        _ => None,
    }
}

#[derive(Debug)]
pub enum ConvertPayloadError {
    Convert(ingest::ConvertError),
    Serialize(serde_json::Error),
}

impl fmt::Display for ConvertPayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Convert(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ConvertPayloadError {}

/// Accepts two-column CSV text and responds with the power text the plan
/// endpoint consumes. Workbook files go through the CLI `convert` command;
/// this server does not speak multipart uploads.
pub fn convert_payload(body: &str) -> Result<String, ConvertPayloadError> {
    let power_text = ingest::convert_csv_text(body).map_err(ConvertPayloadError::Convert)?;
    serde_json::to_string_pretty(&serde_json::json!({ "power_text": power_text }))
        .map_err(ConvertPayloadError::Serialize)
}

#[cfg(test)]
mod tests {
    use super::coerce_advantage;
    use serde_json::json;

    #[test]
    fn absent_and_null_advantages_default_to_zero() {
        assert_eq!(coerce_advantage(None), Some(0));
        assert_eq!(coerce_advantage(Some(&json!(null))), Some(0));
        assert_eq!(coerce_advantage(Some(&json!(""))), Some(0));
    }

    #[test]
    fn numbers_and_numeric_strings_are_accepted() {
        assert_eq!(coerce_advantage(Some(&json!(250))), Some(250));
        assert_eq!(coerce_advantage(Some(&json!(-40))), Some(-40));
        assert_eq!(coerce_advantage(Some(&json!("  -40 "))), Some(-40));
        assert_eq!(coerce_advantage(Some(&json!(3.9))), Some(3));
    }

    #[test]
    fn non_numeric_values_are_rejected() {
        assert_eq!(coerce_advantage(Some(&json!("lots"))), None);
        assert_eq!(coerce_advantage(Some(&json!([1, 2]))), None);
        assert_eq!(coerce_advantage(Some(&json!({"n": 1}))), None);
    }
}
