//! Contract handlers
//!
//! Stateless: every compute call carries the full input state. Validation
//! happens here, before the engine runs; the engine itself cannot fail.

use qubit_core::{
    apply_gate_with, catalog, categories, measurement_probabilities, Gate, GateConvention,
    QubitState,
};
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiFailure, ApiResult, Status};
use crate::models::*;

// ============================================================================
// Request validation
// ============================================================================

fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

fn present(value: Option<Value>) -> Option<Value> {
    value.filter(|v| !is_missing(Some(v)))
}

fn parse_gate(value: &Value) -> ApiResult<Gate> {
    match value {
        Value::String(name) => Ok(name.parse::<Gate>()?),
        other => Err(ApiFailure::InvalidGate(other.to_string())),
    }
}

fn parse_state(value: Value) -> ApiResult<QubitState> {
    let state: QubitState =
        serde_json::from_value(value).map_err(|e| ApiFailure::InvalidState(e.to_string()))?;
    Ok(state.validate()?)
}

fn parse_convention(value: Option<&str>) -> ApiResult<GateConvention> {
    match value {
        None => Ok(GateConvention::default()),
        Some(s) => s.parse().map_err(ApiFailure::InvalidConvention),
    }
}

// ============================================================================
// Compute
// ============================================================================

/// Validate a compute request and run the engine
pub fn compute(body: &Value) -> ApiResult<ComputeResult> {
    // Arrays and scalars carry neither field
    if !body.is_object() {
        return Err(ApiFailure::MissingField);
    }
    let request: ComputeRequest =
        serde_json::from_value(body.clone()).map_err(|e| ApiFailure::InvalidJson(e.to_string()))?;

    let (Some(gate), Some(state)) = (present(request.gate), present(request.state)) else {
        return Err(ApiFailure::MissingField);
    };

    let gate = parse_gate(&gate)?;
    let input_state = parse_state(state)?;
    let convention = parse_convention(request.convention.as_deref())?;

    let output_state = apply_gate_with(input_state, gate, convention);
    tracing::debug!(%gate, ?convention, output = %output_state, "gate applied");

    Ok(ComputeResult {
        gate: gate.symbol().to_string(),
        input_state,
        output_state,
        probabilities: measurement_probabilities(&output_state),
        convention,
    })
}

/// Compute contract over an already-parsed JSON body
pub fn compute_handler(body: &Value) -> (Status, ApiResponse<ComputeResult>) {
    respond(compute(body))
}

/// Compute contract over raw JSON text
pub fn compute_json(text: &str) -> (Status, String) {
    let result = serde_json::from_str::<Value>(text)
        .map_err(|e| ApiFailure::InvalidJson(e.to_string()))
        .and_then(|body| compute(&body));
    render(respond(result))
}

// ============================================================================
// Describe
// ============================================================================

/// Static gate metadata table
pub fn describe() -> DescribeResult {
    let gates = catalog().to_vec();
    DescribeResult {
        total_gates: gates.len(),
        categories: categories(),
        gates,
    }
}

pub fn describe_handler() -> (Status, ApiResponse<DescribeResult>) {
    (Status::Ok, ApiResponse::success(describe()))
}

pub fn describe_json() -> (Status, String) {
    render(describe_handler())
}

// ============================================================================
// Response plumbing
// ============================================================================

fn respond<T: Serialize>(result: ApiResult<T>) -> (Status, ApiResponse<T>) {
    match result {
        Ok(data) => (Status::Ok, ApiResponse::success(data)),
        Err(err) => {
            match &err {
                ApiFailure::Internal(detail) => tracing::error!(%detail, "contract fault"),
                other => tracing::warn!(code = other.code(), "{}", other),
            }
            (err.status(), ApiResponse::error(err.to_api_error()))
        }
    }
}

/// Serialize a response; a serialization fault becomes a generic 500
pub fn render<T: Serialize>((status, response): (Status, ApiResponse<T>)) -> (Status, String) {
    match serde_json::to_string(&response) {
        Ok(body) => (status, body),
        Err(e) => {
            let failure = ApiFailure::Internal(e.to_string());
            tracing::error!(detail = %e, "response serialization failed");
            let fallback = ApiResponse::<()>::error(failure.to_api_error());
            let body = serde_json::to_string(&fallback).unwrap_or_else(|_| {
                r#"{"success":false,"error":{"code":"INTERNAL_ERROR","message":"Internal server error"}}"#
                    .to_string()
            });
            (failure.status(), body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_values() {
        assert!(is_missing(None));
        assert!(is_missing(Some(&Value::Null)));
        assert!(is_missing(Some(&json!(""))));
        assert!(!is_missing(Some(&json!("X"))));
        assert!(!is_missing(Some(&json!({}))));
    }

    #[test]
    fn test_scalar_body_is_missing_fields() {
        assert_eq!(compute(&json!("X")).unwrap_err(), ApiFailure::MissingField);
        assert_eq!(compute(&Value::Null).unwrap_err(), ApiFailure::MissingField);
    }

    #[test]
    fn test_non_string_gate_is_invalid() {
        let err = parse_gate(&json!(3)).unwrap_err();
        assert_eq!(err, ApiFailure::InvalidGate("3".to_string()));
    }

    #[test]
    fn test_state_requires_all_fields() {
        let err = parse_state(json!({ "alpha": { "real": 1.0 }, "beta": { "real": 0, "imag": 0 } }))
            .unwrap_err();
        assert!(matches!(err, ApiFailure::InvalidState(_)));
    }

    #[test]
    fn test_state_accepts_integers() {
        let state = parse_state(json!({ "alpha": { "real": 1, "imag": 0 }, "beta": { "real": 0, "imag": 0 } }))
            .unwrap();
        assert_eq!(state, QubitState::ZERO);
    }

    #[test]
    fn test_unit_response_serializes_without_data() {
        let (_, body) = render((
            Status::BadRequest,
            ApiResponse::<()>::error(ApiFailure::MissingField.to_api_error()),
        ));
        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"]["code"], "MISSING_FIELD");
    }
}
