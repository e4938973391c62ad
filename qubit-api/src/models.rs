//! Data models for contract requests and responses

use qubit_core::{GateConvention, GateDescriptor, Probabilities, QubitState};
use serde::{Deserialize, Serialize};

// ============================================================================
// Request Models
// ============================================================================

/// Compute request body.
///
/// `gate` and `state` are kept loose here so that missing fields and unknown
/// gates can be reported with their own error codes.
#[derive(Debug, Default, Deserialize)]
pub struct ComputeRequest {
    /// Gate identifier (X, Y, Z, H, S, T)
    #[serde(default)]
    pub gate: Option<serde_json::Value>,

    /// Full input state `{ alpha: {real, imag}, beta: {real, imag} }`
    #[serde(default)]
    pub state: Option<serde_json::Value>,

    /// Arithmetic convention for the real-matrix gates (default: reference)
    #[serde(default)]
    pub convention: Option<String>,
}

// ============================================================================
// Response Models
// ============================================================================

/// Generic contract response wrapper.
///
/// On success the payload fields sit next to `success`; on failure only
/// `success` and `error` are present.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the operation succeeded
    pub success: bool,

    /// Response data (present on success)
    #[serde(flatten)]
    pub data: Option<T>,

    /// Error information (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

/// Error information in contract responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiError {
    /// Error code (e.g., "INVALID_GATE", "MISSING_FIELD")
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Helpful suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

/// Compute result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeResult {
    /// Gate that was applied
    pub gate: String,

    /// Echo of the input state
    pub input_state: QubitState,

    /// Normalized output state
    pub output_state: QubitState,

    /// Measurement probabilities of the output state
    pub probabilities: Probabilities,

    /// Convention used, omitted for the default
    #[serde(skip_serializing_if = "is_reference")]
    pub convention: GateConvention,
}

fn is_reference(convention: &GateConvention) -> bool {
    *convention == GateConvention::Reference
}

/// Describe result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeResult {
    /// Static gate table
    pub gates: Vec<GateDescriptor>,

    /// Category tags present in the table
    pub categories: Vec<&'static str>,

    /// Number of entries
    pub total_gates: usize,
}
