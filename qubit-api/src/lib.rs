//! Qubit gate contracts
//!
//! Transport-free request/response contracts over the single-qubit engine.
//! Callers hand in JSON and get back a status plus a JSON body; how the bytes
//! travel is up to them.
//!
//! ## Contracts
//! - **compute**: `{ gate, state }` → `{ success, gate, inputState, outputState, probabilities }`
//! - **describe**: `()` → `{ success, gates, categories, totalGates }`
//!
//! ## Status mapping
//! - validation failures (missing field, unknown gate, malformed state) → 400
//! - unexpected faults → 500 with a generic message; detail goes to the log

pub mod error;
pub mod handlers;
pub mod models;

pub use error::{ApiFailure, ApiResult, Status};
pub use handlers::{
    compute, compute_handler, compute_json, describe, describe_handler, describe_json, render,
};
pub use models::{ApiError, ApiResponse, ComputeRequest, ComputeResult, DescribeResult};
