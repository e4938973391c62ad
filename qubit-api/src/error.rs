//! Error taxonomy for the contract boundary

use qubit_core::{Gate, QubitError};
use thiserror::Error;

use crate::models::ApiError;

/// Result alias for contract operations
pub type ApiResult<T> = Result<T, ApiFailure>;

/// Response status of a contract call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    BadRequest,
    InternalError,
}

impl Status {
    /// Equivalent HTTP status code
    pub fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::BadRequest => 400,
            Self::InternalError => 500,
        }
    }

    pub fn is_success(self) -> bool {
        self == Self::Ok
    }
}

/// Failures detected at the boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiFailure {
    #[error("Missing gate or state in request body")]
    MissingField,

    #[error("Invalid gate. Supported gates: {}", Gate::valid_names())]
    InvalidGate(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Invalid convention: {0}")]
    InvalidConvention(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Detail is logged, never returned to the caller
    #[error("Internal server error")]
    Internal(String),
}

impl ApiFailure {
    pub fn status(&self) -> Status {
        match self {
            Self::Internal(_) => Status::InternalError,
            _ => Status::BadRequest,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField => "MISSING_FIELD",
            Self::InvalidGate(_) => "INVALID_GATE",
            Self::InvalidState(_) => "INVALID_STATE",
            Self::InvalidConvention(_) => "INVALID_CONVENTION",
            Self::InvalidJson(_) => "INVALID_JSON",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn help(&self) -> Option<String> {
        match self {
            Self::MissingField => {
                Some("Send { \"gate\": \"H\", \"state\": { \"alpha\": {..}, \"beta\": {..} } }".to_string())
            }
            Self::InvalidGate(name) => Some(format!("'{}' is not one of {}", name, Gate::valid_names())),
            Self::InvalidState(_) => {
                Some("alpha and beta each need numeric 'real' and 'imag' fields".to_string())
            }
            Self::InvalidConvention(_) => Some("Use 'reference' or 'standard'".to_string()),
            Self::InvalidJson(_) | Self::Internal(_) => None,
        }
    }

    /// Convert to the wire error body
    pub fn to_api_error(&self) -> ApiError {
        ApiError {
            code: self.code().to_string(),
            message: self.to_string(),
            help: self.help(),
        }
    }
}

impl From<QubitError> for ApiFailure {
    fn from(err: QubitError) -> Self {
        match err {
            QubitError::UnknownGate { name, .. } => Self::InvalidGate(name),
            QubitError::InvalidState(message) => Self::InvalidState(message),
        }
    }
}
