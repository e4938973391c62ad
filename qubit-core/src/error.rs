//! Tipos de erro para qubit-core

use thiserror::Error;

/// Resultado customizado para operações de fronteira do motor
pub type QubitResult<T> = Result<T, QubitError>;

/// Erros de validação na fronteira do motor.
///
/// O motor em si é total: nenhuma operação sobre `QubitState` falha.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QubitError {
    #[error("Invalid gate '{name}'. Supported gates: {valid}")]
    UnknownGate { name: String, valid: &'static str },

    #[error("Invalid state: {0}")]
    InvalidState(String),
}
