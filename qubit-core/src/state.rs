//! Estado de um qubit, normalização e probabilidades de medição

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::complex::Complex;
use crate::error::{QubitError, QubitResult};

/// Estado `α|0⟩ + β|1⟩` de um sistema de dois níveis.
///
/// Tratado como valor imutável: cada porta ou reset produz um novo estado.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct QubitState {
    pub alpha: Complex,
    pub beta: Complex,
}

impl Default for QubitState {
    fn default() -> Self {
        Self::ZERO
    }
}

impl QubitState {
    /// Estado de base |0⟩
    pub const ZERO: Self = Self {
        alpha: Complex::ONE,
        beta: Complex::ZERO,
    };

    /// Estado de base |1⟩
    pub const ONE: Self = Self {
        alpha: Complex::ZERO,
        beta: Complex::ONE,
    };

    /// Cria estado sem normalizar
    pub const fn new(alpha: Complex, beta: Complex) -> Self {
        Self { alpha, beta }
    }

    /// Cria estado a partir das quatro componentes, normalizando
    pub fn from_parts(alpha_re: f64, alpha_im: f64, beta_re: f64, beta_im: f64) -> Self {
        normalize(Self::new(
            Complex::new(alpha_re, alpha_im),
            Complex::new(beta_re, beta_im),
        ))
    }

    /// |α|² + |β|²
    pub fn norm_sq(&self) -> f64 {
        self.alpha.norm_sq() + self.beta.norm_sq()
    }

    /// Verifica o invariante de norma unitária
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.norm_sq() - 1.0).abs() <= tolerance
    }

    /// Componentes finitas (sem NaN/∞)
    pub fn is_finite(&self) -> bool {
        self.alpha.is_finite() && self.beta.is_finite()
    }

    /// Rejeita componentes não finitas
    pub fn validate(self) -> QubitResult<Self> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(QubitError::InvalidState(
                "amplitudes must be finite numbers".to_string(),
            ))
        }
    }

    /// Compara amplitudes componente a componente
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.alpha.approx_eq(other.alpha, tolerance) && self.beta.approx_eq(other.beta, tolerance)
    }

    /// Versão normalizada deste estado
    pub fn normalized(self) -> Self {
        normalize(self)
    }

    /// Fidelidade |⟨self|other⟩|²; ignora fase global
    pub fn fidelity(&self, other: &Self) -> f64 {
        let a = Complex64::from(self.alpha).conj() * Complex64::from(other.alpha);
        let b = Complex64::from(self.beta).conj() * Complex64::from(other.beta);
        (a + b).norm_sqr()
    }

    /// Probabilidades de medição
    pub fn probabilities(&self) -> Probabilities {
        measurement_probabilities(self)
    }

    /// Notação de ket, ex.: `0.707|0⟩ + 0.707|1⟩`
    pub fn ket(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for QubitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|0⟩ + {}|1⟩", self.alpha, self.beta)
    }
}

/// Reescala as amplitudes para norma unitária.
///
/// O vetor nulo (todas as componentes exatamente zero) é mapeado para |0⟩.
/// As amplitudes são primeiro divididas pela maior componente, então
/// entradas finitas muito grandes ou muito pequenas não saturam a norma.
pub fn normalize(state: QubitState) -> QubitState {
    let scale = [
        state.alpha.real,
        state.alpha.imag,
        state.beta.real,
        state.beta.imag,
    ]
    .iter()
    .fold(0.0_f64, |m, c| m.max(c.abs()));

    if scale == 0.0 {
        return QubitState::ZERO;
    }

    let alpha = state.alpha.unscale(scale);
    let beta = state.beta.unscale(scale);
    let norm = (alpha.norm_sq() + beta.norm_sq()).sqrt();

    QubitState {
        alpha: alpha.unscale(norm),
        beta: beta.unscale(norm),
    }
}

/// Probabilidades de medir |0⟩ e |1⟩
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Probabilities {
    pub zero: f64,
    pub one: f64,
}

impl Probabilities {
    /// p0 + p1
    pub fn total(&self) -> f64 {
        self.zero + self.one
    }
}

/// `p0 = |α|²`, `p1 = |β|²`. Não renormaliza.
pub fn measurement_probabilities(state: &QubitState) -> Probabilities {
    Probabilities {
        zero: state.alpha.norm_sq(),
        one: state.beta.norm_sq(),
    }
}
