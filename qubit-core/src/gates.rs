//! # Quantum Gates — Portas de um Qubit
//!
//! Aplica as seis portas padrão a um [`QubitState`].
//!
//! ## Convenções
//!
//! - **Reference** (padrão): as portas X, Y, Z e H usam uma matriz real 2×2
//!   com o emparelhamento fixo abaixo, que cruza a parte real de α com a
//!   parte imaginária de β:
//!
//!   ```text
//!   α'.re = M00·α.re − M01·β.im      β'.re = M10·α.re − M11·β.im
//!   α'.im = M00·α.im + M01·β.re      β'.im = M10·α.im + M11·β.re
//!   ```
//!
//!   Não é multiplicação complexa de matrizes; os resultados dos clientes
//!   existentes dependem exatamente desta aritmética.
//!
//! - **Standard**: multiplicação complexa usual com as matrizes unitárias de
//!   livro-texto (Y = [[0, −i], [i, 0]]).
//!
//! S e T giram a fase de β da mesma forma nas duas convenções.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4};
use std::fmt;
use std::str::FromStr;

use crate::complex::Complex;
use crate::error::{QubitError, QubitResult};
use crate::state::{normalize, QubitState};

/// Matriz real 2×2 usada pelas portas X, Y, Z e H
pub type RealMatrix = [[f64; 2]; 2];

const PAULI_X: RealMatrix = [[0.0, 1.0], [1.0, 0.0]];
const PAULI_Y: RealMatrix = [[0.0, -1.0], [1.0, 0.0]];
const PAULI_Z: RealMatrix = [[1.0, 0.0], [0.0, -1.0]];
const HADAMARD: RealMatrix = [
    [FRAC_1_SQRT_2, FRAC_1_SQRT_2],
    [FRAC_1_SQRT_2, -FRAC_1_SQRT_2],
];

/// Identificador de porta
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gate {
    X,
    Y,
    Z,
    H,
    S,
    T,
}

/// Caminho algorítmico de uma porta
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GateKind {
    /// Matriz real aplicada com o emparelhamento de referência
    RealMatrix(RealMatrix),
    /// Rotação da fase de β por um ângulo fixo
    Phase(f64),
}

impl Gate {
    /// Todas as portas, na ordem do catálogo
    pub const ALL: [Gate; 6] = [Gate::X, Gate::Y, Gate::Z, Gate::H, Gate::S, Gate::T];

    /// Símbolo da porta
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
            Self::H => "H",
            Self::S => "S",
            Self::T => "T",
        }
    }

    /// Lista legível dos identificadores aceitos
    pub fn valid_names() -> &'static str {
        "X, Y, Z, H, S, T"
    }

    /// Caminho de aplicação
    pub fn kind(&self) -> GateKind {
        match self {
            Self::X => GateKind::RealMatrix(PAULI_X),
            Self::Y => GateKind::RealMatrix(PAULI_Y),
            Self::Z => GateKind::RealMatrix(PAULI_Z),
            Self::H => GateKind::RealMatrix(HADAMARD),
            Self::S => GateKind::Phase(FRAC_PI_2),
            Self::T => GateKind::Phase(FRAC_PI_4),
        }
    }

    /// Matriz unitária de livro-texto
    pub fn unitary(&self) -> Matrix2x2 {
        let h = FRAC_1_SQRT_2;
        let elements = match self {
            Self::X => [[Complex::ZERO, Complex::ONE], [Complex::ONE, Complex::ZERO]],
            Self::Y => [
                [Complex::ZERO, Complex::new(0.0, -1.0)],
                [Complex::I, Complex::ZERO],
            ],
            Self::Z => [
                [Complex::ONE, Complex::ZERO],
                [Complex::ZERO, Complex::new(-1.0, 0.0)],
            ],
            Self::H => [
                [Complex::new(h, 0.0), Complex::new(h, 0.0)],
                [Complex::new(h, 0.0), Complex::new(-h, 0.0)],
            ],
            Self::S => [[Complex::ONE, Complex::ZERO], [Complex::ZERO, Complex::I]],
            Self::T => [
                [Complex::ONE, Complex::ZERO],
                [Complex::ZERO, num_complex::Complex64::from_polar(1.0, FRAC_PI_4).into()],
            ],
        };
        Matrix2x2 { elements }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Gate {
    type Err = QubitError;

    /// Aceita apenas os símbolos exatos (sensível a maiúsculas).
    fn from_str(s: &str) -> QubitResult<Self> {
        Gate::ALL
            .into_iter()
            .find(|g| g.symbol() == s)
            .ok_or_else(|| QubitError::UnknownGate {
                name: s.to_string(),
                valid: Gate::valid_names(),
            })
    }
}

/// Convenção aritmética para as portas de matriz real
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateConvention {
    #[default]
    Reference,
    Standard,
}

impl FromStr for GateConvention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reference" => Ok(Self::Reference),
            "standard" => Ok(Self::Standard),
            other => Err(format!(
                "unknown convention '{}' (expected 'reference' or 'standard')",
                other
            )),
        }
    }
}

/// Matriz 2x2 complexa
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix2x2 {
    /// Elementos: [[a, b], [c, d]]
    pub elements: [[Complex; 2]; 2],
}

impl Matrix2x2 {
    /// Aplica a um estado (sem normalizar)
    pub fn apply(&self, state: QubitState) -> QubitState {
        let alpha = num_complex::Complex64::from(state.alpha);
        let beta = num_complex::Complex64::from(state.beta);
        let [[a, b], [c, d]] = self.elements.map(|row| row.map(num_complex::Complex64::from));

        QubitState::new((a * alpha + b * beta).into(), (c * alpha + d * beta).into())
    }
}

/// Aplica uma porta com a convenção de referência e normaliza o resultado.
pub fn apply_gate(state: QubitState, gate: Gate) -> QubitState {
    apply_gate_with(state, gate, GateConvention::Reference)
}

/// Aplica uma porta na convenção escolhida e normaliza o resultado.
pub fn apply_gate_with(state: QubitState, gate: Gate, convention: GateConvention) -> QubitState {
    let raw = match (gate.kind(), convention) {
        (GateKind::Phase(theta), _) => rotate_beta(state, theta),
        (GateKind::RealMatrix(m), GateConvention::Reference) => apply_real_matrix(state, &m),
        (GateKind::RealMatrix(_), GateConvention::Standard) => gate.unitary().apply(state),
    };
    normalize(raw)
}

/// Aplica por nome; nomes desconhecidos devolvem o estado intacto.
pub fn apply_named(state: QubitState, name: &str) -> QubitState {
    match name.parse::<Gate>() {
        Ok(gate) => apply_gate(state, gate),
        Err(_) => state,
    }
}

fn apply_real_matrix(state: QubitState, m: &RealMatrix) -> QubitState {
    let QubitState { alpha, beta } = state;

    let row = |r: &[f64; 2]| {
        Complex::new(
            r[0] * alpha.real - r[1] * beta.imag,
            r[0] * alpha.imag + r[1] * beta.real,
        )
    };

    QubitState::new(row(&m[0]), row(&m[1]))
}

fn rotate_beta(state: QubitState, theta: f64) -> QubitState {
    let phase = num_complex::Complex64::from_polar(1.0, theta);
    let beta = num_complex::Complex64::from(state.beta) * phase;

    QubitState::new(state.alpha, beta.into())
}

// =============================================================================
// Testes
// =============================================================================
