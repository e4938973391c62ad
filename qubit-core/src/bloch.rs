//! Projeção na esfera de Bloch (apenas numérica)

use serde::{Deserialize, Serialize};

use crate::state::QubitState;

/// Ângulos e coordenadas cartesianas de um estado na esfera unitária
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlochVector {
    /// Ângulo polar θ ∈ [0, π]
    pub theta: f64,
    /// Ângulo azimutal φ = arg(β)
    pub phi: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl BlochVector {
    /// θ = 2·acos(√p0), φ = atan2(β.im, β.re)
    pub fn from_state(state: &QubitState) -> Self {
        let p0 = state.alpha.norm_sq().clamp(0.0, 1.0);
        let theta = 2.0 * p0.sqrt().acos();
        let phi = state.beta.arg();

        Self {
            theta,
            phi,
            x: theta.sin() * phi.cos(),
            y: theta.sin() * phi.sin(),
            z: theta.cos(),
        }
    }
}

impl QubitState {
    /// Vetor de Bloch deste estado
    pub fn bloch(&self) -> BlochVector {
        BlochVector::from_state(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::{apply_gate, Gate};

    const EPS: f64 = 1e-9;

    #[test]
    fn test_north_pole() {
        let b = QubitState::ZERO.bloch();
        assert!(b.theta.abs() < EPS);
        assert!((b.z - 1.0).abs() < EPS);
    }

    #[test]
    fn test_south_pole() {
        let b = QubitState::ONE.bloch();
        assert!((b.theta - std::f64::consts::PI).abs() < EPS);
        assert!((b.z + 1.0).abs() < EPS);
    }

    #[test]
    fn test_plus_state_on_equator() {
        let b = apply_gate(QubitState::ZERO, Gate::H).bloch();
        assert!(b.z.abs() < 1e-6);
        assert!((b.x - 1.0).abs() < 1e-6);
        assert!(b.y.abs() < 1e-6);
    }

    #[test]
    fn test_s_moves_to_y_axis() {
        let plus = apply_gate(QubitState::ZERO, Gate::H);
        let b = apply_gate(plus, Gate::S).bloch();
        assert!((b.y - 1.0).abs() < 1e-6);
    }
}
