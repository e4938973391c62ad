//! Amplitude complexa

use serde::{Deserialize, Serialize};
use std::fmt;

/// Limiar abaixo do qual uma componente é exibida como zero
pub const DISPLAY_EPSILON: f64 = 1e-4;

/// Número complexo com a forma de fio `{ "real": .., "imag": .. }`
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    /// Zero complexo
    pub const ZERO: Self = Self { real: 0.0, imag: 0.0 };

    /// Um complexo
    pub const ONE: Self = Self { real: 1.0, imag: 0.0 };

    /// Unidade imaginária
    pub const I: Self = Self { real: 0.0, imag: 1.0 };

    /// Cria número complexo
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// Módulo ao quadrado
    pub fn norm_sq(self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    /// Módulo
    pub fn abs(self) -> f64 {
        self.real.hypot(self.imag)
    }

    /// Fase (argumento)
    pub fn arg(self) -> f64 {
        self.imag.atan2(self.real)
    }

    /// Divisão por escalar
    pub fn unscale(self, s: f64) -> Self {
        Self {
            real: self.real / s,
            imag: self.imag / s,
        }
    }

    /// Ambas as componentes são finitas
    pub fn is_finite(self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }

    /// Verifica proximidade componente a componente
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        (self.real - other.real).abs() <= tolerance && (self.imag - other.imag).abs() <= tolerance
    }
}

impl From<num_complex::Complex64> for Complex {
    fn from(c: num_complex::Complex64) -> Self {
        Self::new(c.re, c.im)
    }
}

impl From<Complex> for num_complex::Complex64 {
    fn from(c: Complex) -> Self {
        num_complex::Complex64::new(c.real, c.imag)
    }
}

/// Três casas decimais; componentes abaixo de [`DISPLAY_EPSILON`] são omitidas.
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let real_negligible = self.real.abs() < DISPLAY_EPSILON;
        let imag_negligible = self.imag.abs() < DISPLAY_EPSILON;

        match (real_negligible, imag_negligible) {
            (true, true) => write!(f, "0"),
            (_, true) => write!(f, "{:.3}", self.real),
            (true, false) => write!(f, "{:.3}i", self.imag),
            (false, false) => {
                let sign = if self.imag >= 0.0 { "+" } else { "" };
                write!(f, "{:.3} {}{:.3}i", self.real, sign, self.imag)
            }
        }
    }
}
