//! # ⚛️ qubit-core — Motor de Estado de um Qubit
//!
//! Representa um qubit como par de amplitudes complexas, aplica as portas
//! padrão de um qubit (X, Y, Z, H, S, T), renormaliza o resultado e deriva
//! as probabilidades de medição.
//!
//! ## Computational Complexity
//!
//! **Gate application — O(1):**
//! - Real-matrix gates: 8 multiplications + normalization
//! - Phase gates: one 2D rotation of β + normalization
//!
//! **Normalization — O(1):** one `sqrt`, four divisions
//!
//! **History — O(1) amortized:** `VecDeque` with `pop_back()` eviction
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          Session (caller-owned)                 │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  QubitState  α|0⟩ + β|1⟩                  │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  apply_gate → normalize → probabilities   │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  History (bounded, most-recent-first)     │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use qubit_core::{apply_gate, measurement_probabilities, Gate, QubitState};
//!
//! let plus = apply_gate(QubitState::ZERO, Gate::H);
//! let p = measurement_probabilities(&plus);
//!
//! assert!((p.zero - 0.5).abs() < 1e-9);
//! assert!((p.one - 0.5).abs() < 1e-9);
//! ```

pub mod bloch;
pub mod catalog;
pub mod complex;
pub mod error;
pub mod gates;
pub mod session;
pub mod state;

pub use bloch::BlochVector;
pub use catalog::{catalog, categories, describe_gate, describe_named, GateDescriptor};
pub use complex::Complex;
pub use error::{QubitError, QubitResult};
pub use gates::{
    apply_gate, apply_gate_with, apply_named, Gate, GateConvention, GateKind, Matrix2x2, RealMatrix,
};
pub use session::{History, HistoryEntry, Session, DEFAULT_HISTORY_LIMIT};
pub use state::{measurement_probabilities, normalize, Probabilities, QubitState};
