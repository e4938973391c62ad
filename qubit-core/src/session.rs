//! Sessão interativa e histórico de operações
//!
//! A sessão é uma máquina de estados trivial: `Current(ψ)`, com transições
//! `apply(g)` → `Current(apply_gate(ψ, g))` e `reset()` → `Current(|0⟩)`.
//! Pertence ao chamador; o motor não guarda estado entre chamadas.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::gates::{apply_gate_with, Gate, GateConvention};
use crate::state::{Probabilities, QubitState};

/// Número padrão de entradas mantidas no histórico
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Rótulo de porta usado para resets
pub const RESET_LABEL: &str = "RESET";

/// ID de entrada de histórico
pub type EntryId = u64;

/// Registro de uma transição da sessão
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: EntryId,
    /// Símbolo da porta ou `RESET`
    pub gate: String,
    pub operation: String,
    pub initial_state: QubitState,
    pub final_state: QubitState,
    /// Milissegundos desde a época Unix
    pub timestamp: u64,
}

impl HistoryEntry {
    /// Cria nova entrada com o instante atual
    pub fn new(
        id: EntryId,
        gate: impl Into<String>,
        operation: impl Into<String>,
        initial_state: QubitState,
        final_state: QubitState,
    ) -> Self {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        Self {
            id,
            gate: gate.into(),
            operation: operation.into(),
            initial_state,
            final_state,
            timestamp,
        }
    }
}

/// Log limitado, mais recente primeiro
#[derive(Debug, Clone)]
pub struct History {
    /// Entradas (frente = mais recente)
    entries: VecDeque<HistoryEntry>,
    /// Próximo ID
    next_id: EntryId,
    /// Limite máximo de entradas
    limit: usize,
}

impl History {
    /// Cria histórico com limite
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            next_id: 1,
            limit,
        }
    }

    /// Registra transição; descarta as mais antigas acima do limite
    pub fn record(
        &mut self,
        gate: impl Into<String>,
        operation: impl Into<String>,
        initial_state: QubitState,
        final_state: QubitState,
    ) -> EntryId {
        let id = self.next_id;
        self.next_id += 1;

        self.entries
            .push_front(HistoryEntry::new(id, gate, operation, initial_state, final_state));

        while self.entries.len() > self.limit {
            self.entries.pop_back();
        }

        id
    }

    /// Entradas, mais recente primeiro
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn oldest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Limpa entradas; a numeração continua
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Cópia das entradas, mais recente primeiro
    pub fn to_vec(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

/// Sessão de um qubit com histórico
#[derive(Debug, Clone, Default)]
pub struct Session {
    current: QubitState,
    history: History,
    convention: GateConvention,
}

impl Session {
    /// Nova sessão em |0⟩
    pub fn new(history_limit: usize) -> Self {
        Self {
            current: QubitState::ZERO,
            history: History::new(history_limit),
            convention: GateConvention::default(),
        }
    }

    /// Define a convenção aritmética das portas de matriz real
    pub fn with_convention(mut self, convention: GateConvention) -> Self {
        self.convention = convention;
        self
    }

    pub fn convention(&self) -> GateConvention {
        self.convention
    }

    /// Estado atual
    pub fn current(&self) -> QubitState {
        self.current
    }

    /// Probabilidades do estado atual
    pub fn probabilities(&self) -> Probabilities {
        self.current.probabilities()
    }

    /// Aplica porta e registra no histórico
    pub fn apply(&mut self, gate: Gate) -> QubitState {
        let initial = self.current;
        let next = apply_gate_with(initial, gate, self.convention);

        self.history
            .record(gate.symbol(), format!("Applied {} gate", gate), initial, next);
        self.current = next;
        next
    }

    /// Volta para |0⟩ e registra no histórico
    pub fn reset(&mut self) -> QubitState {
        let initial = self.current;
        self.current = QubitState::ZERO;

        self.history
            .record(RESET_LABEL, "Reset to |0⟩", initial, self.current);
        self.current
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_starts_at_zero() {
        let session = Session::default();
        assert_eq!(session.current(), QubitState::ZERO);
        assert!(session.history().is_empty());
        assert_eq!(session.history().limit(), DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn test_apply_records_entry() {
        let mut session = Session::new(10);
        let out = session.apply(Gate::X);

        let entry = session.history().latest().unwrap();
        assert_eq!(entry.id, 1);
        assert_eq!(entry.gate, "X");
        assert_eq!(entry.operation, "Applied X gate");
        assert_eq!(entry.initial_state, QubitState::ZERO);
        assert_eq!(entry.final_state, out);
    }

    #[test]
    fn test_reset_records_entry() {
        let mut session = Session::new(10);
        session.apply(Gate::H);
        let out = session.reset();

        assert_eq!(out, QubitState::ZERO);
        let entry = session.history().latest().unwrap();
        assert_eq!(entry.gate, RESET_LABEL);
        assert_eq!(entry.operation, "Reset to |0⟩");
        assert_eq!(entry.final_state, QubitState::ZERO);
    }

    #[test]
    fn test_history_most_recent_first() {
        let mut session = Session::new(10);
        session.apply(Gate::H);
        session.apply(Gate::S);
        session.apply(Gate::T);

        let gates: Vec<_> = session.history().iter().map(|e| e.gate.as_str()).collect();
        assert_eq!(gates, vec!["T", "S", "H"]);
    }

    #[test]
    fn test_history_limit() {
        let mut history = History::new(3);
        for _ in 0..5 {
            history.record("X", "Applied X gate", QubitState::ZERO, QubitState::ONE);
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.latest().unwrap().id, 5);
        assert_eq!(history.oldest().unwrap().id, 3);
    }

    #[test]
    fn test_history_limit_zero() {
        let mut history = History::new(0);
        history.record("X", "Applied X gate", QubitState::ZERO, QubitState::ONE);
        assert!(history.is_empty());
    }

    #[test]
    fn test_clear_keeps_numbering() {
        let mut session = Session::new(10);
        session.apply(Gate::X);
        session.clear_history();
        assert!(session.history().is_empty());

        session.apply(Gate::X);
        assert_eq!(session.history().latest().unwrap().id, 2);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_reference_double_x_picks_up_phase() {
        let mut session = Session::new(10);
        session.apply(Gate::X);
        let out = session.apply(Gate::X);
        // X·X = i·I na convenção de referência
        assert!(out.alpha.approx_eq(crate::Complex::I, 1e-12));
        assert!(out.beta.approx_eq(crate::Complex::ZERO, 1e-12));
    }

    #[test]
    fn test_standard_session_double_x_is_identity() {
        let mut session = Session::new(10).with_convention(GateConvention::Standard);
        session.apply(Gate::X);
        let out = session.apply(Gate::X);
        assert!(out.approx_eq(&QubitState::ZERO, 1e-12));
    }
}
