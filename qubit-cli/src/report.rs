//! Human-readable rendering of states and history

use colored::*;
use qubit_core::{History, QubitState};
use std::fmt::Write;

/// State vector, amplitudes, probabilities and Bloch vector
pub fn state_report(state: &QubitState, precision: usize) -> String {
    let p = state.probabilities();
    let b = state.bloch();
    let mut out = String::new();

    let _ = writeln!(out, "{} {}", "State:".bold(), state.ket().cyan());
    let _ = writeln!(out, "  α = {}", state.alpha);
    let _ = writeln!(out, "  β = {}", state.beta);
    let _ = writeln!(out, "  P(|0⟩) = {:.*}", precision, p.zero);
    let _ = writeln!(out, "  P(|1⟩) = {:.*}", precision, p.one);
    let _ = writeln!(
        out,
        "  Bloch: θ = {:.3}, φ = {:.3}, (x, y, z) = ({:.3}, {:.3}, {:.3})",
        b.theta, b.phi, b.x, b.y, b.z
    );
    out
}

/// History, most recent first
pub fn history_report(history: &History, precision: usize) -> String {
    let mut out = String::new();

    if history.is_empty() {
        let _ = writeln!(out, "{}", "History is empty".dimmed());
        return out;
    }

    let _ = writeln!(
        out,
        "{} ({} of {} kept)",
        "History:".bold(),
        history.len(),
        history.limit()
    );
    for entry in history.iter() {
        let _ = writeln!(
            out,
            "  #{:<3} {:<5} {}  →  {}  (P|0⟩ = {:.*})",
            entry.id,
            entry.gate.yellow(),
            entry.initial_state,
            entry.final_state,
            precision,
            entry.final_state.probabilities().zero
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use qubit_core::{Gate, Session};

    #[test]
    fn test_state_report_contents() {
        colored::control::set_override(false);
        let report = state_report(&QubitState::ZERO, 2);
        assert!(report.contains("1.000|0⟩ + 0|1⟩"));
        assert!(report.contains("P(|0⟩) = 1.00"));
        assert!(report.contains("P(|1⟩) = 0.00"));
    }

    #[test]
    fn test_history_report_order() {
        colored::control::set_override(false);
        let mut session = Session::new(5);
        session.apply(Gate::H);
        session.reset();

        let report = history_report(session.history(), 4);
        let reset_at = report.find("RESET").unwrap();
        let h_at = report.find("#1").unwrap();
        assert!(reset_at < h_at);
        assert!(report.contains("2 of 5 kept"));
    }

    #[test]
    fn test_empty_history() {
        colored::control::set_override(false);
        assert!(history_report(&History::new(3), 4).contains("History is empty"));
    }
}
