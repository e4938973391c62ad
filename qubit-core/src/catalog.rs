//! Catálogo estático de portas (documentação, sem cálculo)

use serde::Serialize;

use crate::gates::Gate;

/// Metadados de referência de uma porta
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GateDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    /// Matriz em texto; as entradas podem ser simbólicas (`i`, `1/√2`)
    pub matrix: [[&'static str; 2]; 2],
    pub category: &'static str,
    pub common_uses: &'static [&'static str],
}

static GATES: [GateDescriptor; 6] = [
    GateDescriptor {
        name: "X",
        description: "Pauli-X gate (NOT gate) - flips the qubit state",
        matrix: [["0", "1"], ["1", "0"]],
        category: "Pauli",
        common_uses: &["Bit flip", "State inversion", "Quantum NOT operations"],
    },
    GateDescriptor {
        name: "Y",
        description: "Pauli-Y gate - rotates the qubit around the Y-axis of the Bloch sphere",
        matrix: [["0", "-i"], ["i", "0"]],
        category: "Pauli",
        common_uses: &["Phase and bit flip", "Bloch sphere rotation", "Quantum algorithms"],
    },
    GateDescriptor {
        name: "Z",
        description: "Pauli-Z gate (Phase flip) - applies a phase of -1 to the |1⟩ state",
        matrix: [["1", "0"], ["0", "-1"]],
        category: "Pauli",
        common_uses: &["Phase flip", "Error correction", "Quantum computing basics"],
    },
    GateDescriptor {
        name: "H",
        description: "Hadamard gate - creates superposition states",
        matrix: [["1/√2", "1/√2"], ["1/√2", "-1/√2"]],
        category: "Single-Qubit",
        common_uses: &[
            "Superposition creation",
            "Quantum algorithms initialization",
            "Bell state preparation",
        ],
    },
    GateDescriptor {
        name: "S",
        description: "Phase gate - applies a phase of π/2 to the |1⟩ state",
        matrix: [["1", "0"], ["0", "i"]],
        category: "Phase",
        common_uses: &["Phase manipulation", "Quantum circuits", "Error correction"],
    },
    GateDescriptor {
        name: "T",
        description: "π/8 gate - applies a phase of π/4 to the |1⟩ state",
        matrix: [["1", "0"], ["0", "e^(iπ/4)"]],
        category: "Phase",
        common_uses: &[
            "Universal quantum computation",
            "Phase manipulation",
            "Quantum algorithms",
        ],
    },
];

/// Tabela completa, na ordem X, Y, Z, H, S, T
pub fn catalog() -> &'static [GateDescriptor] {
    &GATES
}

/// Categorias distintas, na ordem em que aparecem
pub fn categories() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for descriptor in &GATES {
        if !seen.contains(&descriptor.category) {
            seen.push(descriptor.category);
        }
    }
    seen
}

/// Metadados de uma porta
pub fn describe_gate(gate: Gate) -> Option<&'static GateDescriptor> {
    describe_named(gate.symbol())
}

/// Busca por nome exato
pub fn describe_named(name: &str) -> Option<&'static GateDescriptor> {
    GATES.iter().find(|d| d.name == name)
}
