//! qubit - single-qubit gate calculator
//! Command-line interface over the compute/describe contracts and interactive sessions
//!
//! ## Environment Variables
//! - `QUBIT_CONVENTION`: Arithmetic for X, Y, Z and H (`reference` or `standard`, default: reference)
//! - `QUBIT_HISTORY_LIMIT`: Session history entries kept (default: 50)
//! - `QUBIT_PRECISION`: Decimal places for printed probabilities (default: 4)
//! - `RUST_LOG`: Log filter (default: `qubit_cli=info,qubit_api=info`)

mod report;
mod repl;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use qubit_core::{Gate, GateConvention, QubitState, Session, DEFAULT_HISTORY_LIMIT};
use serde_json::{json, Value};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "qubit")]
#[command(author = "SIL Contributors")]
#[command(version = "2026.1.16")]
#[command(about = "Single-qubit gate calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Arithmetic convention for the real-matrix gates (reference | standard)
    #[arg(long, global = true, default_value = "reference", env = "QUBIT_CONVENTION")]
    convention: GateConvention,

    /// Number of history entries kept by a session
    #[arg(long, global = true, default_value_t = DEFAULT_HISTORY_LIMIT, env = "QUBIT_HISTORY_LIMIT")]
    history_limit: usize,

    /// Decimal places for printed probabilities
    #[arg(long, global = true, default_value_t = 4, env = "QUBIT_PRECISION")]
    precision: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply one gate to a state and print the compute response
    Apply {
        /// Gate identifier (X, Y, Z, H, S, T)
        #[arg(value_name = "GATE")]
        gate: String,

        /// Input state as JSON, e.g. '{"alpha":{"real":1,"imag":0},"beta":{"real":0,"imag":0}}'
        #[arg(short, long, value_name = "JSON")]
        state: Option<String>,
    },

    /// Run a raw compute request (JSON) from a file or stdin
    Compute {
        /// Request file; reads stdin when omitted
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// List gate metadata
    Gates {
        /// Print the describe response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay a sequence of gates from |0⟩ ("reset" returns to |0⟩)
    Run {
        /// Gate symbols or "reset", applied left to right
        #[arg(value_name = "STEP", required = true)]
        steps: Vec<String>,
    },

    /// Interactive session on stdin
    Session,
}

fn main() {
    let _ = dotenv::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qubit_cli=info,qubit_api=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Apply { ref gate, ref state } => {
            apply_command(gate, state.as_deref(), cli.convention)
        }
        Commands::Compute { ref input } => compute_command(input.as_deref()),
        Commands::Gates { json } => gates_command(json),
        Commands::Run { ref steps } => run_command(steps, &cli),
        Commands::Session => session_command(&cli),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

// ============================================================================
// Contract commands
// ============================================================================

fn apply_command(gate: &str, state: Option<&str>, convention: GateConvention) -> Result<()> {
    let state: Value = match state {
        Some(text) => serde_json::from_str(text).context("--state is not valid JSON")?,
        None => serde_json::to_value(QubitState::ZERO)?,
    };

    let mut body = json!({ "gate": gate, "state": state });
    if convention != GateConvention::Reference {
        body["convention"] = serde_json::to_value(convention)?;
    }

    let (status, response) = qubit_api::compute_handler(&body);
    println!("{}", serde_json::to_string_pretty(&response)?);

    if !status.is_success() {
        bail!("compute failed with status {}", status.code());
    }
    Ok(())
}

fn compute_command(input: Option<&Path>) -> Result<()> {
    let text = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read request from stdin")?;
            buf
        }
    };

    let (status, body) = qubit_api::compute_json(&text);
    println!("{}", body);

    if !status.is_success() {
        bail!("compute failed with status {}", status.code());
    }
    Ok(())
}

fn gates_command(json: bool) -> Result<()> {
    if json {
        let (_, body) = qubit_api::describe_json();
        println!("{}", body);
        return Ok(());
    }

    let described = qubit_api::describe();
    println!(
        "{} ({} gates: {})",
        "Single-qubit gates".bold(),
        described.total_gates,
        described.categories.join(", ")
    );
    println!();

    for gate in &described.gates {
        println!(
            "{}  {}  {}",
            gate.name.cyan().bold(),
            format!("[{}]", gate.category).dimmed(),
            gate.description
        );
        for row in gate.matrix {
            println!("     [ {:>6} {:>6} ]", row[0], row[1]);
        }
        println!("     {} {}", "uses:".dimmed(), gate.common_uses.join(", "));
        println!();
    }
    Ok(())
}

// ============================================================================
// Session commands
// ============================================================================

fn run_command(steps: &[String], cli: &Cli) -> Result<()> {
    let mut session = Session::new(cli.history_limit).with_convention(cli.convention);

    for step in steps {
        if step.eq_ignore_ascii_case("reset") {
            session.reset();
        } else {
            let gate: Gate = step
                .parse()
                .with_context(|| format!("cannot apply step '{}'", step))?;
            session.apply(gate);
        }
    }

    tracing::info!(steps = steps.len(), "sequence replayed");
    print!("{}", report::state_report(&session.current(), cli.precision));
    println!();
    print!("{}", report::history_report(session.history(), cli.precision));
    Ok(())
}

fn session_command(cli: &Cli) -> Result<()> {
    let mut session = Session::new(cli.history_limit).with_convention(cli.convention);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    repl::run(&mut session, stdin.lock(), &mut stdout, cli.precision)
}
