//! Interactive line-oriented session

use anyhow::Result;
use colored::*;
use qubit_core::{Gate, Session};
use std::io::{BufRead, Write};

use crate::report;

/// One line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Apply(Gate),
    Reset,
    State,
    History,
    Clear,
    Help,
    Quit,
}

impl ReplCommand {
    /// Gate symbols are case-sensitive; keywords are not
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        if let Ok(gate) = line.parse::<Gate>() {
            return Ok(Some(Self::Apply(gate)));
        }

        let command = match line.to_ascii_lowercase().as_str() {
            "reset" => Self::Reset,
            "state" => Self::State,
            "history" => Self::History,
            "clear" => Self::Clear,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => {
                return Err(format!(
                    "unknown command '{}'. Gates: {}; commands: reset, state, history, clear, help, quit",
                    line,
                    Gate::valid_names()
                ));
            }
        };
        Ok(Some(command))
    }
}

/// Runs until `quit` or end of input
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
    precision: usize,
) -> Result<()> {
    write!(out, "{}", report::state_report(&session.current(), precision))?;
    prompt(out)?;

    for line in input.lines() {
        let line = line?;

        match ReplCommand::parse(&line) {
            Ok(None) => {}
            Ok(Some(ReplCommand::Quit)) => break,
            Ok(Some(command)) => execute(session, command, out, precision)?,
            Err(message) => writeln!(out, "{} {}", "error:".red().bold(), message)?,
        }
        prompt(out)?;
    }

    writeln!(out)?;
    Ok(())
}

fn execute<W: Write>(
    session: &mut Session,
    command: ReplCommand,
    out: &mut W,
    precision: usize,
) -> Result<()> {
    match command {
        ReplCommand::Apply(gate) => {
            let state = session.apply(gate);
            tracing::debug!(%gate, %state, "session gate");
            write!(out, "{}", report::state_report(&state, precision))?;
        }
        ReplCommand::Reset => {
            let state = session.reset();
            write!(out, "{}", report::state_report(&state, precision))?;
        }
        ReplCommand::State => {
            write!(out, "{}", report::state_report(&session.current(), precision))?;
        }
        ReplCommand::History => {
            write!(out, "{}", report::history_report(session.history(), precision))?;
        }
        ReplCommand::Clear => {
            session.clear_history();
            writeln!(out, "{}", "History cleared".green())?;
        }
        ReplCommand::Help => {
            writeln!(out, "Gates: {}", Gate::valid_names())?;
            writeln!(out, "Commands: reset, state, history, clear, help, quit")?;
        }
        ReplCommand::Quit => {}
    }
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "{} ", "qubit>".bold())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use qubit_core::QubitState;
    use std::io::Cursor;

    fn drive(script: &str) -> (Session, String) {
        colored::control::set_override(false);
        let mut session = Session::new(10);
        let mut out = Vec::new();
        run(&mut session, Cursor::new(script), &mut out, 4).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ReplCommand::parse("H"), Ok(Some(ReplCommand::Apply(Gate::H))));
        assert_eq!(ReplCommand::parse("  RESET "), Ok(Some(ReplCommand::Reset)));
        assert_eq!(ReplCommand::parse("exit"), Ok(Some(ReplCommand::Quit)));
        assert_eq!(ReplCommand::parse(""), Ok(None));
        assert!(ReplCommand::parse("CNOT").is_err());
    }

    #[test]
    fn test_session_script() {
        let (session, output) = drive("X\nhistory\nquit\nH\n");

        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history().latest().unwrap().gate, "X");
        assert!(session.current().approx_eq(&QubitState::ONE, 1e-12));
        assert!(output.contains("P(|1⟩) = 1.0000"));
        assert!(output.contains("1 of 10 kept"));
    }

    #[test]
    fn test_reset_and_clear() {
        let (session, output) = drive("H\nreset\nclear\n");
        assert_eq!(session.current(), QubitState::ZERO);
        assert!(session.history().is_empty());
        assert!(output.contains("History cleared"));
    }

    #[test]
    fn test_unknown_input_keeps_session() {
        let (session, output) = drive("Q\n");
        assert!(session.history().is_empty());
        assert!(output.contains("unknown command 'Q'"));
    }
}
