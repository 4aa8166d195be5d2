//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use calcterm::calculator::{CalculatorIntent, CalculatorReducer, CalculatorState, Digit, Operation};
use calcterm::ui::mvi::Reducer;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn digit(ch: char) -> CalculatorIntent {
    CalculatorIntent::AddDigit {
        digit: Digit::new(ch).expect("valid digit"),
    }
}

pub fn op(operation: Operation) -> CalculatorIntent {
    CalculatorIntent::ChooseOperation { operation }
}

/// Apply intents in order starting from `state`.
pub fn run_from(state: CalculatorState, intents: &[CalculatorIntent]) -> CalculatorState {
    intents
        .iter()
        .fold(state, |state, intent| CalculatorReducer::reduce(state, *intent))
}

/// Type every character of `keys` as a digit, starting from an empty state.
pub fn typed(keys: &str) -> CalculatorState {
    let intents: Vec<_> = keys.chars().map(digit).collect();
    run_from(CalculatorState::default(), &intents)
}

pub fn state(
    current: Option<&str>,
    operation: Option<Operation>,
    previous: Option<&str>,
) -> CalculatorState {
    CalculatorState {
        current_operand: current.map(str::to_string),
        previous_operand: previous.map(str::to_string),
        operation,
        is_overwriting: false,
    }
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
