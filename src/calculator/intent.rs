//! Calculator actions.

use crate::calculator::operation::{Digit, Operation};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorIntent {
    /// Append a digit or decimal point to the current operand.
    AddDigit { digit: Digit },
    /// Start (or replace) the pending binary operation.
    ChooseOperation { operation: Operation },
    Clear,
    /// Backspace on the current operand.
    DeleteDigit,
    /// Replace the current operand with its square.
    Square,
    Evaluate,
}

impl CalculatorIntent {
    /// Character shortcut shared by keyboard input and `--eval` scripts.
    ///
    /// Whitespace and unknown characters map to `None`.
    pub fn from_char(ch: char) -> Option<Self> {
        if let Some(digit) = Digit::new(ch) {
            return Some(CalculatorIntent::AddDigit { digit });
        }
        if let Some(operation) = Operation::from_char(ch) {
            return Some(CalculatorIntent::ChooseOperation { operation });
        }
        match ch {
            '=' => Some(CalculatorIntent::Evaluate),
            'c' | 'C' => Some(CalculatorIntent::Clear),
            '<' => Some(CalculatorIntent::DeleteDigit),
            's' | 'S' | '²' => Some(CalculatorIntent::Square),
            _ => None,
        }
    }
}

impl Intent for CalculatorIntent {}
