//! Reducer for the calculator.

use crate::calculator::arithmetic;
use crate::calculator::intent::CalculatorIntent;
use crate::calculator::operation::Digit;
use crate::calculator::state::CalculatorState;
use crate::ui::mvi::Reducer;

/// Pure state transitions for every calculator button.
pub struct CalculatorReducer;

impl Reducer for CalculatorReducer {
    type State = CalculatorState;
    type Intent = CalculatorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CalculatorIntent::AddDigit { digit } => add_digit(state, digit),

            CalculatorIntent::ChooseOperation { operation } => {
                if state.operation.is_some() {
                    CalculatorState {
                        operation: Some(operation),
                        is_overwriting: true,
                        ..state
                    }
                } else {
                    CalculatorState {
                        previous_operand: state.current_operand,
                        current_operand: None,
                        operation: Some(operation),
                        is_overwriting: true,
                    }
                }
            }

            CalculatorIntent::Clear => CalculatorState::default(),

            CalculatorIntent::DeleteDigit => {
                if state.is_overwriting {
                    return CalculatorState {
                        current_operand: None,
                        is_overwriting: false,
                        ..state
                    };
                }
                if state.current_operand.is_none() {
                    return state;
                }
                let mut operand = state.current_operand.unwrap_or_default();
                operand.pop();
                CalculatorState {
                    current_operand: (!operand.is_empty()).then_some(operand),
                    ..state
                }
            }

            CalculatorIntent::Square => {
                let squared = state.current_operand.as_deref().and_then(arithmetic::square);
                match squared {
                    Some(squared) => CalculatorState {
                        current_operand: Some(squared),
                        is_overwriting: true,
                        ..state
                    },
                    None => state,
                }
            }

            CalculatorIntent::Evaluate => match state.operation {
                Some(operation) => CalculatorState {
                    current_operand: Some(arithmetic::evaluate(
                        state.previous_operand.as_deref(),
                        operation,
                        state.current_operand.as_deref(),
                    )),
                    previous_operand: None,
                    operation: None,
                    is_overwriting: true,
                },
                None => state,
            },
        }
    }
}

fn add_digit(state: CalculatorState, digit: Digit) -> CalculatorState {
    if state.is_overwriting {
        return CalculatorState {
            current_operand: Some(start_operand(digit)),
            is_overwriting: false,
            ..state
        };
    }

    let current = match state.current_operand.as_deref() {
        None => {
            return CalculatorState {
                current_operand: Some(start_operand(digit)),
                ..state
            }
        }
        Some(current) => current,
    };

    if digit.is_point() && current.contains('.') {
        return state;
    }
    if current == "0" && !digit.is_point() {
        if digit.is_zero() {
            return state;
        }
        // A lone zero is replaced rather than extended.
        return CalculatorState {
            current_operand: Some(digit.to_string()),
            ..state
        };
    }

    let mut operand = current.to_string();
    operand.push(digit.as_char());
    CalculatorState {
        current_operand: Some(operand),
        ..state
    }
}

fn start_operand(digit: Digit) -> String {
    if digit.is_point() {
        "0.".to_string()
    } else {
        digit.to_string()
    }
}
