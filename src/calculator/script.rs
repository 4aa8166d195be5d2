//! Key scripts for non-interactive evaluation (`--eval "12+7="`).

use thiserror::Error;

use crate::calculator::intent::CalculatorIntent;
use crate::calculator::reducer::CalculatorReducer;
use crate::calculator::state::CalculatorState;
use crate::ui::mvi::Reducer;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("Unknown key '{key}' at position {position}")]
    UnknownKey { key: char, position: usize },
}

/// Translates every non-whitespace character into an intent.
///
/// Positions in errors are 1-based character offsets.
pub fn parse_script(script: &str) -> Result<Vec<CalculatorIntent>, ScriptError> {
    script
        .chars()
        .enumerate()
        .filter(|(_, ch)| !ch.is_whitespace())
        .map(|(idx, ch)| {
            CalculatorIntent::from_char(ch).ok_or(ScriptError::UnknownKey {
                key: ch,
                position: idx + 1,
            })
        })
        .collect()
}

/// Feeds intents through the reducer starting from `state`.
pub fn replay<I>(state: CalculatorState, intents: I) -> CalculatorState
where
    I: IntoIterator<Item = CalculatorIntent>,
{
    intents
        .into_iter()
        .fold(state, CalculatorReducer::reduce)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::operation::Operation;

    #[test]
    fn parses_every_key_kind() {
        let intents = parse_script("1.+ - * / ÷ = c < s ²").unwrap();
        assert_eq!(intents.len(), 12);
        assert_eq!(
            intents[5],
            CalculatorIntent::ChooseOperation {
                operation: Operation::Divide
            }
        );
        assert_eq!(intents[11], CalculatorIntent::Square);
    }

    #[test]
    fn reports_unknown_key_position() {
        let err = parse_script("12 x 3").unwrap_err();
        assert_eq!(err, ScriptError::UnknownKey { key: 'x', position: 4 });
        assert_eq!(err.to_string(), "Unknown key 'x' at position 4");
    }

    #[test]
    fn replay_evaluates_script() {
        let state = replay(CalculatorState::default(), parse_script("12+7=").unwrap());
        assert_eq!(state.current_operand.as_deref(), Some("19"));
        assert!(state.is_overwriting);
    }
}
