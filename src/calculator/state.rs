//! Calculator state record.

use crate::calculator::operation::Operation;
use crate::ui::mvi::UiState;

/// Everything the display needs.
///
/// Operands are kept as strings so that in-progress entry (`"12."`) survives
/// until the next digit arrives.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CalculatorState {
    pub current_operand: Option<String>,
    pub previous_operand: Option<String>,
    pub operation: Option<Operation>,
    /// When set, the next digit replaces `current_operand` instead of
    /// appending to it.
    pub is_overwriting: bool,
}

impl UiState for CalculatorState {}

impl CalculatorState {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let state = CalculatorState::default();
        assert!(state.is_empty());
        assert_eq!(state.operation, None);
        assert!(!state.is_overwriting);
    }

    #[test]
    fn overwrite_flag_alone_is_not_empty() {
        let state = CalculatorState {
            is_overwriting: true,
            ..CalculatorState::default()
        };
        assert!(!state.is_empty());
    }
}
