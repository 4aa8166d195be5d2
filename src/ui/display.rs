use crate::calculator::{CalculatorState, OperandFormatter, ERROR_MARKER};
use crate::ui::theme::{DISPLAY_DIM, DISPLAY_TEXT, GLOBAL_BORDER, STATUS_ERROR};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Formatted text for the two display lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayLines {
    /// Previous operand followed by the pending operation, e.g. `1,200 +`.
    pub previous: Option<String>,
    pub current: Option<String>,
}

impl DisplayLines {
    pub fn from_state(state: &CalculatorState, formatter: &OperandFormatter) -> Self {
        let previous_operand = formatter.format(state.previous_operand.as_deref());
        let previous = match (previous_operand, state.operation) {
            (Some(operand), Some(op)) => Some(format!("{operand} {op}")),
            (None, Some(op)) => Some(op.to_string()),
            (operand, None) => operand,
        };
        Self {
            previous,
            current: formatter.format(state.current_operand.as_deref()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.current.as_deref() == Some(ERROR_MARKER)
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let current_style = if self.is_error() {
            Style::default().fg(STATUS_ERROR)
        } else {
            Style::default().fg(DISPLAY_TEXT)
        }
        .add_modifier(Modifier::BOLD);

        let lines = vec![
            Line::styled(
                self.previous.clone().unwrap_or_default(),
                Style::default().fg(DISPLAY_DIM),
            ),
            Line::styled(self.current.clone().unwrap_or_default(), current_style),
        ];

        Paragraph::new(lines).alignment(Alignment::Right).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operation;

    #[test]
    fn previous_line_carries_operation() {
        let state = CalculatorState {
            previous_operand: Some("1200".into()),
            operation: Some(Operation::Divide),
            current_operand: Some("3.".into()),
            is_overwriting: false,
        };
        let lines = DisplayLines::from_state(&state, &OperandFormatter::default());
        assert_eq!(lines.previous.as_deref(), Some("1,200 ÷"));
        assert_eq!(lines.current.as_deref(), Some("3."));
    }

    #[test]
    fn operation_without_previous_shows_symbol_only() {
        let state = CalculatorState {
            operation: Some(Operation::Add),
            ..CalculatorState::default()
        };
        let lines = DisplayLines::from_state(&state, &OperandFormatter::default());
        assert_eq!(lines.previous.as_deref(), Some("+"));
        assert_eq!(lines.current, None);
    }

    #[test]
    fn empty_state_has_empty_lines() {
        let lines = DisplayLines::from_state(&CalculatorState::default(), &OperandFormatter::default());
        assert_eq!(lines, DisplayLines::default());
        assert!(!lines.is_error());
    }

    #[test]
    fn error_marker_is_flagged() {
        let state = CalculatorState {
            current_operand: Some(ERROR_MARKER.into()),
            is_overwriting: true,
            ..CalculatorState::default()
        };
        assert!(DisplayLines::from_state(&state, &OperandFormatter::default()).is_error());
    }
}
