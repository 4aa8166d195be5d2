//! Button grid: what each button does and where it sits on screen.

use crate::calculator::{CalculatorIntent, Digit, Operation};
use ratatui::layout::{Constraint, Layout, Rect};

pub const COLUMNS: u16 = 4;

const NUMERAL_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    /// Number of grid columns the button covers.
    pub span: u16,
    pub intent: CalculatorIntent,
}

impl Button {
    fn new(label: &'static str, intent: CalculatorIntent) -> Self {
        Self {
            label,
            span: 1,
            intent,
        }
    }

    fn wide(label: &'static str, intent: CalculatorIntent) -> Self {
        Self {
            label,
            span: 2,
            intent,
        }
    }

    fn numeral(n: u8) -> Self {
        let digit = Digit::numeral(n);
        Self::new(
            NUMERAL_LABELS[usize::from(n % 10)],
            CalculatorIntent::AddDigit { digit },
        )
    }

    fn operation(operation: Operation) -> Self {
        Self::new(
            operation.symbol(),
            CalculatorIntent::ChooseOperation { operation },
        )
    }
}

/// Row and index within the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonPosition {
    pub row: usize,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypad {
    rows: Vec<Vec<Button>>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::standard()
    }
}

impl Keypad {
    /// ```text
    /// | AC      | DEL | x² |
    /// | ÷ | 1   | 2   | 3  |
    /// | * | 4   | 5   | 6  |
    /// | + | 7   | 8   | 9  |
    /// | - | .   | 0   | =  |
    /// ```
    pub fn standard() -> Self {
        let rows = vec![
            vec![
                Button::wide("AC", CalculatorIntent::Clear),
                Button::new("DEL", CalculatorIntent::DeleteDigit),
                Button::new("x²", CalculatorIntent::Square),
            ],
            vec![
                Button::operation(Operation::Divide),
                Button::numeral(1),
                Button::numeral(2),
                Button::numeral(3),
            ],
            vec![
                Button::operation(Operation::Multiply),
                Button::numeral(4),
                Button::numeral(5),
                Button::numeral(6),
            ],
            vec![
                Button::operation(Operation::Add),
                Button::numeral(7),
                Button::numeral(8),
                Button::numeral(9),
            ],
            vec![
                Button::operation(Operation::Subtract),
                Button::new(
                    ".",
                    CalculatorIntent::AddDigit {
                        digit: Digit::POINT,
                    },
                ),
                Button::numeral(0),
                Button::new("=", CalculatorIntent::Evaluate),
            ],
        ];
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Button>] {
        &self.rows
    }

    pub fn button(&self, position: ButtonPosition) -> Option<&Button> {
        self.rows.get(position.row)?.get(position.index)
    }

    /// Screen rectangle of every button inside `area`.
    pub fn layout(&self, area: Rect) -> Vec<(ButtonPosition, Rect)> {
        let row_count = self.rows.len() as u32;
        if row_count == 0 {
            return Vec::new();
        }
        let row_areas =
            Layout::vertical((0..row_count).map(|_| Constraint::Ratio(1, row_count))).split(area);

        let mut placed = Vec::new();
        for (row_idx, (row, row_area)) in self.rows.iter().zip(row_areas.iter()).enumerate() {
            let cells = Layout::horizontal(
                (0..COLUMNS).map(|_| Constraint::Ratio(1, u32::from(COLUMNS))),
            )
            .split(*row_area);

            let mut column = 0usize;
            for (index, button) in row.iter().enumerate() {
                let last = (column + usize::from(button.span)).min(cells.len());
                if column >= last {
                    break;
                }
                let rect = cells[column..last]
                    .iter()
                    .skip(1)
                    .fold(cells[column], |acc, cell| acc.union(*cell));
                placed.push((ButtonPosition { row: row_idx, index }, rect));
                column = last;
            }
        }
        placed
    }

    /// Button under the screen cell (`x`, `y`), if any.
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<ButtonPosition> {
        self.layout(area)
            .into_iter()
            .find(|(_, rect)| {
                x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
            })
            .map(|(position, _)| position)
    }

    /// Moves focus one step, wrapping at the edges.
    ///
    /// Vertical moves keep the grid column, so moving down from `AC` lands on
    /// `÷` and moving up from `2` lands on `DEL`.
    pub fn move_focus(&self, from: ButtonPosition, direction: FocusMove) -> ButtonPosition {
        let row_count = self.rows.len();
        if row_count == 0 {
            return ButtonPosition::default();
        }
        let row = from.row.min(row_count - 1);
        let row_len = self.rows[row].len().max(1);
        let index = from.index.min(row_len - 1);

        match direction {
            FocusMove::Left => ButtonPosition {
                row,
                index: if index == 0 { row_len - 1 } else { index - 1 },
            },
            FocusMove::Right => ButtonPosition {
                row,
                index: if index + 1 >= row_len { 0 } else { index + 1 },
            },
            FocusMove::Up | FocusMove::Down => {
                let target_row = if direction == FocusMove::Up {
                    if row == 0 {
                        row_count - 1
                    } else {
                        row - 1
                    }
                } else if row + 1 >= row_count {
                    0
                } else {
                    row + 1
                };
                let column = self.column_of(row, index);
                ButtonPosition {
                    row: target_row,
                    index: self.index_at_column(target_row, column),
                }
            }
        }
    }

    fn column_of(&self, row: usize, index: usize) -> u16 {
        self.rows[row]
            .iter()
            .take(index)
            .map(|button| button.span)
            .sum()
    }

    fn index_at_column(&self, row: usize, column: u16) -> usize {
        let mut start = 0u16;
        for (index, button) in self.rows[row].iter().enumerate() {
            if column < start + button.span {
                return index;
            }
            start += button.span;
        }
        self.rows[row].len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label_at(keypad: &Keypad, position: ButtonPosition) -> &'static str {
        keypad.button(position).map(|b| b.label).unwrap_or("")
    }

    #[test]
    fn every_row_fills_the_grid() {
        let keypad = Keypad::standard();
        for row in keypad.rows() {
            let width: u16 = row.iter().map(|b| b.span).sum();
            assert_eq!(width, COLUMNS);
        }
    }

    #[test]
    fn every_key_is_reachable_by_shortcut_or_button() {
        let keypad = Keypad::standard();
        let labels: Vec<_> = keypad.rows().iter().flatten().map(|b| b.label).collect();
        for expected in ["AC", "DEL", "x²", "÷", "*", "+", "-", ".", "=", "0", "9"] {
            assert!(labels.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn operators_run_down_the_first_column() {
        let keypad = Keypad::standard();
        let column: Vec<_> = (1..5)
            .map(|row| label_at(&keypad, ButtonPosition { row, index: 0 }))
            .collect();
        assert_eq!(column, ["÷", "*", "+", "-"]);
    }

    #[test]
    fn hit_test_finds_wide_button() {
        let keypad = Keypad::standard();
        let area = Rect::new(0, 0, 40, 20);
        // Both halves of AC map to the same button.
        assert_eq!(
            keypad.hit_test(area, 1, 1),
            Some(ButtonPosition { row: 0, index: 0 })
        );
        assert_eq!(
            keypad.hit_test(area, 15, 1),
            Some(ButtonPosition { row: 0, index: 0 })
        );
        assert_eq!(label_at(&keypad, ButtonPosition { row: 0, index: 1 }), "DEL");
        assert_eq!(
            keypad.hit_test(area, 25, 1),
            Some(ButtonPosition { row: 0, index: 1 })
        );
    }

    #[test]
    fn hit_test_bottom_right_is_equals() {
        let keypad = Keypad::standard();
        let area = Rect::new(2, 3, 40, 20);
        let position = keypad.hit_test(area, 41, 22).unwrap();
        assert_eq!(label_at(&keypad, position), "=");
    }

    #[test]
    fn hit_test_outside_area_is_none() {
        let keypad = Keypad::standard();
        let area = Rect::new(10, 10, 20, 10);
        assert_eq!(keypad.hit_test(area, 0, 0), None);
        assert_eq!(keypad.hit_test(area, 30, 12), None);
    }

    #[test]
    fn vertical_moves_keep_column() {
        let keypad = Keypad::standard();
        let two = ButtonPosition { row: 1, index: 2 };
        let up = keypad.move_focus(two, FocusMove::Up);
        assert_eq!(label_at(&keypad, up), "DEL");

        let three = ButtonPosition { row: 1, index: 3 };
        let up = keypad.move_focus(three, FocusMove::Up);
        assert_eq!(label_at(&keypad, up), "x²");

        let ac = ButtonPosition { row: 0, index: 0 };
        let down = keypad.move_focus(ac, FocusMove::Down);
        assert_eq!(label_at(&keypad, down), "÷");
    }

    #[test]
    fn moves_wrap_around() {
        let keypad = Keypad::standard();
        let ac = ButtonPosition { row: 0, index: 0 };
        assert_eq!(
            label_at(&keypad, keypad.move_focus(ac, FocusMove::Left)),
            "x²"
        );
        assert_eq!(label_at(&keypad, keypad.move_focus(ac, FocusMove::Up)), "-");
        let equals = ButtonPosition { row: 4, index: 3 };
        assert_eq!(
            label_at(&keypad, keypad.move_focus(equals, FocusMove::Down)),
            "x²"
        );
    }
}
