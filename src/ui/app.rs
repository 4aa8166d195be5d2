use crate::calculator::{CalculatorIntent, CalculatorReducer, CalculatorState, OperandFormatter};
use crate::config::Config;
use crate::ui::display::DisplayLines;
use crate::ui::keypad::{ButtonPosition, FocusMove, Keypad};
use crate::ui::layout::keypad_rect;
use crate::ui::mvi::Reducer;
use ratatui::layout::Rect;
use tracing::debug;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Calculator state (MVI pattern).
    calculator: CalculatorState,
    keypad: Keypad,
    focus: ButtonPosition,
    /// Button highlighted until the next tick after being pressed.
    flashed: Option<ButtonPosition>,
    formatter: OperandFormatter,
    show_footer: bool,
    keypad_area: Rect,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            calculator: CalculatorState::default(),
            keypad: Keypad::standard(),
            focus: ButtonPosition::default(),
            flashed: None,
            formatter: OperandFormatter::from(&config.display),
            show_footer: config.ui.show_footer,
            keypad_area: Rect::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn calculator(&self) -> &CalculatorState {
        &self.calculator
    }

    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    pub fn focus(&self) -> ButtonPosition {
        self.focus
    }

    pub fn flashed(&self) -> Option<ButtonPosition> {
        self.flashed
    }

    pub fn show_footer(&self) -> bool {
        self.show_footer
    }

    pub fn display_lines(&self) -> DisplayLines {
        DisplayLines::from_state(&self.calculator, &self.formatter)
    }

    /// Dispatch an intent to the calculator reducer.
    ///
    /// Flashes the keypad button bound to the same intent, if any, so that
    /// keyboard shortcuts get the same feedback as clicks.
    pub fn dispatch(&mut self, intent: CalculatorIntent) {
        debug!(?intent, "dispatching calculator intent");
        dispatch_mvi!(self, calculator, CalculatorReducer, intent);
        self.flashed = self.position_of(intent);
    }

    /// Press the button at `position`. Returns false if there is none.
    pub fn press(&mut self, position: ButtonPosition) -> bool {
        let Some(intent) = self.keypad.button(position).map(|button| button.intent) else {
            return false;
        };
        self.focus = position;
        self.dispatch(intent);
        true
    }

    pub fn press_focused(&mut self) -> bool {
        self.press(self.focus)
    }

    pub fn move_focus(&mut self, direction: FocusMove) {
        self.focus = self.keypad.move_focus(self.focus, direction);
    }

    /// Mouse click at screen cell (`column`, `row`).
    pub fn on_click(&mut self, column: u16, row: u16) -> bool {
        match self.keypad.hit_test(self.keypad_area, column, row) {
            Some(position) => self.press(position),
            None => false,
        }
    }

    pub fn on_tick(&mut self) {
        self.flashed = None;
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.keypad_area = keypad_rect(Rect::new(0, 0, cols, rows), self.show_footer);
        debug!(cols, rows, keypad = ?self.keypad_area, "terminal resized");
    }

    fn position_of(&self, intent: CalculatorIntent) -> Option<ButtonPosition> {
        self.keypad
            .rows()
            .iter()
            .enumerate()
            .find_map(|(row, buttons)| {
                buttons
                    .iter()
                    .position(|button| button.intent == intent)
                    .map(|index| ButtonPosition { row, index })
            })
    }
}
