use crate::calculator::CalculatorIntent;
use crate::ui::app::App;
use crate::ui::keypad::FocusMove;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.request_quit(),
        KeyCode::Char(' ') => {
            app.press_focused();
        }
        KeyCode::Char(ch) => {
            if let Some(intent) = CalculatorIntent::from_char(ch) {
                app.dispatch(intent);
            }
        }
        KeyCode::Enter => app.dispatch(CalculatorIntent::Evaluate),
        KeyCode::Backspace => app.dispatch(CalculatorIntent::DeleteDigit),
        KeyCode::Esc | KeyCode::Delete => app.dispatch(CalculatorIntent::Clear),
        KeyCode::Up => app.move_focus(FocusMove::Up),
        KeyCode::Down => app.move_focus(FocusMove::Down),
        KeyCode::Left => app.move_focus(FocusMove::Left),
        KeyCode::Right => app.move_focus(FocusMove::Right),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        app.on_click(mouse.column, mouse.row);
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
