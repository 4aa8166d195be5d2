use crate::calculator::CalculatorIntent;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::keypad::{Button, ButtonPosition};
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, DISPLAY_TEXT, FOCUS_BORDER, GLOBAL_BORDER, STATUS_ERROR,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (display, keypad, footer) = layout_regions(area, app.show_footer());

    frame.render_widget(Clear, area);
    frame.render_widget(app.display_lines().widget(), display);

    for (position, rect) in app.keypad().layout(keypad) {
        if let Some(button) = app.keypad().button(position) {
            frame.render_widget(button_widget(app, button, position, rect), rect);
        }
    }

    if footer.height > 0 {
        frame.render_widget(Footer::new().widget(footer), footer);
    }
}

fn button_widget(
    app: &App,
    button: &Button,
    position: ButtonPosition,
    rect: Rect,
) -> Paragraph<'static> {
    let label_color = match button.intent {
        CalculatorIntent::ChooseOperation { .. } | CalculatorIntent::Evaluate => ACCENT,
        CalculatorIntent::Clear | CalculatorIntent::DeleteDigit => STATUS_ERROR,
        _ => DISPLAY_TEXT,
    };
    let focused = app.focus() == position;

    let mut style = Style::default().fg(label_color).add_modifier(Modifier::BOLD);
    if focused {
        style = style.bg(ACTIVE_HIGHLIGHT);
    }
    if app.flashed() == Some(position) {
        style = style.add_modifier(Modifier::REVERSED);
    }
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };

    // Vertically center the label inside the bordered cell.
    let inner_height = rect.height.saturating_sub(2);
    let mut lines = vec![Line::from(""); usize::from(inner_height.saturating_sub(1) / 2)];
    lines.push(Line::from(button.label));

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
}
