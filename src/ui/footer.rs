use crate::ui::theme::{DISPLAY_TEXT, GLOBAL_BORDER};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const SEPARATOR: &str = " │ ";

/// Keyboard shortcuts for the calculator buttons, most useful first.
const KEY_HINTS: [(&str, &str); 5] = [
    ("Enter", "="),
    ("Bksp", "DEL"),
    ("Esc", "AC"),
    ("s", "x²"),
    ("q", "Quit"),
];

/// Bottom bar of the calculator: the keyboard shortcuts for `=`, `DEL`,
/// `AC` and `x²`, and the crate version on the right.
///
/// Hints that do not fit next to the version are dropped from the end.
pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Hint text that fits in `width` columns.
    pub fn hints(&self, width: usize) -> String {
        let mut text = String::from(" ");
        for (index, (key, action)) in KEY_HINTS.iter().enumerate() {
            let hint = format!("{key}: {action}");
            let sep = if index == 0 { "" } else { SEPARATOR };
            // Char count, not byte count: │ and ² are multi-byte.
            if text.chars().count() + sep.chars().count() + hint.chars().count() > width {
                break;
            }
            text.push_str(sep);
            text.push_str(&hint);
        }
        text
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let version = format!("v{VERSION} ");
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let hints = self.hints(content_width.saturating_sub(version_width + 1));
        let padding = content_width
            .saturating_sub(hints.chars().count())
            .saturating_sub(version_width);

        let text_style = Style::default().fg(DISPLAY_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_footer_shows_every_hint() {
        let hints = Footer::new().hints(80);
        assert_eq!(hints, " Enter: = │ Bksp: DEL │ Esc: AC │ s: x² │ q: Quit");
    }

    #[test]
    fn narrow_footer_drops_trailing_hints() {
        let hints = Footer::new().hints(30);
        assert_eq!(hints, " Enter: = │ Bksp: DEL");
        assert!(hints.chars().count() <= 30);
    }

    #[test]
    fn calculator_panel_fits_hints_and_version() {
        // 48 columns wide: 46 inside the border.
        let version_width = format!("v{VERSION} ").chars().count();
        let hints = Footer::new().hints(46 - version_width - 1);
        assert!(hints.chars().count() + version_width < 46);
        assert!(hints.contains("Esc: AC"));
    }

    #[test]
    fn zero_width_keeps_only_leading_space() {
        assert_eq!(Footer::new().hints(0), " ");
    }
}
