use ratatui::layout::Rect;

/// Widest the calculator grows; extra terminal space is left empty.
pub const MAX_WIDTH: u16 = 48;
pub const MAX_HEIGHT: u16 = 32;
/// Bordered panel holding the previous and current operand lines.
pub const DISPLAY_HEIGHT: u16 = 4;
pub const FOOTER_HEIGHT: u16 = 3;

/// Splits the screen into display, keypad and footer regions.
///
/// The footer region has zero height when `show_footer` is off.
pub fn layout_regions(area: Rect, show_footer: bool) -> (Rect, Rect, Rect) {
    let area = centered_rect_by_size(area, MAX_WIDTH, MAX_HEIGHT);
    let display_height = DISPLAY_HEIGHT.min(area.height);
    let footer_height = if show_footer {
        FOOTER_HEIGHT.min(area.height.saturating_sub(display_height))
    } else {
        0
    };
    let display = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: display_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let keypad = Rect {
        x: area.x,
        y: area.y + display_height,
        width: area.width,
        height: area.height.saturating_sub(display_height + footer_height),
    };
    (display, keypad, footer)
}

pub fn keypad_rect(area: Rect, show_footer: bool) -> Rect {
    layout_regions(area, show_footer).1
}

/// A `width` × `height` rectangle centered in `area`, shrunk to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_stack_without_overlap() {
        let (display, keypad, footer) = layout_regions(Rect::new(0, 0, 48, 32), true);
        assert_eq!(display, Rect::new(0, 0, 48, 4));
        assert_eq!(keypad, Rect::new(0, 4, 48, 25));
        assert_eq!(footer, Rect::new(0, 29, 48, 3));
    }

    #[test]
    fn hidden_footer_gives_keypad_the_space() {
        let (_, keypad, footer) = layout_regions(Rect::new(0, 0, 48, 32), false);
        assert_eq!(keypad.height, 28);
        assert_eq!(footer.height, 0);
    }

    #[test]
    fn large_terminal_centers_calculator() {
        let (display, _, _) = layout_regions(Rect::new(0, 0, 100, 40), true);
        assert_eq!(display.x, 26);
        assert_eq!(display.y, 4);
        assert_eq!(display.width, MAX_WIDTH);
    }

    #[test]
    fn tiny_terminal_does_not_underflow() {
        let (display, keypad, footer) = layout_regions(Rect::new(0, 0, 10, 2), true);
        assert_eq!(display.height, 2);
        assert_eq!(keypad.height, 0);
        assert_eq!(footer.height, 0);
    }
}
