//! # TitleBar Component
//!
//! Top bar with the screen title centered on the theme's title colors.
//! On the detail screen it also carries the back control at its left edge.
//!
//! ```text
//! List:    "                Car Selector                "
//! Detail:  " ← Back           Sedan                      "
//! ```
//!
//! TitleBar is purely presentational: it receives all data as props and
//! keeps no state between frames. Hit testing for the back control is a
//! free function over the same geometry, so the event loop does not need
//! the component instance.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub const BACK_LABEL: &str = " ← Back ";

/// Display width of `BACK_LABEL` (the arrow is one column).
const BACK_WIDTH: u16 = 8;

pub struct TitleBar {
    pub title: String,
    pub show_back: bool,
    pub theme: Theme,
}

impl TitleBar {
    pub fn new(title: impl Into<String>, show_back: bool, theme: Theme) -> Self {
        Self {
            title: title.into(),
            show_back,
            theme,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let bar_style = Style::default()
            .bg(self.theme.title_bg)
            .fg(self.theme.title_fg);

        let title = Paragraph::new(Line::from(Span::styled(
            self.title.as_str(),
            bar_style.add_modifier(Modifier::BOLD),
        )))
        .centered()
        .style(bar_style);
        frame.render_widget(title, area);

        if self.show_back {
            let back_area = Rect {
                width: BACK_WIDTH.min(area.width),
                ..area
            };
            let back = Paragraph::new(Span::styled(
                BACK_LABEL,
                bar_style.fg(self.theme.accent).add_modifier(Modifier::BOLD),
            ));
            frame.render_widget(back, back_area);
        }
    }
}

/// True if a click at (`column`, `row`) lands on the back control.
pub fn hits_back(area: Rect, column: u16, row: u16) -> bool {
    row == area.y && column >= area.x && column < area.x + BACK_WIDTH.min(area.width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{buffer_lines, test_terminal};
    use unicode_width::UnicodeWidthStr;

    fn render(title_bar: &mut TitleBar) -> String {
        let mut terminal = test_terminal(40, 1);
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        buffer_lines(terminal.backend().buffer()).remove(0)
    }

    #[test]
    fn test_back_width_matches_label() {
        assert_eq!(BACK_LABEL.width() as u16, BACK_WIDTH);
    }

    #[test]
    fn test_list_title_has_no_back_control() {
        let text = render(&mut TitleBar::new("Car Selector", false, Theme::default()));
        assert!(text.contains("Car Selector"));
        assert!(!text.contains("Back"));
    }

    #[test]
    fn test_detail_title_shows_back_control() {
        let text = render(&mut TitleBar::new("Mini Van", true, Theme::default()));
        assert!(text.starts_with(" ← Back"));
        assert!(text.contains("Mini Van"));
    }

    #[test]
    fn test_hits_back() {
        let area = Rect::new(0, 0, 40, 1);
        assert!(hits_back(area, 0, 0));
        assert!(hits_back(area, 7, 0));
        assert!(!hits_back(area, 8, 0));
        assert!(!hits_back(area, 2, 1));
    }
}
