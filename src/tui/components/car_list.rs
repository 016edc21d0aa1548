//! # CarList Component
//!
//! The list screen: one card per catalog entry, in catalog order.
//!
//! ```text
//! ╭──────────────────────────────────────────╮
//! │  __/‾‾\__    Sedan                ┌───┐  │
//! │ |_o____o_|                        │ → │  │
//! │              Press for more       └───┘  │
//! ╰──────────────────────────────────────────╯
//! ```
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CarListState` lives in `TuiState` (scroll offset, hit-test cache)
//! - `CarList` is created each frame with borrowed state and props
//!
//! The whole card is the click target, so `row_at` maps any cell inside a
//! card to that card's catalog index.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::catalog::CarType;
use crate::tui::component::Component;
use crate::tui::components::car_image::CarImage;
use crate::tui::theme::Theme;

/// Rows per card, borders included.
pub const CARD_HEIGHT: u16 = 5;
const THUMB_WIDTH: u16 = 14;
const BUTTON_WIDTH: u16 = 5;
pub const CALL_TO_ACTION: &str = "Press for more";

/// Scroll and layout state for the list screen.
#[derive(Debug, Default)]
pub struct CarListState {
    /// Index of the first visible card
    pub offset: usize,
    /// Cards that fit in the last rendered area (at least 1)
    pub visible_cards: usize,
    /// Area the cards were last drawn into
    pub area: Rect,
}

impl CarListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adjust `offset` so `selected` is on screen.
    pub fn scroll_to(&mut self, selected: usize) {
        let visible = self.visible_cards.max(1);
        if selected < self.offset {
            self.offset = selected;
        } else if selected >= self.offset + visible {
            self.offset = selected + 1 - visible;
        }
    }

    /// Catalog index of the card under a screen cell, if any.
    pub fn row_at(&self, column: u16, row: u16, len: usize) -> Option<usize> {
        let area = self.area;
        if column < area.x
            || column >= area.x + area.width
            || row < area.y
            || row >= area.y + area.height
        {
            return None;
        }
        let index = self.offset + ((row - area.y) / CARD_HEIGHT) as usize;
        (index < len && index < self.offset + self.visible_cards).then_some(index)
    }

    /// Page size for PageUp/PageDown.
    pub fn page_size(&self) -> usize {
        self.visible_cards.max(1)
    }
}

/// Transient render wrapper for the list screen.
pub struct CarList<'a> {
    state: &'a mut CarListState,
    cars: &'static [CarType],
    selected: usize,
    theme: &'a Theme,
}

impl<'a> CarList<'a> {
    pub fn new(
        state: &'a mut CarListState,
        cars: &'static [CarType],
        selected: usize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            state,
            cars,
            selected,
            theme,
        }
    }

    fn render_card(&self, frame: &mut Frame, area: Rect, car: &CarType, is_selected: bool) {
        let theme = self.theme;
        let card_style = Style::default().bg(theme.card).fg(theme.title_fg);

        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.card_border).bg(theme.card))
            .style(card_style);
        if is_selected {
            block = block.border_type(BorderType::Thick);
        }
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [thumb_area, text_area, button_area] = Layout::horizontal([
            Constraint::Length(THUMB_WIDTH),
            Constraint::Min(0),
            Constraint::Length(BUTTON_WIDTH + 1),
        ])
        .spacing(1)
        .areas(inner);

        CarImage::new(car.image.resolve(), card_style).render(frame, thumb_area);

        let name_style = if is_selected {
            card_style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            card_style.add_modifier(Modifier::BOLD)
        };
        let text = vec![
            Line::from(Span::styled(
                truncate_to_width(car.name, text_area.width as usize),
                name_style,
            )),
            Line::default(),
            Line::from(Span::styled(
                truncate_to_width(CALL_TO_ACTION, text_area.width as usize),
                card_style,
            )),
        ];
        frame.render_widget(Paragraph::new(text), text_area);

        let button_area = Rect {
            width: BUTTON_WIDTH.min(button_area.width),
            ..button_area
        };
        let button = Paragraph::new(Line::from(Span::styled(
            "→",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )))
        .centered()
        .block(
            Block::bordered()
                .border_style(Style::default().fg(theme.card_border))
                .style(Style::default().bg(theme.button)),
        );
        frame.render_widget(button, button_area);
    }
}

impl Component for CarList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.area = area;
        self.state.visible_cards = ((area.height / CARD_HEIGHT) as usize).max(1);
        self.state.scroll_to(self.selected);

        let end = (self.state.offset + self.state.visible_cards).min(self.cars.len());
        for (slot, index) in (self.state.offset..end).enumerate() {
            let card_area = Rect {
                x: area.x,
                y: area.y + slot as u16 * CARD_HEIGHT,
                width: area.width,
                height: CARD_HEIGHT,
            }
            .intersection(area);
            if card_area.is_empty() {
                break;
            }
            self.render_card(frame, card_area, &self.cars[index], index == self.selected);
        }
    }
}

/// Truncate a string to fit within `max_width` columns, adding "…" if needed.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::list_car_types;
    use crate::test_support::{buffer_lines, find_row, test_terminal};

    fn render(state: &mut CarListState, selected: usize, width: u16, height: u16) -> Vec<String> {
        let theme = Theme::default();
        let mut terminal = test_terminal(width, height);
        terminal
            .draw(|f| CarList::new(state, list_car_types(), selected, &theme).render(f, f.area()))
            .unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    #[test]
    fn test_renders_every_car_in_order_when_tall_enough() {
        let mut state = CarListState::new();
        let lines = render(&mut state, 0, 60, CARD_HEIGHT * 9);

        let rows: Vec<usize> = list_car_types()
            .iter()
            .map(|car| find_row(&lines, car.name).unwrap())
            .collect();
        assert!(rows.windows(2).all(|w| w[0] < w[1]), "rows out of order: {rows:?}");

        let cta_count = lines.iter().filter(|l| l.contains(CALL_TO_ACTION)).count();
        assert_eq!(cta_count, 9);
        assert!(lines.iter().any(|l| l.contains('→')));
    }

    #[test]
    fn test_scrolls_to_keep_selection_visible() {
        let mut state = CarListState::new();
        let lines = render(&mut state, 8, 60, CARD_HEIGHT * 3);
        assert_eq!(state.visible_cards, 3);
        assert_eq!(state.offset, 6);
        assert!(find_row(&lines, "Mini Van").is_some());
        assert!(find_row(&lines, "SUV").is_none());

        let lines = render(&mut state, 0, 60, CARD_HEIGHT * 3);
        assert_eq!(state.offset, 0);
        assert!(find_row(&lines, "SUV").is_some());
    }

    #[test]
    fn test_row_at_maps_every_line_of_a_card() {
        let mut state = CarListState::new();
        render(&mut state, 0, 60, CARD_HEIGHT * 4);

        for line in 0..CARD_HEIGHT {
            assert_eq!(state.row_at(30, line, 9), Some(0));
            assert_eq!(state.row_at(0, CARD_HEIGHT + line, 9), Some(1));
        }
        assert_eq!(state.row_at(59, CARD_HEIGHT * 3, 9), Some(3));
        assert_eq!(state.row_at(60, 0, 9), None);
        assert_eq!(state.row_at(0, CARD_HEIGHT * 4, 9), None);
    }

    #[test]
    fn test_row_at_accounts_for_offset() {
        let mut state = CarListState::new();
        render(&mut state, 7, 60, CARD_HEIGHT * 2);
        assert_eq!(state.offset, 6);
        assert_eq!(state.row_at(5, 0, 9), Some(6));
        assert_eq!(state.row_at(5, CARD_HEIGHT, 9), Some(7));
    }

    #[test]
    fn test_row_at_past_last_card() {
        let mut state = CarListState::new();
        render(&mut state, 8, 60, CARD_HEIGHT * 12);
        // Nine cards drawn, the rest of the area is empty
        assert_eq!(state.row_at(5, CARD_HEIGHT * 9, 9), None);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Sedan", 10), "Sedan");
        assert_eq!(truncate_to_width("Off Roader", 5), "Off …");
        assert_eq!(truncate_to_width("Van", 0), "");
    }
}
