//! # CarDetail Component
//!
//! The detail screen: the car's image, then `PROS` and `CONS` sections with
//! one `-item` line per entry, centered like the list cards above them.
//!
//! The body sits in a `ScrollView` so long lists and tall images stay
//! reachable on short terminals. Long items wrap with a hanging indent.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect, Size};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::route::DetailView;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::car_image::fit_art;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

pub const PROS_HEADING: &str = "PROS";
pub const CONS_HEADING: &str = "CONS";

/// Scroll state for the detail body. Reset whenever a detail is pushed.
#[derive(Default)]
pub struct CarDetailState {
    pub scroll_state: ScrollViewState,
}

impl CarDetailState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for CarDetailState {
    /// Scrolling is handled locally; nothing is emitted upward.
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::ScrollUp | TuiEvent::CursorUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown | TuiEvent::CursorDown => self.scroll_state.scroll_down(),
            TuiEvent::PageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::PageDown => self.scroll_state.scroll_page_down(),
            TuiEvent::Home => self.scroll_state.scroll_to_top(),
            TuiEvent::End => self.scroll_state.scroll_to_bottom(),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the detail screen.
pub struct CarDetail<'a> {
    state: &'a mut CarDetailState,
    view: DetailView,
    theme: &'a Theme,
}

impl<'a> CarDetail<'a> {
    pub fn new(state: &'a mut CarDetailState, view: DetailView, theme: &'a Theme) -> Self {
        Self { state, view, theme }
    }
}

impl Component for CarDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // One column reserved for the scrollbar
        let content_width = area.width.saturating_sub(1);
        let lines = build_body(&self.view, content_width, self.theme);
        let content_height = lines.len() as u16;

        // Clamp so a scroll_to_bottom() or a shrinking terminal never
        // leaves the view past the end of the content.
        let max_offset = content_height.saturating_sub(area.height);
        let mut offset = self.state.scroll_state.offset();
        if offset.y > max_offset {
            offset.y = max_offset;
            self.state.scroll_state.set_offset(offset);
        }

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            Rect::new(0, 0, content_width, content_height),
        );
        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// Lay out the scrollable body: image, blank, PROS, items, blank, CONS, items.
pub fn build_body(view: &DetailView, width: u16, theme: &Theme) -> Vec<Line<'static>> {
    let heading_style = Style::default().add_modifier(Modifier::BOLD);
    let image_style = Style::default().fg(theme.accent);

    let mut lines: Vec<Line<'static>> = fit_art(&view.car.image.resolve(), width, None)
        .into_iter()
        .map(|row| Line::from(Span::styled(row, image_style)))
        .collect();

    for (heading, items) in [(PROS_HEADING, view.car.pros), (CONS_HEADING, view.car.cons)] {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(heading, heading_style)));
        for item in items {
            lines.extend(item_lines(item, width).into_iter().map(Line::from));
        }
    }
    lines
}

/// `-item`, wrapped to `width` with continuation lines indented one column.
/// An empty item still produces its `-` line.
fn item_lines(item: &str, width: u16) -> Vec<String> {
    let text = format!("-{item}");
    let options = textwrap::Options::new((width as usize).max(2)).subsequent_indent(" ");
    textwrap::wrap(&text, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}
