//! # CarImage Component
//!
//! Draws a bundled ASCII-art image centered in its area. Art larger than the
//! area is cropped around its center, so a small thumbnail shows the middle
//! of the car rather than its top-left corner.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::image::Art;
use crate::tui::component::Component;

pub struct CarImage {
    pub art: Art,
    pub style: Style,
}

impl CarImage {
    pub fn new(art: Art, style: Style) -> Self {
        Self { art, style }
    }
}

impl Component for CarImage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = fit_art(&self.art, area.width, Some(area.height))
            .into_iter()
            .map(Line::from)
            .collect();

        let top_pad = area.height.saturating_sub(lines.len() as u16) / 2;
        let target = Rect {
            y: area.y + top_pad,
            height: area.height - top_pad,
            ..area
        };

        let paragraph = Paragraph::new(lines)
            .style(self.style)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, target);
    }
}

/// Pad every line of `art` to the same width, then crop it around its
/// center to at most `width` columns and (if given) `height` rows.
///
/// Equal-width lines keep the drawing's shape intact when a paragraph
/// centers each line independently.
pub fn fit_art(art: &Art, width: u16, height: Option<u16>) -> Vec<String> {
    let art_width = art.width as usize;
    let keep_cols = art_width.min(width as usize);
    let skip_cols = (art_width - keep_cols) / 2;

    let rows = art.height as usize;
    let keep_rows = height.map_or(rows, |h| rows.min(h as usize));
    let skip_rows = (rows - keep_rows) / 2;

    art.lines()
        .skip(skip_rows)
        .take(keep_rows)
        .map(|line| {
            let padded = format!("{line:<art_width$}");
            padded.chars().skip(skip_cols).take(keep_cols).collect()
        })
        .collect()
}
