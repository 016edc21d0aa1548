//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::path::PathBuf;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use crate::core::config::{DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL, ResolvedConfig, ThemeColors};

/// A resolved config with every default and nothing to open.
pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        open: None,
        mouse: true,
        theme: ThemeColors::default(),
        log_level: DEFAULT_LOG_LEVEL,
        log_file: PathBuf::from(DEFAULT_LOG_FILE),
        warnings: Vec::new(),
    }
}

pub fn test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).unwrap()
}

/// Buffer contents as one string per row, trailing spaces trimmed.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width.max(1))
        .map(|row| {
            row.iter()
                .map(|c| c.symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Index of the first row containing `needle`.
pub fn find_row(lines: &[String], needle: &str) -> Option<usize> {
    lines.iter().position(|l| l.contains(needle))
}
