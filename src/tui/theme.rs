//! # Theme
//!
//! Colours and styles for the renderer, built once from the resolved config
//! and passed down by reference. Nothing here is global.

use std::str::FromStr;

use log::warn;
use ratatui::style::{Color, Modifier, Style};

use crate::core::config::{DEFAULT_BORDER_COLOR, DEFAULT_HIGHLIGHT_COLOR, ResolvedConfig};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Color,
    pub highlight: Color,
    /// Visible table rows, header included.
    pub table_height: u16,
}

impl Theme {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            border: parse_color(&config.border_color, DEFAULT_BORDER_COLOR),
            highlight: parse_color(&config.highlight_color, DEFAULT_HIGHLIGHT_COLOR),
            table_height: config.table_height,
        }
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Border of the panel the up/down keys currently drive.
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.highlight)
    }

    /// Selected row in the focused panel.
    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.highlight)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected row in the panel without focus.
    pub fn selected_inactive(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    pub fn header(&self) -> Style {
        Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn prompt(&self) -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ResolvedConfig::default())
    }
}

/// Parses a colour name, hex code or 256-colour index, falling back to `default`.
fn parse_color(raw: &str, default: &str) -> Color {
    Color::from_str(raw).unwrap_or_else(|_| {
        warn!("Unknown colour {:?}, using {:?}", raw, default);
        Color::from_str(default).unwrap_or(Color::Reset)
    })
}
