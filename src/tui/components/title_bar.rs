//! # TitleBar Component
//!
//! Top line showing the application name, how many items are tracked, and
//! which panel the up/down keys currently drive.
//!
//! TitleBar is purely presentational: it receives all data as props and has
//! no internal state.
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(inventory.stocks.len(), inventory.focus);
//! title_bar.render(frame, area);
//! ```

use crate::core::state::Focus;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

pub const TITLE: &str = "inventory-stock manager";

/// Top status line.
pub struct TitleBar {
    /// Number of stocks in the inventory
    pub item_count: usize,
    /// Panel the cursor keys are driving
    pub focus: Focus,
}

impl TitleBar {
    pub fn new(item_count: usize, focus: Focus) -> Self {
        Self { item_count, focus }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let items = match self.item_count {
            1 => "1 item".to_string(),
            n => format!("{n} items"),
        };
        let focus = match self.focus {
            Focus::Primary => "table",
            Focus::Secondary => "details",
        };
        let title_text = format!("{TITLE} | {items} | focus: {focus}");

        frame.render_widget(Span::raw(title_text), area);
    }
}
