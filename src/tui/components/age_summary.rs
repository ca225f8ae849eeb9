//! # Age Summary Component
//!
//! Two lines under the table: how long ago the selected stock was created and
//! last modified. Shows a placeholder when the inventory is empty.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::date::Date;
use crate::core::stock::Stock;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub const EMPTY_PLACEHOLDER: &str = "No items. Press <A> to add one.";

pub struct AgeSummary<'a> {
    pub stock: Option<&'a Stock>,
    pub today: Date,
    pub theme: &'a Theme,
}

impl AgeSummary<'_> {
    pub fn lines(&self) -> Vec<String> {
        match self.stock {
            Some(stock) => vec![
                format!("Created on: {} days ago", stock.age_in_days(self.today)),
                format!(
                    "Last modified: {} days ago",
                    stock.days_since_modified(self.today)
                ),
            ],
            None => vec![EMPTY_PLACEHOLDER.to_string()],
        }
    }
}

impl Component for AgeSummary<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.stock.is_some() {
            Default::default()
        } else {
            self.theme.muted()
        };
        let lines: Vec<Line> = self.lines().into_iter().map(Line::from).collect();
        frame.render_widget(Paragraph::new(lines).style(style), area);
    }
}
