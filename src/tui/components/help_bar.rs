//! # HelpBar Component
//!
//! Bottom two lines: the last-modified confirmation prompt (when one is
//! open) and the static key-binding help.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Span;
use unicode_width::UnicodeWidthChar;

use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub const HELP_TEXT: &str = "<Q> Quit | <H/J/K/L> Move cursor | <A> Add New Item | <D> Delete Item | <Z/X> Decrement/Increment";

/// Longest stock name shown inside the prompt, in terminal columns.
const PROMPT_NAME_WIDTH: usize = 30;

pub struct HelpBar<'a> {
    /// Name of the stock awaiting a y/N answer, if any.
    pub pending_name: Option<&'a str>,
    pub theme: &'a Theme,
}

/// The confirmation question for `name`.
pub fn prompt_text(name: &str) -> String {
    format!(
        "Update last-modified date for \"{}\"? [y/N]",
        truncate_str(name, PROMPT_NAME_WIDTH)
    )
}

impl Component for HelpBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [prompt_area, help_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        if let Some(name) = self.pending_name {
            frame.render_widget(
                Span::styled(prompt_text(name), self.theme.prompt()),
                prompt_area,
            );
        }
        frame.render_widget(Span::styled(HELP_TEXT, self.theme.muted()), help_area);
    }
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(pending_name: Option<&str>) -> String {
        let theme = Theme::default();
        let backend = TestBackend::new(120, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                HelpBar {
                    pending_name,
                    theme: &theme,
                }
                .render(f, area);
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_help_only() {
        let text = render(None);
        assert!(text.contains(HELP_TEXT));
        assert!(!text.contains("[y/N]"));
    }

    #[test]
    fn test_prompt_shown_above_help() {
        let text = render(Some("Rice"));
        let mut lines = text.lines();
        assert!(lines.next().unwrap().contains("\"Rice\"? [y/N]"));
        assert!(lines.next().unwrap().contains("<Q> Quit"));
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Rice", 10), "Rice");
        assert_eq!(truncate_str("Chocolate Chip Muffins", 10), "Chocola...");
        assert_eq!(truncate_str("Chocolate", 2), "..");
        // Wide characters count as two columns
        assert_eq!(truncate_str("日本語のお茶", 7), "日本...");
    }
}
