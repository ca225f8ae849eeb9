//! # Detail Panel Component
//!
//! Lists the per-stock fields the secondary cursor walks over. The row under
//! `alt_cursor` is highlighted; brightly when this panel has focus, bold only
//! when the table has focus.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::state::DetailField;
use crate::core::stock::Stock;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

const LABEL_WIDTH: usize = 16;

pub struct DetailPanel<'a> {
    pub stock: Option<&'a Stock>,
    pub alt_cursor: usize,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl Component for DetailPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            self.theme.border_focused()
        } else {
            self.theme.border()
        };
        let block = Block::bordered()
            .title(" details ")
            .border_style(border_style);

        let Some(stock) = self.stock else {
            let empty = Paragraph::new("-").style(self.theme.muted()).block(block);
            frame.render_widget(empty, area);
            return;
        };

        let selected_style = if self.focused {
            self.theme.selected()
        } else {
            self.theme.selected_inactive()
        };

        let lines: Vec<Line> = DetailField::ALL
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let text = format!(
                    "{:<width$}{}",
                    field.label(),
                    field.value(stock),
                    width = LABEL_WIDTH
                );
                if i == self.alt_cursor {
                    Line::from(Span::styled(text, selected_style))
                } else {
                    Line::from(text)
                }
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{buffer_text, test_inventory};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::style::Modifier;

    #[test]
    fn test_lists_every_field() {
        let inventory = test_inventory();
        let theme = Theme::default();
        let backend = TestBackend::new(40, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                DetailPanel {
                    stock: inventory.selected(),
                    alt_cursor: 0,
                    focused: false,
                    theme: &theme,
                }
                .render(f, area);
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        for field in DetailField::ALL {
            assert!(text.contains(field.label()), "missing {}", field.label());
        }
        assert!(text.contains("2024-05-29"));
    }

    #[test]
    fn test_highlights_alt_cursor_row_when_focused() {
        let inventory = test_inventory();
        let theme = Theme::default();
        let backend = TestBackend::new(40, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                DetailPanel {
                    stock: inventory.selected(),
                    alt_cursor: 2,
                    focused: true,
                    theme: &theme,
                }
                .render(f, area);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        // Row 0 is the border, so field 2 sits on row 3, column 1 inside the border.
        assert_eq!(buffer[(1, 3)].bg, theme.highlight);
        assert!(buffer[(1, 3)].modifier.contains(Modifier::BOLD));
        assert_ne!(buffer[(1, 2)].bg, theme.highlight);
    }

    #[test]
    fn test_empty_placeholder() {
        let theme = Theme::default();
        let backend = TestBackend::new(40, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                DetailPanel {
                    stock: None,
                    alt_cursor: 0,
                    focused: true,
                    theme: &theme,
                }
                .render(f, area);
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("details"));
        assert!(!text.contains("amount"));
    }
}
