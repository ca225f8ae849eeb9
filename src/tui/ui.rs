use crate::core::date::Date;
use crate::core::state::{Focus, Inventory};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::stock_table::table_width;
use crate::tui::components::{AgeSummary, DetailPanel, HelpBar, StockTable, TitleBar};
use crate::tui::theme::Theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

const DETAIL_PANEL_WIDTH: u16 = 32;

/// Draw one frame: title, table + details, age summary, prompt and help.
pub fn draw_ui(
    frame: &mut Frame,
    inventory: &Inventory,
    today: Date,
    tui: &mut TuiState,
    theme: &Theme,
) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([
        Length(1),
        Length(theme.table_height.saturating_add(2)),
        Length(2),
        Length(1),
        Length(2),
        Min(0),
    ]);
    let [title_area, body_area, age_area, _spacer, help_area, _rest] =
        layout.areas(frame.area());
    let [table_area, detail_area, _] = Layout::horizontal([
        Length(table_width()),
        Length(DETAIL_PANEL_WIDTH),
        Min(0),
    ])
    .areas(body_area);

    TitleBar::new(inventory.stocks.len(), inventory.focus).render(frame, title_area);

    StockTable::new(
        &inventory.stocks,
        &mut tui.table_state,
        theme,
        inventory.focus == Focus::Primary,
    )
    .render(frame, table_area);

    DetailPanel {
        stock: inventory.selected(),
        alt_cursor: inventory.alt_cursor,
        focused: inventory.focus == Focus::Secondary,
        theme,
    }
    .render(frame, detail_area);

    AgeSummary {
        stock: inventory.selected(),
        today,
        theme,
    }
    .render(frame, age_area);

    HelpBar {
        pending_name: inventory.pending_stock().map(|stock| stock.name.as_str()),
        theme,
    }
    .render(frame, help_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{buffer_text, test_inventory};
    use crate::tui::components::age_summary::EMPTY_PLACEHOLDER;
    use crate::tui::components::help_bar::HELP_TEXT;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    const TODAY: Date = Date {
        year: 2024,
        day_of_year: 200,
    };

    fn render(inventory: &Inventory, tui: &mut TuiState) -> String {
        let theme = Theme::default();
        let backend = TestBackend::new(120, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| draw_ui(f, inventory, TODAY, tui, &theme))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_draw_ui() {
        let inventory = test_inventory();
        let mut tui = TuiState::new(&inventory);
        let text = render(&inventory, &mut tui);

        assert!(text.contains("inventory-stock manager"));
        assert!(text.contains("Chocolate Chip Muffins"));
        assert!(text.contains("Rice"));
        assert!(text.contains("Created on: 50 days ago"));
        assert!(text.contains("Last modified: 0 days ago"));
        assert!(text.contains(HELP_TEXT));
    }

    #[test]
    fn test_age_summary_follows_cursor() {
        let mut inventory = test_inventory();
        let mut tui = TuiState::new(&inventory);
        update(&mut inventory, Action::MoveDown, TODAY, &mut tui.table_state);
        let text = render(&inventory, &mut tui);

        // Rice: created day 10, modified day 100
        assert!(text.contains("Created on: 190 days ago"));
        assert!(text.contains("Last modified: 100 days ago"));
        assert_eq!(tui.table_state.selected(), Some(1));
    }

    #[test]
    fn test_draw_empty_inventory() {
        let inventory = Inventory::new(Vec::new());
        let mut tui = TuiState::new(&inventory);
        let text = render(&inventory, &mut tui);

        assert!(text.contains(EMPTY_PLACEHOLDER));
        assert!(!text.contains("Created on"));
        assert_eq!(tui.table_state.selected(), None);
    }

    #[test]
    fn test_draw_pending_prompt() {
        let mut inventory = test_inventory();
        let mut tui = TuiState::new(&inventory);
        update(&mut inventory, Action::Increment, TODAY, &mut tui.table_state);
        let text = render(&inventory, &mut tui);

        assert!(text.contains("\"Chocolate Chip Muffins\"? [y/N]"));
    }

    #[test]
    fn test_oversized_table_height_still_draws() {
        let inventory = test_inventory();
        let mut tui = TuiState::new(&inventory);
        let theme = Theme {
            table_height: u16::MAX,
            ..Theme::default()
        };
        let backend = TestBackend::new(120, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| draw_ui(f, &inventory, TODAY, &mut tui, &theme))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Chocolate Chip Muffins"));
    }
}
