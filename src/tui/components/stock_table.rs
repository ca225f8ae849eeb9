//! # Stock Table Component
//!
//! The main item list, rendered with ratatui's `Table`.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `TableState` lives in `TuiState` and is only ever pointed at a row by
//!   `core::action::update` (through [`RowSelection`])
//! - `StockTable` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, Cell, HighlightSpacing, Row, Table, TableState};

use crate::core::action::RowSelection;
use crate::core::stock::Stock;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// Column titles and widths, left to right.
pub const COLUMNS: [(&str, u16); 3] = [("index", 5), ("item", 30), ("amount", 6)];

const HIGHLIGHT_SYMBOL: &str = "> ";
const COLUMN_SPACING: u16 = 1;

impl RowSelection for TableState {
    fn select_row(&mut self, index: Option<usize>) {
        self.select(index);
    }
}

/// Total width the table needs: columns, gaps, highlight gutter and borders.
pub fn table_width() -> u16 {
    let columns: u16 = COLUMNS.iter().map(|(_, width)| width).sum();
    let gaps = COLUMN_SPACING * (COLUMNS.len() as u16 - 1);
    columns + gaps + HIGHLIGHT_SYMBOL.len() as u16 + 2
}

/// Cell text for each stock: 1-based index, name, amount.
pub fn table_rows(stocks: &[Stock]) -> Vec<[String; 3]> {
    stocks
        .iter()
        .enumerate()
        .map(|(i, stock)| [(i + 1).to_string(), stock.name.clone(), stock.amount.to_string()])
        .collect()
}

/// Transient render wrapper for the stock table.
pub struct StockTable<'a> {
    stocks: &'a [Stock],
    state: &'a mut TableState,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> StockTable<'a> {
    pub fn new(
        stocks: &'a [Stock],
        state: &'a mut TableState,
        theme: &'a Theme,
        focused: bool,
    ) -> Self {
        Self {
            stocks,
            state,
            theme,
            focused,
        }
    }
}

impl Component for StockTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let header = Row::new(COLUMNS.iter().map(|(title, _)| Cell::from(*title)))
            .style(self.theme.header());
        let widths = COLUMNS.iter().map(|(_, width)| Constraint::Length(*width));
        let rows = table_rows(self.stocks).into_iter().map(Row::new);

        let (border_style, highlight_style) = if self.focused {
            (self.theme.border_focused(), self.theme.selected())
        } else {
            (self.theme.border(), self.theme.selected_inactive())
        };

        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(COLUMN_SPACING)
            .block(Block::bordered().border_style(border_style))
            .row_highlight_style(highlight_style)
            .highlight_symbol(HIGHLIGHT_SYMBOL)
            .highlight_spacing(HighlightSpacing::Always);

        frame.render_stateful_widget(table, area, self.state);
    }
}
