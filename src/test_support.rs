//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::action::RowSelection;
use crate::core::date::Date;
use crate::core::state::Inventory;
use crate::core::stock::Stock;

/// Records the last row the dispatcher selected, standing in for the table widget.
#[derive(Debug, Default)]
pub struct RecordingSelection {
    pub selected: Option<usize>,
    pub writes: usize,
}

impl RowSelection for RecordingSelection {
    fn select_row(&mut self, index: Option<usize>) {
        self.selected = index;
        self.writes += 1;
    }
}

/// Two stocks with fixed dates: muffins (8 on hand) and rice (15 on hand).
pub fn test_inventory() -> Inventory {
    Inventory::new(vec![
        Stock::new(
            "Chocolate Chip Muffins",
            8,
            1.5,
            Date::new(2024, 150),
            Date::new(2024, 200),
        ),
        Stock::new("Rice", 15, 0.5, Date::new(2024, 10), Date::new(2024, 100)),
    ])
}

/// Renders a test buffer as text, one line per terminal row.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let width = usize::from(buffer.area.width).max(1);
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
