//! # Application State
//!
//! Core inventory state for Stockroom. This module contains domain data only;
//! no TUI-specific types. The table widget's own selection lives in the `tui`
//! module and is kept in step by the dispatcher.
//!
//! ```text
//! Inventory
//! ├── stocks: Vec<Stock>            // display order = insertion order
//! ├── cursor: usize                 // selected stock (0 when empty)
//! ├── alt_cursor: usize             // selected detail field, 0..=ALT_CURSOR_MAX
//! ├── focus: Focus                  // which cursor vertical moves drive
//! └── pending_touch: Option<usize>  // stock awaiting "update last-modified? y/N"
//! ```
//!
//! State changes only happen through `update(state, action, ...)` in action.rs.

use crate::core::date::Date;
use crate::core::stock::Stock;

/// Which cursor the up/down keys move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The stock table.
    #[default]
    Primary,
    /// The detail fields of the selected stock.
    Secondary,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Focus::Primary => Focus::Secondary,
            Focus::Secondary => Focus::Primary,
        }
    }
}

/// The per-stock fields the secondary cursor walks over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailField {
    Amount,
    ConsumptionRate,
    EstimatedConsumptionRate,
    DaysRemaining,
    Created,
    LastModified,
}

impl DetailField {
    pub const ALL: [DetailField; 6] = [
        DetailField::Amount,
        DetailField::ConsumptionRate,
        DetailField::EstimatedConsumptionRate,
        DetailField::DaysRemaining,
        DetailField::Created,
        DetailField::LastModified,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DetailField::Amount => "amount",
            DetailField::ConsumptionRate => "consumption/day",
            DetailField::EstimatedConsumptionRate => "estimated/day",
            DetailField::DaysRemaining => "days remaining",
            DetailField::Created => "created",
            DetailField::LastModified => "last modified",
        }
    }

    /// Formatted value of this field for `stock`.
    pub fn value(self, stock: &Stock) -> String {
        match self {
            DetailField::Amount => stock.amount.to_string(),
            DetailField::ConsumptionRate => format!("{:.2}", stock.consumption_rate),
            DetailField::EstimatedConsumptionRate => {
                format!("{:.2}", stock.estimated_consumption_rate)
            }
            DetailField::DaysRemaining => stock
                .days_remaining()
                .map(|days| format!("{days:.1}"))
                .unwrap_or_else(|| "-".to_string()),
            DetailField::Created => stock.creation_date.to_string(),
            DetailField::LastModified => stock.last_modified.to_string(),
        }
    }
}

/// Highest valid `alt_cursor` value.
pub const ALT_CURSOR_MAX: usize = DetailField::ALL.len() - 1;

#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    pub stocks: Vec<Stock>,
    pub cursor: usize,
    pub alt_cursor: usize,
    pub focus: Focus,
    pub pending_touch: Option<usize>,
}

impl Inventory {
    pub fn new(stocks: Vec<Stock>) -> Self {
        Self {
            stocks,
            cursor: 0,
            alt_cursor: 0,
            focus: Focus::Primary,
            pending_touch: None,
        }
    }

    /// Startup inventory until items can be loaded from somewhere.
    pub fn seeded() -> Self {
        Self::new(vec![
            Stock::new(
                "Chocolate Chip Muffins",
                8,
                1.5,
                Date::new(2024, 150),
                Date::new(2024, 200),
            ),
            Stock::new("stock2", 15, 1.5, Date::new(1, 200), Date::new(1, 300)),
        ])
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }

    /// The stock under the primary cursor, if any.
    pub fn selected(&self) -> Option<&Stock> {
        self.stocks.get(self.cursor)
    }

    /// The detail field under the secondary cursor.
    pub fn selected_field(&self) -> DetailField {
        DetailField::ALL[self.alt_cursor.min(ALT_CURSOR_MAX)]
    }

    /// The stock the confirmation prompt is asking about.
    pub fn pending_stock(&self) -> Option<&Stock> {
        self.pending_touch.and_then(|index| self.stocks.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_defaults() {
        let inventory = Inventory::seeded();
        assert_eq!(inventory.stocks.len(), 2);
        assert_eq!(inventory.cursor, 0);
        assert_eq!(inventory.alt_cursor, 0);
        assert_eq!(inventory.focus, Focus::Primary);
        assert!(inventory.pending_touch.is_none());
        assert_eq!(
            inventory.selected().map(|s| s.name.as_str()),
            Some("Chocolate Chip Muffins")
        );
    }

    #[test]
    fn test_empty_inventory_has_no_selection() {
        let inventory = Inventory::new(Vec::new());
        assert!(inventory.is_empty());
        assert!(inventory.selected().is_none());
        assert!(inventory.pending_stock().is_none());
    }

    #[test]
    fn test_focus_toggled() {
        assert_eq!(Focus::Primary.toggled(), Focus::Secondary);
        assert_eq!(Focus::Secondary.toggled(), Focus::Primary);
    }

    #[test]
    fn test_alt_cursor_max_matches_field_count() {
        assert_eq!(ALT_CURSOR_MAX, 5);
        let mut inventory = Inventory::seeded();
        inventory.alt_cursor = ALT_CURSOR_MAX;
        assert_eq!(inventory.selected_field(), DetailField::LastModified);
    }

    #[test]
    fn test_detail_field_values() {
        let inventory = Inventory::seeded();
        let stock = inventory.selected().unwrap();
        assert_eq!(DetailField::Amount.value(stock), "8");
        assert_eq!(DetailField::ConsumptionRate.value(stock), "1.50");
        assert_eq!(DetailField::EstimatedConsumptionRate.value(stock), "0.00");
        assert_eq!(DetailField::DaysRemaining.value(stock), "5.3");
        assert_eq!(DetailField::Created.value(stock), "2024-05-29");
    }
}
