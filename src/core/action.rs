//! # Actions
//!
//! Everything that can happen in Stockroom becomes an `Action`.
//! User presses `j`? That's `Action::MoveDown`. User presses `x`? That's
//! `Action::Increment`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` for the event loop. No I/O happens here; the
//! current date is passed in so transitions stay deterministic.
//!
//! ```text
//! Inventory + Action + today  →  update()  →  Inventory' + Effect
//!                                   │
//!                                   └──→ RowSelection (table widget)
//! ```
//!
//! The table widget keeps its own highlighted row. `update()` is the only
//! place that writes it, and it does so after every action, so the widget's
//! selection and `Inventory::cursor` always agree.

use log::debug;

use crate::core::date::Date;
use crate::core::state::{ALT_CURSOR_MAX, Focus, Inventory};
use crate::core::stock::Stock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    ToggleFocus,
    AddItem,
    DeleteItem,
    Increment,
    Decrement,
    /// "y" to the last-modified prompt.
    ConfirmTouch,
    /// "n" to the last-modified prompt.
    DeclineTouch,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

/// Something that tracks which table row is highlighted.
pub trait RowSelection {
    fn select_row(&mut self, index: Option<usize>);
}

pub fn update(
    inventory: &mut Inventory,
    action: Action,
    today: Date,
    selection: &mut impl RowSelection,
) -> Effect {
    let effect = if inventory.pending_touch.is_some() {
        update_prompt(inventory, action, today)
    } else {
        update_browse(inventory, action, today)
    };

    sync_selection(inventory, selection);
    effect
}

/// Points `selection` at the cursor row, or at nothing when the list is empty.
pub fn sync_selection(inventory: &Inventory, selection: &mut impl RowSelection) {
    selection.select_row((!inventory.is_empty()).then_some(inventory.cursor));
}

/// Transitions while the last-modified prompt is open.
fn update_prompt(inventory: &mut Inventory, action: Action, today: Date) -> Effect {
    match action {
        Action::Quit => return Effect::Quit,
        Action::ConfirmTouch => {
            if let Some(index) = inventory.pending_touch.take()
                && let Some(stock) = inventory.stocks.get_mut(index)
            {
                *stock = stock.touch(today);
                debug!("Stamped '{}' as modified on {}", stock.name, today);
            }
        }
        Action::Increment => adjust_selected(inventory, 1),
        Action::Decrement => adjust_selected(inventory, -1),
        _ => {
            debug!("Last-modified prompt declined by {:?}", action);
            inventory.pending_touch = None;
            return update_browse(inventory, action, today);
        }
    }
    Effect::None
}

/// Transitions with no prompt open.
fn update_browse(inventory: &mut Inventory, action: Action, today: Date) -> Effect {
    match action {
        Action::Quit => return Effect::Quit,
        Action::MoveUp => match inventory.focus {
            Focus::Primary => {
                if inventory.cursor > 0 {
                    inventory.cursor -= 1;
                }
            }
            Focus::Secondary => {
                if inventory.alt_cursor > 0 {
                    inventory.alt_cursor -= 1;
                }
            }
        },
        Action::MoveDown => match inventory.focus {
            Focus::Primary => {
                if inventory.cursor + 1 < inventory.stocks.len() {
                    inventory.cursor += 1;
                }
            }
            Focus::Secondary => {
                if inventory.alt_cursor < ALT_CURSOR_MAX {
                    inventory.alt_cursor += 1;
                }
            }
        },
        Action::ToggleFocus => {
            inventory.focus = inventory.focus.toggled();
        }
        Action::AddItem => {
            let name = unused_stub_name(&inventory.stocks);
            debug!("Adding '{}'", name);
            inventory.stocks.push(Stock::stub(name, today));
            inventory.cursor = inventory.stocks.len() - 1;
        }
        Action::DeleteItem => {
            if inventory.cursor < inventory.stocks.len() {
                let removed = inventory.stocks.remove(inventory.cursor);
                debug!("Deleted '{}'", removed.name);
                inventory.cursor = inventory.cursor.min(inventory.stocks.len().saturating_sub(1));
            }
        }
        Action::Increment => adjust_selected(inventory, 1),
        Action::Decrement => adjust_selected(inventory, -1),
        Action::ConfirmTouch | Action::DeclineTouch => {}
    }
    Effect::None
}

/// Applies `delta` to the selected stock and, if the amount actually changed,
/// asks whether its last-modified date should be updated.
fn adjust_selected(inventory: &mut Inventory, delta: i64) {
    let index = inventory.cursor;
    let Some(stock) = inventory.stocks.get_mut(index) else {
        return;
    };
    let adjusted = stock.adjust_amount(delta);
    if adjusted.amount == stock.amount {
        return;
    }
    debug!("'{}' amount {} -> {}", stock.name, stock.amount, adjusted.amount);
    *stock = adjusted;
    inventory.pending_touch = Some(index);
}

/// First "New item N" name, counting up from `len + 1`, that no stock uses.
fn unused_stub_name(stocks: &[Stock]) -> String {
    (stocks.len() + 1..)
        .map(|n| format!("New item {n}"))
        .find(|name| stocks.iter().all(|stock| &stock.name != name))
        .unwrap_or_default()
}
