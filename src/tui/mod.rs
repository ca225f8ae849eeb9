//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The loop blocks on input for up to 250ms and only redraws when an event
//! arrived or the local date changed (ages are shown in days, so a session
//! left open past midnight needs one extra frame).

mod component;
pub mod components;
pub mod event;
pub mod theme;
mod ui;

use log::{debug, info};
use std::io;
use std::time::Duration;

use ratatui::DefaultTerminal;
use ratatui::widgets::TableState;

use crate::core::action::{Effect, sync_selection, update};
use crate::core::config::ResolvedConfig;
use crate::core::date::Date;
use crate::core::state::Inventory;
use crate::tui::event::{TuiEvent, poll_event};
use crate::tui::theme::Theme;

const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core inventory logic)
pub struct TuiState {
    /// Highlighted row of the stock table. Written only by `core::action`.
    pub table_state: TableState,
}

impl TuiState {
    pub fn new(inventory: &Inventory) -> Self {
        let mut table_state = TableState::default();
        sync_selection(inventory, &mut table_state);
        Self { table_state }
    }
}

pub fn run(config: &ResolvedConfig) -> io::Result<()> {
    let theme = Theme::from_config(config);
    let mut inventory = Inventory::seeded();
    let mut tui = TuiState::new(&inventory);

    let mut terminal = ratatui::try_init()?;
    info!("Terminal initialised with {} stocks", inventory.stocks.len());

    // Restore the terminal even when the loop fails
    let result = event_loop(&mut terminal, &mut inventory, &mut tui, &theme);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    inventory: &mut Inventory,
    tui: &mut TuiState,
    theme: &Theme,
) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame
    let mut drawn_on = Date::today();

    loop {
        let today = Date::today();
        if today != drawn_on {
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, inventory, today, tui, theme))?;
            drawn_on = today;
            needs_redraw = false;
        }

        let Some(event) = poll_event(POLL_TIMEOUT)? else {
            continue;
        };
        needs_redraw = true;

        match event {
            TuiEvent::Resize => {}
            TuiEvent::Action(action) => {
                debug!("Dispatching {:?}", action);
                if update(inventory, action, today, &mut tui.table_state) == Effect::Quit {
                    info!("Quit requested");
                    return Ok(());
                }
            }
        }
    }
}
