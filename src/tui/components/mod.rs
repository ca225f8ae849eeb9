//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: Application name, item count, focused panel
//! - `DetailPanel`: Per-stock fields walked by the secondary cursor
//! - `AgeSummary`: "created / last modified N days ago" lines
//! - `HelpBar`: Confirmation prompt and key-binding help
//!
//! ### Stateful Components
//!
//! - `StockTable`: Item table; borrows the persistent `TableState`
//!
//! Components never read global state. Everything they draw is passed in,
//! including the `Theme`.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status line)
//! ├── stock_table.rs   (Item table + RowSelection for TableState)
//! ├── detail_panel.rs  (Secondary-cursor fields)
//! ├── age_summary.rs   (Age lines for the selected stock)
//! └── help_bar.rs      (Prompt + help line)
//! ```

pub mod age_summary;
pub mod detail_panel;
pub mod help_bar;
pub mod stock_table;
mod title_bar;

pub use age_summary::AgeSummary;
pub use detail_panel::DetailPanel;
pub use help_bar::HelpBar;
pub use stock_table::StockTable;
pub use title_bar::TitleBar;
