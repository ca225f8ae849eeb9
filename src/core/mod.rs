//! # Core Application Logic
//!
//! This module contains Stockroom's inventory logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Date / Stock values  │
//!                    │  • Inventory (state)    │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`date`]: `(year, day_of_year)` dates and day arithmetic
//! - [`stock`]: The `Stock` record
//! - [`state`]: The `Inventory` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` dispatcher
//! - [`config`]: Config file + env var resolution

pub mod action;
pub mod config;
pub mod date;
pub mod state;
pub mod stock;
