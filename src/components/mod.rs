//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read page state from the `BrowserContext` provided by `App` and
//! route every user action back through the controller.

pub mod board_list;
pub mod column_board;
pub mod create_board_dialog;
pub mod toolbar;
