//! Browser environment helpers shared across the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `localStorage` and window access from page and
//! component logic to keep the controller testable natively.

pub mod shell;
pub mod storage;
