//! Page modules for top-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns page-scoped orchestration and delegates rendering details
//! to `components`.

pub mod task_board;
