//! Networking modules for the task-board REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls and maps failures to typed errors, `types`
//! defines the wire schema shared by every call.

pub mod api;
pub mod types;
