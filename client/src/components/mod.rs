//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render session chrome and the account table while reading
//! shared state from Leptos context providers.

pub mod session_bar;
pub mod user_table;
