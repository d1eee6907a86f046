//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the single owner of the token; `login` and `users` model the
//! request lifecycle of their views so pages stay thin render code.

pub mod login;
pub mod session;
pub mod users;
