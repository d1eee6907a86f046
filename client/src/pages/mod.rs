//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `home` is the root view that switches on the session; `login` and `users`
//! own their request lifecycles and delegate rendering details to
//! `components`.

pub mod home;
pub mod login;
pub mod users;
