//! Networking for the Access Manager backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls; wire types and the error taxonomy come from
//! the shared `accounts` crate.

pub mod api;
