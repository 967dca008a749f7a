//! Request guards.
//!
//! Authentication happens upstream; `AuthGuard` turns the forwarded user ID into a
//! known user and enforces per-route permissions.

pub mod auth;
