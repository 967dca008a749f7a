//! API data transfer objects.
//!
//! Request and response bodies exchanged over HTTP. Field names are camelCase on the
//! wire to match the existing frontend client. Server-side domain models live in
//! `crate::server::model` and convert into these types at the controller boundary.

pub mod api;
pub mod client;
pub mod formation;
pub mod pdf;
pub mod user;
