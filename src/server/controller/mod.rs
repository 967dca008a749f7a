//! HTTP request handlers.
//!
//! Controllers authorize the request through `AuthGuard`, convert DTOs into
//! validated parameters, call the matching service, and convert the result back into
//! DTOs. Every handler carries a `utoipa::path` annotation collected by the router.

pub mod client;
pub mod formation;
pub mod pdf;

#[cfg(test)]
mod test;
