//! HTTP request handlers.
//!
//! Controllers resolve the caller through the `AuthGuard`, convert wire DTOs
//! into parameter types, delegate to the service layer, and convert domain
//! models back into DTOs for the response.

pub mod room;
pub mod user;
