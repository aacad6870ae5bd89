//! Domain models, operation parameters, and wire DTOs.
//!
//! Domain models are what the data and service layers trade in; they are
//! converted from SeaORM entity models at the repository boundary so
//! database-specific structures never leak upward. DTOs carry the camelCase
//! wire shape of the original API (`roomId`, `photoPath`, `instrumentId`).

pub mod api;
pub mod instrument;
pub mod reservation;
pub mod room;
pub mod user;
