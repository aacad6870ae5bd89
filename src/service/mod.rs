//! Business logic layer between controllers and repositories.
//!
//! Services orchestrate repository calls and own the error semantics the
//! controllers rely on: every lookup miss is raised as an explicit
//! `AppError::NotFound` instead of propagating as an empty result.

pub mod room;
pub mod user;

#[cfg(test)]
mod test;
