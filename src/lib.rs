//! Reservation backend for the association's rehearsal rooms.
//!
//! The backend exposes a REST API over the four domain tables (users, rooms,
//! instruments, reservations) using Axum as the web framework and SeaORM for
//! database access. Authentication is handled by an external collaborator
//! which writes the authenticated login into the session; this crate only
//! reads it back.
//!
//! # Architecture
//!
//! The code follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, parameter types, and wire DTOs
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access and authentication guards
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes to a controller
//! 2. **Controller** resolves the caller through the `AuthGuard`, converts DTOs to params
//! 3. **Service** executes business logic and raises `NotFound` for unresolved ids
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model back to a DTO and returns it

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
