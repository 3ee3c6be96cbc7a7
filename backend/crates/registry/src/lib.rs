//! Application Registry Backend Module
//!
//! Keeps a catalog of network endpoints (protocol + url + port) and exposes
//! a paginated public listing plus an admin CRUD surface.
//!
//! Clean Architecture structure:
//! - `domain/` - Entity, value objects, validation, repository traits
//! - `application/` - Use cases and pagination
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Invariants
//! - A stored application always has a known protocol, a valid url and a port in 1..=65535
//! - The display address is derived on read, never stored
//! - Listings are ordered by `(protocol, url, port)`

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::RegistryConfig;
pub use domain::entity::application::{Application, ApplicationDraft};
pub use domain::services::full_address;
pub use error::{RegistryError, RegistryResult};
pub use infra::memory::InMemoryApplicationRepository;
pub use infra::postgres::PgApplicationRepository;
pub use presentation::router::{registry_router, registry_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
