//! Domain Layer
//!
//! This layer contains:
//! - The Application entity and its write candidate
//! - Value objects (Protocol, EndpointUrl, Port)
//! - Field-scoped validation errors
//! - Domain services (address formatting)
//! - Repository traits (interfaces)

pub mod entity;
pub mod repository;
pub mod services;
pub mod validation;
pub mod value_object;

// Re-exports
pub use entity::application::{Application, ApplicationDraft, ApplicationFields};
pub use repository::{ApplicationFilter, ApplicationRepository};
pub use validation::{Field, FieldError, ValidationErrors};
