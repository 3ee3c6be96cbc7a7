//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.

pub mod config;
pub mod get_application;
pub mod list_applications;
pub mod pagination;
pub mod register_application;
pub mod remove_application;
pub mod update_application;

// Re-exports
pub use config::RegistryConfig;
pub use get_application::GetApplicationUseCase;
pub use list_applications::{
    ListApplicationsInput, ListApplicationsOutput, ListApplicationsUseCase, ListView,
};
pub use pagination::{PageInfo, PageRequest, Paginator};
pub use register_application::RegisterApplicationUseCase;
pub use remove_application::RemoveApplicationUseCase;
pub use update_application::UpdateApplicationUseCase;
