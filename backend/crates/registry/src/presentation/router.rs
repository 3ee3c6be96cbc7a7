//! Registry Router

use crate::application::config::RegistryConfig;
use crate::domain::repository::ApplicationRepository;
use crate::infra::postgres::PgApplicationRepository;
use crate::presentation::handlers::{self, RegistryAppState};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Create the registry router with PostgreSQL repository
pub fn registry_router(repo: PgApplicationRepository, config: RegistryConfig) -> Router {
    registry_router_generic(repo, config)
}

/// Create a generic registry router for any repository implementation
pub fn registry_router_generic<R>(repo: R, config: RegistryConfig) -> Router
where
    R: ApplicationRepository + Clone + Send + Sync + 'static,
{
    let state = RegistryAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(handlers::list_applications::<R>))
        .route("/applications/", get(handlers::list_applications::<R>))
        .route(
            "/admin/applications",
            get(handlers::admin_list_applications::<R>)
                .post(handlers::create_application::<R>),
        )
        .route(
            "/admin/applications/{id}",
            get(handlers::get_application::<R>)
                .put(handlers::update_application::<R>)
                .delete(handlers::delete_application::<R>),
        )
        .with_state(state)
}
