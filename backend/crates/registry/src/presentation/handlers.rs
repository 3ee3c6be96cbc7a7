//! HTTP Handlers

use crate::application::config::RegistryConfig;
use crate::application::get_application::GetApplicationUseCase;
use crate::application::list_applications::{
    ListApplicationsInput, ListApplicationsUseCase, ListView,
};
use crate::application::pagination::PageRequest;
use crate::application::register_application::RegisterApplicationUseCase;
use crate::application::remove_application::RemoveApplicationUseCase;
use crate::application::update_application::UpdateApplicationUseCase;
use crate::domain::repository::{ApplicationFilter, ApplicationRepository};
use crate::domain::value_object::{ApplicationId, Protocol};
use crate::error::{RegistryError, RegistryResult};
use crate::presentation::dto::{
    AdminApplicationListResponse, ApplicationListResponse, ApplicationRequest,
    ApplicationResponse, ListParams,
};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum_extra::extract::WithRejection;
use std::sync::Arc;
use uuid::Uuid;

/// Shared state for registry handlers
#[derive(Clone)]
pub struct RegistryAppState<R>
where
    R: ApplicationRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<RegistryConfig>,
}

/// GET / and GET /applications/
pub async fn list_applications<R>(
    State(state): State<RegistryAppState<R>>,
    Query(params): Query<ListParams>,
) -> RegistryResult<Json<ApplicationListResponse>>
where
    R: ApplicationRepository + Clone + Send + Sync + 'static,
{
    let input = ListApplicationsInput {
        filter: ApplicationFilter::default(),
        page: PageRequest::parse(params.page.as_deref())?,
    };

    let use_case = ListApplicationsUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.execute(ListView::Public, input).await?;

    Ok(Json(output.into()))
}

/// GET /admin/applications
pub async fn admin_list_applications<R>(
    State(state): State<RegistryAppState<R>>,
    Query(params): Query<ListParams>,
) -> RegistryResult<Json<AdminApplicationListResponse>>
where
    R: ApplicationRepository + Clone + Send + Sync + 'static,
{
    let input = ListApplicationsInput {
        filter: admin_filter(&params)?,
        page: PageRequest::parse(params.page.as_deref())?,
    };

    let use_case = ListApplicationsUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.execute(ListView::Admin, input).await?;

    Ok(Json(output.into()))
}

/// POST /admin/applications
pub async fn create_application<R>(
    State(state): State<RegistryAppState<R>>,
    WithRejection(Json(req), _): WithRejection<Json<ApplicationRequest>, RegistryError>,
) -> RegistryResult<impl IntoResponse>
where
    R: ApplicationRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterApplicationUseCase::new(state.repo.clone());
    let application = use_case.execute(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApplicationResponse::from(&application)),
    ))
}

/// GET /admin/applications/{id}
pub async fn get_application<R>(
    State(state): State<RegistryAppState<R>>,
    WithRejection(Path(id), _): WithRejection<Path<Uuid>, RegistryError>,
) -> RegistryResult<Json<ApplicationResponse>>
where
    R: ApplicationRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetApplicationUseCase::new(state.repo.clone());
    let application = use_case.execute(ApplicationId::from_uuid(id)).await?;

    Ok(Json(ApplicationResponse::from(&application)))
}

/// PUT /admin/applications/{id}
pub async fn update_application<R>(
    State(state): State<RegistryAppState<R>>,
    WithRejection(Path(id), _): WithRejection<Path<Uuid>, RegistryError>,
    WithRejection(Json(req), _): WithRejection<Json<ApplicationRequest>, RegistryError>,
) -> RegistryResult<Json<ApplicationResponse>>
where
    R: ApplicationRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateApplicationUseCase::new(state.repo.clone());
    let application = use_case
        .execute(ApplicationId::from_uuid(id), req.into())
        .await?;

    Ok(Json(ApplicationResponse::from(&application)))
}

/// DELETE /admin/applications/{id}
pub async fn delete_application<R>(
    State(state): State<RegistryAppState<R>>,
    WithRejection(Path(id), _): WithRejection<Path<Uuid>, RegistryError>,
) -> RegistryResult<StatusCode>
where
    R: ApplicationRepository + Clone + Send + Sync + 'static,
{
    let use_case = RemoveApplicationUseCase::new(state.repo.clone());
    use_case.execute(ApplicationId::from_uuid(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Build the admin filter from query parameters. Blank values mean "no filter".
fn admin_filter(params: &ListParams) -> RegistryResult<ApplicationFilter> {
    let protocol = match non_blank(params.protocol.as_deref()) {
        None => None,
        Some(code) => Some(Protocol::from_code(code).ok_or_else(|| {
            RegistryError::InvalidFilter(format!("unknown protocol '{code}'"))
        })?),
    };

    Ok(ApplicationFilter {
        protocol,
        search: non_blank(params.q.as_deref()).map(str::to_string),
    })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
