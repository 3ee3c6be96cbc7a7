//! List Applications Use Case
//!
//! Serves both the public list view and the admin list. Results are
//! ordered by `(protocol, url, port)` and paginated.

use crate::application::config::RegistryConfig;
use crate::application::pagination::{PageInfo, PageRequest};
use crate::domain::entity::application::Application;
use crate::domain::repository::{ApplicationFilter, ApplicationRepository};
use crate::error::RegistryResult;
use std::sync::Arc;

/// Which surface the listing is for; selects the page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView {
    Public,
    Admin,
}

#[derive(Debug, Clone, Default)]
pub struct ListApplicationsInput {
    pub filter: ApplicationFilter,
    pub page: PageRequest,
}

#[derive(Debug, Clone)]
pub struct ListApplicationsOutput {
    pub applications: Vec<Application>,
    pub page: PageInfo,
    /// Records matching the filter
    pub result_count: u64,
    /// Every record in the registry, regardless of filter
    pub total_applications: u64,
}

pub struct ListApplicationsUseCase<R>
where
    R: ApplicationRepository,
{
    repo: Arc<R>,
    config: Arc<RegistryConfig>,
}

impl<R> ListApplicationsUseCase<R>
where
    R: ApplicationRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<RegistryConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(
        &self,
        view: ListView,
        input: ListApplicationsInput,
    ) -> RegistryResult<ListApplicationsOutput> {
        let paginator = match view {
            ListView::Public => self.config.paginator(),
            ListView::Admin => self.config.admin_paginator(),
        };

        let result_count = self.repo.count(&input.filter).await?;
        let total_applications = if input.filter.is_unfiltered() {
            result_count
        } else {
            self.repo.count(&ApplicationFilter::default()).await?
        };

        let page = paginator.page(input.page, result_count)?;
        let applications = self
            .repo
            .list(&input.filter, page.per_page, page.offset())
            .await?;

        tracing::debug!(
            view = ?view,
            page = page.number,
            returned = applications.len(),
            result_count,
            total_applications,
            "Listed applications"
        );

        Ok(ListApplicationsOutput {
            applications,
            page,
            result_count,
            total_applications,
        })
    }
}
