//! In-memory Repository Implementation
//!
//! Same ordering and filter semantics as the PostgreSQL repository.
//! Backs tests and database-less local runs.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entity::application::{Application, ApplicationFields};
use crate::domain::repository::{ApplicationFilter, ApplicationRepository};
use crate::domain::value_object::ApplicationId;
use crate::error::RegistryResult;

#[derive(Clone, Default)]
pub struct InMemoryApplicationRepository {
    records: Arc<RwLock<HashMap<ApplicationId, Application>>>,
}

impl InMemoryApplicationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ApplicationRepository for InMemoryApplicationRepository {
    async fn create(&self, fields: &ApplicationFields) -> RegistryResult<Application> {
        let application = Application::new(ApplicationId::new(), fields.clone());
        self.records
            .write()
            .await
            .insert(application.id, application.clone());
        Ok(application)
    }

    async fn find_by_id(&self, id: &ApplicationId) -> RegistryResult<Option<Application>> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn update(&self, application: &Application) -> RegistryResult<bool> {
        let mut records = self.records.write().await;
        match records.get_mut(&application.id) {
            Some(existing) => {
                *existing = application.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &ApplicationId) -> RegistryResult<bool> {
        Ok(self.records.write().await.remove(id).is_some())
    }

    async fn count(&self, filter: &ApplicationFilter) -> RegistryResult<u64> {
        let records = self.records.read().await;
        Ok(records.values().filter(|app| filter.matches(app)).count() as u64)
    }

    async fn list(
        &self,
        filter: &ApplicationFilter,
        limit: u64,
        offset: u64,
    ) -> RegistryResult<Vec<Application>> {
        let records = self.records.read().await;

        let mut matching: Vec<&Application> =
            records.values().filter(|app| filter.matches(app)).collect();
        matching.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

        Ok(matching
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }
}
