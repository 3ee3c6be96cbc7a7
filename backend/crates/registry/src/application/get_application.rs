//! Get Application Use Case

use crate::domain::entity::application::Application;
use crate::domain::repository::ApplicationRepository;
use crate::domain::value_object::ApplicationId;
use crate::error::{RegistryError, RegistryResult};
use std::sync::Arc;

pub struct GetApplicationUseCase<R>
where
    R: ApplicationRepository,
{
    repo: Arc<R>,
}

impl<R> GetApplicationUseCase<R>
where
    R: ApplicationRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: ApplicationId) -> RegistryResult<Application> {
        self.repo
            .find_by_id(&id)
            .await?
            .ok_or(RegistryError::ApplicationNotFound)
    }
}
