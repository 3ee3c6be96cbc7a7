//! Update Application Use Case
//!
//! Full-record update: every field is replaced, the id never changes.

use crate::domain::entity::application::{Application, ApplicationDraft};
use crate::domain::repository::ApplicationRepository;
use crate::domain::value_object::ApplicationId;
use crate::error::{RegistryError, RegistryResult};
use std::sync::Arc;

pub struct UpdateApplicationUseCase<R>
where
    R: ApplicationRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateApplicationUseCase<R>
where
    R: ApplicationRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        id: ApplicationId,
        draft: ApplicationDraft,
    ) -> RegistryResult<Application> {
        let mut application = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or(RegistryError::ApplicationNotFound)?;

        let fields = draft.into_fields()?;
        application.replace_fields(fields);

        // Removed between the lookup and the write
        if !self.repo.update(&application).await? {
            return Err(RegistryError::ApplicationNotFound);
        }

        tracing::info!(
            application_id = %application.id,
            full_address = %application,
            "Updated application"
        );

        Ok(application)
    }
}
