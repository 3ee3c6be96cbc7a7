//! Register Application Use Case

use crate::domain::entity::application::{Application, ApplicationDraft};
use crate::domain::repository::ApplicationRepository;
use crate::error::RegistryResult;
use std::sync::Arc;

/// Register Application Use Case
pub struct RegisterApplicationUseCase<R>
where
    R: ApplicationRepository,
{
    repo: Arc<R>,
}

impl<R> RegisterApplicationUseCase<R>
where
    R: ApplicationRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Validate the candidate, then insert it in a single write.
    pub async fn execute(&self, draft: ApplicationDraft) -> RegistryResult<Application> {
        let fields = draft.into_fields()?;

        let application = self.repo.create(&fields).await?;

        tracing::info!(
            application_id = %application.id,
            full_address = %application,
            "Registered application"
        );

        Ok(application)
    }
}
