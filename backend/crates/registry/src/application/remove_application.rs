//! Remove Application Use Case

use crate::domain::repository::ApplicationRepository;
use crate::domain::value_object::ApplicationId;
use crate::error::{RegistryError, RegistryResult};
use std::sync::Arc;

pub struct RemoveApplicationUseCase<R>
where
    R: ApplicationRepository,
{
    repo: Arc<R>,
}

impl<R> RemoveApplicationUseCase<R>
where
    R: ApplicationRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: ApplicationId) -> RegistryResult<()> {
        if !self.repo.delete(&id).await? {
            return Err(RegistryError::ApplicationNotFound);
        }

        tracing::info!(application_id = %id, "Removed application");
        Ok(())
    }
}
