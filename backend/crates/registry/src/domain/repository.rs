//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use crate::domain::entity::application::{Application, ApplicationFields};
use crate::domain::value_object::{ApplicationId, Protocol};
use crate::error::RegistryResult;

/// Narrowing applied to `count` and `list`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationFilter {
    /// Exact protocol match
    pub protocol: Option<Protocol>,
    /// Whitespace-separated terms; every term must be a case-insensitive
    /// substring of the url or a substring of the decimal port
    pub search: Option<String>,
}

impl ApplicationFilter {
    pub fn by_protocol(protocol: Protocol) -> Self {
        Self {
            protocol: Some(protocol),
            search: None,
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.protocol.is_none() && self.search.is_none()
    }

    /// Same predicate the SQL implementation applies.
    pub fn matches(&self, application: &Application) -> bool {
        if let Some(protocol) = self.protocol {
            if application.protocol != protocol {
                return false;
            }
        }

        let url = application.url.as_str().to_lowercase();
        let port = application.port.to_string();
        self.search_terms()
            .all(|term| url.contains(&term) || port.contains(&term))
    }

    /// Lowercased search terms; empty when there is no search.
    pub fn search_terms(&self) -> impl Iterator<Item = String> + '_ {
        self.search
            .as_deref()
            .unwrap_or_default()
            .split_whitespace()
            .map(str::to_lowercase)
    }
}

/// Application repository trait
///
/// Listings are always ordered by `(protocol, url, port)` ascending.
#[trait_variant::make(ApplicationRepository: Send)]
pub trait LocalApplicationRepository {
    /// Insert a new record; the store assigns the id
    async fn create(&self, fields: &ApplicationFields) -> RegistryResult<Application>;

    /// Find application by ID
    async fn find_by_id(&self, id: &ApplicationId) -> RegistryResult<Option<Application>>;

    /// Overwrite every field of an existing record.
    /// Returns `false` when no record has this id.
    async fn update(&self, application: &Application) -> RegistryResult<bool>;

    /// Returns `false` when no record has this id
    async fn delete(&self, id: &ApplicationId) -> RegistryResult<bool>;

    async fn count(&self, filter: &ApplicationFilter) -> RegistryResult<u64>;

    async fn list(
        &self,
        filter: &ApplicationFilter,
        limit: u64,
        offset: u64,
    ) -> RegistryResult<Vec<Application>>;
}
