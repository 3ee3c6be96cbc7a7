//! PostgreSQL Repository Implementation

use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::application::{Application, ApplicationFields};
use crate::domain::repository::{ApplicationFilter, ApplicationRepository};
use crate::domain::value_object::{ApplicationId, EndpointUrl, Port, Protocol};
use crate::error::{RegistryError, RegistryResult};

/// PostgreSQL-backed application repository
///
/// Text columns are ordered with the "C" collation so listings follow plain
/// byte order regardless of the database locale.
#[derive(Clone)]
pub struct PgApplicationRepository {
    pool: PgPool,
}

impl PgApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Bind values shared by `count` and `list`: (protocol code, one LIKE
/// pattern per search term). Every pattern must match the url or the port.
fn filter_binds(filter: &ApplicationFilter) -> (Option<&'static str>, Vec<String>) {
    (
        filter.protocol.map(|p| p.code()),
        filter
            .search_terms()
            .map(|term| format!("%{}%", escape_like(&term)))
            .collect(),
    )
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl ApplicationRepository for PgApplicationRepository {
    async fn create(&self, fields: &ApplicationFields) -> RegistryResult<Application> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO applications (protocol, url, port)
            VALUES ($1, $2, $3)
            RETURNING application_id
            "#,
        )
        .bind(fields.protocol.code())
        .bind(fields.url.as_str())
        .bind(i32::from(fields.port.get()))
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(application_id = %id, "Application row inserted");

        Ok(Application::new(ApplicationId::from_uuid(id), fields.clone()))
    }

    async fn find_by_id(&self, id: &ApplicationId) -> RegistryResult<Option<Application>> {
        let row = sqlx::query_as::<_, ApplicationRow>(
            r#"
            SELECT
                application_id,
                protocol,
                url,
                port
            FROM applications
            WHERE application_id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(ApplicationRow::into_application).transpose()
    }

    async fn update(&self, application: &Application) -> RegistryResult<bool> {
        let updated = sqlx::query(
            r#"
            UPDATE applications
            SET protocol = $2, url = $3, port = $4
            WHERE application_id = $1
            "#,
        )
        .bind(application.id.as_uuid())
        .bind(application.protocol.code())
        .bind(application.url.as_str())
        .bind(i32::from(application.port.get()))
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated > 0)
    }

    async fn delete(&self, id: &ApplicationId) -> RegistryResult<bool> {
        let deleted = sqlx::query("DELETE FROM applications WHERE application_id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn count(&self, filter: &ApplicationFilter) -> RegistryResult<u64> {
        let (protocol, patterns) = filter_binds(filter);

        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM applications
            WHERE ($1::TEXT IS NULL OR protocol = $1)
              AND NOT EXISTS (
                  SELECT 1
                  FROM unnest($2::TEXT[]) AS term(pattern)
                  WHERE NOT (url ILIKE term.pattern OR port::TEXT LIKE term.pattern)
              )
            "#,
        )
        .bind(protocol)
        .bind(patterns)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.max(0) as u64)
    }

    async fn list(
        &self,
        filter: &ApplicationFilter,
        limit: u64,
        offset: u64,
    ) -> RegistryResult<Vec<Application>> {
        let (protocol, patterns) = filter_binds(filter);

        let rows = sqlx::query_as::<_, ApplicationRow>(
            r#"
            SELECT
                application_id,
                protocol,
                url,
                port
            FROM applications
            WHERE ($1::TEXT IS NULL OR protocol = $1)
              AND NOT EXISTS (
                  SELECT 1
                  FROM unnest($2::TEXT[]) AS term(pattern)
                  WHERE NOT (url ILIKE term.pattern OR port::TEXT LIKE term.pattern)
              )
            ORDER BY protocol COLLATE "C", url COLLATE "C", port
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(protocol)
        .bind(patterns)
        .bind(to_i64(limit))
        .bind(to_i64(offset))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ApplicationRow::into_application).collect()
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ApplicationRow {
    application_id: Uuid,
    protocol: String,
    url: String,
    port: i32,
}

impl ApplicationRow {
    fn into_application(self) -> RegistryResult<Application> {
        let protocol = Protocol::from_code(&self.protocol).ok_or_else(|| {
            RegistryError::Internal(format!("Unknown protocol in storage: {}", self.protocol))
        })?;
        let port = Port::new(i64::from(self.port))
            .map_err(|e| RegistryError::Internal(format!("Stored port rejected: {e}")))?;

        Ok(Application {
            id: ApplicationId::from_uuid(self.application_id),
            protocol,
            url: EndpointUrl::from_db(self.url),
            port,
        })
    }
}
