//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::list_applications::ListApplicationsOutput;
use crate::application::pagination::PageInfo;
use crate::domain::entity::application::{Application, ApplicationDraft};
use crate::domain::value_object::{PortInput, Protocol};

/// Request body for POST/PUT /admin/applications
///
/// Values are taken as submitted; validation happens in the domain.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRequest {
    #[serde(default)]
    pub protocol: String,
    #[serde(default)]
    pub url: String,
    /// Kept raw so a non-integer port is reported with the other field errors
    #[serde(default)]
    pub port: Option<serde_json::Value>,
}

impl From<ApplicationRequest> for ApplicationDraft {
    fn from(req: ApplicationRequest) -> Self {
        let port = PortInput::from_json(req.port);
        ApplicationDraft::with_port_input(req.protocol, req.url, port)
    }
}

/// A single registered application
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResponse {
    pub id: Uuid,
    pub protocol: Protocol,
    pub protocol_label: &'static str,
    pub url: String,
    pub port: u16,
    pub full_address: String,
}

impl From<&Application> for ApplicationResponse {
    fn from(app: &Application) -> Self {
        Self {
            id: app.id.into_uuid(),
            protocol: app.protocol,
            protocol_label: app.protocol.label(),
            url: app.url.as_str().to_string(),
            port: app.port.get(),
            full_address: app.full_address(),
        }
    }
}

/// Page metadata for list responses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    pub number: u64,
    pub num_pages: u64,
    pub per_page: u64,
    pub has_next: bool,
    pub has_previous: bool,
    pub start_index: u64,
    pub end_index: u64,
}

impl From<PageInfo> for PageResponse {
    fn from(page: PageInfo) -> Self {
        Self {
            number: page.number,
            num_pages: page.num_pages,
            per_page: page.per_page,
            has_next: page.has_next(),
            has_previous: page.has_previous(),
            start_index: page.start_index(),
            end_index: page.end_index(),
        }
    }
}

/// Response for GET / and GET /applications/
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationListResponse {
    pub applications: Vec<ApplicationResponse>,
    pub page: PageResponse,
    pub total_applications: u64,
}

impl From<ListApplicationsOutput> for ApplicationListResponse {
    fn from(output: ListApplicationsOutput) -> Self {
        Self {
            applications: output.applications.iter().map(Into::into).collect(),
            page: output.page.into(),
            total_applications: output.total_applications,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProtocolChoice {
    pub code: &'static str,
    pub label: &'static str,
}

/// Response for GET /admin/applications
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminApplicationListResponse {
    pub applications: Vec<ApplicationResponse>,
    pub page: PageResponse,
    pub result_count: u64,
    pub total_applications: u64,
    pub protocol_choices: Vec<ProtocolChoice>,
}

impl From<ListApplicationsOutput> for AdminApplicationListResponse {
    fn from(output: ListApplicationsOutput) -> Self {
        Self {
            applications: output.applications.iter().map(Into::into).collect(),
            page: output.page.into(),
            result_count: output.result_count,
            total_applications: output.total_applications,
            protocol_choices: Protocol::ALL
                .iter()
                .map(|p| ProtocolChoice {
                    code: p.code(),
                    label: p.label(),
                })
                .collect(),
        }
    }
}

/// Query string for the list endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    pub protocol: Option<String>,
    pub q: Option<String>,
}
