//! Value Object Module

pub mod endpoint_url;
pub mod port;
pub mod protocol;

pub use endpoint_url::{EndpointUrl, EndpointUrlError};
pub use port::{Port, PortInput, PortRangeError};
pub use protocol::Protocol;

/// Identifier of a registered application, assigned by the store on insert.
pub type ApplicationId = kernel::id::ApplicationId;
