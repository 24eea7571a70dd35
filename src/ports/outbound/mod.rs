/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (the GitLab API, the console).
pub mod api_request;
pub mod api_response;
pub mod api_transport;
pub mod formatter;

pub use api_request::{ApiRequest, RequestOption};
pub use api_response::{RawResponse, Response};
pub use api_transport::ApiTransport;
pub use formatter::DependencyFormatter;
