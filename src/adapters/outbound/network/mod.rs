/// Network adapters for the GitLab API
mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;
