/// Module implementing the authenticated HTTP transport
pub mod http_client;

pub use http_client::*;
