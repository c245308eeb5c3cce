/// Module implementing the bookmark service
pub mod bookmark_service;

pub use bookmark_service::*;
