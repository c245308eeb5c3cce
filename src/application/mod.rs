/// Module containing service interfaces
pub mod interfaces;
/// Module containing request and response models
pub mod models;
/// Module containing service implementations
pub mod services;
