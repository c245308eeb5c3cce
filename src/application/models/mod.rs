/// Module containing bookmark request and response models
pub mod bookmark;

pub use bookmark::*;
