/// Module defining the authentication provider interface and token types
pub mod interface;

pub use interface::*;
