/// Module defining the bookmark service interface
pub mod bookmarks;

pub use bookmarks::*;
