//! Bookmark wire models
//!
//! These shapes mirror the backend's JSON exactly; the client performs no
//! validation of coordinate ranges or string content. The category tag is
//! serialized as `type` on the wire.

use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A saved geographic point of interest, as returned by the backend
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bookmark {
    /// Opaque identifier assigned by the backend
    pub id: String,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// Category tag, e.g. "cafe"
    #[serde(rename = "type")]
    pub kind: String,
    /// Display name; the backend permits bookmarks without one
    pub name: Option<String>,
}

/// Request body for creating a bookmark
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateBookmarkRequest {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// Category tag
    #[serde(rename = "type")]
    pub kind: String,
    /// Display name
    pub name: Option<String>,
}

/// Confirmation returned by the backend after deleting a bookmark
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeleteBookmarkResponse {
    /// Human-readable confirmation message
    #[serde(default)]
    pub message: Option<String>,
}

/// Response wrapper for the bookmark count endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookmarkCountResponse {
    /// Number of bookmarks the user currently has
    pub count: u64,
}
