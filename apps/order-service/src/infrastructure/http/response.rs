//! HTTP response DTOs.

use serde::{Deserialize, Serialize};

/// Service banner for the root endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    /// Human-readable greeting.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Response to a menu item patch that carried no fields.
///
/// Nothing was looked up or written; a successful patch returns the
/// refreshed item itself instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuUnchangedResponse {
    /// Always false.
    pub updated: bool,
}

/// API error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}
