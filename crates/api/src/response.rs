//! Shared response envelope types for API handlers.
//!
//! All success responses use the `{ "success": true, ... }` envelope. Using
//! these types instead of ad-hoc `serde_json::json!` calls keeps the shape
//! consistent and compile-checked.

use serde::Serialize;

/// Standard `{ success, message }` acknowledgement envelope.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

impl MessageResponse {
    /// A successful acknowledgement with the given message.
    pub fn ok(message: &'static str) -> Self {
        Self {
            success: true,
            message,
        }
    }
}

/// Standard `{ success, data }` payload envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    /// A successful payload response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
