//! Shared response envelope for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope; use
//! [`DataResponse`] instead of ad-hoc `serde_json::json!` so the payload
//! type is checked at compile time.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
