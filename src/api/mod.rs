//! Backend API
//!
//! REST bindings, organized by resource.

mod item;

pub use item::*;

use gloo_net::http::Response;

use crate::error::{ApiError, ApiResult};

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Map non-2xx responses to `ApiError::Status`, keeping the body text for logs
async fn ensure_ok(response: Response) -> ApiResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response.text().await.unwrap_or_else(|_| response.status_text());
    Err(ApiError::Status { status, message })
}
