//! Frontend Errors
//!
//! Transport and session failures. Form validation has its own type in
//! `validation` and never flows through here.

use thiserror::Error;

use crate::session::SessionError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("failed to encode request body: {0}")]
    Encode(String),

    #[error(transparent)]
    Session(#[from] SessionError),
}

pub type ApiResult<T> = Result<T, ApiError>;
