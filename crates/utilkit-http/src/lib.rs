//! A thin blocking HTTP layer over `ureq`: sessions that prepend a URL prefix and attach
//! credentials to every request, and `multipart/form-data` file uploads.

#![forbid(unsafe_code)]

pub mod auth;
pub mod session;
pub mod upload;

use std::time::Duration;

pub use auth::{Auth, BasicAuth, OAuth2};
pub use session::{Response, Session};
pub use ureq::http::Method;
pub use upload::{Source, upload};

/// Applied to sessions that don't set their own timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(thiserror::Error, Debug)]
pub enum HttpError {
    #[error("{0}")]
    Transport(#[from] ureq::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported HTTP method '{0}'")]
    UnsupportedMethod(Method),
}
