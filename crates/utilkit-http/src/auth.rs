use std::fmt::{Debug, Formatter};

use data_encoding::BASE64;
use utilkit_common::CaseInsensitiveMap;

pub const AUTHORIZATION: &str = "Authorization";

/// Credentials attached to every request of a [`Session`](crate::Session).
pub trait Auth: Send + Sync {
    fn apply(&self, headers: &mut CaseInsensitiveMap<String>);
}

/// `Authorization: Bearer <token>`
#[derive(Clone)]
pub struct OAuth2 {
    token: String,
}

impl OAuth2 {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
        }
    }
}

impl Auth for OAuth2 {
    fn apply(&self, headers: &mut CaseInsensitiveMap<String>) {
        headers.insert(AUTHORIZATION, format!("Bearer {}", self.token));
    }
}

impl Debug for OAuth2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "OAuth2(token_len={})", self.token.len())
    }
}

/// `Authorization: Basic base64(user:password)`
#[derive(Clone)]
pub struct BasicAuth {
    username: String,
    password: String,
}

impl BasicAuth {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

impl Auth for BasicAuth {
    fn apply(&self, headers: &mut CaseInsensitiveMap<String>) {
        let credentials = format!("{}:{}", self.username, self.password);
        headers.insert(
            AUTHORIZATION,
            format!("Basic {}", BASE64.encode(credentials.as_bytes())),
        );
    }
}

impl Debug for BasicAuth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "BasicAuth(username={:?})", self.username)
    }
}
