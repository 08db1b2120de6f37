use std::borrow::Cow;
use std::fmt::{Debug, Formatter};
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use ureq::typestate::WithoutBody;
use ureq::{Agent, Body, RequestBuilder};
use utilkit_common::CaseInsensitiveMap;

use crate::auth::Auth;
use crate::{DEFAULT_TIMEOUT, HttpError, Method};

/// An HTTP response of any status, with its body fully read.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    headers: CaseInsensitiveMap<String>,
    body: Vec<u8>,
}

impl Response {
    fn read(mut response: ureq::http::Response<Body>) -> Result<Self, HttpError> {
        let mut headers = CaseInsensitiveMap::new();
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                headers.insert(name.as_str(), value.to_string());
            }
        }

        Ok(Self {
            status: response.status().as_u16(),
            headers,
            body: response.body_mut().read_to_vec()?,
        })
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Sends requests relative to an optional URL prefix, attaching default headers and
/// credentials to each one.
///
/// ```no_run
/// let session = utilkit_http::Session::with_prefix("http://localhost/api");
/// let response = session.get("/user")?; // GET http://localhost/api/user
/// # Ok::<(), utilkit_http::HttpError>(())
/// ```
///
/// Statuses outside 2xx are returned as ordinary responses.
pub struct Session {
    agent: Agent,
    prefix: Option<String>,
    auth: Option<Box<dyn Auth>>,
    headers: CaseInsensitiveMap<String>,
}

fn build_agent(timeout: Option<Duration>) -> Agent {
    let config = Agent::config_builder()
        .http_status_as_error(false)
        .timeout_global(timeout)
        .build();

    Agent::new_with_config(config)
}

impl Default for Session {
    fn default() -> Self {
        Self {
            agent: build_agent(Some(DEFAULT_TIMEOUT)),
            prefix: None,
            auth: None,
            headers: CaseInsensitiveMap::new(),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            prefix: Some(prefix.to_string()),
            ..Self::default()
        }
    }

    /// Overall limit for each request, including reading the body. `None` waits forever.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.agent = build_agent(timeout);
        self
    }

    pub fn auth(mut self, auth: impl Auth + 'static) -> Self {
        self.auth = Some(Box::new(auth));
        self
    }

    /// Header sent with every request. Credentials from [`Session::auth`] take precedence.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name, value.to_string());
        self
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// `url` appended to the prefix, if any.
    pub fn url(&self, url: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}{url}"),
            None => url.to_string(),
        }
    }

    pub fn get(&self, url: &str) -> Result<Response, HttpError> {
        self.request(Method::GET, url, None)
    }

    pub fn post(&self, url: &str, body: &[u8]) -> Result<Response, HttpError> {
        self.request(Method::POST, url, Some(body))
    }

    pub fn put(&self, url: &str, body: &[u8]) -> Result<Response, HttpError> {
        self.request(Method::PUT, url, Some(body))
    }

    pub fn delete(&self, url: &str) -> Result<Response, HttpError> {
        self.request(Method::DELETE, url, None)
    }

    pub fn request(
        &self,
        method: Method,
        url: &str,
        body: Option<&[u8]>,
    ) -> Result<Response, HttpError> {
        self.send(method, url, &[], body)
    }

    /// Like [`Session::request`] with additional headers for this request only.
    pub(crate) fn send(
        &self,
        method: Method,
        url: &str,
        extra_headers: &[(&str, &str)],
        body: Option<&[u8]>,
    ) -> Result<Response, HttpError> {
        let url = self.url(url);
        debug!(%method, %url, body_len = body.map(<[u8]>::len), "sending request");

        let mut headers = self.headers.clone();
        for (name, value) in extra_headers {
            headers.insert(name, value.to_string());
        }
        if let Some(auth) = &self.auth {
            auth.apply(&mut headers);
        }

        let agent = &self.agent;
        let response = match method.as_str() {
            "GET" => without_body(prepare(agent.get(&url), &headers), body),
            "HEAD" => without_body(prepare(agent.head(&url), &headers), body),
            "DELETE" => without_body(prepare(agent.delete(&url), &headers), body),
            "OPTIONS" => without_body(prepare(agent.options(&url), &headers), body),
            "POST" => prepare(agent.post(&url), &headers).send(body.unwrap_or_default()),
            "PUT" => prepare(agent.put(&url), &headers).send(body.unwrap_or_default()),
            "PATCH" => prepare(agent.patch(&url), &headers).send(body.unwrap_or_default()),
            _ => return Err(HttpError::UnsupportedMethod(method.clone())),
        }?;

        let response = Response::read(response)?;
        trace!(status = response.status(), body_len = response.body().len(), "received response");
        Ok(response)
    }
}

fn prepare<B>(mut builder: RequestBuilder<B>, headers: &CaseInsensitiveMap<String>) -> RequestBuilder<B> {
    for (name, value) in headers.iter() {
        builder = builder.header(name, value.as_str());
    }
    builder
}

fn without_body(
    builder: RequestBuilder<WithoutBody>,
    body: Option<&[u8]>,
) -> Result<ureq::http::Response<Body>, ureq::Error> {
    match body {
        Some(body) => builder.force_send_body().send(body),
        None => builder.call(),
    }
}

impl Debug for Session {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Session(prefix={:?}, auth={})",
            self.prefix,
            self.auth.is_some()
        )
    }
}
