//! `multipart/form-data` uploads with a single `file` field.

use std::path::Path;

use tracing::debug;

use crate::session::{Response, Session};
use crate::{HttpError, Method};

/// Form field carrying the uploaded content.
pub const FIELD_NAME: &str = "file";

/// Filename used for in-memory content when none is given.
pub const DEFAULT_FILENAME: &str = "data";

/// What to upload: a file on disk or bytes already in memory.
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    Path(&'a Path),
    Data(&'a [u8]),
}

/// POST `source` to `url` as the `file` field of a multipart form.
///
/// Without `filename`, a path source is sent under its own file name and in-memory data
/// as `data`.
pub fn upload(url: &str, source: Source<'_>, filename: Option<&str>) -> Result<Response, HttpError> {
    Session::new().upload(url, source, filename)
}

impl Session {
    /// Like [`upload`], relative to this session's prefix and with its credentials.
    pub fn upload(
        &self,
        url: &str,
        source: Source<'_>,
        filename: Option<&str>,
    ) -> Result<Response, HttpError> {
        let (content, default_name) = match source {
            Source::Path(path) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| DEFAULT_FILENAME.to_string());
                (std::fs::read(path)?, name)
            }
            Source::Data(data) => (data.to_vec(), DEFAULT_FILENAME.to_string()),
        };
        let filename = filename.map_or(default_name, str::to_string);

        let form = Multipart::new(&filename, &content);
        debug!(%filename, len = content.len(), "uploading");

        let content_type = form.content_type();
        self.send(
            Method::POST,
            url,
            &[("Content-Type", content_type.as_str())],
            Some(form.body.as_slice()),
        )
    }
}

struct Multipart {
    boundary: String,
    body: Vec<u8>,
}

impl Multipart {
    fn new(filename: &str, content: &[u8]) -> Self {
        let boundary = format!("------------------------{:016x}", fastrand::u64(..));
        // quotes would end the parameter early, line breaks the header
        let filename = filename
            .replace('"', "%22")
            .replace('\r', "%0D")
            .replace('\n', "%0A");

        let mut body = Vec::with_capacity(content.len() + 256);
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{FIELD_NAME}\"; filename=\"{filename}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        Self { boundary, body }
    }

    fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }
}
