//!
//! Throw-away HTTP/1.1 server for exercising the client against real sockets
//!

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    /// Lowercased header names
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

pub struct TestServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl TestServer {
    /// Serve on an ephemeral localhost port until the test process exits. Every connection
    /// carries exactly one request.
    pub fn spawn() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let log = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let _ = handle(stream, &log);
            }
        });

        TestServer {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

fn handle(mut stream: TcpStream, log: &Mutex<Vec<Recorded>>) -> io::Result<()> {
    let mut reader = BufReader::new(stream.try_clone()?);

    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut headers = HashMap::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line)?;
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.insert(name.trim().to_ascii_lowercase(), value.trim().to_string());
        }
    }

    let len = headers
        .get("content-length")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    let mut body = vec![0u8; len];
    reader.read_exact(&mut body)?;

    let recorded = Recorded {
        method,
        path,
        headers,
        body,
    };
    let (status, reason, response_body) = route(&recorded);
    log.lock().unwrap().push(recorded);

    write!(
        stream,
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response_body.len()
    )?;
    stream.write_all(&response_body)?;
    stream.flush()
}

const OK: (u16, &str) = (200, "OK");
const BAD_REQUEST: (u16, &str) = (400, "Bad Request");
const UNAUTHORIZED: (u16, &str) = (401, "Unauthorized");
const NOT_FOUND: (u16, &str) = (404, "Not Found");
const METHOD_NOT_ALLOWED: (u16, &str) = (405, "Method Not Allowed");

fn route(request: &Recorded) -> (u16, &'static str, Vec<u8>) {
    let (status, reason) = match request.path.as_str() {
        "/o_auth2" => {
            if request.headers.get("authorization").map(String::as_str) == Some("Bearer token") {
                OK
            } else {
                UNAUTHORIZED
            }
        }
        "/session_with_url_prefix" => match request.method.as_str() {
            "GET" | "POST" | "DELETE" | "PUT" => OK,
            _ => METHOD_NOT_ALLOWED,
        },
        "/upload" if request.method == "POST" => {
            if is_expected_upload(request) {
                OK
            } else {
                BAD_REQUEST
            }
        }
        "/echo" => return (200, "OK", request.body.clone()),
        _ => NOT_FOUND,
    };

    (status, reason, Vec::new())
}

/// A `file` field named `test.txt` containing `upload`.
fn is_expected_upload(request: &Recorded) -> bool {
    let Some(boundary) = request
        .headers
        .get("content-type")
        .and_then(|ct| ct.strip_prefix("multipart/form-data; boundary="))
    else {
        return false;
    };

    let body = String::from_utf8_lossy(&request.body);
    let Some(part) = body
        .strip_prefix(&format!("--{boundary}\r\n"))
        .and_then(|rest| rest.strip_suffix(&format!("\r\n--{boundary}--\r\n")))
    else {
        return false;
    };
    let Some((part_headers, content)) = part.split_once("\r\n\r\n") else {
        return false;
    };

    part_headers.contains("name=\"file\"")
        && part_headers.contains("filename=\"test.txt\"")
        && content == "upload"
}
