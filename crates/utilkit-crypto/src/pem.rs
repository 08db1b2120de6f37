//! Minimal PEM armor: base64 DER between `-----BEGIN <label>-----` and
//! `-----END <label>-----` lines, 64 characters per line.

use utilkit_common::Base64;

use crate::CryptoError;

pub const PRIVATE_KEY: &str = "PRIVATE KEY";
pub const ENCRYPTED_PRIVATE_KEY: &str = "ENCRYPTED PRIVATE KEY";
pub const PUBLIC_KEY: &str = "PUBLIC KEY";

const LINE_WIDTH: usize = 64;

pub fn encode(label: &str, der: &[u8]) -> String {
    let body = Base64::Standard.encode(der, true);

    let mut pem = format!("-----BEGIN {label}-----\n");
    // base64 output is ASCII, so byte chunks are valid UTF-8
    for line in body.as_bytes().chunks(LINE_WIDTH) {
        pem.push_str(&String::from_utf8_lossy(line));
        pem.push('\n');
    }
    pem.push_str(&format!("-----END {label}-----\n"));
    pem
}

/// Extract the DER bytes of the first `label` block in `pem`. Text before the BEGIN line
/// and after the END line is ignored.
pub fn decode(label: &'static str, pem: &str) -> Result<Vec<u8>, CryptoError> {
    let begin = format!("-----BEGIN {label}-----");
    let end = format!("-----END {label}-----");

    let mut lines = pem.lines().map(str::trim);
    if !lines.any(|line| line == begin) {
        return Err(CryptoError::PemLabel { expected: label });
    }

    let mut body = String::with_capacity(pem.len());
    for line in lines {
        if line == end {
            return Ok(Base64::Standard.decode(&body, false)?);
        }
        if line.starts_with("-----") {
            return Err(CryptoError::Pem(format!("unexpected '{line}' inside {label}")));
        }
        body.push_str(line);
    }

    Err(CryptoError::Pem(format!("missing '{end}'")))
}
